//! Interactive confirmation for long sequence runs.

use std::io::{self, BufRead, Write};

use fibseq_orchestration::interfaces::ConfirmationGate;
use fibseq_orchestration::policy::TimeEstimate;
use tracing::debug;

use crate::output::format_number;
use crate::ui;

/// Asks on stderr and reads the answer from stdin.
///
/// Reading stdin directly keeps the prompt usable when input is piped.
pub struct ConsolePrompt;

impl ConsolePrompt {
    /// Ask through arbitrary streams.
    pub fn ask(
        &self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
        quantity: u64,
        estimate: TimeEstimate,
    ) -> bool {
        let shown = write!(
            out,
            "Generating {} numbers will take some time and memory.\n\
             Estimated time: {estimate}\n{} ",
            format_number(quantity),
            ui::question("Are you sure you want to continue? [y/N]"),
        )
        .and_then(|()| out.flush());
        if let Err(e) = shown {
            debug!(error = %e, "Could not show confirmation prompt");
            return false;
        }

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                debug!(error = %e, "Could not read confirmation answer");
                false
            }
        }
    }
}

impl ConfirmationGate for ConsolePrompt {
    fn confirm(&self, quantity: u64, estimate: TimeEstimate) -> bool {
        let stdin = io::stdin();
        let stderr = io::stderr();
        self.ask(&mut stdin.lock(), &mut stderr.lock(), quantity, estimate)
    }
}

/// `y` or `yes`, any case, surrounding whitespace ignored.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        let accepted = ConsolePrompt.ask(
            &mut input.as_bytes(),
            &mut out,
            30_000,
            TimeEstimate::OneToThreeMinutes,
        );
        (accepted, String::from_utf8(out).unwrap())
    }

    #[test]
    fn answers() {
        assert!(is_yes("y"));
        assert!(is_yes("YES\n"));
        assert!(is_yes("  Yes  "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn accepts_yes() {
        let (accepted, shown) = ask("yes\n");
        assert!(accepted);
        assert!(shown.contains("Generating 30,000 numbers"));
        assert!(shown.contains("Estimated time: 1-3 minutes"));
        assert!(shown.contains("[y/N]"));
    }

    #[test]
    fn declines_on_no_or_eof() {
        assert!(!ask("n\n").0);
        assert!(!ask("").0);
    }
}
