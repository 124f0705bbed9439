//! Event presenters for the terminal.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use fibseq_core::event::Event;
use fibseq_orchestration::interfaces::EventPresenter;

use crate::output::{format_duration, format_number, format_point_result};
use crate::ui;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta})";
const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Human-readable presenter: results on stdout, progress on stderr.
///
/// In quiet mode only the raw sequence lines or the bare value are printed.
pub struct CliPresenter {
    quiet: bool,
    bar: ProgressBar,
    started: Instant,
}

impl CliPresenter {
    /// Presenter for a sequence run of `quantity` numbers.
    #[must_use]
    pub fn for_sequence(quantity: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(quantity);
            let style = ProgressStyle::with_template(BAR_TEMPLATE)
                .map(|s| s.progress_chars("=> "))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            bar.set_style(style);
            bar
        };
        Self {
            quiet,
            bar,
            started: Instant::now(),
        }
    }

    /// Presenter for a point query at `position`.
    #[must_use]
    pub fn for_point(position: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_message(format!("Calculating F({})...", format_number(position)));
            bar.enable_steady_tick(SPINNER_TICK);
            bar
        };
        Self {
            quiet,
            bar,
            started: Instant::now(),
        }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
        debug!(elapsed = %format_duration(self.started.elapsed()), "Run finished");
    }
}

impl EventPresenter for CliPresenter {
    fn present(&self, event: &Event) {
        match event {
            Event::Started { header } => {
                if !self.quiet {
                    self.bar.suspend(|| print!("{header}"));
                }
            }
            Event::Batch { text } => self.bar.suspend(|| print!("{text}")),
            Event::Progress { completed } => self.bar.set_position(*completed),
            Event::Completed { summary } => {
                self.finish();
                if !self.quiet {
                    println!("{summary}");
                }
            }
            Event::Stopped { message } => {
                self.finish();
                ui::print_warning(message);
            }
            Event::Error { message } => {
                self.finish();
                ui::print_error(message);
            }
            Event::PointResult { position, value } => {
                self.finish();
                if self.quiet {
                    println!("{value}");
                } else {
                    println!("{}", format_point_result(*position, value));
                }
            }
        }
    }
}

/// Machine-readable presenter: one JSON object per line on stdout.
pub struct JsonPresenter;

impl EventPresenter for JsonPresenter {
    fn present(&self, event: &Event) {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!(error = %e, kind = event.kind(), "Could not serialize event"),
        }
    }
}
