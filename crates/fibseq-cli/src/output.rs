//! CLI output formatting.

use std::time::Duration;

use num_bigint::BigUint;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Render a point-query result as the lookup report.
#[must_use]
pub fn format_point_result(position: u64, value: &BigUint) -> String {
    let digits = value.to_string();
    format!(
        "Fibonacci Number Lookup:\n\nPosition: {}\nNumber of digits: {}\n\nResult:\n{digits}",
        format_number(position),
        format_number(digits.len() as u64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibseq_core::fibonacci;

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).ends_with("ms"));
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.500s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn point_report_layout() {
        let report = format_point_result(10, &BigUint::from(55u32));
        assert_eq!(
            report,
            "Fibonacci Number Lookup:\n\nPosition: 10\nNumber of digits: 2\n\nResult:\n55"
        );
    }

    #[test]
    fn point_report_large_position() {
        let value = fibonacci(1000).unwrap();
        let report = format_point_result(1000, &value);
        assert!(report.contains("Position: 1,000\n"));
        assert!(report.contains("Number of digits: 209\n"));
        assert!(report.ends_with(&value.to_string()));
    }
}
