//! Measurement output.
//!
//! A measurement is one line on stdout holding a single floating-point
//! number of seconds, nothing else. Tooling that wraps the binaries parses
//! these lines, so the format stays free of units and labels.

use std::time::Duration;

/// Render a duration as floating-point seconds.
pub fn format_seconds(elapsed: Duration) -> String {
    elapsed.as_secs_f64().to_string()
}

/// Print a duration as floating-point seconds on its own stdout line.
pub fn report_seconds(elapsed: Duration) {
    println!("{}", format_seconds(elapsed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_seconds() {
        assert_eq!(format_seconds(Duration::from_millis(250)), "0.25");
        assert_eq!(format_seconds(Duration::from_secs(2)), "2");
    }

    #[test]
    fn format_is_a_single_float_token() {
        let rendered = format_seconds(Duration::from_micros(1234));
        assert!(!rendered.contains(char::is_whitespace));
        assert!(rendered.parse::<f64>().unwrap() >= 0.0);
    }
}
