use itertools::{process_results, Itertools};
use thiserror::Error;

use super::TaskSlack;

/// Error type returned when a slack estimate cannot be reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The slack percentage is relative to the task's WCET, which is zero.
    #[error("cannot express slack of task '{task}' as a percentage of a zero WCET")]
    ZeroWcet { task: String },
}

/// Format the report line of a single task:
///
/// `<name>'s slack time is: <slack> in percentage: <percentage>%`
///
/// The percentage is printed unrounded, see [float_repr].
pub fn format_report(estimate: &TaskSlack) -> Result<String, ReportError> {
    let percentage = estimate.percentage()?;
    Ok(format!(
        "{}'s slack time is: {} in percentage: {}%",
        estimate.task.name,
        estimate.slack,
        float_repr(percentage)
    ))
}

/// Render a float as the shortest decimal that round-trips, always with a
/// fractional part or an exponent (`9900.0`, `2396.6666666666665`).
/// Magnitudes from 1e16 on and below 1e-4 use an exponent with an explicit
/// sign and at least two digits (`-9.999999999999992e+19`, `1e-05`).
pub fn float_repr(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Format the report lines of all tasks, in order, separated by newlines.
/// Fails on the first task that cannot be reported.
pub fn render_reports(estimates: &[TaskSlack]) -> Result<String, ReportError> {
    process_results(estimates.iter().map(format_report), |mut lines| {
        lines.join("\n")
    })
}

#[cfg(test)]
mod tests {
    use super::float_repr;

    #[test]
    fn plain_notation() {
        assert_eq!(float_repr(9900.0), "9900.0");
        assert_eq!(float_repr(-100.0), "-100.0");
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(2396.6666666666665), "2396.6666666666665");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(-9.999999999999992e19), "-9.999999999999992e+19");
        assert_eq!(float_repr(1e-5), "1e-05");
        assert_eq!(float_repr(1.5e-7), "1.5e-07");
        assert_eq!(float_repr(1e100), "1e+100");
    }
}
