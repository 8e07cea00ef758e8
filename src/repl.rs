use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{Calculator, error::EvalError};

/// Marker written for a line that failed to evaluate.
pub const ERROR_MARKER: &str = "ERROR";

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines that were evaluated, successfully or not.
    pub evaluated: usize,
    /// Lines whose evaluation failed.
    pub failed:    usize,
}

/// Evaluates an input stream one line at a time.
#[derive(Debug, Clone, Copy)]
pub struct Session<'t> {
    calculator: Calculator<'t>,
    verbose:    bool,
}

impl<'t> Session<'t> {
    /// Creates a session.
    ///
    /// With `verbose` set, failures are written as `ERROR: <message>` instead
    /// of the bare marker.
    #[must_use]
    pub const fn new(calculator: Calculator<'t>, verbose: bool) -> Self {
        Self { calculator,
               verbose }
    }

    /// Reads lines from `input` and writes one result per line to `output`.
    ///
    /// Stops at the first empty line or at the end of input. A line that
    /// fails to evaluate produces an error marker and the session moves on
    /// to the next line.
    ///
    /// # Errors
    /// Only I/O errors on `input` or `output` end the session early.
    ///
    /// # Example
    /// ```
    /// use wordcalc::{Calculator, repl::Session};
    ///
    /// let input = "1 + 2\nfive divided by zero\n\nnot reached\n";
    /// let mut output = Vec::new();
    ///
    /// let summary = Session::new(Calculator::default(), false).run(input.as_bytes(), &mut output)
    ///                                                         .unwrap();
    /// assert_eq!(String::from_utf8(output).unwrap(), "3\nERROR\n");
    /// assert_eq!(summary.evaluated, 2);
    /// assert_eq!(summary.failed, 1);
    /// ```
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<Summary> {
        let mut summary = Summary::default();

        for line in input.lines() {
            let line = line?;
            if line.is_empty() {
                break;
            }

            let outcome = self.calculator.evaluate(&line);
            summary.evaluated += 1;
            if let Err(e) = &outcome {
                summary.failed += 1;
                debug!(line, error = %e, "line failed");
            }
            writeln!(output, "{}", self.format_outcome(&outcome))?;
        }

        output.flush()?;
        Ok(summary)
    }

    /// Formats the outcome of one line the way [`Session::run`] prints it.
    #[must_use]
    pub fn format_outcome(&self, outcome: &Result<f64, EvalError>) -> String {
        match outcome {
            Ok(value) => value.to_string(),
            Err(e) if self.verbose => format!("{ERROR_MARKER}: {e}"),
            Err(_) => ERROR_MARKER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, verbose: bool) -> (String, Summary) {
        let mut output = Vec::new();
        let session = Session::new(Calculator::default(), verbose);
        let summary = session.run(input.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn prints_one_line_per_input_line() {
        let (output, summary) = run("12 + 3\ntwenty one\n7 / 2\n", false);

        assert_eq!(output, "15\n21\n3.5\n");
        assert_eq!(summary, Summary { evaluated: 3,
                                      failed:    0, });
    }

    #[test]
    fn failures_do_not_stop_the_session() {
        let (output, summary) = run("5 / 0\nfive banana\n2 * 2\n", false);

        assert_eq!(output, "ERROR\nERROR\n4\n");
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn verbose_mode_includes_the_message() {
        let (output, _) = run("five banana\ntwenty zero\n", true);

        assert_eq!(output,
                   "ERROR: unknown token 'banana'\nERROR: expected one|two|three|... after \
                    'twenty' but got zero\n");
    }

    #[test]
    fn blank_line_ends_the_session() {
        let (output, summary) = run("1\n\n2\n", false);

        assert_eq!(output, "1\n");
        assert_eq!(summary.evaluated, 1);
    }

    #[test]
    fn whitespace_only_line_is_an_error_not_the_end() {
        let (output, _) = run("   \n1\n", false);

        assert_eq!(output, "ERROR\n1\n");
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let (output, _) = run("1 + 1\r\n", false);

        assert_eq!(output, "2\n");
    }
}
