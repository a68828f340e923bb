//! Per-test outcome record
//!
//! A `TestResult` holds what is needed to render one line of the report
//! and its optional diagnostic block.

use std::fmt;

use crate::error::{ReportError, Result};
use crate::output::{Color, Colorizer};

/// Glyph shown for a passing test
pub const SUCCESS_GLYPH: &str = "✔";

/// Runtimes above this many seconds are highlighted yellow
pub const SLOW_THRESHOLD_SECS: f64 = 1.0;

/// Runtimes above this many seconds are highlighted red
pub const VERY_SLOW_THRESHOLD_SECS: f64 = 5.0;

const DETAIL_BORDER: &str = "   │";

/// Failure state attached to a record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Already colorized glyph chosen by the caller
    pub symbol: String,
    /// Diagnostic text, e.g. an assertion message or stack trace
    pub additional_information: String,
    /// Only show the diagnostic in verbose mode
    pub verbose_only: bool,
}

/// Outcome of a single test
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Failure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Result of a single test, rendered as one report entry
#[derive(Clone, Debug)]
pub struct TestResult {
    colorizer: Colorizer,
    class_under_test: String,
    test_method: String,
    success_symbol: String,
    outcome: Outcome,
    runtime: Option<f64>,
}

impl TestResult {
    /// Create a passing record; the success glyph is colorized here, once.
    pub fn new(
        colorizer: Colorizer,
        class_under_test: impl Into<String>,
        test_method: impl Into<String>,
    ) -> Self {
        Self {
            success_symbol: colorizer.colorize(SUCCESS_GLYPH, Color::Green),
            colorizer,
            class_under_test: class_under_test.into(),
            test_method: test_method.into(),
            outcome: Outcome::Passed,
            runtime: None,
        }
    }

    pub fn class_under_test(&self) -> &str {
        &self.class_under_test
    }

    pub fn test_method(&self) -> &str {
        &self.test_method
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_successful(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn runtime(&self) -> Option<f64> {
        self.runtime
    }

    /// Symbol for the current outcome
    pub fn symbol(&self) -> &str {
        match &self.outcome {
            Outcome::Passed => &self.success_symbol,
            Outcome::Failed(failure) => &failure.symbol,
        }
    }

    /// Mark the test failed with a diagnostic that is always shown
    pub fn fail(&mut self, symbol: impl Into<String>, additional_information: impl Into<String>) {
        self.fail_with(symbol, additional_information, false);
    }

    /// Mark the test failed. A later call replaces the earlier failure.
    pub fn fail_with(
        &mut self,
        symbol: impl Into<String>,
        additional_information: impl Into<String>,
        verbose_only: bool,
    ) {
        self.outcome = Outcome::Failed(Failure {
            symbol: symbol.into(),
            additional_information: additional_information.into(),
            verbose_only,
        });
    }

    /// Store the measured runtime in seconds. No range checks are applied.
    pub fn set_runtime(&mut self, runtime: f64) {
        self.runtime = Some(runtime);
    }

    /// Render the entry given the class of the previously rendered entry.
    ///
    /// `previous_class_under_test` is `None` for the first entry of a report.
    pub fn render(&self, previous_class_under_test: Option<&str>, verbose: bool) -> Result<String> {
        Ok(format!(
            "{}{} {} {}\n{}",
            self.class_name_header(previous_class_under_test),
            self.symbol(),
            self.test_method,
            self.formatted_runtime()?,
            self.formatted_additional_information(verbose)
        ))
    }

    /// Class name line, emitted only when the class changes
    pub fn class_name_header(&self, previous_class_under_test: Option<&str>) -> String {
        match previous_class_under_test {
            Some(previous) if previous == self.class_under_test => String::new(),
            Some(_) => format!("\n{}\n", self.class_under_test),
            None => format!("{}\n", self.class_under_test),
        }
    }

    /// Runtime as `[X.XX ms]`, colored by how slow the test was
    pub fn formatted_runtime(&self) -> Result<String> {
        let runtime = self.runtime.ok_or_else(|| ReportError::MissingRuntime {
            class: self.class_under_test.clone(),
            method: self.test_method.clone(),
        })?;

        let text = format!("[{:.2} ms]", runtime * 1000.0);

        if runtime > VERY_SLOW_THRESHOLD_SECS {
            Ok(self.colorizer.colorize(&text, Color::Red))
        } else if runtime > SLOW_THRESHOLD_SECS {
            Ok(self.colorizer.colorize(&text, Color::Yellow))
        } else {
            Ok(text)
        }
    }

    /// Diagnostic text as a bordered block, or empty when hidden
    pub fn formatted_additional_information(&self, verbose: bool) -> String {
        let failure = match &self.outcome {
            Outcome::Passed => return String::new(),
            Outcome::Failed(failure) => failure,
        };

        if failure.additional_information.is_empty() || (failure.verbose_only && !verbose) {
            return String::new();
        }

        let body = failure
            .additional_information
            .split('\n')
            .map(|line| format!("{DETAIL_BORDER} {line}"))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{DETAIL_BORDER}\n{body}\n\n")
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}::{}", self.symbol(), self.class_under_test, self.test_method)?;
        if let Some(runtime) = self.runtime {
            write!(f, " [{:.2} ms]", runtime * 1000.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(class: &str, method: &str, runtime: f64) -> TestResult {
        let mut result = TestResult::new(Colorizer::disabled(), class, method);
        result.set_runtime(runtime);
        result
    }

    fn colored(class: &str, method: &str, runtime: f64) -> TestResult {
        let mut result = TestResult::new(Colorizer::new(true), class, method);
        result.set_runtime(runtime);
        result
    }

    #[test]
    fn test_new_record_is_successful() {
        let result = TestResult::new(Colorizer::new(true), "ClassA", "testOne");
        assert!(result.is_successful());
        assert_eq!(result.symbol(), "\x1b[32m✔\x1b[0m");
        assert_eq!(result.runtime(), None);
        assert_eq!(result.class_under_test(), "ClassA");
        assert_eq!(result.test_method(), "testOne");
    }

    #[test]
    fn test_runtime_plain_up_to_one_second() {
        assert_eq!(colored("A", "t", 0.5).formatted_runtime().unwrap(), "[500.00 ms]");
        assert_eq!(colored("A", "t", 1.0).formatted_runtime().unwrap(), "[1000.00 ms]");
        assert_eq!(colored("A", "t", 0.0).formatted_runtime().unwrap(), "[0.00 ms]");
    }

    #[test]
    fn test_runtime_yellow_above_one_second() {
        assert_eq!(
            colored("A", "t", 1.0000001).formatted_runtime().unwrap(),
            "\x1b[33m[1000.00 ms]\x1b[0m"
        );
        assert_eq!(
            colored("A", "t", 5.0).formatted_runtime().unwrap(),
            "\x1b[33m[5000.00 ms]\x1b[0m"
        );
    }

    #[test]
    fn test_runtime_red_above_five_seconds() {
        assert_eq!(
            colored("A", "t", 5.0000001).formatted_runtime().unwrap(),
            "\x1b[31m[5000.00 ms]\x1b[0m"
        );
        assert_eq!(
            colored("A", "t", 6.0).formatted_runtime().unwrap(),
            "\x1b[31m[6000.00 ms]\x1b[0m"
        );
    }

    #[test]
    fn test_runtime_negative_rendered_verbatim() {
        assert_eq!(plain("A", "t", -0.25).formatted_runtime().unwrap(), "[-250.00 ms]");
    }

    #[test]
    fn test_missing_runtime_is_an_error() {
        let result = TestResult::new(Colorizer::disabled(), "ClassA", "testOne");
        let err = result.render(None, false).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingRuntime { ref class, ref method } if class == "ClassA" && method == "testOne"
        ));
    }

    #[test]
    fn test_class_header() {
        let result = plain("ClassA", "testOne", 0.1);
        assert_eq!(result.class_name_header(None), "ClassA\n");
        assert_eq!(result.class_name_header(Some("ClassA")), "");
        assert_eq!(result.class_name_header(Some("ClassZ")), "\nClassA\n");
    }

    #[test]
    fn test_class_header_empty_class_name() {
        let result = plain("", "testOne", 0.1);
        assert_eq!(result.class_name_header(None), "\n");
        assert_eq!(result.class_name_header(Some("")), "");
        assert_eq!(result.class_name_header(Some("ClassA")), "\n\n");
    }

    #[test]
    fn test_additional_information_block() {
        let mut result = plain("ClassA", "testOne", 0.1);
        result.fail("✘", "Expected 1\n\nGot 2");
        assert_eq!(
            result.formatted_additional_information(false),
            "   │\n   │ Expected 1\n   │ \n   │ Got 2\n\n"
        );
    }

    #[test]
    fn test_additional_information_empty() {
        let mut result = plain("ClassA", "testOne", 0.1);
        assert_eq!(result.formatted_additional_information(true), "");

        result.fail("✘", "");
        assert_eq!(result.formatted_additional_information(true), "");
    }

    #[test]
    fn test_verbose_only_information() {
        let mut result = plain("ClassA", "testOne", 0.1);
        result.fail_with("→", "Skipped: no database", true);

        assert_eq!(result.render(Some("ClassA"), false).unwrap(), "→ testOne [100.00 ms]\n");
        assert_eq!(
            result.render(Some("ClassA"), true).unwrap(),
            "→ testOne [100.00 ms]\n   │\n   │ Skipped: no database\n\n"
        );
    }

    #[test]
    fn test_fail_twice_keeps_last() {
        let mut result = plain("ClassA", "testOne", 0.1);
        result.fail("✘", "first");
        result.fail_with("W", "second", false);

        assert!(!result.is_successful());
        assert_eq!(
            result.render(None, false).unwrap(),
            "ClassA\nW testOne [100.00 ms]\n   │\n   │ second\n\n"
        );
    }

    #[test]
    fn test_render_scenarios() {
        let colorizer = Colorizer::new(true);

        let first = colored("ClassA", "testOne", 0.5);
        assert_eq!(
            first.render(None, false).unwrap(),
            "ClassA\n\x1b[32m✔\x1b[0m testOne [500.00 ms]\n"
        );

        let second = colored("ClassA", "testTwo", 2.0);
        assert_eq!(
            second.render(Some("ClassA"), false).unwrap(),
            "\x1b[32m✔\x1b[0m testTwo \x1b[33m[2000.00 ms]\x1b[0m\n"
        );

        let mut third = colored("ClassB", "testThree", 6.0);
        third.fail(colorizer.colorize("✘", Color::Red), "Expected 1\nGot 2");
        assert_eq!(
            third.render(Some("ClassA"), false).unwrap(),
            "\nClassB\n\x1b[31m✘\x1b[0m testThree \x1b[31m[6000.00 ms]\x1b[0m\n   │\n   │ Expected 1\n   │ Got 2\n\n"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let result = plain("ClassA", "testOne", 0.5);
        assert_eq!(result.render(None, false).unwrap(), result.render(None, false).unwrap());
    }
}
