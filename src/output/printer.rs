//! Streaming result printer
//!
//! Receives test lifecycle calls from a host and writes each finished test
//! to the target as soon as its runtime is known.

use std::io::{self, Write};
use tracing::{debug, warn};

use crate::error::{ReportError, Result};
use crate::models::names::{prettify_test_class, prettify_test_method};
use crate::models::{FailureKind, Summary, TestResult};
use crate::output::Colorizer;

/// Printer behavior switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Show verbose-only diagnostics
    pub verbose: bool,
    /// Render TestDox sentences instead of raw names
    pub prettify_names: bool,
    /// Write a summary footer on `finish`
    pub summary: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            prettify_names: false,
            summary: true,
        }
    }
}

/// Test currently between `start_test` and `end_test`
#[derive(Debug)]
struct PendingTest {
    result: TestResult,
    kind: Option<FailureKind>,
}

/// Writes a grouped report one test at a time
#[derive(Debug)]
pub struct ResultPrinter<W: Write> {
    target: W,
    colorizer: Colorizer,
    options: PrinterOptions,
    current: Option<PendingTest>,
    previous_class: Option<String>,
    summary: Summary,
}

impl ResultPrinter<io::Stdout> {
    pub fn stdout(colorizer: Colorizer) -> Self {
        Self::new(io::stdout(), colorizer)
    }
}

impl<W: Write> ResultPrinter<W> {
    pub fn new(target: W, colorizer: Colorizer) -> Self {
        Self {
            target,
            colorizer,
            options: PrinterOptions::default(),
            current: None,
            previous_class: None,
            summary: Summary::new(),
        }
    }

    pub fn with_options(mut self, options: PrinterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options.verbose = verbose;
        self
    }

    pub fn prettify_names(mut self, prettify: bool) -> Self {
        self.options.prettify_names = prettify;
        self
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Begin a test. An unfinished previous test is discarded.
    pub fn start_test(&mut self, class_under_test: &str, test_method: &str) {
        if let Some(pending) = self.current.take() {
            warn!(
                "Discarding unfinished test {}::{}",
                pending.result.class_under_test(),
                pending.result.test_method()
            );
        }

        let (class_under_test, test_method) = if self.options.prettify_names {
            (
                prettify_test_class(class_under_test),
                prettify_test_method(test_method),
            )
        } else {
            (class_under_test.to_string(), test_method.to_string())
        };

        self.current = Some(PendingTest {
            result: TestResult::new(self.colorizer, class_under_test, test_method),
            kind: None,
        });
    }

    /// Mark the current test as not passed; the latest call wins
    pub fn add_failure(&mut self, kind: FailureKind, text: impl Into<String>) -> Result<()> {
        let pending = self.current.as_mut().ok_or(ReportError::NoTestInProgress)?;
        kind.apply(&mut pending.result, &self.colorizer, text);
        pending.kind = Some(kind);
        Ok(())
    }

    /// Finish the current test and write its entry
    pub fn end_test(&mut self, runtime: f64) -> Result<()> {
        let PendingTest { mut result, kind } =
            self.current.take().ok_or(ReportError::NoTestInProgress)?;

        result.set_runtime(runtime);
        let entry = result.render(self.previous_class.as_deref(), self.options.verbose)?;
        self.target.write_all(entry.as_bytes())?;
        self.target.flush()?;

        match kind {
            Some(kind) => self.summary.record_failure(kind, runtime),
            None => self.summary.record_pass(runtime),
        }

        debug!(
            class = result.class_under_test(),
            method = result.test_method(),
            runtime,
            "Rendered test result"
        );

        self.previous_class = Some(result.class_under_test().to_string());
        Ok(())
    }

    /// Write the summary footer (if enabled) and return the counts
    pub fn finish(&mut self) -> Result<Summary> {
        if let Some(pending) = self.current.take() {
            warn!(
                "Test {}::{} never finished, leaving it out of the report",
                pending.result.class_under_test(),
                pending.result.test_method()
            );
        }

        if self.options.summary {
            self.target
                .write_all(self.summary.render(&self.colorizer).as_bytes())?;
        }
        self.target.flush()?;

        Ok(self.summary.clone())
    }

    pub fn into_inner(self) -> W {
        self.target
    }
}
