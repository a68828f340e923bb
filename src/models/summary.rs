//! Run summary shown below the report

use std::fmt;

use super::FailureKind;
use crate::output::{Color, Colorizer};

/// Outcome counts for a whole run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub errors: usize,
    pub failures: usize,
    pub warnings: usize,
    pub incomplete: usize,
    pub risky: usize,
    pub skipped: usize,
    /// Sum of all test runtimes, in seconds
    pub total_runtime: f64,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self, runtime: f64) {
        self.total += 1;
        self.passed += 1;
        self.total_runtime += runtime;
    }

    pub fn record_failure(&mut self, kind: FailureKind, runtime: f64) {
        self.total += 1;
        *self.count_mut(kind) += 1;
        self.total_runtime += runtime;
    }

    pub fn count(&self, kind: FailureKind) -> usize {
        match kind {
            FailureKind::Error => self.errors,
            FailureKind::Failure => self.failures,
            FailureKind::Warning => self.warnings,
            FailureKind::Incomplete => self.incomplete,
            FailureKind::Risky => self.risky,
            FailureKind::Skipped => self.skipped,
        }
    }

    fn count_mut(&mut self, kind: FailureKind) -> &mut usize {
        match kind {
            FailureKind::Error => &mut self.errors,
            FailureKind::Failure => &mut self.failures,
            FailureKind::Warning => &mut self.warnings,
            FailureKind::Incomplete => &mut self.incomplete,
            FailureKind::Risky => &mut self.risky,
            FailureKind::Skipped => &mut self.skipped,
        }
    }

    /// No errors or failures
    pub fn is_successful(&self) -> bool {
        self.errors == 0 && self.failures == 0
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    fn headline(&self) -> &'static str {
        if self.errors > 0 {
            "ERRORS!"
        } else if self.failures > 0 {
            "FAILURES!"
        } else if self.warnings > 0 {
            "WARNINGS!"
        } else {
            "OK, but incomplete, skipped, or risky tests!"
        }
    }

    fn counts_line(&self) -> String {
        let mut parts = vec![format!("Tests: {}", self.total)];
        for kind in FailureKind::all() {
            let count = self.count(kind);
            if count > 0 {
                parts.push(format!("{}: {}", kind.label(), count));
            }
        }
        format!("{}.", parts.join(", "))
    }

    /// Footer text, starting with a blank separator line
    pub fn render(&self, colorizer: &Colorizer) -> String {
        if self.total == 0 {
            return format!("\n{}\n", colorizer.colorize("No tests executed!", Color::Yellow));
        }

        if self.is_all_passed() {
            let noun = if self.total == 1 { "test" } else { "tests" };
            let line = format!(
                "OK ({} {}, {:.2} ms)",
                self.total,
                noun,
                self.total_runtime * 1000.0
            );
            return format!("\n{}\n", colorizer.colorize(&line, Color::Green));
        }

        let color = if self.is_successful() {
            Color::Yellow
        } else {
            Color::Red
        };

        format!(
            "\n{}\n{}\n",
            colorizer.colorize(self.headline(), color),
            colorizer.colorize(&self.counts_line(), color)
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Pass Rate: {:.1}% | Duration: {:.2} ms",
            self.counts_line(),
            self.pass_rate(),
            self.total_runtime * 1000.0
        )
    }
}
