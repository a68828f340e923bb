//! Failure kinds reported by a test host
//!
//! Each kind maps to a glyph, a color and whether its diagnostic is only
//! shown in verbose mode.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TestResult;
use crate::output::{Color, Colorizer};

/// Non-passing outcome reported by a test host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Error,
    Failure,
    Warning,
    Incomplete,
    Risky,
    Skipped,
}

impl FailureKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            FailureKind::Error | FailureKind::Failure | FailureKind::Warning => "✘",
            FailureKind::Incomplete => "∅",
            FailureKind::Risky => "☢",
            FailureKind::Skipped => "→",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            FailureKind::Error | FailureKind::Failure => Color::Red,
            _ => Color::Yellow,
        }
    }

    /// Whether the diagnostic is withheld outside verbose mode
    pub fn is_verbose_only(&self) -> bool {
        matches!(
            self,
            FailureKind::Incomplete | FailureKind::Risky | FailureKind::Skipped
        )
    }

    /// Errors and failures break the run; the rest are notices
    pub fn is_fatal(&self) -> bool {
        matches!(self, FailureKind::Error | FailureKind::Failure)
    }

    /// Colorized glyph for this kind
    pub fn symbol(&self, colorizer: &Colorizer) -> String {
        colorizer.colorize(self.glyph(), self.color())
    }

    /// Mark `result` failed with this kind's symbol and verbosity
    pub fn apply(&self, result: &mut TestResult, colorizer: &Colorizer, text: impl Into<String>) {
        result.fail_with(self.symbol(colorizer), text, self.is_verbose_only());
    }

    pub fn all() -> Vec<FailureKind> {
        vec![
            FailureKind::Error,
            FailureKind::Failure,
            FailureKind::Warning,
            FailureKind::Incomplete,
            FailureKind::Risky,
            FailureKind::Skipped,
        ]
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "errored" => Some(FailureKind::Error),
            "failure" | "failed" | "fail" => Some(FailureKind::Failure),
            "warning" | "warn" => Some(FailureKind::Warning),
            "incomplete" => Some(FailureKind::Incomplete),
            "risky" => Some(FailureKind::Risky),
            "skipped" | "skip" => Some(FailureKind::Skipped),
            _ => None,
        }
    }

    /// Plural label used in the summary footer
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Error => "Errors",
            FailureKind::Failure => "Failures",
            FailureKind::Warning => "Warnings",
            FailureKind::Incomplete => "Incomplete",
            FailureKind::Risky => "Risky",
            FailureKind::Skipped => "Skipped",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Error => write!(f, "error"),
            FailureKind::Failure => write!(f, "failure"),
            FailureKind::Warning => write!(f, "warning"),
            FailureKind::Incomplete => write!(f, "incomplete"),
            FailureKind::Risky => write!(f, "risky"),
            FailureKind::Skipped => write!(f, "skipped"),
        }
    }
}
