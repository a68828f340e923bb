//! TestDox-style terminal reports for test results
//!
//! Renders one line per test with a pass/fail glyph and a colorized
//! runtime, groups consecutive tests under their class name, and prints
//! failure diagnostics as an indented, bordered block.
//!
//! ## Example
//!
//! ```
//! use testdox_report::{Color, Colorizer, TestResult};
//!
//! let colorizer = Colorizer::disabled();
//!
//! let mut first = TestResult::new(colorizer, "ClassA", "testOne");
//! first.set_runtime(0.5);
//!
//! let mut second = TestResult::new(colorizer, "ClassB", "testTwo");
//! second.fail(colorizer.colorize("✘", Color::Red), "Expected 1\nGot 2");
//! second.set_runtime(6.0);
//!
//! let report = testdox_report::render_report([&first, &second], false).unwrap();
//! assert_eq!(
//!     report,
//!     "ClassA\n✔ testOne [500.00 ms]\n\nClassB\n✘ testTwo [6000.00 ms]\n   │\n   │ Expected 1\n   │ Got 2\n\n"
//! );
//! ```
//!
//! A host that reports tests as they run uses [`ResultPrinter`] instead,
//! which writes each entry as soon as the test ends.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod utils;

pub use error::{ReportError, Result};
pub use models::{FailureKind, Outcome, Summary, TestResult};
pub use output::{render_report, Color, ColorMode, Colorizer, PrinterOptions, ResultPrinter};
