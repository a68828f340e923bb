//! Report output
//!
//! Colorization, whole-report rendering and the streaming printer.

mod colorizer;
mod printer;
mod report;

pub use colorizer::{Color, ColorMode, Colorizer};
pub use printer::{PrinterOptions, ResultPrinter};
pub use report::render_report;
