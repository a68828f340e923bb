//! Configuration module
//!
//! Handles loading and layering configuration: defaults, config file,
//! environment, then command-line flags.

mod env;
mod file;

pub use env::{print_env_help, EnvBuilder, EnvConfig, EnvGuard};
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

use crate::output::{ColorMode, PrinterOptions};

/// Report settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// When to colorize output
    pub color: ColorMode,

    /// Show verbose-only diagnostics (skipped, incomplete, risky)
    pub verbose: bool,

    /// Render TestDox sentences instead of raw class and method names
    pub prettify_names: bool,

    /// Print the summary footer
    pub summary: bool,

    /// Log level for diagnostics on stderr
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            verbose: false,
            prettify_names: false,
            summary: true,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Apply environment overrides
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(color) = env.color {
            self.color = color;
        }
        if env.no_color {
            self.color = ColorMode::Never;
        }
        if let Some(verbose) = env.verbose {
            self.verbose = verbose;
        }
        if let Some(prettify) = env.prettify {
            self.prettify_names = prettify;
        }
        if let Some(level) = &env.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn printer_options(&self) -> PrinterOptions {
        PrinterOptions {
            verbose: self.verbose,
            prettify_names: self.prettify_names,
            summary: self.summary,
        }
    }
}
