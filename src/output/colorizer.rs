//! Terminal colorization
//!
//! Wraps text in ANSI escape sequences when the output target supports it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";

/// Terminal colors used by the report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Dim,
}

impl Color {
    /// ANSI SGR code for the color
    pub fn code(&self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::Cyan => "36",
            Color::Dim => "2",
        }
    }
}

/// When to emit color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" | "true" => Some(ColorMode::Always),
            "never" | "off" | "false" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve the mode for stdout.
    ///
    /// `Auto` enables color only when stdout is a terminal and `NO_COLOR`
    /// is unset.
    pub fn resolve(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

/// Colorization policy, fixed at construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colorizer that always returns text verbatim
    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn from_mode(mode: ColorMode) -> Self {
        Self::new(mode.resolve())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` in the escape sequence for `color`
    pub fn colorize(&self, text: &str, color: Color) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[{}m{}{}", color.code(), text, RESET)
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::from_mode(ColorMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_text_verbatim() {
        let colorizer = Colorizer::disabled();
        assert_eq!(colorizer.colorize("✔", Color::Green), "✔");
        assert_eq!(colorizer.colorize("", Color::Red), "");
    }

    #[test]
    fn test_enabled_wraps_text() {
        let colorizer = Colorizer::new(true);
        assert_eq!(colorizer.colorize("ok", Color::Green), "\x1b[32mok\x1b[0m");
        assert_eq!(colorizer.colorize("slow", Color::Yellow), "\x1b[33mslow\x1b[0m");
        assert_eq!(colorizer.colorize("fail", Color::Red), "\x1b[31mfail\x1b[0m");
    }

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!(ColorMode::from_str("AUTO"), Some(ColorMode::Auto));
        assert_eq!(ColorMode::from_str("always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::from_str("off"), Some(ColorMode::Never));
        assert_eq!(ColorMode::from_str("sometimes"), None);
    }

    #[test]
    fn test_color_mode_resolve_fixed() {
        assert!(ColorMode::Always.resolve());
        assert!(!ColorMode::Never.resolve());
        assert!(Colorizer::from_mode(ColorMode::Always).is_enabled());
    }
}
