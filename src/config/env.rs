//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

use crate::output::ColorMode;

/// Environment variable prefix
const ENV_PREFIX: &str = "TESTDOX";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Color mode from TESTDOX_COLOR
    pub color: Option<ColorMode>,
    /// Verbose from TESTDOX_VERBOSE
    pub verbose: Option<bool>,
    /// Name prettifying from TESTDOX_PRETTIFY
    pub prettify: Option<bool>,
    /// Config file from TESTDOX_CONFIG
    pub config_file: Option<String>,
    /// Log level from TESTDOX_LOG
    pub log_level: Option<String>,
    /// NO_COLOR is set (any value)
    pub no_color: bool,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            color: get_env("COLOR").and_then(|v| ColorMode::from_str(&v)),
            verbose: get_env_bool("VERBOSE"),
            prettify: get_env_bool("PRETTIFY"),
            config_file: get_env("CONFIG"),
            log_level: get_env("LOG"),
            no_color: env::var_os("NO_COLOR").is_some(),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.color.is_some()
            || self.verbose.is_some()
            || self.prettify.is_some()
            || self.config_file.is_some()
            || self.log_level.is_some()
            || self.no_color
    }

    /// Get log level with fallback
    pub fn log_level_or(&self, default: &str) -> String {
        self.log_level.clone().unwrap_or_else(|| default.to_string())
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    /// Create a new environment builder
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set color mode
    pub fn color(mut self, color: ColorMode) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_COLOR"), color.to_string()));
        self
    }

    /// Set verbose
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Set name prettifying
    pub fn prettify(mut self, prettify: bool) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_PRETTIFY"), prettify.to_string()));
        self
    }

    /// Set log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_LOG"), level.into()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print all TESTDOX environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_COLOR      Color mode (auto, always, never)");
    println!("  {ENV_PREFIX}_VERBOSE    Show skipped/incomplete/risky details (true/false)");
    println!("  {ENV_PREFIX}_PRETTIFY   Render TestDox sentences (true/false)");
    println!("  {ENV_PREFIX}_CONFIG     Path to configuration file");
    println!("  {ENV_PREFIX}_LOG        Log level (trace, debug, info, warn, error)");
    println!("  NO_COLOR           Disable color when set");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.color.is_none());
        assert!(!config.has_any());
        assert_eq!(config.log_level_or("warn"), "warn");
    }

    #[test]
    fn test_env_builder() {
        let _guard = EnvBuilder::new()
            .color(ColorMode::Never)
            .verbose(true)
            .log_level("debug")
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.color, Some(ColorMode::Never));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = EnvBuilder::new().prettify(false).apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.prettify, Some(false));
    }

    #[test]
    fn test_has_any() {
        let with_no_color = EnvConfig {
            no_color: true,
            ..Default::default()
        };
        assert!(with_no_color.has_any());
    }
}
