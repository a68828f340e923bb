//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TestDox-style terminal report for test results
#[derive(Parser, Debug)]
#[command(name = "testdox-report")]
#[command(author = "hephaex@gmail.com")]
#[command(version)]
#[command(about = "Render test results as a grouped, colorized TestDox report")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Show verbose-only details (skipped, incomplete, risky)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a JSON-lines stream of test events
    Render(RenderArgs),

    /// Show or create configuration
    Config(ConfigArgs),
}

/// Arguments for render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Event file to read ("-" or omitted for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Color mode (auto, always, never)
    #[arg(long)]
    pub color: Option<String>,

    /// Render TestDox sentences instead of raw names
    #[arg(short, long)]
    pub prettify: bool,

    /// Do not print the summary footer
    #[arg(long)]
    pub no_summary: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write an example configuration file
    Init {
        /// Destination path
        #[arg(short, long, default_value = "testdox-report.yaml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List supported environment variables
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args() {
        let args = Args::parse_from([
            "testdox-report",
            "render",
            "--input",
            "events.jsonl",
            "--color",
            "never",
            "--prettify",
            "--verbose",
        ]);
        assert!(args.verbose);
        match args.command {
            Command::Render(render_args) => {
                assert_eq!(render_args.input, Some(PathBuf::from("events.jsonl")));
                assert_eq!(render_args.color.as_deref(), Some("never"));
                assert!(render_args.prettify);
                assert!(!render_args.no_summary);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_config_init_args() {
        let args = Args::parse_from(["testdox-report", "config", "init", "--force"]);
        match args.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { path, force },
            }) => {
                assert_eq!(path, PathBuf::from("testdox-report.yaml"));
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let args = Args::parse_from(["testdox-report", "config", "show", "--config", "x.yaml"]);
        assert_eq!(args.config, Some(PathBuf::from("x.yaml")));
    }
}
