//! testdox-report - TestDox-style terminal report for test results
//!
//! Reads finished-test events as JSON lines and prints a grouped,
//! colorized report.
//!
//! ## Usage
//!
//! ```bash
//! # Render events from a file
//! testdox-report render --input results.jsonl
//!
//! # Stream from a test host, showing skipped/incomplete/risky details
//! my-test-host --events | testdox-report render --verbose
//!
//! # TestDox sentences, no color
//! testdox-report render -i results.jsonl --prettify --color never
//!
//! # Write an example config
//! testdox-report config init
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

mod cli;

use cli::{Args, Command, ConfigAction, ConfigArgs, RenderArgs};
use testdox_report::config::{print_env_help, AppConfig, ConfigFile, EnvConfig};
use testdox_report::input::{open_input, stream_events};
use testdox_report::utils::logger::{init_logger, LogLevel};
use testdox_report::{ColorMode, Colorizer, ResultPrinter, Summary};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env = EnvConfig::load();
    let config_path = args
        .config
        .clone()
        .or_else(|| env.config_file.as_ref().map(PathBuf::from));

    let mut config = ConfigFile::load_or_default(config_path.as_deref())?.report;
    config.apply_env(&env);
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if args.verbose {
        config.verbose = true;
    }

    // Initialize logging
    init_logger(LogLevel::from_str(&config.log_level).unwrap_or(LogLevel::Warn));
    debug!("Effective configuration: {:?}", config);

    match args.command {
        Command::Render(render_args) => {
            let summary = render(render_args, config).await?;
            if !summary.is_successful() {
                std::process::exit(1);
            }
        }
        Command::Config(config_args) => {
            manage_config(config_args, config)?;
        }
    }

    Ok(())
}

async fn render(args: RenderArgs, mut config: AppConfig) -> Result<Summary> {
    if let Some(color) = &args.color {
        config.color = ColorMode::from_str(color)
            .ok_or_else(|| anyhow::anyhow!("Unknown color mode: {color}"))?;
    }
    if args.prettify {
        config.prettify_names = true;
    }
    if args.no_summary {
        config.summary = false;
    }

    let colorizer = Colorizer::from_mode(config.color);
    let mut printer = ResultPrinter::stdout(colorizer).with_options(config.printer_options());

    let reader = open_input(args.input.as_deref())
        .await
        .context("Failed to open event input")?;
    let count = stream_events(reader, &mut printer).await?;
    let summary = printer.finish()?;

    info!(
        "Rendered {} test results ({:.1}% passed)",
        count,
        summary.pass_rate()
    );

    Ok(summary)
}

fn manage_config(args: ConfigArgs, config: AppConfig) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let effective = ConfigFile {
                report: config,
                ..Default::default()
            };
            print!(
                "{}",
                serde_yaml::to_string(&effective).context("Failed to serialize config")?
            );
        }
        ConfigAction::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            ConfigFile::example().save(&path)?;
            println!("Wrote example configuration to {}", path.display());
        }
        ConfigAction::Env => print_env_help(),
    }

    Ok(())
}
