//! generate-macos-icons - Generate macOS app icons from SVG logos
//!
//! Main entry point for the command line tool.
//!
//! # Overview
//!
//! Run from inside `<project>/logos/<ProjectName>/` (or anywhere under a project with a
//! `logos/` directory, together with `--project`). The highest numbered `NN_*.svg` is
//! rendered into `logos/<ProjectName>/generated/macOS/` along with a `HOWTO.md`.
//!
//! # Exit Codes
//!
//! - `0`: success, or cancelled by the user (Ctrl+C, a non-numeric answer or end of input at the prompt)
//! - `1`: any handled or unexpected error
//!
//! # Logging
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`). Setting
//! `MACOS_ICONS_LOG_DIR` additionally writes daily log files to that directory.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use macos_icons::services::{ChoiceProvider, LineChoiceProvider, TerminalChoiceProvider};
use macos_icons::{APP_NAME, GenerateError, RunOptions, VERSION};
use std::process::ExitCode;

const EXAMPLES: &str = "\
Examples:
  # Auto-detect project from current directory (in logos/SafarAI/)
  generate-macos-icons

  # Specify project name
  generate-macos-icons --project SafarAI

  # Specify project and SVG file
  generate-macos-icons --project SafarAI --svg 18_atomic_orbit.svg";

#[derive(Parser, Debug)]
#[command(name = "generate-macos-icons", version, about = "Generate macOS app icons from SVG logos")]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Project name (auto-detected if in logos/<ProjectName>/ directory)
    #[arg(long)]
    project: Option<String>,

    /// Specific SVG file to use (defaults to highest numbered file)
    #[arg(long)]
    svg: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match init_logging() {
        Ok(Some(guard)) => macos_icons::logging::hold_file_log_guard(guard),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: {:#}", e),
    }

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\nOperation cancelled by user.");
        macos_icons::logging::flush_file_logs();
        std::process::exit(0);
    }) {
        tracing::warn!("Failed to install Ctrl+C handler: {}", e);
    }

    let code = match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<GenerateError>() {
            Some(cancelled @ GenerateError::Cancelled) => {
                println!("\n{}", cancelled);
                ExitCode::SUCCESS
            }
            Some(handled) => {
                tracing::debug!("Run failed: {:?}", handled);
                println!("\n{}", handled);
                ExitCode::from(handled.exit_code())
            }
            None => {
                tracing::error!("Unexpected error: {:?}", e);
                println!("\nUnexpected error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    };

    macos_icons::logging::flush_file_logs();
    code
}

fn init_logging() -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    match std::env::var(macos_icons::logging::LOG_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => {
            let guard = macos_icons::logging::setup_logging_with_file(
                &Utf8PathBuf::from(dir),
                APP_NAME,
            )?;
            Ok(Some(guard))
        }
        _ => {
            macos_icons::logging::setup_logging()?;
            Ok(None)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let cwd = cwd
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", cwd.display()))?;
    let start_dir = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

    let options = RunOptions {
        start_dir,
        project: cli.project,
        svg: cli.svg,
    };

    let mut chooser: Box<dyn ChoiceProvider> = if TerminalChoiceProvider::is_available() {
        Box::new(TerminalChoiceProvider::new())
    } else {
        Box::new(LineChoiceProvider::stdio())
    };
    macos_icons::run(&options, chooser.as_mut())?;
    Ok(())
}
