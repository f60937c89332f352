//! sshtoggle entry point.
//!
//! # Usage
//!
//! ```bash
//! # Edit the 1Password agent config at its default location
//! sshtoggle
//!
//! # Edit another file and keep a debug log
//! sshtoggle --config ./agent.toml --log-file sshtoggle.log --log-level debug
//! ```

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use clap::Parser;
use sshtoggle_core::{MalformedBlockPolicy, ReaderConfig};
use sshtoggle_tui::{Runtime, RuntimeConfig, TerminalDriver, paths};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Enable or disable 1Password SSH agent keys
#[derive(Parser, Debug)]
#[command(name = "sshtoggle")]
#[command(about = "Enable or disable 1Password SSH agent keys")]
#[command(version)]
struct Args {
    /// Agent configuration file
    ///
    /// Defaults to the 1Password location for this platform.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Handling of ssh-keys blocks that match no known shape (drop, warn,
    /// error)
    #[arg(long, default_value_t = MalformedBlockPolicy::Drop)]
    on_malformed: MalformedBlockPolicy,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let config_path = match args.config {
        Some(path) => path,
        None => paths::default_agent_config()
            .ok_or("could not determine the home directory; pass --config")?,
    };
    tracing::info!(path = %config_path.display(), "sshtoggle starting");

    let config = RuntimeConfig {
        config_path,
        reader: ReaderConfig { on_malformed: args.on_malformed },
    };

    let driver = TerminalDriver::new()?;
    let app = Runtime::new(driver, config).run()?;

    tracing::info!(enabled = app.store().selected().count(), total = app.store().len(), "bye");
    Ok(())
}

/// Install a file logger when `--log-file` is given.
fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(log_file) = &args.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}
