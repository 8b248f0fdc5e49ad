//! # TALLY Terminal Calculator
//!
//! ```bash
//! # Defaults
//! tally
//!
//! # Custom config, wider frame, verbose logs
//! tally --config tally.toml --width 32 --log-level debug
//! ```

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tally::{events, logging, App, TallyConfig};

/// Capacity of the input event channel.
const EVENT_CAPACITY: usize = 256;

/// Keyboard-driven terminal calculator.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Frame width in columns (overrides the config file)
    #[arg(long, short = 'w')]
    width: Option<usize>,

    /// Log filter (overrides the config file; RUST_LOG overrides both)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TallyConfig::load(path)?,
        None => TallyConfig::default(),
    };
    if let Some(width) = cli.width {
        config.display.width = width;
    }
    if cli.log_level.is_some() {
        config.log_level.clone_from(&cli.log_level);
    }

    logging::init(config.log_level.as_deref());
    tracing::debug!(?config, "configuration loaded");

    let mut app = App::new(&config)?;

    let (sender, receiver) = events::channel(EVENT_CAPACITY);
    // Not joined: the reader may stay blocked on stdin after `:q`.
    let _reader = events::spawn_reader(BufReader::new(io::stdin()), sender)
        .context("starting input reader")?;

    let stdout = io::stdout();
    app.run(&receiver, &mut stdout.lock())
}
