//! Terminal front end for the tally engine.
//!
//! Reads key names from stdin, one or more per line separated by
//! whitespace, dispatches the bound actions and prints the calculator
//! screen after every line.
//!
//! ```text
//! $ printf '5 + - 3 Enter\n' | tally
//!
//! 0
//!
//! 2
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tally::config::Config;
use tally::core::CalculatorState;
use tally::display::{DisplayLines, DisplayOptions};
use tally::machine::Calculator;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Two-operand calculator driven by key names on stdin")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full state as JSON instead of the two display lines
    #[arg(long)]
    json: bool,

    /// Print the transition log as JSON on exit
    #[arg(long)]
    history: bool,

    /// Log every transition to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    let keymap = config.keymap().context("building keymap")?;
    let options = config.display_options();
    info!(bindings = keymap.len(), grouping = options.grouping, "starting");

    let mut calc = if cli.history {
        Calculator::new(CalculatorState::new())
    } else {
        Calculator::without_history(CalculatorState::new())
    };
    let mut out = io::stdout().lock();
    render(&mut out, &calc, options, cli.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        for key in line.split_whitespace() {
            match keymap.resolve(key) {
                Some(action) => {
                    calc.dispatch(action);
                }
                None => warn!(key, "no binding for key"),
            }
        }
        render(&mut out, &calc, options, cli.json)?;
    }

    if cli.history {
        serde_json::to_writer_pretty(&mut out, calc.history())
            .context("writing transition log")?;
        writeln!(out)?;
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render(
    out: &mut impl Write,
    calc: &Calculator,
    options: DisplayOptions,
    as_json: bool,
) -> Result<()> {
    let state = calc.current_state();
    let lines = DisplayLines::render_with(state, options);

    if as_json {
        let value = json!({ "state": state, "display": lines });
        writeln!(out, "{value}")?;
    } else {
        writeln!(out, "{}", lines.previous)?;
        writeln!(out, "{}", lines.current)?;
    }
    out.flush()?;
    Ok(())
}
