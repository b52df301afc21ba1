mod calculator;
mod config;
mod keypad;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use calculator::{CalcError, Calculator, copy_to_clipboard};
use config::Config;
use keypad::Display;
use session::Session;

/// A keypad calculator for the terminal.
///
/// Keys are typed as text: digits, `.`, `+ - × ÷` (or `* x /`), `=`, `%`,
/// `+/-` (or `n`) and `AC` (or `c`).
#[derive(Parser, Debug)]
#[command(name = "abacus", version, about)]
struct Cli {
    /// Keys to press, e.g. `5 + 3 =`. Reads keys from stdin line by line when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Path to a config file instead of ~/.config/abacus/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Copy the final display text to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Make `AC` also drop the pending operation.
    #[arg(long)]
    reset_pending_on_clear: bool,

    /// Print the pending operation after each line of input.
    #[arg(long)]
    show_pending: bool,

    /// Log filter, e.g. `debug` or `abacus=trace`. `RUST_LOG` wins over this.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    init_logging(cli.log_level.as_deref().unwrap_or(&config.logging.level));

    let reset_pending_on_clear =
        cli.reset_pending_on_clear || config.calculator.reset_pending_on_clear;
    let show_pending = cli.show_pending || config.display.show_pending;
    let copy = cli.copy || config.display.copy_result;

    info!(reset_pending_on_clear, "starting session");
    let display = Display::new(Calculator::resetting_on_clear(reset_pending_on_clear));
    let mut session = Session::new(display, show_pending);
    let mut stdout = io::stdout().lock();

    let outcome = if cli.keys.is_empty() {
        session.run(io::stdin().lock(), &mut stdout, &mut io::stderr())
    } else {
        session
            .press_line(&cli.keys.join(" "))
            .and_then(|()| session.write_display(&mut stdout))
    };

    if let Err(err) = outcome {
        if err.downcast_ref::<CalcError>().is_some_and(CalcError::is_assertion) {
            error!("calculator reached an inconsistent state; this is a bug");
        }
        return Err(err);
    }

    if copy {
        let display = session.display();
        let text = display.text();
        if copy_to_clipboard(text, display.value()?)? {
            info!(text, "copied result to clipboard");
        }
    }

    info!("session finished");
    Ok(())
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
