//! Line-oriented keypad session for the terminal.

use crate::calculator::{CalcError, PendingOperation};
use crate::keypad::{Display, Key, format_value, parse_keys};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Drives a [`Display`] from lines of typed keys.
pub struct Session {
    display: Display,
    show_pending: bool,
}

impl Session {
    pub fn new(display: Display, show_pending: bool) -> Self {
        Self {
            display,
            show_pending,
        }
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Press every key found in `line`.
    ///
    /// A line with an unknown key is rejected before any key is pressed.
    pub fn press_line(&mut self, line: &str) -> Result<()> {
        let keys = parse_keys(line)?;
        if keys.is_empty() {
            debug!("skipping blank line");
            return Ok(());
        }

        let labels: Vec<String> = keys.iter().map(Key::label).collect();
        debug!(keys = ?labels, "pressing keys");
        self.display
            .press_all(&keys)
            .with_context(|| format!("Failed to evaluate {:?}", line.trim()))
    }

    /// Press the keys of each input line, writing the display after each.
    ///
    /// Lines with bad input are reported to `errors` and skipped. Internal
    /// calculator failures end the session.
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, errors: &mut E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match self.press_line(&line) {
                Ok(()) => self.write_display(out)?,
                Err(err) if is_user_error(&err) => {
                    debug!(line = line.trim(), %err, "skipping line");
                    writeln!(errors, "error: {err}")?;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Write the display text, and the pending operation if requested.
    pub fn write_display<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.display.text())?;
        if self.show_pending {
            writeln!(out, "pending: {}", describe_pending(self.display.pending()))?;
        }
        Ok(())
    }
}

fn is_user_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<CalcError>().is_some_and(|err| !err.is_assertion())
}

fn describe_pending(pending: Option<&PendingOperation>) -> String {
    match pending {
        Some(PendingOperation { left, operator }) => {
            format!("{} {}", format_value(*left), operator.symbol())
        }
        None => "none".to_string(),
    }
}
