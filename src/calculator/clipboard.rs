//! Copying a displayed result to the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::warn;

/// The text worth copying for `value`, or `None` for infinities and NaN.
pub fn clipboard_text(text: &str, value: f64) -> Option<&str> {
    value.is_finite().then_some(text)
}

/// Copy a result to the system clipboard.
///
/// Non-finite results are skipped with a warning. Returns whether anything
/// was copied.
pub fn copy_to_clipboard(text: &str, value: f64) -> Result<bool> {
    let Some(text) = clipboard_text(text, value) else {
        warn!(text, "not copying a non-finite result");
        return Ok(false);
    };

    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;
    Ok(true)
}
