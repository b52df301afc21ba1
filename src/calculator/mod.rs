//! Calculator core.
//!
//! This module provides:
//! - The pending-operation evaluation core
//! - The error type shared with the display adapter
//! - Copying a result to the clipboard

mod clipboard;
mod error;
mod logic;

pub use clipboard::copy_to_clipboard;
pub use error::CalcError;
pub use logic::{ALL_CLEAR, Calculator, EQUALS, NEGATE, PERCENT, PendingOperation};
