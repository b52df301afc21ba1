//! Keypad front-end: key parsing and the display adapter.

mod display;
mod keys;

pub use display::{Display, format_value};
pub use keys::{Key, parse_keys};
