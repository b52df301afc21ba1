//! Turning typed text into keypad presses.
//!
//! Lets a terminal user type `5 + 3 =` or `12.5*2=` instead of clicking
//! buttons. ASCII stand-ins are mapped onto the keypad's own symbols.

use crate::calculator::{ALL_CLEAR, CalcError, EQUALS, NEGATE, PERCENT};
use lazy_static::lazy_static;
use regex::Regex;

/// Spellings accepted for the sign toggle key, besides `+/-`.
const NEGATE_ALIASES: &[&str] = &["n", "neg"];

/// Spellings accepted for the all-clear key.
const ALL_CLEAR_ALIASES: &[&str] = &["c", "ac"];

/// Every function key on the keypad, after aliases are resolved.
const FUNCTION_KEYS: &[&str] = &["+", "-", "×", "÷", EQUALS, PERCENT, NEGATE, ALL_CLEAR];

lazy_static! {
    /// One keypad press: the sign toggle, a digit, a decimal point, a word,
    /// or any single other symbol.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"\+/-|[0-9]|\.|[a-zA-Z]+|[^\s0-9.a-zA-Z]"
    ).unwrap();
}

/// A single keypad button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// `0` through `9`.
    Digit(char),
    /// The decimal point.
    Point,
    /// Any function key, carrying the symbol the core dispatches on.
    Function(String),
}

impl Key {
    /// The label printed on the button.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Point => ".".to_string(),
            Self::Function(symbol) => symbol.clone(),
        }
    }
}

/// Split typed text into key presses. Whitespace only separates keys.
///
/// Fails with [`CalcError::UnknownKey`] on the first token that is not on
/// the keypad; no keys are returned in that case.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, CalcError> {
    KEY_TOKEN
        .find_iter(input)
        .map(|token| to_key(token.as_str()))
        .collect()
}

fn to_key(token: &str) -> Result<Key, CalcError> {
    if token == "." {
        return Ok(Key::Point);
    }

    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_ascii_digit()
    {
        return Ok(Key::Digit(c));
    }

    let symbol = canonical_symbol(token);
    if !FUNCTION_KEYS.contains(&symbol.as_str()) {
        return Err(CalcError::UnknownKey {
            key: token.to_string(),
        });
    }
    Ok(Key::Function(symbol))
}

/// Map ASCII stand-ins onto keypad symbols. Words are matched
/// case-insensitively; anything else is returned untouched.
fn canonical_symbol(token: &str) -> String {
    let lower = token.to_lowercase();

    let symbol = match token {
        "*" => "×",
        "/" => "÷",
        _ if lower == "x" => "×",
        _ if NEGATE_ALIASES.contains(&lower.as_str()) => NEGATE,
        _ if ALL_CLEAR_ALIASES.contains(&lower.as_str()) => ALL_CLEAR,
        other => other,
    };

    symbol.to_string()
}
