//! The display adapter between keypad presses and the calculator core.

use super::Key;
use crate::calculator::{CalcError, Calculator, PendingOperation};
use tracing::{debug, error};

/// Text shown before anything is typed.
const INITIAL_TEXT: &str = "0";

/// The calculator display and the core it forwards function keys to.
///
/// Digits and decimal points only edit the text. A function key reads the
/// text back as a number, hands it to the core along with the key's symbol,
/// and shows the result when the core produces one.
#[derive(Clone, Debug)]
pub struct Display {
    text: String,
    finished_typing: bool,
    calculator: Calculator,
}

impl Default for Display {
    fn default() -> Self {
        Self::new(Calculator::new())
    }
}

impl Display {
    pub fn new(calculator: Calculator) -> Self {
        Self {
            text: INITIAL_TEXT.to_string(),
            finished_typing: true,
            calculator,
        }
    }

    /// The text currently on the display.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The pending operation held by the core.
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.calculator.pending()
    }

    /// Read the display text as a number.
    pub fn value(&self) -> Result<f64, CalcError> {
        self.text
            .parse::<f64>()
            .map_err(|_| CalcError::UnparseableDisplay {
                text: self.text.clone(),
            })
    }

    /// Press any key.
    pub fn press(&mut self, key: &Key) -> Result<(), CalcError> {
        match key {
            Key::Digit(digit) => {
                self.press_digit(*digit);
                Ok(())
            }
            Key::Point => {
                self.press_point();
                Ok(())
            }
            Key::Function(symbol) => self.press_function(symbol),
        }
    }

    /// Press every key in order, stopping at the first failure.
    pub fn press_all<'a>(
        &mut self,
        keys: impl IntoIterator<Item = &'a Key>,
    ) -> Result<(), CalcError> {
        keys.into_iter().try_for_each(|key| self.press(key))
    }

    /// Type a digit. The first digit after a function key starts a new value.
    pub fn press_digit(&mut self, digit: char) {
        if self.finished_typing {
            self.text = digit.to_string();
            self.finished_typing = false;
        } else {
            self.text.push(digit);
        }
    }

    /// Type a decimal point. Ignored if the value already has one.
    pub fn press_point(&mut self) {
        if self.finished_typing {
            self.text = "0.".to_string();
            self.finished_typing = false;
        } else if self.text.contains('.') {
            debug!(text = %self.text, "ignoring second decimal point");
        } else {
            self.text.push('.');
        }
    }

    /// Press a function key and show the core's result, if any.
    pub fn press_function(&mut self, symbol: &str) -> Result<(), CalcError> {
        self.finished_typing = true;

        let current = self
            .value()
            .inspect_err(|err| error!(%err, "display out of sync"))?;
        let submitted = self.calculator.submit_value(current);
        let (next, result) = submitted
            .calculate(symbol)
            .inspect_err(|err| error!(%err, symbol, "pending operator has no match"))?;
        self.calculator = next;

        debug!(symbol, current, ?result, "function key");
        if let Some(value) = result {
            self.text = format_value(value);
        }
        Ok(())
    }
}

/// Render a result with the default `f64` formatting: `8`, `0.5`, `inf`, `NaN`.
pub fn format_value(value: f64) -> String {
    value.to_string()
}
