//! The evaluation core.
//!
//! A [`Calculator`] holds at most one pending operation: the left operand and
//! operator of the most recent binary key. Every operation is pure and hands
//! back the next state together with the value to display, if any.

use super::CalcError;
use tracing::debug;

/// Symbol of the sign toggle key.
pub const NEGATE: &str = "+/-";
/// Symbol of the all-clear key.
pub const ALL_CLEAR: &str = "AC";
/// Symbol of the percent key.
pub const PERCENT: &str = "%";
/// Symbol of the equals key.
pub const EQUALS: &str = "=";

/// A binary operator stored while the right operand is being typed.
#[derive(Clone, Debug, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Any other symbol. It is stored like an operator but fails on `=`.
    Unrecognized(String),
}

impl Operator {
    /// Map a key symbol to an operator. Never fails: unknown symbols are kept.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "+" => Self::Add,
            "-" => Self::Subtract,
            "×" => Self::Multiply,
            "÷" => Self::Divide,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The key symbol this operator was created from.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Unrecognized(symbol) => symbol,
        }
    }

    /// Combine two operands. Division follows IEEE-754, so `x ÷ 0` is
    /// infinite or NaN.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide => Ok(left / right),
            Self::Unrecognized(symbol) => Err(CalcError::UnmatchedOperator {
                operator: symbol.clone(),
            }),
        }
    }
}

/// The left operand and operator awaiting a second operand.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingOperation {
    pub left: f64,
    pub operator: Operator,
}

/// What a function key asks the core to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Negate,
    AllClear,
    Percent,
    Equals,
    Defer(Operator),
}

impl Action {
    /// Exact, case-sensitive dispatch on a key symbol.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            NEGATE => Self::Negate,
            ALL_CLEAR => Self::AllClear,
            PERCENT => Self::Percent,
            EQUALS => Self::Equals,
            other => Self::Defer(Operator::from_symbol(other)),
        }
    }
}

/// Calculator state for one session.
///
/// `=` does not consume the pending operation, so pressing it again repeats
/// the last operator against whatever value is shown. `AC` leaves the
/// pending operation in place too unless [`Calculator::resetting_on_clear`]
/// was used.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculator {
    operand: Option<f64>,
    pending: Option<PendingOperation>,
    reset_pending_on_clear: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A calculator whose `AC` key also drops the pending operation.
    pub fn resetting_on_clear(reset: bool) -> Self {
        Self {
            reset_pending_on_clear: reset,
            ..Self::default()
        }
    }

    /// The pending operation, if a binary key was pressed.
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Remember `current` as the operand for [`Calculator::calculate`].
    pub fn submit_value(&self, current: f64) -> Self {
        Self {
            operand: Some(current),
            ..self.clone()
        }
    }

    /// Press `symbol` with the submitted operand.
    ///
    /// Without a submitted operand nothing happens and nothing is displayed.
    pub fn calculate(&self, symbol: &str) -> Result<(Self, Option<f64>), CalcError> {
        match self.operand {
            Some(current) => self.apply(symbol, current),
            None => Ok((self.clone(), None)),
        }
    }

    /// Press `symbol` while `current` is displayed.
    ///
    /// Returns the next state and the value to display. `None` means the
    /// display keeps its current text.
    pub fn apply(&self, symbol: &str, current: f64) -> Result<(Self, Option<f64>), CalcError> {
        match Action::from_symbol(symbol) {
            Action::Negate => Ok((self.clone(), Some(current * -1.0))),
            Action::Percent => Ok((self.clone(), Some(current * 0.01))),
            Action::AllClear => {
                let mut next = self.clone();
                if self.reset_pending_on_clear && next.pending.take().is_some() {
                    debug!("all clear dropped the pending operation");
                }
                Ok((next, Some(0.0)))
            }
            Action::Equals => {
                let result = self.evaluate_binary(current)?;
                Ok((self.clone(), result))
            }
            Action::Defer(operator) => {
                debug!(left = current, operator = operator.symbol(), "operation pending");
                let next = Self {
                    pending: Some(PendingOperation {
                        left: current,
                        operator,
                    }),
                    ..self.clone()
                };
                Ok((next, None))
            }
        }
    }

    /// Apply the pending operation with `right` as the second operand.
    ///
    /// The pending operation is left as it is.
    pub fn evaluate_binary(&self, right: f64) -> Result<Option<f64>, CalcError> {
        let Some(PendingOperation { left, operator }) = &self.pending else {
            return Ok(None);
        };
        operator.apply(*left, right).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &Calculator, symbol: &str, current: f64) -> (Calculator, Option<f64>) {
        calc.apply(symbol, current).unwrap()
    }

    fn binary(a: f64, op: &str, b: f64) -> Option<f64> {
        let calc = Calculator::new().submit_value(a);
        let (calc, shown) = calc.calculate(op).unwrap();
        assert_eq!(shown, None);
        let calc = calc.submit_value(b);
        calc.calculate("=").unwrap().1
    }

    #[test]
    fn test_negate() {
        for x in [0.0, 1.5, -7.0, 1e300] {
            assert_eq!(press(&Calculator::new(), "+/-", x).1, Some(-x));
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(press(&Calculator::new(), "%", 50.0).1, Some(0.5));
        assert_eq!(press(&Calculator::new(), "%", -3.0).1, Some(-3.0 * 0.01));
    }

    #[test]
    fn test_all_clear_shows_zero() {
        assert_eq!(press(&Calculator::new(), "AC", 123.4).1, Some(0.0));
    }

    #[test]
    fn test_binary_operators() {
        assert_eq!(binary(5.0, "+", 3.0), Some(8.0));
        assert_eq!(binary(5.0, "-", 3.0), Some(2.0));
        assert_eq!(binary(5.0, "×", 3.0), Some(15.0));
        assert_eq!(binary(6.0, "÷", 3.0), Some(2.0));
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!(binary(9.0, "÷", 0.0), Some(f64::INFINITY));
        assert_eq!(binary(-9.0, "÷", 0.0), Some(f64::NEG_INFINITY));
        assert!(binary(0.0, "÷", 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_equals_without_pending_shows_nothing() {
        let calc = Calculator::new();
        let (next, shown) = press(&calc, "=", 42.0);
        assert_eq!(shown, None);
        assert_eq!(next, calc);
    }

    #[test]
    fn test_calculate_without_operand_is_a_no_op() {
        let calc = Calculator::new();
        let (next, shown) = calc.calculate("+/-").unwrap();
        assert_eq!(shown, None);
        assert_eq!(next, calc);
    }

    #[test]
    fn test_binary_key_overwrites_pending() {
        let (calc, _) = press(&Calculator::new(), "+", 1.0);
        let (calc, _) = press(&calc, "×", 4.0);
        assert_eq!(
            calc.pending(),
            Some(&PendingOperation {
                left: 4.0,
                operator: Operator::Multiply,
            })
        );
        assert_eq!(press(&calc, "=", 2.0).1, Some(8.0));
    }

    #[test]
    fn test_equals_keeps_pending() {
        let (calc, _) = press(&Calculator::new(), "+", 5.0);
        let (calc, shown) = press(&calc, "=", 3.0);
        assert_eq!(shown, Some(8.0));
        // Repeating "=" reuses the stale left operand.
        let (calc, shown) = press(&calc, "=", 8.0);
        assert_eq!(shown, Some(13.0));
        assert!(calc.pending().is_some());
    }

    #[test]
    fn test_unary_keys_keep_pending() {
        let (calc, _) = press(&Calculator::new(), "-", 10.0);
        let before = calc.pending().cloned();
        for symbol in ["+/-", "%", "AC"] {
            let (next, _) = press(&calc, symbol, 3.0);
            assert_eq!(next.pending().cloned(), before);
        }
    }

    #[test]
    fn test_all_clear_can_reset_pending() {
        let calc = Calculator::resetting_on_clear(true);
        let (calc, _) = press(&calc, "+", 5.0);
        let (calc, shown) = press(&calc, "AC", 5.0);
        assert_eq!(shown, Some(0.0));
        assert!(calc.pending().is_none());
        assert_eq!(press(&calc, "=", 3.0).1, None);
    }

    #[test]
    fn test_unknown_symbol_is_deferred_then_fails() {
        let (calc, shown) = press(&Calculator::new(), "^", 2.0);
        assert_eq!(shown, None);
        assert_eq!(
            calc.pending().map(|p| &p.operator),
            Some(&Operator::Unrecognized("^".to_string()))
        );

        let err = calc.apply("=", 3.0).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnmatchedOperator {
                operator: "^".to_string()
            }
        );
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        let (calc, shown) = press(&Calculator::new(), "ac", 7.0);
        assert_eq!(shown, None);
        assert!(calc.pending().is_some());
    }

    #[test]
    fn test_operator_symbol_round_trips() {
        for symbol in ["+", "-", "×", "÷", "mod"] {
            assert_eq!(Operator::from_symbol(symbol).symbol(), symbol);
        }
    }
}
