//! Errors raised by the calculator core and the display adapter.

use thiserror::Error;

/// Failures of the calculator.
///
/// `UnknownKey` is bad user input and can be reported and skipped. The other
/// variants cannot be triggered through the keypad: they mark a programming
/// defect upstream, so callers propagate them instead of recovering.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// Typed text named a key that is not on the keypad.
    #[error("unknown key {key:?}")]
    UnknownKey { key: String },

    /// The display text could not be read back as a number.
    #[error("cannot convert display text {text:?} to a number")]
    UnparseableDisplay { text: String },

    /// `=` found a pending operator that has no arithmetic meaning.
    #[error("the pending operator {operator:?} does not have a match")]
    UnmatchedOperator { operator: String },
}

impl CalcError {
    /// Whether this error is an internal assertion rather than bad user input.
    pub fn is_assertion(&self) -> bool {
        match self {
            Self::UnknownKey { .. } => false,
            Self::UnparseableDisplay { .. } | Self::UnmatchedOperator { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = CalcError::UnparseableDisplay {
            text: "1..2".to_string(),
        };
        assert_eq!(err.to_string(), "cannot convert display text \"1..2\" to a number");

        let err = CalcError::UnmatchedOperator {
            operator: "^".to_string(),
        };
        assert!(err.to_string().contains("\"^\""));

        let err = CalcError::UnknownKey {
            key: "mod".to_string(),
        };
        assert_eq!(err.to_string(), "unknown key \"mod\"");
    }

    #[test]
    fn test_only_internal_failures_are_assertions() {
        assert!(
            !CalcError::UnknownKey {
                key: "^".to_string()
            }
            .is_assertion()
        );
        assert!(
            CalcError::UnparseableDisplay {
                text: String::new()
            }
            .is_assertion()
        );
        assert!(
            CalcError::UnmatchedOperator {
                operator: "?".to_string()
            }
            .is_assertion()
        );
    }
}
