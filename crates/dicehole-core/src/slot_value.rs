//! Contents of a hole.

use std::fmt::{self, Display};

use crate::Operator;

/// The symbolic value held by a hole.
///
/// Operand holes hold [`SlotValue::Number`] and operator holes hold
/// [`SlotValue::Operator`]; a mismatch is representable so that the game can
/// detect it instead of misreading the value.
///
/// # Examples
///
/// ```
/// use dicehole_core::{Operator, SlotValue};
///
/// assert_eq!(SlotValue::Number(5).to_string(), "5");
/// assert_eq!(SlotValue::Operator(Operator::Mul).to_string(), "*");
/// assert_eq!(SlotValue::Empty.to_string(), "");
/// assert_eq!(SlotValue::Number(5).as_number(), Some(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SlotValue {
    /// Nothing is in the hole.
    #[default]
    Empty,
    /// A die face.
    Number(i64),
    /// An operator token.
    Operator(Operator),
}

impl SlotValue {
    /// Returns the number if this is [`SlotValue::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the operator if this is [`SlotValue::Operator`].
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns a short name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Number(_) => "number",
            Self::Operator(_) => "operator",
        }
    }
}

impl Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(value) => Display::fmt(value, f),
            Self::Operator(op) => Display::fmt(op, f),
        }
    }
}

impl From<i64> for SlotValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for SlotValue {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(SlotValue::default().is_empty());
        assert_eq!(SlotValue::Empty.as_number(), None);
        assert_eq!(SlotValue::Empty.as_operator(), None);

        let number = SlotValue::from(-3);
        assert_eq!(number.as_number(), Some(-3));
        assert_eq!(number.as_operator(), None);
        assert_eq!(number.kind_name(), "number");

        let op = SlotValue::from(Operator::Sub);
        assert_eq!(op.as_operator(), Some(Operator::Sub));
        assert_eq!(op.as_number(), None);
        assert!(op.is_operator());
        assert_eq!(op.to_string(), "-");
    }
}
