//! Arithmetic operators and the expression evaluator.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use bitflags::bitflags;

/// A binary arithmetic operator carried by an operator token.
///
/// # Examples
///
/// ```
/// use dicehole_core::Operator;
///
/// let op: Operator = "*".parse()?;
/// assert_eq!(op, Operator::Mul);
/// assert_eq!(op.apply(5, 2)?, 10);
/// assert_eq!(op.to_string(), "*");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
}

impl Operator {
    /// All operators, in the order the solver tries them.
    pub const ALL: [Self; 3] = [Self::Add, Self::Sub, Self::Mul];

    /// Returns the ASCII symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        }
    }

    /// Returns the single-operator set containing this operator.
    #[must_use]
    pub const fn flag(self) -> OperatorSet {
        match self {
            Self::Add => OperatorSet::ADD,
            Self::Sub => OperatorSet::SUB,
            Self::Mul => OperatorSet::MUL,
        }
    }

    /// Computes `lhs <op> rhs`.
    ///
    /// Arithmetic is performed on `i64` and checked.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the result does not fit in `i64`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, ArithmeticError> {
        let value = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
        };
        value.ok_or(ArithmeticError::Overflow {
            operator: self,
            lhs,
            rhs,
        })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.symbol(), f)
    }
}

impl FromStr for Operator {
    type Err = InvalidOperator;

    /// Parses an operator symbol.
    ///
    /// The typographic minus (`−`) and multiplication sign (`×`) are accepted
    /// as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Sub),
            "*" | "×" => Ok(Self::Mul),
            other => Err(InvalidOperator {
                symbol: other.to_owned(),
            }),
        }
    }
}

bitflags! {
    /// A set of operators available in a puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicehole_core::{Operator, OperatorSet};
    ///
    /// let set = OperatorSet::from_symbols(["*", "+"])?;
    /// assert!(set.contains(OperatorSet::ADD | OperatorSet::MUL));
    ///
    /// // iteration always follows declaration order
    /// let ops: Vec<_> = set.operators().collect();
    /// assert_eq!(ops, [Operator::Add, Operator::Mul]);
    /// # Ok::<(), dicehole_core::InvalidOperator>(())
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OperatorSet: u8 {
        /// Addition.
        const ADD = 1 << 0;
        /// Subtraction.
        const SUB = 1 << 1;
        /// Multiplication.
        const MUL = 1 << 2;
    }
}

impl OperatorSet {
    /// The full operator set `{+, -, *}`.
    pub const ALL: Self = Self::all();

    /// Builds a set from operator symbols.
    ///
    /// Duplicate symbols are allowed and collapse into one member.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperator`] for the first symbol that is not an operator.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self, InvalidOperator>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        symbols.into_iter().try_fold(Self::empty(), |set, symbol| {
            let op = symbol.as_ref().parse::<Operator>()?;
            Ok(set | op.flag())
        })
    }

    /// Returns `true` if `op` is a member of this set.
    #[must_use]
    pub const fn contains_operator(self, op: Operator) -> bool {
        self.contains(op.flag())
    }

    /// Iterates over the member operators in [`Operator::ALL`] order.
    pub fn operators(self) -> impl Iterator<Item = Operator> + Clone {
        Operator::ALL
            .into_iter()
            .filter(move |op| self.contains_operator(*op))
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<T: IntoIterator<Item = Operator>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, op| set | op.flag())
    }
}

/// Error returned when a symbol does not name an operator.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid operator: {symbol:?}")]
pub struct InvalidOperator {
    /// The rejected symbol.
    pub symbol: String,
}

/// Error returned when an arithmetic operation cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArithmeticError {
    /// The result does not fit in `i64`.
    #[display("{lhs} {operator} {rhs} overflows a 64-bit integer")]
    Overflow {
        /// The operator being applied.
        operator: Operator,
        /// The left operand.
        lhs: i64,
        /// The right operand.
        rhs: i64,
    },
}

/// Error returned by [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EvaluateError {
    /// The operator symbol is not recognized.
    #[display("{_0}")]
    InvalidOperator(InvalidOperator),
    /// The arithmetic overflowed.
    #[display("{_0}")]
    Arithmetic(ArithmeticError),
}

/// Evaluates `lhs <symbol> rhs`.
///
/// # Errors
///
/// Returns [`EvaluateError::InvalidOperator`] if `symbol` is not one of `+`, `-`,
/// `*`, and [`EvaluateError::Arithmetic`] if the result overflows `i64`.
///
/// # Examples
///
/// ```
/// use dicehole_core::{EvaluateError, evaluate};
///
/// assert_eq!(evaluate("+", 3, 5)?, 8);
/// assert!(matches!(
///     evaluate("/", 6, 3),
///     Err(EvaluateError::InvalidOperator(_))
/// ));
/// # Ok::<(), EvaluateError>(())
/// ```
pub fn evaluate(symbol: &str, lhs: i64, rhs: i64) -> Result<i64, EvaluateError> {
    let op = symbol.parse::<Operator>()?;
    Ok(op.apply(lhs, rhs)?)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for op in Operator::ALL {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
        assert_eq!("−".parse::<Operator>(), Ok(Operator::Sub));
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!(" + ".parse::<Operator>(), Ok(Operator::Add));
    }

    #[test]
    fn test_unknown_symbols_are_rejected() {
        for symbol in ["/", "%", "", "++", "1"] {
            let err = symbol.parse::<Operator>().unwrap_err();
            assert_eq!(err.symbol, symbol);
        }
        assert!(matches!(
            evaluate("/", 6, 3),
            Err(EvaluateError::InvalidOperator(InvalidOperator { symbol })) if symbol == "/"
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            Operator::Add.apply(i64::MAX, 1),
            Err(ArithmeticError::Overflow {
                operator: Operator::Add,
                lhs: i64::MAX,
                rhs: 1,
            })
        );
        assert!(Operator::Sub.apply(i64::MIN, 1).is_err());
        assert!(Operator::Mul.apply(i64::MAX, 2).is_err());
        assert!(matches!(
            evaluate("*", i64::MIN, -1),
            Err(EvaluateError::Arithmetic(_))
        ));
    }

    #[test]
    fn test_operator_set() {
        assert_eq!(OperatorSet::ALL, OperatorSet::ADD | OperatorSet::SUB | OperatorSet::MUL);
        assert!(OperatorSet::empty().operators().next().is_none());

        let set = OperatorSet::from_symbols(["-", "+", "-"]).unwrap();
        assert_eq!(set.operators().collect::<Vec<_>>(), [Operator::Add, Operator::Sub]);
        assert!(!set.contains_operator(Operator::Mul));

        assert_eq!(
            OperatorSet::from_symbols(["+", "/"]),
            Err(InvalidOperator {
                symbol: "/".to_owned()
            })
        );
        assert_eq!(
            [Operator::Mul, Operator::Add].into_iter().collect::<OperatorSet>(),
            OperatorSet::ADD | OperatorSet::MUL
        );
    }

    proptest! {
        #[test]
        fn evaluate_matches_native_arithmetic(a in -1_000_000_i64..1_000_000, b in -1_000_000_i64..1_000_000) {
            prop_assert_eq!(evaluate("+", a, b), Ok(a + b));
            prop_assert_eq!(evaluate("-", a, b), Ok(a - b));
            prop_assert_eq!(evaluate("*", a, b), Ok(a * b));
        }

        #[test]
        fn apply_never_panics(a in any::<i64>(), b in any::<i64>()) {
            for op in Operator::ALL {
                let _ = op.apply(a, b);
            }
        }
    }
}
