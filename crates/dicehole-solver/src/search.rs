use std::fmt::{self, Display};

use dicehole_core::{Operator, OperatorSet};

use crate::SolverError;

/// One candidate expression: `values[lhs] <operator> values[rhs]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    /// Index of the left operand.
    pub lhs: usize,
    /// Index of the right operand.
    pub rhs: usize,
    /// The operator applied.
    pub operator: Operator,
}

/// Iterates over every candidate expression for the given operators and values.
///
/// Operands are chosen by position, so equal die faces are tried separately.
/// Every ordered pair `(lhs, rhs)` with `lhs != rhs` is produced in index
/// order, and for each pair the operators follow [`OperatorSet::operators`].
///
/// # Examples
///
/// ```
/// use dicehole_core::OperatorSet;
/// use dicehole_solver::combinations;
///
/// // 3 values give 6 ordered pairs; 3 operators each
/// assert_eq!(combinations(OperatorSet::ALL, 3).count(), 18);
/// ```
pub fn combinations(operators: OperatorSet, len: usize) -> impl Iterator<Item = Combination> {
    (0..len).flat_map(move |lhs| {
        (0..len).filter(move |&rhs| rhs != lhs).flat_map(move |rhs| {
            operators
                .operators()
                .map(move |operator| Combination { lhs, rhs, operator })
        })
    })
}

/// The best expression found by [`find_best`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Which values and operator form the expression.
    pub combination: Combination,
    /// Value of the left operand.
    pub lhs_value: i64,
    /// Value of the right operand.
    pub rhs_value: i64,
    /// Result of the expression.
    pub result: i64,
    /// Absolute distance between the goal and the result.
    pub distance: u64,
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs_value, self.combination.operator, self.rhs_value, self.result
        )
    }
}

/// Finds an expression whose result is closest to `goal`.
///
/// The search is exhaustive over [`combinations`]. When several expressions
/// reach the same distance, the first one in enumeration order is returned.
///
/// # Errors
///
/// - [`SolverError::InsufficientOperands`] if `values` has fewer than 2 elements.
/// - [`SolverError::NoOperators`] if `operators` is empty.
/// - [`SolverError::Arithmetic`] if any combination overflows `i64`.
///
/// # Examples
///
/// ```
/// use dicehole_core::{Operator, OperatorSet};
/// use dicehole_solver::find_best;
///
/// let solution = find_best(OperatorSet::ALL, &[1, 1, 1], 15)?;
/// assert_eq!(solution.result, 2);
/// assert_eq!(solution.distance, 13);
/// assert_eq!(solution.combination.operator, Operator::Add);
/// # Ok::<(), dicehole_solver::SolverError>(())
/// ```
pub fn find_best(
    operators: OperatorSet,
    values: &[i64],
    goal: i64,
) -> Result<Solution, SolverError> {
    if values.len() < 2 {
        return Err(SolverError::InsufficientOperands {
            count: values.len(),
        });
    }
    if operators.is_empty() {
        return Err(SolverError::NoOperators);
    }

    let mut best: Option<Solution> = None;
    for combination in combinations(operators, values.len()) {
        let lhs_value = values[combination.lhs];
        let rhs_value = values[combination.rhs];
        let result = combination.operator.apply(lhs_value, rhs_value)?;
        let distance = goal.abs_diff(result);
        if best.is_none_or(|best| distance < best.distance) {
            best = Some(Solution {
                combination,
                lhs_value,
                rhs_value,
                result,
                distance,
            });
        }
    }

    // At least one pair and one operator exist after the checks above.
    best.ok_or(SolverError::NoOperators)
}

/// Returns the minimum achievable `|goal - result|`.
///
/// This is [`find_best`] without the witness.
///
/// # Errors
///
/// Same as [`find_best`].
pub fn best_distance(operators: OperatorSet, values: &[i64], goal: i64) -> Result<u64, SolverError> {
    find_best(operators, values, goal).map(|solution| solution.distance)
}
