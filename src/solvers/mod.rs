//! Solvers for linear programs.
pub mod simplex;

pub use simplex::Simplex;

use crate::{error::LinearProgramError, linear_program::Problem};
use simplex::Tableau;

/// Solver trait that any solver should implement to make experimentation with different solvers more easy.
pub trait Solver<F> {
    /// Solve a linear programming problem. Returns a [`LinearProgramError`] if the inputs or
    /// settings are rejected before the algorithm runs; outcomes of the algorithm itself are
    /// reported through the [`Status`] of the returned [`OptimizeResult`].
    fn solve(&self, problem: &Problem<F>) -> Result<OptimizeResult<F>, LinearProgramError>;
}

/// Terminal state of a solve attempt.
///
/// Walking into an unbounded direction or running out of pivots are ordinary
/// outcomes of the simplex method, not failures, so they are reported here
/// rather than through [`LinearProgramError`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    /// No objective-row entry can improve the objective any further; the
    /// extracted solution is optimal.
    Optimal,
    /// An entering column has no positive constraint coefficient, so the
    /// objective grows without limit along it. No solution is extracted.
    Unbounded,
    /// The pivot budget ran out before the optimality test passed. The
    /// extracted solution is the best basic solution visited so far, without
    /// an optimality guarantee.
    IterationLimit,
}

/// Outcome of a successful solve attempt.
pub struct OptimizeResult<F> {
    /// The tableau in its terminal state
    tableau: Tableau<F>,

    /// How the solve ended
    status: Status,

    /// Values of the basic decision variables, absent for unbounded problems
    solution: Option<Vec<(usize, F)>>,

    /// The objective function value, absent for unbounded problems
    objective: Option<F>,

    /// The number of pivots performed
    iterations: usize,
}

impl<F> OptimizeResult<F> {
    pub(crate) fn new(
        tableau: Tableau<F>,
        status: Status,
        solution: Option<Vec<(usize, F)>>,
        objective: Option<F>,
        iterations: usize,
    ) -> Self {
        Self {
            tableau,
            status,
            solution,
            objective,
            iterations,
        }
    }

    /// How the solve ended
    pub fn status(&self) -> Status {
        self.status
    }

    /// The number of pivots performed
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The objective function value, absent when the problem is unbounded
    pub fn objective(&self) -> Option<&F> {
        self.objective.as_ref()
    }

    /// Values of the basic decision variables in ascending variable order.
    /// Variables outside the basis are zero and not listed. Absent when the
    /// problem is unbounded.
    pub fn solution(&self) -> Option<&[(usize, F)]> {
        self.solution.as_deref()
    }

    /// The tableau in its terminal state, for inspection beyond the extracted
    /// values.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }
}
