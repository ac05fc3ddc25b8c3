use thiserror::Error;

/// Failure modes of problem construction and solver configuration.
///
/// Outcomes of the algorithm itself, such as an unbounded objective or an
/// exhausted pivot budget, are not failures. They are reported through the
/// [`Status`](crate::solvers::Status) of an
/// [`OptimizeResult`](crate::solvers::OptimizeResult) instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinearProgramError {
    #[error("The problem is unconstrained, meaning the solution is the all-zeros vector if `c` is nonpositive, or unbounded otherwise.")]
    Unconstrained,
    #[error("The dimensions of your cost- and constraint arrays do not align.")]
    InvalidShape,
    #[error("The bound vector has a negative entry at row {row}, so the all-slack starting basis is infeasible. Rewrite the constraint so that `b` is nonnegative.")]
    NegativeRhs { row: usize },
    #[error("A parameter was set to an invalid value. {0}")]
    InvalidParameter(&'static str),
}
