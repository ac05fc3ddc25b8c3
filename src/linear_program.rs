#![allow(non_snake_case)]
//! Definition of a linear program in standard form.
//!
//! To get started, see the documentation of [`Problem`] on how to build a [`Problem`] through the builder pattern.
use crate::{error::LinearProgramError, float::Float};
use ndarray::prelude::*;

/// A linear program in standard form (a maximization under upper bounds).
///
/// Variables throughout this crate use the following naming convention:
/// ```text
/// max_x c ' x
/// st    A ' x <= b
///           x >= 0
/// ```
/// With `c` the profit vector or target function, and constraints given by matrix `A` and vector `b`.
///
/// Equality and lower-bound constraints are out of scope here; rewrite them as
/// upper bounds before construction. The bound vector `b` must be nonnegative
/// so that the origin is a feasible starting vertex, which the solver checks
/// before its first pivot.
///
/// To construct a problem, use [`ProblemBuilder::new`] or [`Problem::maximize`].
pub struct Problem<F> {
    A: Array2<F>,
    b: Array1<F>,
    c: Array1<F>,
}

impl<F: Float> Problem<F> {
    /// Build a problem in standard form using the builder pattern.
    ///
    /// Specify the profit vector `c` for which we will maximize `c'x`.
    /// Returns a [`ProblemBuilder`] object that is completed with the
    /// constraints through [`subject_to`](ProblemBuilder::subject_to).
    pub fn maximize(c: &Array1<F>) -> ProblemBuilder<F> {
        ProblemBuilder::new(c)
    }

    /// Return the constraint matrix
    pub fn A(&self) -> &Array2<F> {
        &self.A
    }

    /// Return the constraint bound vector
    pub fn b(&self) -> &Array1<F> {
        &self.b
    }

    /// Return the profit vector
    pub fn c(&self) -> &Array1<F> {
        &self.c
    }

    /// Number of decision variables.
    pub fn num_variables(&self) -> usize {
        self.c.len()
    }

    /// Number of constraint rows.
    pub fn num_constraints(&self) -> usize {
        self.b.len()
    }
}

/// Construct a problem in standard form from a profit vector and upper-bound constraints.
pub struct ProblemBuilder<'a, F> {
    c: &'a Array1<F>,
    constraints: Option<(&'a Array2<F>, &'a Array1<F>)>,
}

impl<'a, F: Float> ProblemBuilder<'a, F> {
    /// Start building a problem. Takes the profit vector `c` for which the goal is to maximize `c'x`.
    pub fn new(c: &'a Array1<F>) -> ProblemBuilder<'a, F> {
        ProblemBuilder {
            c,
            constraints: None,
        }
    }

    /// Set the upper bounds of the problem, such that `A ' x <= b`.
    /// To prevent numerical problems, it is advisable to remove redundant constraints and to scale all constraints to
    /// roughly the same order of magnitude.
    pub fn subject_to(mut self, A: &'a Array2<F>, b: &'a Array1<F>) -> Self {
        self.constraints = Some((A, b));
        self
    }

    /// Construct a linear program from the provided inputs, validating the input values.
    ///
    /// Returns an error if any of the dimensions of `c`, `A` and `b` do not conform to the
    /// definition above, or if there are no constraints.
    pub fn build(self) -> Result<Problem<F>, LinearProgramError> {
        let (A, b) = self.constraints.ok_or(LinearProgramError::Unconstrained)?;
        let (num_constraints, num_variables) = A.dim();
        if num_constraints == 0 {
            return Err(LinearProgramError::Unconstrained);
        }
        if self.c.is_empty() || num_variables != self.c.len() || num_constraints != b.len() {
            return Err(LinearProgramError::InvalidShape);
        }
        Ok(Problem {
            A: A.to_owned(),
            b: b.to_owned(),
            c: self.c.to_owned(),
        })
    }
}
