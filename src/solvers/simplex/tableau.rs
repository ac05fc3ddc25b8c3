//! The dense tableau and the row operations the simplex method is made of.

use std::fmt;

use ndarray::prelude::*;

use crate::float::Float;
use crate::linear_program::Problem;

/// Dense simplex tableau of a linear program in standard form.
///
/// For a problem with `n` variables and `m` constraints the matrix has shape
/// `(m + 1) x (n + m + 1)` and starts out as
/// ```text
/// [ A | I | b ]    one row per constraint, slack columns from `n` on
/// [ c | 0 | 0 ]    objective row
/// ```
/// Columns `0..n` belong to the decision variables, columns `n..n + m` to the
/// slack variables and the last column holds the right-hand side. `basis[i]`
/// names the column that is basic in constraint row `i`; every basic column is
/// a unit vector, and [`pivot`](Tableau::pivot) restores that property after
/// swapping a column into the basis.
pub struct Tableau<F> {
    matrix: Array2<F>,
    basis: Vec<usize>,
    num_variables: usize,
    num_constraints: usize,
}

impl<F: Float> Tableau<F> {
    /// Lay out `[A | I | b]` with the profit coefficients in the bottom row
    /// and every slack variable basic.
    pub fn new(problem: &Problem<F>) -> Self {
        let n = problem.num_variables();
        let m = problem.num_constraints();
        let mut matrix = Array2::zeros((m + 1, n + m + 1));
        matrix.slice_mut(s![..m, ..n]).assign(problem.A());
        matrix.slice_mut(s![..m, n..n + m]).assign(&Array2::eye(m));
        matrix.slice_mut(s![..m, n + m]).assign(problem.b());
        matrix.slice_mut(s![m, ..n]).assign(problem.c());
        Tableau {
            matrix,
            basis: (n..n + m).collect(),
            num_variables: n,
            num_constraints: m,
        }
    }

    /// The tableau is optimal once no objective-row entry exceeds `tol`.
    pub fn is_optimal(&self, tol: F) -> bool {
        self.objective_row().iter().all(|&value| value <= tol)
    }

    /// Column of the variable entering the basis: among the objective-row
    /// entries above `tol`, the one with the smallest value, ties going to
    /// the lowest column index. `None` once no entry is positive.
    pub fn entering_column(&self, tol: F) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (column, &value) in self.objective_row().iter().enumerate() {
            if value <= tol {
                continue;
            }
            match best {
                Some((_, incumbent)) if incumbent <= value => {}
                _ => best = Some((column, value)),
            }
        }
        best.map(|(column, _)| column)
    }

    /// Row whose basic variable leaves the basis when `entering` comes in,
    /// by the minimum ratio test over rows with a coefficient above `tol`.
    /// Ties go to the row holding the basic variable with the lowest index.
    /// `None` means no coefficient in the column is positive, so the
    /// objective is unbounded along the entering direction.
    pub fn leaving_row(&self, entering: usize, tol: F) -> Option<usize> {
        let rhs = self.rhs_column();
        let mut best: Option<(usize, F)> = None;
        for row in 0..self.num_constraints {
            let coefficient = self.matrix[[row, entering]];
            if coefficient <= tol {
                continue;
            }
            let ratio = self.matrix[[row, rhs]] / coefficient;
            let replace = match best {
                None => true,
                Some((incumbent_row, incumbent)) => {
                    ratio < incumbent
                        || (ratio == incumbent && self.basis[row] < self.basis[incumbent_row])
                }
            };
            if replace {
                best = Some((row, ratio));
            }
        }
        best.map(|(row, _)| row)
    }

    /// Pivot on `(row, column)`: scale the pivot row so the pivot value
    /// becomes one, eliminate the pivot column from every other row, and mark
    /// `column` as basic in `row`.
    pub fn pivot(&mut self, row: usize, column: usize) {
        assert!(row < self.num_constraints, "pivot row out of bounds");
        assert!(column < self.rhs_column(), "pivot column out of bounds");

        let value = self.matrix[[row, column]];
        let mut normalized = self.matrix.row_mut(row);
        normalized /= value;
        let pivot_row = self.matrix.row(row).into_owned();

        for other in 0..=self.num_constraints {
            if other == row {
                continue;
            }
            let factor = self.matrix[[other, column]];
            if factor != F::zero() {
                self.matrix.row_mut(other).scaled_add(-factor, &pivot_row);
            }
        }
        self.basis[row] = column;
    }

    /// Values of the basic decision variables, ascending by variable index.
    /// Variables outside the basis are zero and not listed.
    pub fn primal_solution(&self) -> Vec<(usize, F)> {
        let rhs = self.rhs_column();
        let mut assignment: Vec<(usize, F)> = self
            .basis
            .iter()
            .enumerate()
            .filter(|&(_, &variable)| variable < self.num_variables)
            .map(|(row, &variable)| (variable, self.matrix[[row, rhs]]))
            .collect();
        assignment.sort_unstable_by_key(|&(variable, _)| variable);
        assignment
    }

    /// Objective value of the current basic solution. The bookkeeping in the
    /// objective row accumulates the negated value, so the sign is flipped
    /// back here.
    pub fn objective_value(&self) -> F {
        -self.matrix[[self.num_constraints, self.rhs_column()]]
    }

    /// Number of decision variables.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Number of constraint rows.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    /// The full matrix, objective row included.
    pub fn matrix(&self) -> &Array2<F> {
        &self.matrix
    }

    /// Column basic in each constraint row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    fn objective_row(&self) -> ArrayView1<'_, F> {
        self.matrix.slice(s![self.num_constraints, ..self.rhs_column()])
    }

    fn rhs_column(&self) -> usize {
        self.num_variables + self.num_constraints
    }
}

impl<F: Float> fmt::Display for Tableau<F> {
    /// Aligned dump of the matrix, one line per row, objective row last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix.rows() {
            for (column, value) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>10.4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
