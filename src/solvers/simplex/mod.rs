//! The primal simplex method on a dense tableau, for linear programs in
//! standard form.
//!
//! The solver walks from vertex to vertex of the feasible region by pivoting
//! on a tableau that carries the constraint rows, one slack variable per
//! constraint and the objective row, as described in \[1\]. Entering columns
//! are picked by the smallest positive objective entry with ties broken by
//! index, a Bland-style safeguard against cycling on degenerate problems.
//!
//! Because the initial basis is made of the slack variables, the bound vector
//! must be nonnegative. Problems that need a phase-one feasibility search are
//! rejected up front.
//!
//! \[1\] Cormen, Leiserson, Rivest, Stein. "Introduction to Algorithms",
//!        chapter 29: Linear Programming.

mod observer;
mod tableau;

pub use observer::{PivotEvent, PivotObserver, TableauPrinter};
pub use tableau::Tableau;

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::solvers::Solver;

use super::{OptimizeResult, Status};

/// Builder struct to customize the [`Simplex`] solver.
///
/// After constructing the default solver with [`Simplex::custom`], use the
/// other methods to update specific settings, and finally call
/// [`build`](SimplexBuilder::build) to validate the customized settings and
/// create the solver.
pub struct SimplexBuilder<F> {
    tol: F,
    verbose: bool,
    max_iter: usize,
}

impl<F: Float> SimplexBuilder<F> {
    pub(crate) fn new() -> SimplexBuilder<F> {
        SimplexBuilder {
            tol: F::cast(1e-9),
            verbose: false,
            max_iter: 1000,
        }
    }

    /// Set the comparison tolerance. Entries whose magnitude is at most `tol`
    /// are treated as zero in the optimality test, the entering rule and the
    /// ratio test. Should be a small positive value.
    pub fn tol(mut self, tol: F) -> Self {
        self.tol = tol;
        self
    }

    /// Set to true to print every tableau to stdout as the solve progresses.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Maximum number of pivots before the solver gives up and reports
    /// [`Status::IterationLimit`].
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Validate the settings and create the solver.
    /// Returns an `InvalidParameter` error if one of the constraints on the settings is violated.
    pub fn build(self) -> Result<Simplex<F>, LinearProgramError> {
        if self.tol <= F::zero() {
            return Err(LinearProgramError::InvalidParameter(
                "The tolerance must be a positive value.",
            ));
        }
        Ok(Simplex {
            tol: self.tol,
            verbose: self.verbose,
            max_iter: self.max_iter,
        })
    }
}

/// Simplex solver for linear programs in standard form.
///
/// To get started quickly, use the [`default`](Simplex::default) method to
/// initialize the solver with default parameters. See [`custom`](Simplex::custom)
/// for customization options through the builder pattern.
#[derive(PartialEq, Eq, Debug)]
pub struct Simplex<F> {
    tol: F,
    verbose: bool,
    max_iter: usize,
}

impl<F: Float> Default for Simplex<F> {
    /// The simplex solver with default configuration.
    fn default() -> Self {
        SimplexBuilder::new().build().unwrap()
    }
}

impl<F: Float> Solver<F> for Simplex<F> {
    fn solve(&self, problem: &Problem<F>) -> Result<OptimizeResult<F>, LinearProgramError> {
        if self.verbose {
            self.solve_with_observer(problem, &mut TableauPrinter)
        } else {
            self.solve_with_observer(problem, &mut ())
        }
    }
}

impl<F: Float> Simplex<F> {
    /// Construct a new simplex solver, to be customized through the builder pattern.
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use ndarray::array;
    /// use simplex_lp::prelude::*;
    ///
    /// let c = array![3f64, 5.];
    /// let A = array![[1., 0.], [0., 2.], [3., 2.]];
    /// let b = array![4., 12., 18.];
    ///
    /// let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();
    /// let solver = Simplex::custom().max_iter(100).build().unwrap();
    /// let res = solver.solve(&problem).unwrap();
    ///
    /// assert_eq!(res.status(), Status::Optimal);
    /// assert_abs_diff_eq!(*res.objective().unwrap(), 36., epsilon = 1e-9);
    /// ```
    pub fn custom() -> SimplexBuilder<F> {
        SimplexBuilder::new()
    }

    /// Solve `problem`, reporting every pivot to `observer`.
    ///
    /// This is the loop behind [`solve`](Solver::solve); call it directly to
    /// attach a custom [`PivotObserver`].
    pub fn solve_with_observer<O: PivotObserver<F>>(
        &self,
        problem: &Problem<F>,
        observer: &mut O,
    ) -> Result<OptimizeResult<F>, LinearProgramError> {
        if let Some(row) = problem.b().iter().position(|&bound| bound < -self.tol) {
            return Err(LinearProgramError::NegativeRhs { row });
        }

        let mut tableau = Tableau::new(problem);
        observer.on_start(&tableau);

        let mut iterations = 0;
        let status = loop {
            if tableau.is_optimal(self.tol) {
                break Status::Optimal;
            }
            if iterations >= self.max_iter {
                break Status::IterationLimit;
            }
            let entering = match tableau.entering_column(self.tol) {
                Some(column) => column,
                None => break Status::Optimal,
            };
            let leaving = match tableau.leaving_row(entering, self.tol) {
                Some(row) => row,
                None => break Status::Unbounded,
            };
            tableau.pivot(leaving, entering);
            iterations += 1;
            observer.on_pivot(&PivotEvent {
                iteration: iterations,
                entering,
                leaving,
                tableau: &tableau,
            });
        };

        let (solution, objective) = match status {
            Status::Unbounded => (None, None),
            Status::Optimal | Status::IterationLimit => (
                Some(tableau.primal_solution()),
                Some(tableau.objective_value()),
            ),
        };
        Ok(OptimizeResult::new(
            tableau, status, solution, objective, iterations,
        ))
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn wyndor() -> Problem<f64> {
        let c = array![3., 5.];
        let A = array![[1., 0.], [0., 2.], [3., 2.]];
        let b = array![4., 12., 18.];
        Problem::maximize(&c).subject_to(&A, &b).build().unwrap()
    }

    fn three_products() -> Problem<f64> {
        let c = array![3., 1., 2.];
        let A = array![[1., 1., 3.], [2., 2., 5.], [4., 1., 2.]];
        let b = array![30., 24., 36.];
        Problem::maximize(&c).subject_to(&A, &b).build().unwrap()
    }

    #[test]
    fn default_builder_doesnt_panic() {
        let simplex = Simplex::<f64>::default();
        let simplex_long_way_round = Simplex::custom().build().unwrap();
        assert_eq!(simplex, simplex_long_way_round);
    }

    #[test]
    fn build_rejects_a_nonpositive_tolerance() {
        assert!(matches!(
            Simplex::<f64>::custom().tol(0.).build(),
            Err(LinearProgramError::InvalidParameter(_))
        ));
        assert!(matches!(
            Simplex::<f64>::custom().tol(-1e-9).build(),
            Err(LinearProgramError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_two_product_planning() {
        let res = Simplex::default().solve(&wyndor()).unwrap();

        assert_eq!(res.status(), Status::Optimal);
        assert_eq!(res.iterations(), 3);
        assert_abs_diff_eq!(*res.objective().unwrap(), 36., epsilon = 1e-9);
        let solution = res.solution().unwrap();
        assert_eq!(solution.len(), 2);
        assert_eq!(solution[0].0, 0);
        assert_abs_diff_eq!(solution[0].1, 2., epsilon = 1e-9);
        assert_eq!(solution[1].0, 1);
        assert_abs_diff_eq!(solution[1].1, 6., epsilon = 1e-9);
    }

    #[test]
    fn test_three_product_planning() {
        let res = Simplex::default().solve(&three_products()).unwrap();

        assert_eq!(res.status(), Status::Optimal);
        assert_eq!(res.iterations(), 2);
        assert_abs_diff_eq!(*res.objective().unwrap(), 28., epsilon = 1e-9);
        // The third product stays out of the basis, so only two entries.
        let solution = res.solution().unwrap();
        assert_eq!(solution.len(), 2);
        assert_eq!(solution[0].0, 0);
        assert_abs_diff_eq!(solution[0].1, 8., epsilon = 1e-9);
        assert_eq!(solution[1].0, 1);
        assert_abs_diff_eq!(solution[1].1, 4., epsilon = 1e-9);
    }

    #[test]
    fn unbounded_is_an_outcome_not_an_error() {
        let c = array![1., 1.];
        let A = array![[-1., 1.]];
        let b = array![1.];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        let res = Simplex::default().solve(&problem).unwrap();

        assert_eq!(res.status(), Status::Unbounded);
        assert_eq!(res.iterations(), 0);
        assert!(res.solution().is_none());
        assert!(res.objective().is_none());
        // The tableau is still handed back for inspection.
        assert_eq!(res.tableau().basis(), &[2]);
    }

    #[test]
    fn unbounded_can_surface_after_progress() {
        let c = array![1., 2.];
        let A = array![[1., -1.]];
        let b = array![1.];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        let res = Simplex::default().solve(&problem).unwrap();

        assert_eq!(res.status(), Status::Unbounded);
        assert_eq!(res.iterations(), 1);
        assert!(res.solution().is_none());
    }

    #[test]
    fn negative_bounds_are_rejected_before_any_pivot() {
        let c = array![1., 1.];
        let A = array![[1., 0.], [0., 1.]];
        let b = array![1., -2.];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        assert!(matches!(
            Simplex::default().solve(&problem),
            Err(LinearProgramError::NegativeRhs { row: 1 })
        ));
    }

    #[test]
    fn bounds_within_the_tolerance_are_accepted() {
        let c = array![1.];
        let A = array![[1.]];
        let b = array![-1e-12];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        let res = Simplex::default().solve(&problem).unwrap();

        assert_eq!(res.status(), Status::Optimal);
        assert_abs_diff_eq!(*res.objective().unwrap(), 0., epsilon = 1e-9);
    }

    #[test]
    fn zero_budget_freezes_the_initial_tableau() {
        let solver = Simplex::custom().max_iter(0).build().unwrap();
        let res = solver.solve(&wyndor()).unwrap();

        assert_eq!(res.status(), Status::IterationLimit);
        assert_eq!(res.iterations(), 0);
        // Best-effort extraction: only slacks are basic, nothing to report.
        assert!(res.solution().unwrap().is_empty());
        assert_abs_diff_eq!(*res.objective().unwrap(), 0., epsilon = 1e-9);
    }

    #[test]
    fn exhausted_budget_reports_the_progress_so_far() {
        let solver = Simplex::custom().max_iter(1).build().unwrap();
        let res = solver.solve(&wyndor()).unwrap();

        assert_eq!(res.status(), Status::IterationLimit);
        assert_eq!(res.iterations(), 1);
        assert_eq!(res.solution().unwrap(), [(0, 4.)]);
        assert_abs_diff_eq!(*res.objective().unwrap(), 12., epsilon = 1e-9);
    }

    #[test]
    fn degenerate_ties_still_terminate() {
        let c = array![1., 1.];
        let A = array![[1., 1.], [1., 1.]];
        let b = array![1., 1.];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        let res = Simplex::default().solve(&problem).unwrap();

        assert_eq!(res.status(), Status::Optimal);
        assert_eq!(res.iterations(), 1);
        assert_abs_diff_eq!(*res.objective().unwrap(), 1., epsilon = 1e-9);
        assert_eq!(res.solution().unwrap(), [(0, 1.)]);
    }

    #[test]
    fn a_flat_target_is_optimal_without_pivots() {
        let c = array![1e-12, 1e-12];
        let A = array![[1., 1.]];
        let b = array![1.];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        let res = Simplex::default().solve(&problem).unwrap();

        assert_eq!(res.status(), Status::Optimal);
        assert_eq!(res.iterations(), 0);
        assert!(res.solution().unwrap().is_empty());
    }

    #[test]
    fn the_tolerance_is_configurable() {
        let c = array![0.5, 0.25];
        let A = array![[1., 1.]];
        let b = array![1.];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        // With a tolerance above every profit entry the origin already passes
        // the optimality test.
        let solver = Simplex::custom().tol(1.).build().unwrap();
        let res = solver.solve(&problem).unwrap();

        assert_eq!(res.status(), Status::Optimal);
        assert_eq!(res.iterations(), 0);
    }

    struct RecordingObserver {
        started: usize,
        pivots: Vec<(usize, usize, usize)>,
    }

    impl PivotObserver<f64> for RecordingObserver {
        fn on_start(&mut self, _tableau: &Tableau<f64>) {
            self.started += 1;
        }

        fn on_pivot(&mut self, event: &PivotEvent<'_, f64>) {
            self.pivots
                .push((event.iteration, event.entering, event.leaving));
        }
    }

    #[test]
    fn observer_sees_every_pivot() {
        let mut observer = RecordingObserver {
            started: 0,
            pivots: Vec::new(),
        };
        let res = Simplex::default()
            .solve_with_observer(&wyndor(), &mut observer)
            .unwrap();

        assert_eq!(observer.started, 1);
        assert_eq!(observer.pivots.len(), res.iterations());
        assert_eq!(observer.pivots, [(1, 0, 0), (2, 1, 2), (3, 2, 1)]);
    }

    struct ObjectiveTrace(Vec<f64>);

    impl PivotObserver<f64> for ObjectiveTrace {
        fn on_start(&mut self, tableau: &Tableau<f64>) {
            self.0.push(tableau.objective_value());
        }

        fn on_pivot(&mut self, event: &PivotEvent<'_, f64>) {
            self.0.push(event.tableau.objective_value());
        }
    }

    #[test]
    fn the_objective_never_decreases() {
        let mut trace = ObjectiveTrace(Vec::new());
        Simplex::default()
            .solve_with_observer(&three_products(), &mut trace)
            .unwrap();

        assert!(trace.0.len() > 1);
        assert!(trace.0.windows(2).all(|pair| pair[0] <= pair[1] + 1e-9));
    }

    struct InvariantChecker;

    impl PivotObserver<f64> for InvariantChecker {
        fn on_pivot(&mut self, event: &PivotEvent<'_, f64>) {
            let tableau = event.tableau;
            for (row, &variable) in tableau.basis().iter().enumerate() {
                for (other, &value) in tableau.matrix().column(variable).iter().enumerate() {
                    let expected = if other == row { 1. } else { 0. };
                    assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
                }
            }
            let rhs = tableau.num_variables() + tableau.num_constraints();
            for row in 0..tableau.num_constraints() {
                assert!(tableau.matrix()[[row, rhs]] >= -1e-9);
            }
        }
    }

    #[test]
    fn basic_columns_stay_unit_vectors() {
        Simplex::default()
            .solve_with_observer(&wyndor(), &mut InvariantChecker)
            .unwrap();
        Simplex::default()
            .solve_with_observer(&three_products(), &mut InvariantChecker)
            .unwrap();
    }

    #[test]
    fn solves_in_single_precision() {
        let c = array![3f32, 5.];
        let A = array![[1f32, 0.], [0., 2.], [3., 2.]];
        let b = array![4f32, 12., 18.];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        let res = Simplex::<f32>::default().solve(&problem).unwrap();

        assert_eq!(res.status(), Status::Optimal);
        assert_abs_diff_eq!(*res.objective().unwrap(), 36f32, epsilon = 1e-4);
    }
}
