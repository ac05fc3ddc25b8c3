//! A pure-Rust primal simplex solver for linear programs in standard form.
//!
//! # Linear programs
//!
//! A linear program is a mathematical optimization problem defined as:
//!
//! ```text
//!    max_x c'x
//!    st A'x <= b
//!          x >= 0
//! ```
//!
//! with all entries of `b` nonnegative, so that the origin is a feasible
//! starting vertex. Every constraint row is given a slack variable and the
//! resulting tableau is pivoted until no objective-row entry can improve the
//! objective any further. A solve can also end by revealing the problem as
//! unbounded or by exhausting its pivot budget.
//!
//! # Example
//! ```
//! use approx::assert_abs_diff_eq;
//! use ndarray::array;
//!
//! use simplex_lp::solvers::{Simplex, Solver, Status};
//! use simplex_lp::Problem;
//!
//! let c = array![3f64, 5.];
//! let A = array![[1., 0.], [0., 2.], [3., 2.]];
//! let b = array![4., 12., 18.];
//!
//! let problem = Problem::maximize(&c)
//!     // Without a `subject_to` call the problem
//!     // returns as unconstrained.
//!     .subject_to(&A, &b)
//!     .build()
//!     .unwrap();
//!
//! // These are the default values you can overwrite.
//! // You may omit any option for which the default is good enough for you.
//! let solver = Simplex::custom()
//!     .tol(1e-9)
//!     .verbose(false)
//!     .max_iter(1000)
//!     .build()
//!     .unwrap();
//!
//! let res = solver.solve(&problem).unwrap();
//!
//! assert_eq!(res.status(), Status::Optimal);
//! assert_abs_diff_eq!(*res.objective().unwrap(), 36., epsilon = 1e-9);
//! ```

pub mod error;
pub mod float;
pub mod linear_program;
pub mod prelude;
pub mod solvers;

pub use linear_program::{Problem, ProblemBuilder};
