#[doc(no_inline)]
pub use crate::error::LinearProgramError;
#[doc(no_inline)]
pub use crate::linear_program::Problem;
#[doc(no_inline)]
pub use crate::solvers::simplex::PivotEvent;
#[doc(no_inline)]
pub use crate::solvers::simplex::PivotObserver;
#[doc(no_inline)]
pub use crate::solvers::simplex::Simplex;
#[doc(no_inline)]
pub use crate::solvers::simplex::Tableau;
#[doc(no_inline)]
pub use crate::solvers::simplex::TableauPrinter;
#[doc(no_inline)]
pub use crate::solvers::OptimizeResult;
#[doc(no_inline)]
pub use crate::solvers::Solver;
#[doc(no_inline)]
pub use crate::solvers::Status;
