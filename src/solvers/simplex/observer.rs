//! Hooks for following a solve from the outside.

use crate::float::Float;

use super::tableau::Tableau;

/// Snapshot handed to a [`PivotObserver`] after each completed pivot.
pub struct PivotEvent<'a, F> {
    /// 1-based pivot counter.
    pub iteration: usize,
    /// Column that entered the basis.
    pub entering: usize,
    /// Constraint row whose basic variable left the basis.
    pub leaving: usize,
    /// Tableau state after the pivot.
    pub tableau: &'a Tableau<F>,
}

/// Callback surface for watching the pivot sequence.
///
/// The solver performs no I/O of its own; anything that wants to trace the
/// search implements this trait and receives read-only snapshots. Observers
/// cannot influence which pivots are taken.
pub trait PivotObserver<F> {
    /// Called once with the freshly constructed tableau, before any pivot.
    fn on_start(&mut self, _tableau: &Tableau<F>) {}

    /// Called after every completed pivot.
    fn on_pivot(&mut self, event: &PivotEvent<'_, F>);
}

/// The silent observer.
impl<F> PivotObserver<F> for () {
    fn on_pivot(&mut self, _event: &PivotEvent<'_, F>) {}
}

/// Observer that prints every tableau to stdout, for interactive use.
pub struct TableauPrinter;

impl<F: Float> PivotObserver<F> for TableauPrinter {
    fn on_start(&mut self, tableau: &Tableau<F>) {
        println!("initial tableau:");
        println!("{tableau}");
    }

    fn on_pivot(&mut self, event: &PivotEvent<'_, F>) {
        println!(
            "iteration {}: column {} entered the basis, row {} left",
            event.iteration, event.entering, event.leaving
        );
        println!("{}", event.tableau);
    }
}
