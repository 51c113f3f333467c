use std::time::Duration;

use crate::foundation::core::{RowId, Timestamp};

/// Display surface the feed renders into.
///
/// This is the narrow geometry + animation boundary: the scheduler only asks where rows are, how
/// tall they are, and to collapse or drop them. Positions share one vertical coordinate space with
/// [`Surface::viewport_bottom`].
pub trait Surface {
    /// Bottom edge of the viewport the feed must stay within.
    fn viewport_bottom(&self) -> f64;

    /// Append a row holding `markup` after every existing row.
    fn push_row(&mut self, markup: &str) -> RowId;

    /// Top offset of `row`, or `None` if the surface does not know it.
    fn row_top(&self, row: RowId) -> Option<f64>;

    /// Height of `row` including its margins, or `None` if the surface does not know it.
    fn row_outer_height(&self, row: RowId) -> Option<f64>;

    /// Start animating `row`'s top margin to `target` over `duration`.
    ///
    /// The completion must later be reported exactly once through
    /// [`Surface::poll_transitions`].
    fn animate_margin_top(&mut self, row: RowId, target: f64, duration: Duration);

    /// Remove `row` from the display.
    fn remove_row(&mut self, row: RowId);

    /// Rows whose transition completed at or before `now` and have not been reported yet.
    fn poll_transitions(&mut self, now: Timestamp) -> Vec<RowId>;
}
