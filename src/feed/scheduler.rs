use std::collections::VecDeque;
use std::time::Duration;

use crate::{
    config::settings::FeedConfig,
    feed::surface::Surface,
    foundation::core::{RowId, Timestamp},
    foundation::error::{RevealError, RevealResult},
    store::property::{Fact, FactSource},
};

/// Scheduler lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FeedState {
    /// Nothing in flight; appends and evictions both run synchronously.
    Idle,
    /// The oldest row is collapsing.
    Evicting,
}

/// A row currently shown in the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactRow {
    /// Surface handle.
    pub id: RowId,
    /// The fact rendered into the row.
    pub fact: Fact,
}

/// Whether a row whose top edge is at `row_top` lies past the viewport.
pub fn overflows(row_top: f64, viewport_bottom: f64) -> bool {
    row_top > viewport_bottom
}

/// Throttle test for [`FeedScheduler::tick`]: strictly more than `interval` since the last
/// update, and no eviction in flight.
pub fn should_update(now: Timestamp, last: Timestamp, interval: Duration, evicting: bool) -> bool {
    now.saturating_since(last) > interval && !evicting
}

/// Bounded-height, append-only fact feed.
///
/// New rows go at the bottom; when one lands past the viewport the oldest row collapses over
/// [`FeedConfig::eviction_ms`] and is removed once the surface reports the transition finished.
/// Only one eviction runs at a time, but appends are accepted while it runs.
#[derive(Clone, Debug)]
pub struct FeedScheduler {
    cfg: FeedConfig,
    rows: VecDeque<FactRow>,
    viewport_bottom: f64,
    last_update_at: Timestamp,
    evicting: Option<RowId>,
    state: FeedState,
}

impl FeedScheduler {
    /// Create an empty scheduler.
    pub fn new(cfg: FeedConfig) -> Self {
        Self {
            cfg,
            rows: VecDeque::new(),
            viewport_bottom: 0.0,
            last_update_at: Timestamp::ZERO,
            evicting: None,
            state: FeedState::Idle,
        }
    }

    /// Settings in use.
    pub fn config(&self) -> &FeedConfig {
        &self.cfg
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FeedState {
        self.state
    }

    /// Whether an eviction is in flight.
    pub fn is_evicting(&self) -> bool {
        self.evicting.is_some()
    }

    /// Row currently being evicted.
    pub fn evicting_row(&self) -> Option<RowId> {
        self.evicting
    }

    /// Visible rows, oldest first.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &FactRow> {
        self.rows.iter()
    }

    /// Number of visible rows, including one being evicted.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are visible.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Recorded viewport bottom.
    pub fn viewport_bottom(&self) -> f64 {
        self.viewport_bottom
    }

    /// Time of the last tick-driven append.
    pub fn last_update_at(&self) -> Timestamp {
        self.last_update_at
    }

    /// Record the viewport bottom and append rows until one overflows it.
    ///
    /// Returns the number of rows appended. Fails if `max_prefill_rows` appends never overflow.
    #[tracing::instrument(skip(self, surface, facts))]
    pub fn initialize(
        &mut self,
        surface: &mut dyn Surface,
        facts: &mut dyn FactSource,
    ) -> RevealResult<usize> {
        self.viewport_bottom = surface.viewport_bottom();
        let mut appended = 0usize;
        loop {
            if appended >= self.cfg.max_prefill_rows {
                return Err(RevealError::feed(format!(
                    "viewport did not overflow after {appended} rows"
                )));
            }
            let fact = facts.next_fact()?;
            appended += 1;
            if self.append_row(surface, fact)? {
                break;
            }
        }
        tracing::debug!(rows = appended, "feed pre-filled");
        Ok(appended)
    }

    /// Append `fact` as the newest row. Returns whether it overflowed the viewport, in which case
    /// eviction of the oldest row was requested.
    pub fn append_row(&mut self, surface: &mut dyn Surface, fact: Fact) -> RevealResult<bool> {
        let id = surface.push_row(&fact.to_markup());
        tracing::debug!(row = id.0, fact = %fact.name, "append row");
        self.rows.push_back(FactRow { id, fact });

        let top = surface
            .row_top(id)
            .ok_or_else(|| RevealError::feed(format!("surface lost row {}", id.0)))?;
        let overflowed = overflows(top, self.viewport_bottom);
        if overflowed {
            self.evict_oldest(surface)?;
        }
        Ok(overflowed)
    }

    /// Start collapsing the oldest row. Returns `false` if an eviction is already in flight or
    /// the feed is empty.
    pub fn evict_oldest(&mut self, surface: &mut dyn Surface) -> RevealResult<bool> {
        if let Some(row) = self.evicting {
            tracing::debug!(row = row.0, "eviction already in flight");
            return Ok(false);
        }
        let Some(oldest) = self.rows.front().map(|r| r.id) else {
            return Ok(false);
        };
        let excess = surface
            .row_outer_height(oldest)
            .ok_or_else(|| RevealError::feed(format!("surface lost row {}", oldest.0)))?;

        surface.animate_margin_top(oldest, -excess, self.cfg.eviction_duration());
        self.evicting = Some(oldest);
        self.state = FeedState::Evicting;
        tracing::debug!(row = oldest.0, excess, "evict oldest row");
        Ok(true)
    }

    /// Completion of the eviction transition for `row`: drop it and return to idle.
    ///
    /// Completions for any other row are ignored and reported as `false`.
    pub fn finish_eviction(&mut self, surface: &mut dyn Surface, row: RowId) -> bool {
        if self.evicting != Some(row) {
            tracing::warn!(row = row.0, "completion for a row that is not being evicted");
            return false;
        }
        self.evicting = None;
        self.rows.retain(|r| r.id != row);
        surface.remove_row(row);
        self.state = self.settled_state();
        tracing::debug!(row = row.0, remaining = self.rows.len(), "row evicted");
        true
    }

    /// Recurring clock signal: append one fresh fact if the throttle allows it.
    ///
    /// Returns whether a row was appended.
    #[tracing::instrument(skip(self, surface, facts))]
    pub fn tick(
        &mut self,
        now: Timestamp,
        surface: &mut dyn Surface,
        facts: &mut dyn FactSource,
    ) -> RevealResult<bool> {
        if !should_update(
            now,
            self.last_update_at,
            self.cfg.min_update_interval(),
            self.is_evicting(),
        ) {
            return Ok(false);
        }
        let fact = facts.next_fact()?;
        self.append_row(surface, fact)?;
        self.last_update_at = now;
        Ok(true)
    }

    fn settled_state(&self) -> FeedState {
        if self.evicting.is_some() {
            FeedState::Evicting
        } else {
            FeedState::Idle
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feed/scheduler.rs"]
mod tests;
