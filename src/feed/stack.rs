use std::time::Duration;

use kurbo::Rect;

use crate::{
    feed::surface::Surface,
    foundation::core::{RowId, Timestamp},
};

#[derive(Clone, Debug)]
struct Transition {
    from: f64,
    to: f64,
    start: Timestamp,
    duration: Duration,
}

impl Transition {
    fn end(&self) -> Timestamp {
        self.start.advance(self.duration)
    }

    fn value_at(&self, now: Timestamp) -> f64 {
        let total = self.duration.as_secs_f64();
        let t = if total <= 0.0 {
            1.0
        } else {
            (now.saturating_since(self.start).as_secs_f64() / total).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Debug)]
struct StackRow {
    id: RowId,
    markup: String,
    height: f64,
    margin_top: f64,
    transition: Option<Transition>,
    reported: bool,
}

impl StackRow {
    fn margin_at(&self, now: Timestamp) -> f64 {
        match &self.transition {
            Some(tr) => tr.value_at(now),
            None => self.margin_top,
        }
    }
}

/// In-memory surface that stacks rows top to bottom inside a fixed viewport.
///
/// Every row gets the same height. Margin transitions are linear and are driven by the clock
/// passed to [`Surface::poll_transitions`].
#[derive(Clone, Debug)]
pub struct StackSurface {
    viewport: Rect,
    row_height: f64,
    rows: Vec<StackRow>,
    next_id: u64,
    now: Timestamp,
}

impl StackSurface {
    /// Create an empty surface over `viewport` with rows of `row_height`.
    pub fn new(viewport: Rect, row_height: f64) -> Self {
        Self {
            viewport,
            row_height,
            rows: Vec::new(),
            next_id: 0,
            now: Timestamp::ZERO,
        }
    }

    /// Viewport of `height` starting at the origin.
    pub fn with_height(height: f64, row_height: f64) -> Self {
        Self::new(Rect::new(0.0, 0.0, 320.0, height), row_height)
    }

    /// The viewport rectangle.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Current surface clock.
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Move the clock forward without collecting completions.
    pub fn set_clock(&mut self, now: Timestamp) {
        self.now = self.now.max(now);
    }

    /// Rows currently on the surface, top to bottom.
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Markup of `row`.
    pub fn markup(&self, row: RowId) -> Option<&str> {
        self.find(row).map(|r| r.markup.as_str())
    }

    /// Box occupied by `row` at the current clock, margins excluded.
    pub fn row_rect(&self, row: RowId) -> Option<Rect> {
        let top = self.row_top(row)?;
        Some(Rect::new(
            self.viewport.x0,
            top,
            self.viewport.x1,
            top + self.row_height,
        ))
    }

    /// Whether `row` has a transition in progress.
    pub fn is_animating(&self, row: RowId) -> bool {
        self.find(row)
            .is_some_and(|r| r.transition.is_some() && !r.reported)
    }

    fn find(&self, row: RowId) -> Option<&StackRow> {
        self.rows.iter().find(|r| r.id == row)
    }
}

impl Surface for StackSurface {
    fn viewport_bottom(&self) -> f64 {
        self.viewport.y1
    }

    fn push_row(&mut self, markup: &str) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(StackRow {
            id,
            markup: markup.to_string(),
            height: self.row_height,
            margin_top: 0.0,
            transition: None,
            reported: false,
        });
        id
    }

    fn row_top(&self, row: RowId) -> Option<f64> {
        let mut y = self.viewport.y0;
        for r in &self.rows {
            y += r.margin_at(self.now);
            if r.id == row {
                return Some(y);
            }
            y += r.height;
        }
        None
    }

    fn row_outer_height(&self, row: RowId) -> Option<f64> {
        self.find(row).map(|r| r.height + r.margin_at(self.now))
    }

    fn animate_margin_top(&mut self, row: RowId, target: f64, duration: Duration) {
        let now = self.now;
        if let Some(r) = self.rows.iter_mut().find(|r| r.id == row) {
            let from = r.margin_at(now);
            r.margin_top = from;
            r.transition = Some(Transition {
                from,
                to: target,
                start: now,
                duration,
            });
            r.reported = false;
        }
    }

    fn remove_row(&mut self, row: RowId) {
        self.rows.retain(|r| r.id != row);
    }

    fn poll_transitions(&mut self, now: Timestamp) -> Vec<RowId> {
        self.set_clock(now);
        let now = self.now;
        let mut done = Vec::new();
        for r in &mut self.rows {
            let Some(tr) = &r.transition else {
                continue;
            };
            if !r.reported && tr.end() <= now {
                r.margin_top = tr.to;
                r.reported = true;
                done.push(r.id);
            }
        }
        done
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feed/stack.rs"]
mod tests;
