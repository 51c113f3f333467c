use std::time::Duration;

/// Wall-clock instant in milliseconds, as delivered by the external tick signal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The zero instant; the feed's `last_update_at` starts here.
    pub const ZERO: Self = Self(0);

    /// Build a timestamp from whole milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Milliseconds since the clock origin.
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Elapsed time since `earlier`, saturating at zero for a clock that went backwards.
    pub fn saturating_since(self, earlier: Self) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// Advance by `d`, saturating at `u64::MAX` milliseconds.
    pub fn advance(self, d: Duration) -> Self {
        let ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(ms))
    }
}

/// Opaque handle of a row appended to a [`crate::Surface`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RowId(pub u64);

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
