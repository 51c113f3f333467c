use crate::{
    chain::event::{OwnershipRecord, TransferEvent},
    chain::source::TransferSource,
    foundation::core::Timestamp,
    store::property::PropertyStore,
};

/// Keeps the ownership facts of one token in step with its `Transfer` events.
///
/// Without a source (no wallet or provider) the tracker is disabled and never writes anything.
pub struct OwnershipTracker {
    token_id: u64,
    source: Option<Box<dyn TransferSource>>,
    current: Option<OwnershipRecord>,
}

impl std::fmt::Debug for OwnershipTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnershipTracker")
            .field("token_id", &self.token_id)
            .field("enabled", &self.source.is_some())
            .field("current", &self.current)
            .finish()
    }
}

impl OwnershipTracker {
    /// Track `token_id` through `source`.
    pub fn new(token_id: u64, source: Box<dyn TransferSource>) -> Self {
        Self {
            token_id,
            source: Some(source),
            current: None,
        }
    }

    /// Tracker with no event source; all operations are no-ops.
    pub fn disabled(token_id: u64) -> Self {
        Self {
            token_id,
            source: None,
            current: None,
        }
    }

    /// Token being tracked.
    pub fn token_id(&self) -> u64 {
        self.token_id
    }

    /// Whether an event source is attached.
    pub fn is_enabled(&self) -> bool {
        self.source.is_some()
    }

    /// Most recently applied record.
    pub fn current(&self) -> Option<&OwnershipRecord> {
        self.current.as_ref()
    }

    /// Replay history once and apply only the most recent transfer.
    ///
    /// A failing query is logged and leaves the store untouched.
    #[tracing::instrument(skip(self, store), fields(token_id = self.token_id))]
    pub fn bootstrap(&mut self, store: &mut PropertyStore) -> Option<&OwnershipRecord> {
        let source = self.source.as_mut()?;
        let history = match source.past_transfers(self.token_id) {
            Ok(history) => history,
            Err(err) => {
                tracing::warn!(error = %err, "historical transfer query failed");
                return None;
            }
        };
        tracing::debug!(events = history.len(), "replayed transfer history");
        let last = history.last()?;
        self.apply(last, store);
        self.current.as_ref()
    }

    /// Apply one live transfer. Returns whether it concerned the tracked token.
    pub fn on_transfer(&mut self, event: &TransferEvent, store: &mut PropertyStore) -> bool {
        if !event.concerns(self.token_id) {
            tracing::debug!(token_id = ?event.token_id, "ignoring transfer of another token");
            return false;
        }
        self.apply(event, store);
        true
    }

    /// Live transfers delivered by the source up to `now`; empty when disabled.
    pub fn poll_live(&mut self, now: Timestamp) -> Vec<TransferEvent> {
        match self.source.as_mut() {
            Some(source) => source.drain_live(self.token_id, now),
            None => Vec::new(),
        }
    }

    fn apply(&mut self, event: &TransferEvent, store: &mut PropertyStore) {
        let record = OwnershipRecord::from(event);
        store.extend(record.facts());
        tracing::info!(
            owner = %record.owner,
            block = record.block_height,
            "ownership updated"
        );
        self.current = Some(record);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/tracker.rs"]
mod tests;
