use crate::{
    chain::event::TransferEvent,
    foundation::core::Timestamp,
    foundation::error::{RevealError, RevealResult},
};

/// Contract `Transfer` event source, already bound to a contract and network.
pub trait TransferSource {
    /// Historical transfers of `token_id` from the earliest block to the latest, oldest first.
    fn past_transfers(&mut self, token_id: u64) -> RevealResult<Vec<TransferEvent>>;

    /// Live transfers of `token_id` delivered at or before `now` and not yet drained, in arrival
    /// order.
    fn drain_live(&mut self, token_id: u64, now: Timestamp) -> Vec<TransferEvent>;
}

/// A live transfer scheduled for delivery at a given time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledTransfer {
    /// Delivery time in milliseconds.
    pub at_ms: u64,
    /// The event.
    pub event: TransferEvent,
}

/// Scripted in-memory event source for tests and simulation.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct InMemoryTransferSource {
    /// Events returned by [`TransferSource::past_transfers`].
    #[serde(default)]
    pub history: Vec<TransferEvent>,
    /// Live events, delivered once their time has come.
    #[serde(default)]
    pub live: Vec<ScheduledTransfer>,
    /// When set, the historical query fails with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_error: Option<String>,
}

impl InMemoryTransferSource {
    /// Source with the given history and no live events.
    pub fn new(history: Vec<TransferEvent>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    /// Make the historical query fail.
    pub fn with_history_error(mut self, msg: impl Into<String>) -> Self {
        self.history_error = Some(msg.into());
        self
    }

    /// Schedule a live event for delivery at `at`.
    pub fn push_live(&mut self, at: Timestamp, event: TransferEvent) {
        self.live.push(ScheduledTransfer {
            at_ms: at.as_millis(),
            event,
        });
    }

    /// Parse a source document (`history`, `live`, optional `history_error`).
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl TransferSource for InMemoryTransferSource {
    fn past_transfers(&mut self, token_id: u64) -> RevealResult<Vec<TransferEvent>> {
        if let Some(msg) = &self.history_error {
            return Err(RevealError::chain(msg.clone()));
        }
        Ok(self
            .history
            .iter()
            .filter(|e| e.concerns(token_id))
            .cloned()
            .collect())
    }

    fn drain_live(&mut self, token_id: u64, now: Timestamp) -> Vec<TransferEvent> {
        // Stable partition keeps arrival order on both sides.
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.live)
            .into_iter()
            .partition(|s| s.at_ms <= now.as_millis());
        self.live = pending;
        due.into_iter()
            .map(|s| s.event)
            .filter(|e| e.concerns(token_id))
            .collect()
    }
}
