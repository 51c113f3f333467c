use std::collections::VecDeque;

use crate::{
    chain::event::TransferEvent,
    chain::tracker::OwnershipTracker,
    config::settings::RevealConfig,
    encoding::represent::Registry,
    feed::scheduler::FeedScheduler,
    feed::surface::Surface,
    foundation::core::{RowId, Timestamp},
    foundation::error::RevealResult,
    foundation::random::IndexSource,
    store::property::{FactDeck, PropertyStore},
};

/// Work items processed by [`Runtime`], one at a time in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// Recurring clock signal.
    Tick(Timestamp),
    /// Live transfer delivered by the event source.
    Transfer(TransferEvent),
    /// A surface transition on this row completed.
    TransitionFinished(RowId),
}

/// Counters accumulated while the runtime runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RuntimeStats {
    /// Rows appended while pre-filling.
    pub prefilled: usize,
    /// Tick events processed.
    pub ticks: u64,
    /// Rows appended by ticks.
    pub appended: u64,
    /// Rows removed after their eviction finished.
    pub evicted: u64,
    /// Transfers applied to the store.
    pub transfers: u64,
}

/// Single-threaded event loop owning the store, feed, tracker and surface.
///
/// Each queued event runs to completion before the next one starts, so no locking is needed.
pub struct Runtime<S: Surface> {
    store: PropertyStore,
    registry: Registry,
    rng: Box<dyn IndexSource>,
    feed: FeedScheduler,
    tracker: OwnershipTracker,
    surface: S,
    queue: VecDeque<RuntimeEvent>,
    stats: RuntimeStats,
}

impl<S: Surface> Runtime<S> {
    /// Validate `cfg` and assemble a runtime over `surface`.
    pub fn new(
        cfg: &RevealConfig,
        surface: S,
        tracker: OwnershipTracker,
        rng: Box<dyn IndexSource>,
    ) -> RevealResult<Self> {
        cfg.validate()?;
        Ok(Self {
            store: cfg.store(),
            registry: Registry::standard(),
            rng,
            feed: FeedScheduler::new(cfg.feed),
            tracker,
            surface,
            queue: VecDeque::new(),
            stats: RuntimeStats::default(),
        })
    }

    /// Replace the representation registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Pre-fill the feed from the initial facts, then replay the ownership history.
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self) -> RevealResult<usize> {
        let mut deck = FactDeck::new(&self.store, &self.registry, &mut *self.rng);
        let rows = self.feed.initialize(&mut self.surface, &mut deck)?;
        self.stats.prefilled = rows;

        if self.tracker.is_enabled() {
            self.tracker.bootstrap(&mut self.store);
        } else {
            tracing::info!("no transfer source; ownership facts disabled");
        }
        Ok(rows)
    }

    /// Queue an event for the next [`Runtime::run_pending`].
    pub fn enqueue(&mut self, event: RuntimeEvent) {
        self.queue.push_back(event);
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Collect everything that happened up to `now` (finished transitions, live transfers, the
    /// tick itself) and process it.
    pub fn pump(&mut self, now: Timestamp) -> RevealResult<()> {
        for row in self.surface.poll_transitions(now) {
            self.enqueue(RuntimeEvent::TransitionFinished(row));
        }
        for event in self.tracker.poll_live(now) {
            self.enqueue(RuntimeEvent::Transfer(event));
        }
        self.enqueue(RuntimeEvent::Tick(now));
        self.run_pending()
    }

    /// Drain the queue, first in first out.
    pub fn run_pending(&mut self) -> RevealResult<()> {
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(event)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, event: RuntimeEvent) -> RevealResult<()> {
        match event {
            RuntimeEvent::Tick(now) => {
                self.stats.ticks += 1;
                let mut deck = FactDeck::new(&self.store, &self.registry, &mut *self.rng);
                if self.feed.tick(now, &mut self.surface, &mut deck)? {
                    self.stats.appended += 1;
                }
            }
            RuntimeEvent::Transfer(event) => {
                if self.tracker.on_transfer(&event, &mut self.store) {
                    self.stats.transfers += 1;
                }
            }
            RuntimeEvent::TransitionFinished(row) => {
                if self.feed.finish_eviction(&mut self.surface, row) {
                    self.stats.evicted += 1;
                }
            }
        }
        Ok(())
    }

    /// The fact store.
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// The feed scheduler.
    pub fn feed(&self) -> &FeedScheduler {
        &self.feed
    }

    /// The ownership tracker.
    pub fn tracker(&self) -> &OwnershipTracker {
        &self.tracker
    }

    /// The display surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Counters so far.
    pub fn stats(&self) -> RuntimeStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/event_loop.rs"]
mod tests;
