//! Reveal feed: a generative display of artwork facts with on-chain ownership provenance.
//!
//! Fact values are turned into code units and nibbles, drawn through one of a fixed set of
//! visual representations, and appended to a bounded-height feed that evicts its oldest row
//! whenever a new one overflows the viewport.
//!
//! # Pipeline overview
//!
//! 1. **Encode**: `value -> code units -> nibbles` ([`to_bytes`], [`to_nibbles`])
//! 2. **Represent**: `(text, code units, nibbles) -> markup` via a randomly drawn entry of the
//!    [`Registry`]
//! 3. **Schedule**: [`FeedScheduler`] appends rows to a [`Surface`], detects overflow and
//!    collapses the oldest row
//! 4. **Track**: [`OwnershipTracker`] writes the latest `Transfer` event of one token into the
//!    [`PropertyStore`]
//!
//! [`Runtime`] owns all of these and processes queued events one at a time.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected collaborators**: geometry/animation ([`Surface`]), randomness ([`IndexSource`])
//!   and chain events ([`TransferSource`]) are traits, so everything runs without a browser.
//! - **Single-threaded**: no locks; ordering is arrival order of [`RuntimeEvent`]s.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chain;
mod config;
mod encoding;
mod feed;
mod foundation;
mod runtime;
mod store;

pub use chain::event::{
    BLOCK_HASH_FACT, BLOCK_HEIGHT_FACT, OWNER_FACT, OWNERSHIP_FACTS, OwnershipRecord,
    TRANSACTION_HASH_FACT, TransferEvent,
};
pub use chain::source::{InMemoryTransferSource, ScheduledTransfer, TransferSource};
pub use chain::tracker::OwnershipTracker;
pub use config::settings::{FeedConfig, RevealConfig};
pub use encoding::codec::{Encoded, HEX_PREFIX, Nibble, is_hex, to_bytes, to_nibbles};
pub use encoding::represent::{Registry, RenderFn, Representation, escape_html};
pub use encoding::tables::{
    SIXTEEN_COLORS, SIXTEEN_DINGBATS, SIXTEEN_EMOJI, SIXTEEN_GRAYS, SIXTEEN_NOTES,
    SIXTEEN_SHAPES,
};
pub use feed::scheduler::{FactRow, FeedScheduler, FeedState, overflows, should_update};
pub use feed::stack::StackSurface;
pub use feed::surface::Surface;
pub use foundation::core::{RowId, Timestamp};
pub use foundation::error::{RevealError, RevealResult};
pub use foundation::random::{IndexSource, ScriptedSource, SeededSource, ThreadRngSource};
pub use runtime::event_loop::{Runtime, RuntimeEvent, RuntimeStats};
pub use store::property::{
    Fact, FactDeck, FactSource, PropertyStore, PropertyValue, describe,
};
