/// Transfer events and the ownership facts derived from them.
pub mod event;
/// Contract event source boundary and a scripted in-memory source.
pub mod source;
/// Ownership tracker.
pub mod tracker;
