/// Cooperative event loop tying the store, feed, tracker and surface together.
pub mod event_loop;
