/// Timestamp and row-handle newtypes.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Injectable random index sources.
pub mod random;
