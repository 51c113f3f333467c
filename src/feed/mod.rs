/// Feed state machine: append, overflow detection, eviction, throttled tick.
pub mod scheduler;
/// In-memory stacked-row surface.
pub mod stack;
/// Geometry and animation boundary.
pub mod surface;
