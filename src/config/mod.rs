/// Startup configuration and feed timing.
pub mod settings;
