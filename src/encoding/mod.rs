/// Value -> code units -> nibbles.
pub mod codec;
/// Representation functions and their registry.
pub mod represent;
/// Fixed 16-entry glyph and color tables.
pub mod tables;
