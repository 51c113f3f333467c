//! Sixteen-entry lookup tables indexed by [`crate::Nibble`].

/// CSS colors, roughly ordered light to dark then by hue.
pub const SIXTEEN_COLORS: [&str; 16] = [
    "#F0F0F0", "silver", "gray", "black", "red", "maroon", "yellow", "olive", "lime", "green",
    "aqua", "teal", "blue", "navy", "fuchsia", "purple",
];

/// Gray ramp from black to near-white.
pub const SIXTEEN_GRAYS: [&str; 16] = [
    "#000", "#111", "#222", "#333", "#444", "#555", "#666", "#777", "#888", "#999", "#AAA", "#BBB",
    "#CCC", "#DDD", "#EEE", "#F0F0F0",
];

/// Geometric shapes.
pub const SIXTEEN_SHAPES: [&str; 16] = [
    "\u{2BC0}", "\u{2BC1}", "\u{2BC2}", "\u{2BC3}", "\u{2BC4}", "\u{2BC5}", "\u{25E2}", "\u{25E3}",
    "\u{25E4}", "\u{25E5}", "\u{25D6}", "\u{25D7}", "\u{2BCA}", "\u{2BCB}", "\u{25AE}", "\u{25CF}",
];

/// Ornamental dingbats (leaf and hand fleurons).
pub const SIXTEEN_DINGBATS: [&str; 16] = [
    "\u{1F650}",
    "\u{1F651}",
    "\u{1F652}",
    "\u{1F653}",
    "\u{1F654}",
    "\u{1F655}",
    "\u{1F656}",
    "\u{1F657}",
    "\u{1F658}",
    "\u{1F659}",
    "\u{1F65A}",
    "\u{1F65B}",
    "\u{1F65C}",
    "\u{1F65D}",
    "\u{1F65E}",
    "\u{1F65F}",
];

/// Face emoji.
pub const SIXTEEN_EMOJI: [&str; 16] = [
    "\u{1F610}",
    "\u{1F611}",
    "\u{1F612}",
    "\u{1F613}",
    "\u{1F614}",
    "\u{1F615}",
    "\u{1F616}",
    "\u{1F617}",
    "\u{1F618}",
    "\u{1F619}",
    "\u{1F61A}",
    "\u{1F61B}",
    "\u{1F61C}",
    "\u{1F61D}",
    "\u{1F61E}",
    "\u{1F61F}",
];

/// Musical symbols.
pub const SIXTEEN_NOTES: [&str; 16] = [
    "\u{1F39C}",
    "\u{1F39D}",
    "\u{266A}",
    "\u{266B}",
    "\u{266C}",
    "\u{1D15C}",
    "\u{1D15D}",
    "\u{1D15E}",
    "\u{1D15F}",
    "\u{1D160}",
    "\u{1D161}",
    "\u{1D162}",
    "\u{1D163}",
    "\u{1D164}",
    "\u{1D194}",
    "\u{1D195}",
];
