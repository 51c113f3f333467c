/// Prefix that switches [`to_bytes`] into hex-pair mode. Case-sensitive.
pub const HEX_PREFIX: &str = "0x";

/// A 4-bit value in `0..=15`, used as an index into 16-entry glyph and color tables.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Nibble(u8);

impl Nibble {
    /// Build a nibble, rejecting values above 15.
    pub const fn new(v: u8) -> Option<Self> {
        if v <= 0xF { Some(Self(v)) } else { None }
    }

    /// Keep only the low four bits of `v`.
    pub const fn from_low_bits(v: u16) -> Self {
        Self((v & 0xF) as u8)
    }

    /// Numeric value in `0..=15`.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Table index; always `< 16`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Nibble {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::new(v).ok_or_else(|| format!("nibble out of range: {v}"))
    }
}

impl From<Nibble> for u8 {
    fn from(n: Nibble) -> Self {
        n.0
    }
}

/// Whether `value` is rendered in hex-pair mode.
pub fn is_hex(value: &str) -> bool {
    value.starts_with(HEX_PREFIX)
}

/// Convert a property's display string into a sequence of code units.
///
/// With the `0x` prefix every following pair of characters is parsed as one big-endian hex byte;
/// an odd trailing character is dropped. A pair is read like `parseInt(pair, 16)`: leading
/// whitespace and a `+` sign are skipped, then the leading hex digits are taken, so `" f"` gives
/// `0xF` and `"1z"` gives `0x1`. A pair with no digits, or a negative one such as `"-f"`, gives `0`.
///
/// Without the prefix every UTF-16 code unit is emitted verbatim, so values above `0xFF` pass
/// through untruncated.
pub fn to_bytes(value: &str) -> Vec<u16> {
    let Some(digits) = value.strip_prefix(HEX_PREFIX) else {
        return value.encode_utf16().collect();
    };

    let units: Vec<u16> = digits.encode_utf16().collect();
    units
        .chunks_exact(2)
        .map(parse_hex_pair)
        .collect()
}

/// Split every code unit into (low nibble, high nibble), in that order.
///
/// The output is exactly twice as long as the input. For code units above `0xFF` the high nibble
/// keeps only bits 4..8, so every element stays a valid table index.
pub fn to_nibbles(bytes: &[u16]) -> Vec<Nibble> {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(Nibble::from_low_bits(b));
        out.push(Nibble::from_low_bits(b >> 4));
    }
    out
}

/// Codec output for one property value, computed fresh per render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    /// Display string the codes were derived from.
    pub text: String,
    /// Code units from [`to_bytes`].
    pub bytes: Vec<u16>,
    /// Nibbles from [`to_nibbles`].
    pub nibbles: Vec<Nibble>,
}

impl Encoded {
    /// Run both codec stages over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let bytes = to_bytes(&text);
        let nibbles = to_nibbles(&bytes);
        Self {
            text,
            bytes,
            nibbles,
        }
    }
}

fn parse_hex_pair(pair: &[u16]) -> u16 {
    let skip = pair.iter().take_while(|&&c| is_js_space(c)).count();
    let mut rest = &pair[skip..];
    let mut negative = false;
    if let Some((&sign, tail)) = rest.split_first()
        && (sign == u16::from(b'+') || sign == u16::from(b'-'))
    {
        negative = sign == u16::from(b'-');
        rest = tail;
    }

    let value = rest
        .iter()
        .map_while(|&c| hex_digit(c))
        .fold(0u16, |acc, d| (acc << 4) | d);
    if negative { 0 } else { value }
}

fn is_js_space(unit: u16) -> bool {
    unit == 0xFEFF || char::from_u32(u32::from(unit)).is_some_and(char::is_whitespace)
}

fn hex_digit(unit: u16) -> Option<u16> {
    char::from_u32(u32::from(unit))
        .and_then(|c| c.to_digit(16))
        .map(|d| d as u16)
}

#[cfg(test)]
#[path = "../../tests/unit/encoding/codec.rs"]
mod tests;
