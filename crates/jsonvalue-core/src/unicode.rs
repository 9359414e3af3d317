//! Codepoint → UTF-8 encoding used when decoding `\uXXXX` escapes.
//!
//! Rust strings cannot hold surrogate codepoints (U+D800..=U+DFFF), so a lone
//! surrogate is replaced by U+FFFD instead of being written as an ill-formed
//! three-byte sequence.

/// First codepoint of the UTF-16 high-surrogate range.
pub const HIGH_SURROGATE_START: u32 = 0xD800;
/// First codepoint of the UTF-16 low-surrogate range.
pub const LOW_SURROGATE_START: u32 = 0xDC00;
const SURROGATE_END: u32 = 0xDFFF;

/// Append the UTF-8 encoding of `codepoint` to `out`.
pub fn push_codepoint(out: &mut String, codepoint: u32) {
    out.push(char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER));
}

pub fn is_high_surrogate(codepoint: u32) -> bool {
    (HIGH_SURROGATE_START..LOW_SURROGATE_START).contains(&codepoint)
}

pub fn is_low_surrogate(codepoint: u32) -> bool {
    (LOW_SURROGATE_START..=SURROGATE_END).contains(&codepoint)
}

/// Combine a UTF-16 surrogate pair into a supplementary-plane codepoint.
pub fn combine_surrogates(high: u32, low: u32) -> u32 {
    0x10000 + ((high - HIGH_SURROGATE_START) << 10) + (low - LOW_SURROGATE_START)
}
