//! Canonical tag identifier rendering.
//!
//! The attendance service does exact string matching on identifiers, so every
//! UID leaving this device is rendered the same way: each raw byte as two
//! lowercase hexadecimal characters, concatenated in read order, no
//! separators.

/// Raw UID bytes as delivered by the reader. ISO 14443A serials are 4, 7 or
/// 10 bytes depending on cascade level.
pub type TagUidBytes = heapless::Vec<u8, 10>;

/// Rendered UID — two hex chars per byte, so 20 chars covers the longest
/// serial.
pub type UidString = heapless::String<20>;

/// Render raw UID bytes as canonical lowercase hex.
///
/// Pure and total: any input (including empty) maps deterministically to a
/// string of exactly `2 * bytes.len()` characters. Inputs longer than 10
/// bytes never occur from the reader port.
pub fn format(bytes: &[u8]) -> UidString {
    use core::fmt::Write;
    let mut out = UidString::new();
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
