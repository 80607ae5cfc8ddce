//! Caret offset conversion helpers shared by the plug-ins

/// Convert a character offset into a byte offset into `s`.
///
/// Offsets past the end of the string clamp to `s.len()`, matching how the
/// host clamps a stale caret.
pub fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Convert a byte offset (which must lie on a character boundary) into a
/// character offset into `s`.
pub fn byte_to_char(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}
