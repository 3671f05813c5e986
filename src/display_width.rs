//! Terminal column width of matrix glyphs.
//!
//! Every Unicode scalar value occupies one column, whatever its encoded
//! length. This holds for the glyphs the formatter uses (ASCII, box drawing,
//! arrows, block elements, Braille patterns) and keeps multi-glyph cells such
//! as `"DL"` or `"↖↑←"` at their natural length.

/// Number of display columns of `symbol`.
pub fn display_width(symbol: &str) -> usize {
    symbol.chars().count()
}

/// Display width of possibly malformed UTF-8.
///
/// Complete scalar values count one column each. An invalid byte sequence
/// inside the input counts as a single replacement column; an incomplete
/// sequence at the end of the input is ignored.
pub fn display_width_bytes(bytes: &[u8]) -> usize {
    let mut width = 0;
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => return width + display_width(valid),
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                width += scalar_count(valid);
                match err.error_len() {
                    Some(len) => {
                        width += 1;
                        rest = &after[len..];
                    }
                    None => return width,
                }
            }
        }
    }
}

// `bytes` is known to be valid UTF-8: count the lead bytes.
fn scalar_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b & 0xC0 != 0x80).count()
}
