//! UTF-8 sequence length detection.
//!
//! Classifies the byte sequence at a given offset by structure only: lead
//! byte bit patterns and `10xxxxxx` continuation bytes. Codepoint-range
//! validation (overlong encodings, surrogates) is out of scope.

/// Returns the number of bytes in the UTF-8 character starting at `offset`.
///
/// The result is `1..=4` for a structurally well-formed character, `0` if
/// the buffer ends before all required bytes are present (including
/// `offset` past the end of `data`), or `-1` if the lead byte or any
/// present continuation byte has an invalid bit pattern.
///
/// Never inspects bytes beyond those required for the detected length.
///
/// # Examples
///
/// ```
/// use starmatch::utf8_len;
///
/// assert_eq!(utf8_len(b"A", 0), 1);
/// assert_eq!(utf8_len(&[0xC3, 0xA9], 0), 2); // 'é'
/// assert_eq!(utf8_len(&[0xC3], 0), 0); // truncated
/// assert_eq!(utf8_len(&[0xFF], 0), -1); // invalid lead
/// ```
pub fn utf8_len(data: &[u8], offset: usize) -> i32 {
    let Some(&lead) = data.get(offset) else {
        return 0; // incomplete
    };

    if lead < 0x80 {
        return 1; // common 0-127 case
    }

    // The lead byte indicates the length:
    // 110xxxxx = 2 bytes, 1110xxxx = 3 bytes, 11110xxx = 4 bytes.
    let len = if lead & 0b1110_0000 == 0b1100_0000 {
        2
    } else if lead & 0b1111_0000 == 0b1110_0000 {
        3
    } else if lead & 0b1111_1000 == 0b1111_0000 {
        4
    } else {
        return -1; // invalid
    };

    // Each trail byte must be in 10xxxxxx form.
    for i in 1..len as usize {
        match data.get(offset + i) {
            None => return 0,
            Some(&b) if b & 0b1100_0000 != 0b1000_0000 => return -1,
            Some(_) => {}
        }
    }

    len
}
