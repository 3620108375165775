//! String helpers addressing text by logical character position.

// std imports
use std::fmt::Write as _;

// ---

/// Returns the character at the logical index `position`, or `None` when
/// `position` is out of range.
pub fn char_at(input: &str, position: usize) -> Option<char> {
    input.chars().nth(position)
}

/// Returns a substring selected by logical character `start` and `length`
/// instead of byte offsets.
///
/// The selection is clamped to the end of the input; a `start` at or past
/// the last character yields an empty string.
pub fn substr(input: &str, start: usize, length: usize) -> &str {
    let mut offsets = input.char_indices().map(|(i, _)| i).skip(start);
    let Some(begin) = offsets.next() else {
        return "";
    };
    if length == 0 {
        return "";
    }
    let end = offsets.nth(length - 1).unwrap_or(input.len());
    &input[begin..end]
}

/// Converts non-printable characters in `input` to a dot.
pub fn printable(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { '.' } else { c })
        .collect()
}

/// Returns true if `ch` may start a token name: an ASCII letter or underscore.
pub fn is_token_char_first(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Returns true if `ch` may continue a token name: an ASCII letter, digit
/// or underscore.
pub fn is_token_char_next(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Returns true if `s` contains only letters, digits or underscores, does
/// not start with a digit, and has at least one letter.
pub fn is_token_name(s: &str) -> bool {
    let mut has_letter = false;

    for (i, ch) in s.chars().enumerate() {
        if i == 0 {
            if !is_token_char_first(ch) {
                return false;
            }
        } else if !is_token_char_next(ch) {
            return false;
        }

        has_letter |= ch.is_ascii_alphabetic();
    }

    has_letter
}

/// Like [`is_token_name`], but additionally accepts characters from
/// `middle_chars` at interior positions (not first, not last).
///
/// A common `middle_chars` value is `"-"`.
pub fn is_token_name_with(s: &str, middle_chars: &str) -> bool {
    let mut has_letter = false;
    let mut last = None;

    for (i, ch) in s.chars().enumerate() {
        last = Some(ch);
        if i == 0 {
            if !is_token_char_first(ch) {
                return false;
            }
        } else if !is_token_char_next(ch) && !middle_chars.contains(ch) {
            return false;
        }

        has_letter |= ch.is_ascii_alphabetic();
    }

    if last.is_some_and(|ch| middle_chars.contains(ch)) {
        return false;
    }

    has_letter
}

/// Translates control characters to backslash escape sequences;
/// e.g., a carriage return becomes the two characters `\r`.
///
/// Control characters without a short form become `\xHH`.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for ch in s.chars() {
        match ch {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '"' => out.push_str("\\\""),
            _ if ch < ' ' => {
                let _ = write!(out, "\\x{:02X}", ch as u32);
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Returns the first of `suffixes` that `s` ends with, or `None` if none
/// of them match.
pub fn which_suffix<'a>(s: &str, suffixes: &[&'a str]) -> Option<&'a str> {
    suffixes.iter().copied().find(|suffix| s.ends_with(suffix))
}
