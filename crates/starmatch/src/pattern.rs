use std::fmt;

/// A glob-style pattern for matching text strings.
///
/// The asterisk `*` matches zero or more characters; every other character
/// is a literal matched exactly. There is no escape syntax, so a literal
/// asterisk cannot be expressed.
///
/// Matching operates on logical characters rather than bytes, so a
/// multi-byte character is consumed as a single unit.
///
/// # Examples
///
/// ```
/// use starmatch::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    chars: Vec<char>,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            chars: raw.as_ref().chars().collect(),
        }
    }

    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` only if the entire text is consumed by the pattern.
    /// An empty pattern matches only empty text, and empty text is matched
    /// only by a pattern made up entirely of wildcards (or an empty one).
    ///
    /// # Examples
    ///
    /// ```
    /// use starmatch::Pattern;
    ///
    /// let pattern = Pattern::new("a*b");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("axxxb"));
    /// assert!(!pattern.matches("a"));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        Self::partial_match(&self.chars, &text)
    }

    fn partial_match(pattern: &[char], text: &[char]) -> bool {
        let mut pos = 0;

        for (i, &c) in pattern.iter().enumerate() {
            if c == '*' {
                let subpattern = &pattern[i + 1..];
                if subpattern.is_empty() {
                    return true;
                }

                // Shortest match first: consume 0 characters, then 1, then 2, …
                // until the subpattern matches a suffix or the text runs out.
                loop {
                    if Self::partial_match(subpattern, &text[pos..]) {
                        return true;
                    }
                    if pos == text.len() {
                        return false;
                    }
                    pos += 1;
                }
            }

            if pos >= text.len() || c != text[pos] {
                return false;
            }
            pos += 1;
        }

        pos == text.len()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// Tests whether `pattern` matches `text`, compiling the pattern on the fly.
#[inline]
pub fn matches(pattern: &str, text: &str) -> bool {
    Pattern::new(pattern).matches(text)
}

#[cfg(test)]
mod tests;
