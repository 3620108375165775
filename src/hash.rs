// std imports
use std::fmt;

// third-party imports
use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use sha1::{Digest as _, Sha1};

// ---

/// A fixed-length textual digest of hashed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashedText(String);

impl HashedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<HashedText> for String {
    fn from(value: HashedText) -> Self {
        value.0
    }
}

// ---

/// Returns the SHA-1 hash of `text` in URL-safe base64 encoding.
pub fn hash_text(text: &str) -> HashedText {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    HashedText(URL_SAFE.encode(hasher.finalize()))
}
