// third-party imports
use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use rand::{RngCore as _, rngs::OsRng};

// local imports
use crate::error::Result;

// ---

/// Returns `count` bytes from the operating system's secure random source.
pub fn random_bytes(count: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; count];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Returns a URL-safe base64 encoding of `count` secure random bytes.
pub fn random_string(count: usize) -> Result<String> {
    Ok(URL_SAFE.encode(random_bytes(count)?))
}
