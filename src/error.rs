// std imports
use std::io;

// third-party imports
use thiserror::Error;

/// Error is an error which may occur in this library.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("random source failure: {0}")]
    Rand(#[from] rand::Error),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
