// public modules
pub mod error;
pub mod fsx;
pub mod hash;
pub mod random;
pub mod strx;
pub mod value;

// public uses
pub use error::{Error, Result};
pub use starmatch::{Pattern, matches, utf8_len};
