// public modules
pub mod pattern;
pub mod utf8;

// public uses
pub use pattern::{Pattern, matches};
pub use utf8::utf8_len;
