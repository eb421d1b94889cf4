//! Purpose: Configuration field types that parse themselves from raw strings.
//! Exports: `Decode`, `Json`.
//! Role: Per-field decode seam called by an external configuration loader.
//! Invariants: An empty string means "absent" and is never an error.
//! Invariants: Implementations keep their prior state when decoding fails.

mod json;

pub use json::Json;

use crate::core::error::Error;

/// A configuration field that can populate itself from a text value, such as
/// an environment variable or a command-line flag.
pub trait Decode {
    fn decode(&mut self, value: &str) -> Result<(), Error>;
}
