//! Purpose: JSON-valued configuration fields decoded from plain strings.
//! Exports: `config` (value holder + decode seam), `json` (parse boundary), `core` (errors).
//! Role: Library backing the `confjson` CLI; embedded by configuration loaders per field.
//! Invariants: Decoding an empty string never touches the held value.
//! Invariants: A failed decode leaves the held value as it was.
pub mod config;
pub mod core;
pub mod json;

pub use crate::config::{Decode, Json};
pub use crate::core::error::{Error, ErrorKind, to_exit_code};
