//! Purpose: JSON parsing boundary shared by the value holder and the CLI.
//! Exports: `parse` module with decode helpers and failure classification.
//! Role: Single seam for parser usage so callsites avoid ad hoc decode logic.
//! Invariants: Runtime JSON decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
