// Core modules shared by the library surface and the CLI.
pub mod error;
