#![forbid(unsafe_code)]
//! Example manifest tooling.
//!
//! The test harness keeps a list of example programs buildable and runnable over time. This crate loads that list
//! (the built-in snapshot or an `examples-to-run.py` manifest), validates it, renders it in several formats, and
//! derives the invocations a harness pass would schedule.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod loader;
pub mod render;
pub mod version;

pub use config::LoadConfig;
pub use examples_core::{ExampleDescriptor, ExampleRegistry, ScriptExampleDescriptor};
pub use loader::{LoadError, load_manifest_file, load_manifest_str};
pub use render::{ListKind, OutputFormat};
