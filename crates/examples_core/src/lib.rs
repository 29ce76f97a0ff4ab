//! Provide the example registry: the canonical list of example programs the test harness keeps runnable.
//!
//! This crate is intentionally small and dependency-light. It contains the shipped snapshot and the typed
//! descriptors both:
//! - the manifest loader can build from parsed source text, and
//! - the CLI can query, render and plan from.
//!
//! ## Notes
//!
//! - This is a pure data crate: **no IO**, no global state, no syntax types.
//! - Textual booleans (`"True"`/`"False"`) are converted to `bool` at the registry boundary.
//! - Example names that embed invocation flags are split into a program name and ordered arguments.
//!
//! ## Examples
//! ```rust
//! use examples_core::ExampleRegistry;
//!
//! let registry = ExampleRegistry::builtin().unwrap();
//! assert_eq!(registry.compiled_examples().len(), 4);
//! assert!(registry.script_examples().is_empty());
//! ```

pub mod descriptor;
pub mod errors;
pub mod flags;
pub mod invocation;
pub mod plan;
pub mod registry;
pub mod snapshot;

pub use descriptor::{ExampleDescriptor, ExampleKind, ScriptExampleDescriptor};
pub use errors::{EntryError, FlagField, LocatedEntryError};
pub use invocation::{Invocation, InvocationError};
pub use plan::{PlanMode, PlannedRun, RunDisposition, plan};
pub use registry::{ExampleRegistry, RawList, RegistryError};
