//! The example registry.
//!
//! An [`ExampleRegistry`] holds the two ordered descriptor lists. It is built once (from the shipped snapshot or
//! from a loaded manifest) and never mutated afterwards.

use std::fmt;

use crate::descriptor::{ExampleDescriptor, ScriptExampleDescriptor};
use crate::errors::LocatedEntryError;
use crate::snapshot::{self, RawCompiledEntry, RawScriptEntry};

/// Immutable, ordered collection of example descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExampleRegistry {
    compiled: Vec<ExampleDescriptor>,
    script: Vec<ScriptExampleDescriptor>,
}

/// Which raw list a [`RegistryError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawList {
    Compiled,
    Script,
}

impl RawList {
    /// Manifest variable name of this list.
    pub fn variable(self) -> &'static str {
        match self {
            RawList::Compiled => snapshot::COMPILED_LIST_NAME,
            RawList::Script => snapshot::SCRIPT_LIST_NAME,
        }
    }
}

impl fmt::Display for RawList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variable())
    }
}

/// Failure to build a registry from raw tuples.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{list} list, {error}")]
pub struct RegistryError {
    pub list: RawList,
    #[source]
    pub error: LocatedEntryError,
}

impl ExampleRegistry {
    /// Assemble a registry from already validated descriptors.
    pub fn new(compiled: Vec<ExampleDescriptor>, script: Vec<ScriptExampleDescriptor>) -> Self {
        Self { compiled, script }
    }

    /// Load the shipped snapshot.
    ///
    /// ## Errors
    /// Only if the snapshot tables themselves are malformed; the guardrail tests keep that from happening.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_raw(snapshot::COMPILED_EXAMPLES, snapshot::SCRIPT_EXAMPLES)
    }

    /// Build a registry from raw textual tuples, stopping at the first malformed entry.
    pub fn from_raw(compiled: &[RawCompiledEntry], script: &[RawScriptEntry]) -> Result<Self, RegistryError> {
        let compiled = compiled
            .iter()
            .enumerate()
            .map(|(index, &(name, run, valgrind))| {
                ExampleDescriptor::from_fields(&[name, run, valgrind]).map_err(|error| RegistryError {
                    list: RawList::Compiled,
                    error: error.at(index),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let script = script
            .iter()
            .enumerate()
            .map(|(index, &(name, run))| {
                ScriptExampleDescriptor::from_fields(&[name, run]).map_err(|error| RegistryError {
                    list: RawList::Script,
                    error: error.at(index),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { compiled, script })
    }

    /// All compiled-language examples, in manifest order.
    pub fn compiled_examples(&self) -> &[ExampleDescriptor] {
        &self.compiled
    }

    /// All scripting-language examples, in manifest order.
    pub fn script_examples(&self) -> &[ScriptExampleDescriptor] {
        &self.script
    }

    /// First compiled example whose program name is `program`.
    pub fn find(&self, program: &str) -> Option<&ExampleDescriptor> {
        self.compiled.iter().find(|d| d.name() == program)
    }

    /// Total number of entries across both lists.
    pub fn len(&self) -> usize {
        self.compiled.len() + self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty() && self.script.is_empty()
    }
}
