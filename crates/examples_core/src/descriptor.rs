//! Typed example descriptors.
//!
//! Raw manifest entries are tuples of strings: `(name, do_run, do_valgrind_run)` for compiled examples and
//! `(name, do_run)` for script examples. The descriptors here are what those tuples become once flags are resolved
//! and names are split into an [`Invocation`].

use std::fmt;

use crate::errors::{EntryError, FlagField};
use crate::flags;
use crate::invocation::Invocation;

/// Which list an example belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExampleKind {
    /// Example written in the compiled systems language (`cpp_examples`).
    Compiled,
    /// Example written in the scripting language (`python_examples`).
    Script,
}

impl ExampleKind {
    /// Number of fields a raw entry of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            ExampleKind::Compiled => 3,
            ExampleKind::Script => 2,
        }
    }

    /// Short lowercase spelling used in CLI flags and output.
    pub fn as_str(self) -> &'static str {
        match self {
            ExampleKind::Compiled => "compiled",
            ExampleKind::Script => "script",
        }
    }
}

impl fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} example", self.as_str())
    }
}

/// One compiled-language example.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExampleDescriptor {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub invocation: Invocation,
    /// Whether the harness executes the example.
    pub run: bool,
    /// Whether the harness additionally executes it under the memory checker.
    pub valgrind: bool,
}

impl ExampleDescriptor {
    /// Build a descriptor from the three raw fields `(name, do_run, do_valgrind_run)`.
    ///
    /// ## Errors
    /// - [`EntryError::Arity`] when `fields` does not hold exactly three values.
    /// - [`EntryError::EmptyName`] when the name is blank.
    /// - [`EntryError::InvalidFlag`] when a flag is neither `"True"` nor `"False"`.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, EntryError> {
        let [name, run, valgrind] = fields else {
            return Err(EntryError::Arity {
                kind: ExampleKind::Compiled,
                expected: ExampleKind::Compiled.arity(),
                found: fields.len(),
            });
        };

        Ok(Self {
            invocation: parse_name(ExampleKind::Compiled, name.as_ref())?,
            run: parse_flag(FlagField::Run, run.as_ref())?,
            valgrind: parse_flag(FlagField::Valgrind, valgrind.as_ref())?,
        })
    }

    /// Program name without arguments.
    pub fn name(&self) -> &str {
        &self.invocation.program
    }

    pub fn args(&self) -> &[String] {
        &self.invocation.args
    }

    /// The name as the manifest spells it: program followed by arguments.
    pub fn command_line(&self) -> String {
        self.invocation.command_line()
    }

    /// Raw textual fields, in manifest order.
    pub fn to_fields(&self) -> [String; 3] {
        [
            self.command_line(),
            flags::as_str(self.run).to_string(),
            flags::as_str(self.valgrind).to_string(),
        ]
    }
}

/// One scripting-language example. Scripts have no memory-checker column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptExampleDescriptor {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub invocation: Invocation,
    pub run: bool,
}

impl ScriptExampleDescriptor {
    /// Build a descriptor from the two raw fields `(name, do_run)`.
    ///
    /// ## Errors
    /// Same conditions as [`ExampleDescriptor::from_fields`], with an expected arity of two.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, EntryError> {
        let [name, run] = fields else {
            return Err(EntryError::Arity {
                kind: ExampleKind::Script,
                expected: ExampleKind::Script.arity(),
                found: fields.len(),
            });
        };

        Ok(Self {
            invocation: parse_name(ExampleKind::Script, name.as_ref())?,
            run: parse_flag(FlagField::Run, run.as_ref())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.invocation.program
    }

    pub fn args(&self) -> &[String] {
        &self.invocation.args
    }

    pub fn command_line(&self) -> String {
        self.invocation.command_line()
    }

    pub fn to_fields(&self) -> [String; 2] {
        [self.command_line(), flags::as_str(self.run).to_string()]
    }
}

fn parse_name(kind: ExampleKind, name: &str) -> Result<Invocation, EntryError> {
    let invocation = Invocation::parse(name);
    if invocation.is_empty() {
        return Err(EntryError::EmptyName { kind });
    }
    Ok(invocation)
}

fn parse_flag(field: FlagField, text: &str) -> Result<bool, EntryError> {
    flags::from_str(text).ok_or_else(|| EntryError::InvalidFlag {
        field,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_from_fields() {
        let desc = ExampleDescriptor::from_fields(&["outdoor-random-walk-example-netsimulyzer", "True", "False"]).unwrap();
        assert_eq!(desc.name(), "outdoor-random-walk-example-netsimulyzer");
        assert!(desc.args().is_empty());
        assert!(desc.run);
        assert!(!desc.valgrind);
    }

    #[test]
    fn test_compiled_wrong_arity() {
        let err = ExampleDescriptor::from_fields(&["a", "True"]).unwrap_err();
        assert_eq!(
            err,
            EntryError::Arity {
                kind: ExampleKind::Compiled,
                expected: 3,
                found: 2
            }
        );

        let err = ExampleDescriptor::from_fields(&["a", "True", "True", "True"]).unwrap_err();
        assert!(matches!(err, EntryError::Arity { found: 4, .. }));
    }

    #[test]
    fn test_compiled_bad_valgrind_flag() {
        let err = ExampleDescriptor::from_fields(&["a", "True", "true"]).unwrap_err();
        assert_eq!(
            err,
            EntryError::InvalidFlag {
                field: FlagField::Valgrind,
                value: "true".to_string()
            }
        );
    }

    #[test]
    fn test_run_flag_checked_before_valgrind() {
        let err = ExampleDescriptor::from_fields(&["a", "no", "no"]).unwrap_err();
        assert!(matches!(err, EntryError::InvalidFlag { field: FlagField::Run, .. }));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = ScriptExampleDescriptor::from_fields(&["  ", "True"]).unwrap_err();
        assert_eq!(err, EntryError::EmptyName { kind: ExampleKind::Script });
    }

    #[test]
    fn test_script_wrong_arity() {
        let err = ScriptExampleDescriptor::from_fields(&["a", "True", "True"]).unwrap_err();
        assert_eq!(
            err,
            EntryError::Arity {
                kind: ExampleKind::Script,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_to_fields_restores_text() {
        let fields = ["lena-radio-link-failure-netsimulyzer --simTime=20", "False", "True"];
        let desc = ExampleDescriptor::from_fields(&fields).unwrap();
        assert_eq!(desc.to_fields(), fields.map(str::to_string));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let fields = vec!["sample.py".to_string(), "True".to_string()];
        let desc = ScriptExampleDescriptor::from_fields(&fields).unwrap();
        assert_eq!(desc.name(), "sample.py");
        assert_eq!(desc.to_fields(), ["sample.py".to_string(), "True".to_string()]);
    }
}
