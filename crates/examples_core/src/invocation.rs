//! Split example names into a program and its invocation arguments.
//!
//! Manifest names may carry flags in the same string, e.g.
//! `lena-radio-link-failure-netsimulyzer --simTime=20 --numberOfEnbs=2`. An [`Invocation`] keeps the program name
//! and the ordered argument list apart.

use std::fmt;

use thiserror::Error;

/// Program name plus ordered arguments.
///
/// ## Notes
/// - Deserializing goes through [`Invocation::from_parts`], so only invocations that [`Invocation::parse`] could
///   have produced are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInvocation"))]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// An invocation whose parts could not come from splitting a manifest name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("program name is empty")]
    EmptyProgram,

    #[error("{0:?} is not a single whitespace-free token")]
    NotAToken(String),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInvocation {
    program: String,
    #[serde(default)]
    args: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInvocation> for Invocation {
    type Error = InvocationError;

    fn try_from(raw: RawInvocation) -> Result<Self, Self::Error> {
        Invocation::from_parts(raw.program, raw.args)
    }
}

impl Invocation {
    /// Split a manifest name on whitespace.
    ///
    /// The program is the text before the first whitespace run; each following whitespace-separated token becomes
    /// one argument, in order. Leading and trailing whitespace is ignored.
    ///
    /// ## Examples
    /// ```rust
    /// use examples_core::Invocation;
    ///
    /// let inv = Invocation::parse("wifi-bianchi-netsimulyzer --trials=1  --visual=true");
    /// assert_eq!(inv.program, "wifi-bianchi-netsimulyzer");
    /// assert_eq!(inv.args, vec!["--trials=1", "--visual=true"]);
    /// ```
    pub fn parse(name: &str) -> Self {
        let mut tokens = name.split_whitespace();
        let program = tokens.next().unwrap_or_default().to_string();
        let args = tokens.map(str::to_string).collect();
        Self { program, args }
    }

    /// Build an invocation from an already split program and arguments.
    ///
    /// ## Errors
    /// - [`InvocationError::EmptyProgram`] when `program` is empty.
    /// - [`InvocationError::NotAToken`] when the program or an argument is empty or contains whitespace.
    pub fn from_parts(program: impl Into<String>, args: Vec<String>) -> Result<Self, InvocationError> {
        let program = program.into();
        if program.is_empty() {
            return Err(InvocationError::EmptyProgram);
        }
        if let Some(bad) = std::iter::once(&program)
            .chain(&args)
            .find(|part| part.is_empty() || part.chars().any(char::is_whitespace))
        {
            return Err(InvocationError::NotAToken(bad.clone()));
        }
        Ok(Self { program, args })
    }

    /// Whether the program name is empty (the source name was blank).
    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }

    /// Program and arguments joined by single spaces.
    pub fn command_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_has_no_args() {
        let inv = Invocation::parse("mobility-buildings-example");
        assert_eq!(inv, Invocation::from_parts("mobility-buildings-example", Vec::new()).unwrap());
        assert_eq!(inv.command_line(), "mobility-buildings-example");
    }

    #[test]
    fn test_arguments_keep_order() {
        let inv = Invocation::parse("lena-radio-link-failure-netsimulyzer --simTime=20 --numberOfEnbs=2 --visual=true");
        assert_eq!(inv.program, "lena-radio-link-failure-netsimulyzer");
        assert_eq!(inv.args, vec!["--simTime=20", "--numberOfEnbs=2", "--visual=true"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let inv = Invocation::parse("  prog \t --a=1\n--b ");
        assert_eq!(inv.program, "prog");
        assert_eq!(inv.args, vec!["--a=1", "--b"]);
        assert_eq!(inv.command_line(), "prog --a=1 --b");
    }

    #[test]
    fn test_blank_name_is_empty() {
        assert!(Invocation::parse("").is_empty());
        assert!(Invocation::parse("   ").is_empty());
    }

    #[test]
    fn test_from_parts_accepts_split_output() {
        let inv = Invocation::parse("wifi-bianchi-netsimulyzer --trials=1");
        let rebuilt = Invocation::from_parts(inv.program.clone(), inv.args.clone()).unwrap();
        assert_eq!(rebuilt, inv);
    }

    #[test]
    fn test_from_parts_rejects_what_split_cannot_produce() {
        assert_eq!(
            Invocation::from_parts("", vec!["--x".to_string()]),
            Err(InvocationError::EmptyProgram)
        );
        assert_eq!(
            Invocation::from_parts("prog --x", Vec::new()),
            Err(InvocationError::NotAToken("prog --x".to_string()))
        );
        assert_eq!(
            Invocation::from_parts("prog", vec![String::new()]),
            Err(InvocationError::NotAToken(String::new()))
        );
    }
}
