//! Derive the invocations a harness pass would schedule.
//!
//! The manifest header documents the contract: `do_run` decides whether an example is executed at all, and
//! `do_valgrind_run` decides whether it is kept when the pass runs everything under the memory checker. This module
//! only lists the resulting invocations; it never runs anything.

use crate::descriptor::ExampleKind;
use crate::invocation::Invocation;
use crate::registry::ExampleRegistry;

/// Skip reason for compiled examples opted out of memory-checker passes.
pub const VALGRIND_OPT_OUT_REASON: &str = "skip in valgrind runs";

/// Skip reason for script examples during memory-checker passes.
pub const VALGRIND_SCRIPT_REASON: &str = "skip script examples in valgrind runs";

/// Kind of harness pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanMode {
    /// Run every enabled example directly.
    #[default]
    Normal,
    /// Run every enabled example under the memory checker.
    Valgrind,
}

/// What the harness does with one planned example.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "disposition", content = "reason", rename_all = "snake_case"))]
pub enum RunDisposition {
    Run,
    RunUnderValgrind,
    Skip(String),
}

/// One entry of a run plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlannedRun {
    pub kind: ExampleKind,
    pub invocation: Invocation,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub disposition: RunDisposition,
}

impl PlannedRun {
    pub fn is_skipped(&self) -> bool {
        matches!(self.disposition, RunDisposition::Skip(_))
    }
}

/// List the invocations for a pass over `registry`.
///
/// ## Notes
/// - Entries with `run == false` are left out entirely.
/// - Compiled examples come first, then script examples; manifest order is kept within each list.
pub fn plan(registry: &ExampleRegistry, mode: PlanMode) -> Vec<PlannedRun> {
    let compiled = registry
        .compiled_examples()
        .iter()
        .filter(|d| d.run)
        .map(|d| PlannedRun {
            kind: ExampleKind::Compiled,
            invocation: d.invocation.clone(),
            disposition: match mode {
                PlanMode::Normal => RunDisposition::Run,
                PlanMode::Valgrind if d.valgrind => RunDisposition::RunUnderValgrind,
                PlanMode::Valgrind => RunDisposition::Skip(VALGRIND_OPT_OUT_REASON.to_string()),
            },
        });

    let script = registry
        .script_examples()
        .iter()
        .filter(|d| d.run)
        .map(|d| PlannedRun {
            kind: ExampleKind::Script,
            invocation: d.invocation.clone(),
            disposition: match mode {
                PlanMode::Normal => RunDisposition::Run,
                PlanMode::Valgrind => RunDisposition::Skip(VALGRIND_SCRIPT_REASON.to_string()),
            },
        });

    compiled.chain(script).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExampleRegistry {
        ExampleRegistry::from_raw(
            &[
                ("a --x=1", "True", "True"),
                ("b", "False", "True"),
                ("c", "True", "False"),
            ],
            &[("s.py", "True"), ("t.py", "False")],
        )
        .unwrap()
    }

    #[test]
    fn test_normal_pass_drops_disabled() {
        let runs = plan(&sample(), PlanMode::Normal);
        let names: Vec<_> = runs.iter().map(|r| r.invocation.command_line()).collect();
        assert_eq!(names, vec!["a --x=1", "c", "s.py"]);
        assert!(runs.iter().all(|r| r.disposition == RunDisposition::Run));
    }

    #[test]
    fn test_valgrind_pass_respects_opt_out() {
        let runs = plan(&sample(), PlanMode::Valgrind);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].disposition, RunDisposition::RunUnderValgrind);
        assert_eq!(runs[1].disposition, RunDisposition::Skip(VALGRIND_OPT_OUT_REASON.to_string()));
        assert_eq!(runs[2].kind, ExampleKind::Script);
        assert!(runs[2].is_skipped());
    }

    #[test]
    fn test_builtin_valgrind_pass_runs_everything() {
        let registry = ExampleRegistry::builtin().unwrap();
        let runs = plan(&registry, PlanMode::Valgrind);
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().all(|r| r.disposition == RunDisposition::RunUnderValgrind));
    }

    #[test]
    fn test_empty_registry_plans_nothing() {
        assert!(plan(&ExampleRegistry::default(), PlanMode::Normal).is_empty());
    }
}
