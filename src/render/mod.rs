//! Render a registry or a run plan for humans and tools.
//!
//! ## Formats
//!
//! - `text` - aligned listing grouped by kind
//! - `json` - `serde_json` output with native booleans and split arguments
//! - `markdown` - generated reference tables
//! - `manifest` - canonical manifest source, loadable again

pub mod manifest;
pub mod markdown;

use examples_core::{ExampleDescriptor, ExampleRegistry, PlannedRun, RunDisposition, ScriptExampleDescriptor};
use serde::Serialize;

use crate::config::LoadConfig;

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Manifest,
}

/// Which lists to include in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListKind {
    #[default]
    All,
    Compiled,
    Script,
}

impl ListKind {
    pub fn includes_compiled(self) -> bool {
        matches!(self, ListKind::All | ListKind::Compiled)
    }

    pub fn includes_script(self) -> bool {
        matches!(self, ListKind::All | ListKind::Script)
    }
}

/// Render `registry` in `format`.
///
/// ## Notes
/// - `kind` narrows text and JSON output. Markdown and manifest output always cover both lists, since a manifest
///   missing a list would load differently.
///
/// ## Errors
/// Only JSON serialization can fail.
pub fn render(
    registry: &ExampleRegistry,
    format: OutputFormat,
    kind: ListKind,
    config: &LoadConfig,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(registry, kind)),
        OutputFormat::Json => render_json(registry, kind),
        OutputFormat::Markdown => Ok(markdown::render(registry)),
        OutputFormat::Manifest => Ok(manifest::render(registry, config)),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Aligned plain-text listing.
pub fn render_text(registry: &ExampleRegistry, kind: ListKind) -> String {
    let mut sections = Vec::new();

    if kind.includes_compiled() {
        let examples = registry.compiled_examples();
        let mut out = format!("compiled examples: {}\n", examples.len());
        if examples.is_empty() {
            out.push_str("  (none)\n");
        } else {
            out.push_str(&format!("  {:<4}{:<9}{}\n", "run", "valgrind", "example"));
            for example in examples {
                out.push_str(&format!(
                    "  {:<4}{:<9}{}\n",
                    yes_no(example.run),
                    yes_no(example.valgrind),
                    example.command_line()
                ));
            }
        }
        sections.push(out);
    }

    if kind.includes_script() {
        let examples = registry.script_examples();
        let mut out = format!("script examples: {}\n", examples.len());
        if examples.is_empty() {
            out.push_str("  (none)\n");
        } else {
            out.push_str(&format!("  {:<4}{}\n", "run", "example"));
            for example in examples {
                out.push_str(&format!("  {:<4}{}\n", yes_no(example.run), example.command_line()));
            }
        }
        sections.push(out);
    }

    sections.join("\n")
}

#[derive(Serialize)]
struct JsonListing<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    compiled: Option<&'a [ExampleDescriptor]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<&'a [ScriptExampleDescriptor]>,
}

/// Pretty-printed JSON listing.
pub fn render_json(registry: &ExampleRegistry, kind: ListKind) -> Result<String, serde_json::Error> {
    let listing = JsonListing {
        compiled: kind.includes_compiled().then(|| registry.compiled_examples()),
        script: kind.includes_script().then(|| registry.script_examples()),
    };
    serde_json::to_string_pretty(&listing)
}

/// Output format for `plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
}

/// One line per planned invocation, then a summary line.
pub fn render_plan_text(runs: &[PlannedRun]) -> String {
    let mut out = String::new();
    for run in runs {
        let status = match &run.disposition {
            RunDisposition::Run => "RUN",
            RunDisposition::RunUnderValgrind => "VALGRIND",
            RunDisposition::Skip(_) => "SKIP",
        };
        out.push_str(&format!("{:<10}{:<9}{}", status, run.kind.as_str(), run.invocation));
        if let RunDisposition::Skip(reason) = &run.disposition {
            out.push_str(&format!("  ({})", reason));
        }
        out.push('\n');
    }

    let skipped = runs.iter().filter(|r| r.is_skipped()).count();
    out.push_str(&format!("{} planned, {} skipped\n", runs.len() - skipped, skipped));
    out
}

pub fn render_plan_json(runs: &[PlannedRun]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(runs)
}
