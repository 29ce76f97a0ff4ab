//! Load manifests into an [`ExampleRegistry`].
//!
//! Loading is where the manifest's configuration errors surface: syntax problems from the parser, entries with the
//! wrong number of fields, flags that are not `"True"`/`"False"`, blank names, lists assigned twice. Every problem
//! becomes a [`ManifestDiagnostic`] labelled at the offending tuple or field, and all of them are returned together.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use examples_core::{EntryError, ExampleDescriptor, ExampleKind, ExampleRegistry, ScriptExampleDescriptor};
use examples_syntax::ast::{Assignment, Spanned};
use examples_syntax::ManifestDiagnostic;
use miette::Diagnostic;
use thiserror::Error;

use crate::config::LoadConfig;

/// Errors that occur while loading a manifest
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("cannot read manifest '{}': {source}", .path.display())]
    #[diagnostic(code(examples_to_run::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest '{name}' has {} problem(s)", .diagnostics.len())]
    #[diagnostic(code(examples_to_run::invalid_manifest))]
    Invalid {
        name: String,
        #[related]
        diagnostics: Vec<ManifestDiagnostic>,
    },
}

impl LoadError {
    /// Diagnostics carried by an invalid manifest (empty for I/O errors).
    pub fn diagnostics(&self) -> &[ManifestDiagnostic] {
        match self {
            LoadError::Invalid { diagnostics, .. } => diagnostics,
            LoadError::Io { .. } => &[],
        }
    }
}

/// Read and load a manifest file.
///
/// ## Errors
/// - [`LoadError::Io`] if the file cannot be read.
/// - [`LoadError::Invalid`] if the content does not load (see [`load_manifest_str`]).
pub fn load_manifest_file(path: &Path, config: &LoadConfig) -> Result<ExampleRegistry, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_manifest_str(&path.display().to_string(), &source, config)
}

/// Load manifest source text.
///
/// ## Parameters
/// - `name`: display name for diagnostics (usually the file path).
/// - `source`: manifest text.
/// - `config`: list names and strictness.
///
/// ## Notes
/// - A list the manifest does not assign loads as empty, with a warning.
/// - Entries naming the same command line twice are kept, with a warning.
#[tracing::instrument(skip_all, fields(manifest = name, source_len = source.len()))]
pub fn load_manifest_str(name: &str, source: &str, config: &LoadConfig) -> Result<ExampleRegistry, LoadError> {
    let manifest = examples_syntax::parse_source(source).map_err(|errors| LoadError::Invalid {
        name: name.to_string(),
        diagnostics: errors.into_iter().map(|e| e.into_diagnostic(name, source)).collect(),
    })?;

    let mut ctx = LoadContext {
        name,
        source,
        diagnostics: Vec::new(),
    };

    let mut compiled_list: Option<&Spanned<Assignment>> = None;
    let mut script_list: Option<&Spanned<Assignment>> = None;

    for assignment in &manifest.assignments {
        let target = assignment.node.target.node.as_str();
        let slot = if target == config.compiled_list {
            &mut compiled_list
        } else if target == config.script_list {
            &mut script_list
        } else {
            if config.reject_unknown_lists {
                let diagnostic = ctx
                    .diagnostic(format!("unknown list '{}'", target))
                    .with_label(assignment.node.target.span, "not an example list")
                    .with_help(format!(
                        "expected `{}` or `{}`",
                        config.compiled_list, config.script_list
                    ));
                ctx.diagnostics.push(diagnostic);
            } else {
                tracing::debug!(list = target, "ignoring unknown assignment");
            }
            continue;
        };

        if let Some(previous) = *slot {
            let diagnostic = ctx
                .diagnostic(format!("list '{}' is assigned more than once", target))
                .with_label(assignment.node.target.span, "assigned again here")
                .with_label(previous.node.target.span, "first assigned here");
            ctx.diagnostics.push(diagnostic);
        } else {
            *slot = Some(assignment);
        }
    }

    let compiled = match compiled_list {
        Some(list) => ctx.convert(list, ExampleKind::Compiled, |fields: &[&str]| {
            ExampleDescriptor::from_fields(fields)
        }),
        None => {
            tracing::warn!(list = %config.compiled_list, "manifest does not define the list; treating it as empty");
            Vec::new()
        }
    };

    let script = match script_list {
        Some(list) => ctx.convert(list, ExampleKind::Script, |fields: &[&str]| {
            ScriptExampleDescriptor::from_fields(fields)
        }),
        None => {
            tracing::warn!(list = %config.script_list, "manifest does not define the list; treating it as empty");
            Vec::new()
        }
    };

    if !ctx.diagnostics.is_empty() {
        return Err(LoadError::Invalid {
            name: name.to_string(),
            diagnostics: ctx.diagnostics,
        });
    }

    let registry = ExampleRegistry::new(compiled, script);
    warn_on_repeated_command_lines(&registry);
    tracing::debug!(
        compiled = registry.compiled_examples().len(),
        script = registry.script_examples().len(),
        "loaded manifest"
    );
    Ok(registry)
}

struct LoadContext<'a> {
    name: &'a str,
    source: &'a str,
    diagnostics: Vec<ManifestDiagnostic>,
}

impl LoadContext<'_> {
    fn diagnostic(&self, message: impl Into<String>) -> ManifestDiagnostic {
        ManifestDiagnostic::new(message, self.name, self.source)
    }

    /// Convert every entry of a list, recording a diagnostic for each one that fails.
    fn convert<T>(
        &mut self,
        list: &Spanned<Assignment>,
        kind: ExampleKind,
        from_fields: impl Fn(&[&str]) -> Result<T, EntryError>,
    ) -> Vec<T> {
        let list_name = list.node.target.node.as_str();
        let mut out = Vec::with_capacity(list.node.entries.len());

        for (index, entry) in list.node.entries.iter().enumerate() {
            let values = entry.node.values();
            match from_fields(&values) {
                Ok(descriptor) => out.push(descriptor),
                Err(error) => {
                    let span = error
                        .column()
                        .and_then(|column| entry.node.fields.get(column))
                        .map_or(entry.span, |field| field.span);
                    let diagnostic = self
                        .diagnostic(format!("{} entry {}: {}", list_name, index, error))
                        .with_label(span, label_for(&error))
                        .with_help(help_for(&error, kind));
                    self.diagnostics.push(diagnostic);
                }
            }
        }

        out
    }
}

fn label_for(error: &EntryError) -> &'static str {
    match error {
        EntryError::Arity { .. } => "wrong number of fields",
        EntryError::InvalidFlag { .. } => "not a textual boolean",
        EntryError::EmptyName { .. } => "empty example name",
    }
}

fn help_for(error: &EntryError, kind: ExampleKind) -> String {
    match error {
        EntryError::Arity { .. } => match kind {
            ExampleKind::Compiled => "compiled entries are (example_name, do_run, do_valgrind_run)".to_string(),
            ExampleKind::Script => "script entries are (example_name, do_run)".to_string(),
        },
        EntryError::InvalidFlag { .. } => "flags are spelled \"True\" or \"False\"".to_string(),
        EntryError::EmptyName { .. } => "name the example program, optionally followed by its arguments".to_string(),
    }
}

fn warn_on_repeated_command_lines(registry: &ExampleRegistry) {
    let mut seen = HashSet::new();
    let command_lines = registry
        .compiled_examples()
        .iter()
        .map(ExampleDescriptor::command_line)
        .chain(
            registry
                .script_examples()
                .iter()
                .map(ScriptExampleDescriptor::command_line),
        );
    for command_line in command_lines {
        if !seen.insert(command_line.clone()) {
            tracing::warn!(example = %command_line, "example is listed more than once");
        }
    }
}
