//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use examples_core::{ExampleRegistry, PlanMode};

use crate::config::LoadConfig;
use crate::loader::{LoadError, load_manifest_file};
use crate::render::{self, ListKind, OutputFormat, PlanFormat};

use super::{CliError, CliResult, ExitCode};

/// Format a load error with its full diagnostic report.
fn report(error: LoadError) -> String {
    format!("{:?}", miette::Report::new(error))
}

/// Load `manifest`, or the built-in snapshot when no manifest is given.
fn load_registry(manifest: Option<&Path>, config: &LoadConfig) -> CliResult<ExampleRegistry> {
    match manifest {
        Some(path) => load_manifest_file(path, config).map_err(|e| CliError::failure(report(e))),
        None => ExampleRegistry::builtin()
            .map_err(|e| CliError::failure(format!("Error: built-in example snapshot is invalid: {}", e))),
    }
}

/// Print the example lists in the requested format.
pub fn list(manifest: Option<&Path>, format: OutputFormat, kind: ListKind, config: &LoadConfig) -> CliResult<ExitCode> {
    let registry = load_registry(manifest, config)?;
    tracing::info!(
        compiled = registry.compiled_examples().len(),
        script = registry.script_examples().len(),
        "loaded example registry"
    );

    let out = render::render(&registry, format, kind, config)
        .map_err(|e| CliError::failure(format!("Error serializing registry: {}", e)))?;
    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

/// Validate every manifest in `files`, reporting all problems before failing.
pub fn check(files: &[PathBuf], config: &LoadConfig) -> CliResult<ExitCode> {
    let mut failed = 0usize;

    for path in files {
        match load_manifest_file(path, config) {
            Ok(registry) => {
                println!(
                    "{}: ok ({} compiled, {} script)",
                    path.display(),
                    registry.compiled_examples().len(),
                    registry.script_examples().len()
                );
            }
            Err(e) => {
                failed += 1;
                tracing::debug!(path = %path.display(), "manifest failed validation");
                eprintln!("{}", report(e));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::failure(format!(
            "{} of {} manifest(s) failed validation",
            failed,
            files.len()
        )));
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the invocations a harness pass would schedule.
pub fn plan(manifest: Option<&Path>, valgrind: bool, format: PlanFormat, config: &LoadConfig) -> CliResult<ExitCode> {
    let registry = load_registry(manifest, config)?;
    let mode = if valgrind { PlanMode::Valgrind } else { PlanMode::Normal };
    let runs = examples_core::plan(&registry, mode);
    tracing::info!(?mode, planned = runs.len(), "derived run plan");

    let out = match format {
        PlanFormat::Text => render::render_plan_text(&runs),
        PlanFormat::Json => {
            render::render_plan_json(&runs).map_err(|e| CliError::failure(format!("Error serializing plan: {}", e)))?
        }
    };
    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_registry_defaults_to_builtin() {
        let registry = load_registry(None, &LoadConfig::default()).unwrap();
        assert_eq!(registry, ExampleRegistry::builtin().unwrap());
    }

    #[test]
    fn test_load_registry_missing_file_fails() {
        let err = load_registry(Some(Path::new("/nonexistent/examples-to-run.py")), &LoadConfig::default())
            .unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("cannot read manifest"));
    }

    #[test]
    fn test_check_counts_failures() {
        let files = vec![PathBuf::from("/nonexistent/a.py"), PathBuf::from("/nonexistent/b.py")];
        let err = check(&files, &LoadConfig::default()).unwrap_err();
        assert_eq!(err.message, "2 of 2 manifest(s) failed validation");
    }
}
