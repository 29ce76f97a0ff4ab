//! Canonical manifest source for a registry.
//!
//! The output is accepted by [`crate::load_manifest_str`] with the same [`LoadConfig`] and reproduces the registry
//! it was rendered from. Names are written as single-spaced command lines.

use examples_core::{ExampleRegistry, flags};

use crate::config::LoadConfig;

const PREAMBLE: &str = "\
#! /usr/bin/env python3
# -*- coding: utf-8 -*-
## -*- Mode: python; py-indent-offset: 4; indent-tabs-mode: nil; coding: utf-8; -*-
";

/// Quote `value` as a double-quoted string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn push_list(out: &mut String, name: &str, rows: Vec<String>) {
    if rows.is_empty() {
        out.push_str(&format!("{} = []\n", name));
        return;
    }
    out.push_str(&format!("{} = [\n", name));
    for row in rows {
        out.push_str(&format!("    ({}),\n", row));
    }
    out.push_str("]\n");
}

/// Render `registry` as manifest source, using the list names from `config`.
pub fn render(registry: &ExampleRegistry, config: &LoadConfig) -> String {
    let mut out = String::from(PREAMBLE);

    out.push_str("\n# Compiled examples to run so that they stay buildable and runnable.\n");
    out.push_str("# Each tuple is\n#\n#     (example_name, do_run, do_valgrind_run).\n");
    let compiled = registry
        .compiled_examples()
        .iter()
        .map(|d| {
            format!(
                "{}, {}, {}",
                quote(&d.command_line()),
                quote(flags::as_str(d.run)),
                quote(flags::as_str(d.valgrind))
            )
        })
        .collect();
    push_list(&mut out, &config.compiled_list, compiled);

    out.push_str("\n# Script examples to run so that they stay runnable.\n");
    out.push_str("# Each tuple is\n#\n#     (example_name, do_run).\n");
    let script = registry
        .script_examples()
        .iter()
        .map(|d| format!("{}, {}", quote(&d.command_line()), quote(flags::as_str(d.run))))
        .collect();
    push_list(&mut out, &config.script_list, script);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
    }

    #[test]
    fn test_empty_lists_render_as_brackets() {
        let out = render(&ExampleRegistry::default(), &LoadConfig::default());
        assert!(out.contains("cpp_examples = []\n"));
        assert!(out.ends_with("python_examples = []\n"));
    }

    #[test]
    fn test_custom_list_names() {
        let registry = ExampleRegistry::from_raw(&[("a", "True", "False")], &[]).unwrap();
        let config = LoadConfig::new().with_compiled_list("c_examples").with_script_list("py_examples");
        let out = render(&registry, &config);
        assert!(out.contains("c_examples = [\n    (\"a\", \"True\", \"False\"),\n]\n"));
        assert!(out.contains("py_examples = []\n"));
    }
}
