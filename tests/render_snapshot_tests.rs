//! Golden snapshot tests for rendered output
//!
//! Every format is rendered from the built-in registry, so a change to the example list or to a renderer shows up
//! here for review.
//!
//! Run with: `cargo test --test render_snapshot_tests`
//! Review changes: `cargo insta review`

use examples_core::{PlanMode, plan};
use examples_to_run::render::{self, render_plan_text};
use examples_to_run::{ExampleRegistry, ListKind, LoadConfig, OutputFormat, load_manifest_str};

fn builtin() -> ExampleRegistry {
    ExampleRegistry::builtin().expect("builtin snapshot should load")
}

fn render_builtin(format: OutputFormat, kind: ListKind) -> String {
    render::render(&builtin(), format, kind, &LoadConfig::default()).expect("render failed")
}

#[test]
fn test_text_listing() {
    insta::assert_snapshot!(render_builtin(OutputFormat::Text, ListKind::All), @r"
compiled examples: 4
  run valgrind example
  yes yes      mobility-buildings-example
  yes yes      lena-radio-link-failure-netsimulyzer --simTime=20 --numberOfEnbs=2 --visual=true
  yes yes      outdoor-random-walk-example-netsimulyzer
  yes yes      wifi-bianchi-netsimulyzer --trials=1 --nMinStas=10 --nMaxStas=10 --visual=true

script examples: 0
  (none)
");
}

#[test]
fn test_markdown_reference() {
    insta::assert_snapshot!(render_builtin(OutputFormat::Markdown, ListKind::All), @r#"
# Examples to run

!!! warning "Generated file"
    Do not edit this page by hand.
    Update the examples manifest and regenerate it instead.

## Compiled examples

| Example | Arguments | Run | Valgrind |
|---|---|---|---|
| `mobility-buildings-example` | - | yes | yes |
| `lena-radio-link-failure-netsimulyzer` | `--simTime=20` `--numberOfEnbs=2` `--visual=true` | yes | yes |
| `outdoor-random-walk-example-netsimulyzer` | - | yes | yes |
| `wifi-bianchi-netsimulyzer` | `--trials=1` `--nMinStas=10` `--nMaxStas=10` `--visual=true` | yes | yes |

## Script examples

_None._
"#);
}

#[test]
fn test_manifest_source() {
    insta::assert_snapshot!(render_builtin(OutputFormat::Manifest, ListKind::All), @r#"
#! /usr/bin/env python3
# -*- coding: utf-8 -*-
## -*- Mode: python; py-indent-offset: 4; indent-tabs-mode: nil; coding: utf-8; -*-

# Compiled examples to run so that they stay buildable and runnable.
# Each tuple is
#
#     (example_name, do_run, do_valgrind_run).
cpp_examples = [
    ("mobility-buildings-example", "True", "True"),
    ("lena-radio-link-failure-netsimulyzer --simTime=20 --numberOfEnbs=2 --visual=true", "True", "True"),
    ("outdoor-random-walk-example-netsimulyzer", "True", "True"),
    ("wifi-bianchi-netsimulyzer --trials=1 --nMinStas=10 --nMaxStas=10 --visual=true", "True", "True"),
]

# Script examples to run so that they stay runnable.
# Each tuple is
#
#     (example_name, do_run).
python_examples = []
"#);
}

#[test]
fn test_json_listing() {
    insta::assert_snapshot!(render_builtin(OutputFormat::Json, ListKind::Compiled), @r#"
{
  "compiled": [
    {
      "program": "mobility-buildings-example",
      "args": [],
      "run": true,
      "valgrind": true
    },
    {
      "program": "lena-radio-link-failure-netsimulyzer",
      "args": [
        "--simTime=20",
        "--numberOfEnbs=2",
        "--visual=true"
      ],
      "run": true,
      "valgrind": true
    },
    {
      "program": "outdoor-random-walk-example-netsimulyzer",
      "args": [],
      "run": true,
      "valgrind": true
    },
    {
      "program": "wifi-bianchi-netsimulyzer",
      "args": [
        "--trials=1",
        "--nMinStas=10",
        "--nMaxStas=10",
        "--visual=true"
      ],
      "run": true,
      "valgrind": true
    }
  ]
}
"#);
}

#[test]
fn test_normal_plan() {
    insta::assert_snapshot!(render_plan_text(&plan(&builtin(), PlanMode::Normal)), @r"
RUN       compiled mobility-buildings-example
RUN       compiled lena-radio-link-failure-netsimulyzer --simTime=20 --numberOfEnbs=2 --visual=true
RUN       compiled outdoor-random-walk-example-netsimulyzer
RUN       compiled wifi-bianchi-netsimulyzer --trials=1 --nMinStas=10 --nMaxStas=10 --visual=true
4 planned, 0 skipped
");
}

#[test]
fn test_valgrind_plan_with_opt_outs() {
    let source = r#"
cpp_examples = [
    ("mobility-buildings-example", "True", "True"),
    ("wifi-bianchi-netsimulyzer --trials=1", "True", "False"),
    ("disabled-example", "False", "True"),
]
python_examples = [("sample-simulator.py", "True")]
"#;
    let registry = load_manifest_str("plan.py", source, &LoadConfig::default()).unwrap();
    insta::assert_snapshot!(render_plan_text(&plan(&registry, PlanMode::Valgrind)), @r"
VALGRIND  compiled mobility-buildings-example
SKIP      compiled wifi-bianchi-netsimulyzer --trials=1  (skip in valgrind runs)
SKIP      script   sample-simulator.py  (skip script examples in valgrind runs)
1 planned, 2 skipped
");
}
