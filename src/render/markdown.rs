//! Markdown reference tables for a registry.
//!
//! ## Notes
//! - The output is a derived artifact. Edit the manifest and regenerate instead of editing the tables.

use examples_core::ExampleRegistry;

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

fn check(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Inline code that survives inside a table cell.
///
/// Text containing `` ` `` or `|` cannot be a backtick code span in a table, so it becomes a `<code>` element with
/// those characters written as HTML entities.
fn code(text: &str) -> String {
    if !text.contains(['`', '|']) {
        return format!("`{}`", text);
    }
    let mut out = String::from("<code>");
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '`' => out.push_str("&#96;"),
            '|' => out.push_str("&#124;"),
            c => out.push(c),
        }
    }
    out.push_str("</code>");
    out
}

/// Arguments as inline code, or `-` when there are none.
fn args_cell(args: &[String]) -> String {
    if args.is_empty() {
        "-".to_string()
    } else {
        args.iter().map(|a| code(a)).collect::<Vec<_>>().join(" ")
    }
}

/// Render both lists as Markdown tables.
pub fn render(registry: &ExampleRegistry) -> String {
    let mut out = String::new();
    out.push_str("# Examples to run\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    Update the examples manifest and regenerate it instead.\n");

    render_compiled_section(&mut out, registry);
    render_script_section(&mut out, registry);

    trim_trailing_newlines_to_at_most_two(&mut out);
    if out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn render_compiled_section(out: &mut String, registry: &ExampleRegistry) {
    start_section(out, "## Compiled examples");
    let examples = registry.compiled_examples();
    if examples.is_empty() {
        out.push_str("_None._\n");
        return;
    }

    out.push_str("| Example | Arguments | Run | Valgrind |\n");
    out.push_str("|---|---|---|---|\n");
    for example in examples {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            code(example.name()),
            args_cell(example.args()),
            check(example.run),
            check(example.valgrind)
        ));
    }
}

fn render_script_section(out: &mut String, registry: &ExampleRegistry) {
    start_section(out, "## Script examples");
    let examples = registry.script_examples();
    if examples.is_empty() {
        out.push_str("_None._\n");
        return;
    }

    out.push_str("| Example | Arguments | Run |\n");
    out.push_str("|---|---|---|\n");
    for example in examples {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            code(example.name()),
            args_cell(example.args()),
            check(example.run)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_spacing() {
        let mut out = String::from("intro\n\n\n\n");
        start_section(&mut out, "## A");
        assert_eq!(out, "intro\n\n## A\n\n");
    }

    #[test]
    fn test_empty_registry() {
        let out = render(&ExampleRegistry::default());
        assert!(out.contains("## Compiled examples\n\n_None._\n\n## Script examples\n\n_None._\n"));
        assert!(out.ends_with("_None._\n"));
    }

    #[test]
    fn test_rows_split_arguments() {
        let registry = ExampleRegistry::from_raw(&[("a --x=1 --y", "True", "False")], &[("b.py", "True")]).unwrap();
        let out = render(&registry);
        assert!(out.contains("| `a` | `--x=1` `--y` | yes | no |\n"));
        assert!(out.contains("| `b.py` | - | yes |\n"));
    }

    #[test]
    fn test_code_cell_escapes_table_breakers() {
        assert_eq!(code("--x=1"), "`--x=1`");
        assert_eq!(code("a|b"), "<code>a&#124;b</code>");
        assert_eq!(code("`x`<y>&"), "<code>&#96;x&#96;&lt;y&gt;&amp;</code>");
    }

    #[test]
    fn test_pipe_in_manifest_name_keeps_row_shape() {
        let registry = ExampleRegistry::from_raw(&[("a|b --sep=`|`", "True", "True")], &[]).unwrap();
        let out = render(&registry);
        let row = out.lines().find(|l| l.contains("a&#124;b")).unwrap();
        assert_eq!(row, "| <code>a&#124;b</code> | <code>--sep=&#96;&#124;&#96;</code> | yes | yes |");
        assert_eq!(row.matches('|').count(), 5);
    }
}
