//! Manifest frontend for `examples-to-run` files: lexer, parser, AST, diagnostics.
//!
//! The manifest is distributed as a small Python-literal file: top-level assignments of lists of string tuples.
//! This crate accepts exactly that subset and reports everything else as a spanned error.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not check tuple arity or flag spellings. That happens when
//!   the loader turns the AST into an `examples_core::ExampleRegistry`.
//! - Spans are byte offsets into the source text.
//!
//! ## Examples
//! ```rust
//! use examples_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("cpp_examples = [(\"a\", \"True\", \"False\")]\n").unwrap();
//! let manifest = parser::parse(&tokens).unwrap();
//! assert_eq!(manifest.assignments.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;

pub use ast::{Assignment, Entry, Manifest, Span, Spanned};
pub use diagnostics::{ManifestDiagnostic, SyntaxError};

/// Lex and parse a manifest source in one step.
///
/// ## Errors
/// Returns every lexer error if lexing fails, otherwise every parser error.
pub fn parse_source(source: &str) -> Result<Manifest, Vec<SyntaxError>> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
