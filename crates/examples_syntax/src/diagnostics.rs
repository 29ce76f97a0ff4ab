//! Errors and renderable diagnostics for manifest files.
//!
//! [`SyntaxError`] is the lightweight error the lexer and parser collect. [`ManifestDiagnostic`] pairs any spanned
//! message with the source text so `miette` can draw it.

use miette::{Diagnostic, LabeledSpan, NamedSource};
use thiserror::Error;

use crate::ast::Span;

/// A lexer or parser error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    pub hints: Vec<String>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Attach the source so the error can be rendered.
    pub fn into_diagnostic(self, name: &str, source: &str) -> ManifestDiagnostic {
        let help = (!self.hints.is_empty()).then(|| self.hints.join("\n"));
        ManifestDiagnostic::new(self.message, name, source)
            .with_label(self.span, "here")
            .with_help_opt(help)
    }
}

/// A renderable problem in a manifest file.
///
/// ## Notes
/// - Rendering goes through `miette::Report`; with the `fancy` feature this prints the source snippet with labels.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(examples_to_run::manifest))]
pub struct ManifestDiagnostic {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label(collection)]
    pub labels: Vec<LabeledSpan>,
    #[help]
    pub help: Option<String>,
}

impl ManifestDiagnostic {
    pub fn new(message: impl Into<String>, name: &str, source: &str) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, source.to_string()),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn with_label(mut self, span: Span, text: impl Into<String>) -> Self {
        self.labels.push(LabeledSpan::new_with_span(Some(text.into()), span));
        self
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        self.with_help_opt(Some(help.into()))
    }

    fn with_help_opt(mut self, help: Option<String>) -> Self {
        self.help = help;
        self
    }

    /// Byte offsets of every labelled span.
    pub fn label_spans(&self) -> Vec<Span> {
        self.labels
            .iter()
            .map(|l| Span::new(l.offset(), l.offset() + l.len()))
            .collect()
    }
}
