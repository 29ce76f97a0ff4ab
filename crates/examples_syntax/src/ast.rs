//! Syntax tree for manifest files.

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A manifest is a sequence of top-level assignments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    pub assignments: Vec<Spanned<Assignment>>,
}

impl Manifest {
    /// First assignment to `name`, if any.
    pub fn assignment(&self, name: &str) -> Option<&Spanned<Assignment>> {
        self.assignments.iter().find(|a| a.node.target.node == name)
    }
}

/// `target = [ entry, ... ]`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Spanned<String>,
    pub entries: Vec<Spanned<Entry>>,
}

/// One parenthesized tuple of string fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub fields: Vec<Spanned<String>>,
}

impl Entry {
    /// Field values without spans, in order.
    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.node.as_str()).collect()
    }
}
