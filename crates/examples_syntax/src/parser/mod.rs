//! Parser for manifest files.
//!
//! Grammar:
//!
//! ```text
//! manifest   := assignment*
//! assignment := IDENT '=' list
//! list       := '[' (tuple (',' tuple)* ','?)? ']'
//! tuple      := '(' (string (',' string)* ','?)? ')'
//! string     := STRING+            (adjacent literals concatenate)
//! ```
//!
//! ## Notes
//! - The parser recovers at tuple and assignment boundaries so one pass reports as many problems as possible.
//! - Bare `True`/`False` identifiers inside a tuple get a dedicated error: manifest flags are quoted strings.


use crate::ast::{Assignment, Entry, Manifest, Span, Spanned};
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};

/// Parser state.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `examples_syntax::lexer`, ending in `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`Manifest`].
    ///
    /// ## Errors
    /// Returns every [`SyntaxError`] found; the parser keeps going after an error.
    pub fn parse(mut self) -> Result<Manifest, Vec<SyntaxError>> {
        let mut assignments = Vec::new();

        while !self.is_at_end() {
            match self.assignment() {
                Ok(assignment) => assignments.push(assignment),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(Manifest { assignments })
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Grammar rules
    // ========================================================================

    fn assignment(&mut self) -> Result<Spanned<Assignment>, SyntaxError> {
        let target_token = self.advance();
        let TokenKind::Ident(name) = &target_token.kind else {
            return Err(SyntaxError::new(
                format!("Expected a list name, found {}", target_token.kind.describe()),
                target_token.span,
            )
            .with_hint("manifest statements look like `cpp_examples = [...]`"));
        };
        let target = Spanned::new(name.clone(), target_token.span);

        self.expect(&TokenKind::Eq, "'=' after list name")?;
        let open = self.expect(&TokenKind::LBracket, "'[' to start the example list")?;

        let mut entries = Vec::new();
        loop {
            match &self.peek().kind {
                TokenKind::RBracket => break,
                TokenKind::Eof => {
                    return Err(SyntaxError::new("Unclosed example list", open.span)
                        .with_hint("add the closing ']'"));
                }
                _ => {}
            }

            match self.entry() {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    self.errors.push(e);
                    self.recover_entry();
                    // Stopped at the next entry's '('
                    if self.peek().kind == TokenKind::LParen {
                        continue;
                    }
                }
            }

            match &self.peek().kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RBracket => {}
                TokenKind::Eof => continue,
                other => {
                    let err = SyntaxError::new(
                        format!("Expected ',' or ']' after entry, found {}", other.describe()),
                        self.peek().span,
                    );
                    self.errors.push(err);
                    self.recover_entry();
                }
            }
        }

        let close = self.advance();
        let span = target.span.merge(close.span);
        Ok(Spanned::new(Assignment { target, entries }, span))
    }

    fn entry(&mut self) -> Result<Spanned<Entry>, SyntaxError> {
        let open = self.peek().clone();
        if open.kind != TokenKind::LParen {
            let err = SyntaxError::new(format!("Expected '(' to start an entry, found {}", open.kind.describe()), open.span);
            return Err(match open.kind {
                TokenKind::String(_) => err.with_hint("wrap each example in a tuple: (\"name\", \"True\", \"True\")"),
                _ => err,
            });
        }
        self.advance();

        let mut fields = Vec::new();
        loop {
            let token = self.peek().clone();
            match &token.kind {
                TokenKind::RParen => {
                    self.advance();
                    let span = open.span.merge(token.span);
                    return Ok(Spanned::new(Entry { fields }, span));
                }
                TokenKind::String(_) => fields.push(self.string()),
                TokenKind::Ident(name) if name == "True" || name == "False" => {
                    return Err(SyntaxError::new(format!("Flag {} must be a quoted string", name), token.span)
                        .with_hint(format!("write \"{}\"", name)));
                }
                TokenKind::Eof => {
                    return Err(SyntaxError::new("Unclosed entry", open.span).with_hint("add the closing ')'"));
                }
                other => {
                    return Err(SyntaxError::new(
                        format!("Expected a string field, found {}", other.describe()),
                        token.span,
                    ));
                }
            }

            match &self.peek().kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RParen => {}
                other => {
                    return Err(SyntaxError::new(
                        format!("Expected ',' or ')' after field, found {}", other.describe()),
                        self.peek().span,
                    ));
                }
            }
        }
    }

    /// One field: a run of adjacent string literals, concatenated.
    fn string(&mut self) -> Spanned<String> {
        let mut value = String::new();
        let mut span: Option<Span> = None;
        while let TokenKind::String(part) = &self.peek().kind {
            value.push_str(part);
            let token_span = self.peek().span;
            span = Some(span.map_or(token_span, |s| s.merge(token_span)));
            self.advance();
        }
        Spanned::new(value, span.unwrap_or_default())
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Skip to just past the current entry: the next `)` (consumed) or `]` / `Eof` (not consumed).
    fn recover_entry(&mut self) {
        loop {
            match self.peek().kind {
                TokenKind::RParen => {
                    self.advance();
                    return;
                }
                TokenKind::RBracket | TokenKind::Eof => return,
                TokenKind::LParen if self.pos > 0 && self.previous().kind == TokenKind::Comma => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Skip to the start of the next assignment (`IDENT '='`) or `Eof`.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if matches!(self.peek().kind, TokenKind::Ident(_)) && self.peek_nth(1).kind == TokenKind::Eq {
                return;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn peek(&self) -> &'a Token {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + n).min(last)]
    }

    fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<&'a Token, SyntaxError> {
        if &self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(SyntaxError::new(
                format!("Expected {}, found {}", what, self.peek().kind.describe()),
                self.peek().span,
            ))
        }
    }
}

/// Parse a token stream into a [`Manifest`].
///
/// ## Panics
/// - If `tokens` is empty. Streams from [`crate::lexer::lex`] always end with `Eof`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Manifest, Vec<SyntaxError>> {
    Parser::new(tokens).parse()
}
