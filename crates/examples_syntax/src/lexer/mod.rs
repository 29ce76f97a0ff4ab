//! Lexer for manifest files.
//!
//! Handles tokenization of:
//! - `#` comments (shebang and editor mode lines included) and whitespace, which are skipped
//! - identifiers (assignment targets, and bare `True`/`False` so the parser can explain them)
//! - single- and double-quoted string literals
//! - the punctuation `= , ( ) [ ]`
//!
//! Newlines are insignificant: the parser finds statement boundaries from the grammar alone.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning

mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::SyntaxError;

/// Lexer for manifest source text.
///
/// Errors are collected rather than returned eagerly so one pass reports every bad character and unterminated
/// string in the file.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Bracket depth, used to flag unmatched closing brackets
    bracket_depth: usize,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            bracket_depth: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<SyntaxError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' | '\n' => {}

            '#' => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }

            // Explicit line continuation
            '\\' if self.peek() == Some('\n') => {
                self.advance();
            }
            '\\' if self.peek() == Some('\r') && self.peek_next() == Some('\n') => {
                self.advance();
                self.advance();
            }

            '=' => self.add_token(TokenKind::Eq, start),
            ',' => self.add_token(TokenKind::Comma, start),
            '(' => self.open_bracket(TokenKind::LParen, start),
            ')' => self.close_bracket(TokenKind::RParen, start),
            '[' => self.open_bracket(TokenKind::LBracket, start),
            ']' => self.close_bracket(TokenKind::RBracket, start),

            '"' => self.scan_string(start, '"'),
            '\'' => self.scan_string(start, '\''),

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                let error = SyntaxError::new(format!("Unexpected character '{}'", c), Span::new(start, self.current_pos));
                let error = if c.is_ascii_digit() {
                    error.with_hint("manifest values are quoted strings, e.g. \"--simTime=20\"")
                } else {
                    error
                };
                self.errors.push(error);
            }
        }
    }

    fn open_bracket(&mut self, kind: TokenKind, start: usize) {
        self.bracket_depth += 1;
        self.add_token(kind, start);
    }

    /// Produces an error if there's no matching opening bracket.
    fn close_bracket(&mut self, kind: TokenKind, start: usize) {
        if self.bracket_depth == 0 {
            self.errors.push(SyntaxError::new(
                "Unmatched closing bracket",
                Span::new(start, self.current_pos),
            ));
        } else {
            self.bracket_depth -= 1;
        }
        self.add_token(kind, start);
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Ident(spelling), start);
    }
}

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<SyntaxError>> {
    Lexer::new(source).tokenize()
}
