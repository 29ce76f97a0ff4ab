//! String literal scanning for the manifest lexer.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::SyntaxError;

/// Result of processing an escape sequence
enum EscapeResult {
    /// Successfully parsed escape character
    Char(char),
    /// Unknown escape - preserve as-is (backslash + char)
    Unknown(char),
    /// Backslash before a line break - both are dropped and the literal continues on the next line
    LineContinuation,
    /// End of input during escape
    Eof,
}

impl<'a> Lexer<'a> {
    /// Process an escape sequence. Called after consuming the backslash.
    fn scan_escape(&mut self) -> EscapeResult {
        match self.advance() {
            Some('n') => EscapeResult::Char('\n'),
            Some('t') => EscapeResult::Char('\t'),
            Some('r') => EscapeResult::Char('\r'),
            Some('\\') => EscapeResult::Char('\\'),
            Some('"') => EscapeResult::Char('"'),
            Some('\'') => EscapeResult::Char('\''),
            Some('\n') => EscapeResult::LineContinuation,
            Some('\r') => {
                if self.peek() == Some('\n') {
                    self.advance();
                }
                EscapeResult::LineContinuation
            }
            Some(c) => EscapeResult::Unknown(c),
            None => EscapeResult::Eof,
        }
    }

    /// Scan a string literal. The opening quote is already consumed.
    ///
    /// A literal ends at its line unless the line break is escaped with a backslash.
    pub(super) fn scan_string(&mut self, start: usize, quote: char) {
        if self.peek() == Some(quote) && self.peek_next() == Some(quote) {
            self.advance();
            self.advance();
            self.errors.push(
                SyntaxError::new("Triple-quoted strings are not supported", Span::new(start, self.current_pos))
                    .with_hint("manifest entries are single-line strings"),
            );
            self.skip_to_line_end();
            return;
        }

        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.errors.push(SyntaxError::new(
                        "Unterminated string",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape() {
                        EscapeResult::Char(c) => value.push(c),
                        EscapeResult::Unknown(c) => {
                            value.push('\\');
                            value.push(c);
                        }
                        EscapeResult::LineContinuation => {}
                        EscapeResult::Eof => {
                            self.errors.push(SyntaxError::new(
                                "Unterminated string",
                                Span::new(start, self.current_pos),
                            ));
                            return;
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        self.add_token(TokenKind::String(value), start);
    }

    fn skip_to_line_end(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }
}
