//! Parser for Monkey.
//!
//! Recursive descent for statements, precedence climbing (Pratt) for
//! expressions. The parser pulls tokens from the lexer one at a time and
//! keeps a single token of lookahead.
//!
//! Errors inside a statement are returned immediately; there is no partial
//! AST. At the top level the parser records the error, skips to the next
//! statement boundary and keeps going, so one pass can report several
//! independent mistakes.

mod cursor;
mod error;
mod grammar;
mod recovery;

use monkey_diagnostic::Diagnostic;
use monkey_ir::{Program, TokenKind};

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// Result of parsing a source file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseOutput {
    /// Every statement that parsed successfully, in source order.
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parser state.
///
/// Convention shared by every grammar rule: on entry the current token is
/// the first token of the construct; on success the current token is its
/// last token.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Parse the whole input, accumulating top-level errors.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.cursor.advance();
                }
                Err(error) => {
                    tracing::debug!(%error, "recovering from parse error");
                    errors.push(error);
                    recovery::synchronize(&mut self.cursor);
                }
            }
        }

        tracing::debug!(
            statements = statements.len(),
            errors = errors.len(),
            "parsed program"
        );
        ParseOutput {
            program: Program::new(statements),
            errors,
        }
    }

    // --- Token helpers ---

    /// Error at the current token.
    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.current().clone())
    }

    /// Error at the lookahead token.
    fn error_at_peek(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.peek().clone())
    }

    /// Advance if the lookahead is `kind`, otherwise fail at the lookahead
    /// without consuming anything.
    fn expect_peek(&mut self, kind: TokenKind, error: ParseErrorKind) -> Result<(), ParseError> {
        if self.cursor.check_peek(kind) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.error_at_peek(error))
        }
    }

    /// Consume an optional trailing `;`.
    fn skip_semicolon(&mut self) {
        if self.cursor.check_peek(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}

/// Parse a source string.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(source).parse_program()
}

#[cfg(test)]
mod tests;
