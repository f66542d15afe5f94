//! Grammar rules.
//!
//! Statements and blocks live here; expressions in [`expr`].

mod expr;
mod operators;

use monkey_ir::{Block, Precedence, Stmt, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `let IDENT = expr [;]` | `return expr [;]` | `expr [;]`
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => {
                let value = self.parse_expression(Precedence::Lowest)?;
                self.skip_semicolon();
                Ok(Stmt::Expression(value))
            }
        }
    }

    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        self.expect_peek(TokenKind::Identifier, ParseErrorKind::LetMissingIdentifier)?;
        let name = self.cursor.current().lexeme.clone();
        self.expect_peek(TokenKind::Assign, ParseErrorKind::LetMissingAssign)?;
        self.cursor.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Stmt::Let { name, value })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Stmt::Return(value))
    }

    /// Expect `{` as the next token and parse the block it opens.
    pub(crate) fn parse_braced_block(&mut self) -> Result<Block, ParseError> {
        self.expect_peek(TokenKind::LeftBrace, ParseErrorKind::BlockMissingOpenBrace)?;
        self.parse_block()
    }

    /// `{ statement* }`, entered with the cursor on `{`, left on `}`.
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.cursor.advance();

        let mut statements = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::RightBrace => return Ok(Block::new(statements)),
                TokenKind::End => {
                    return Err(self.error_here(ParseErrorKind::BlockMissingCloseBrace));
                }
                _ => {
                    statements.push(self.parse_statement()?);
                    self.cursor.advance();
                }
            }
        }
    }
}
