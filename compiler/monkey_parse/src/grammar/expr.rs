//! Expression parsing.
//!
//! `parse_expression` parses one prefix form and then folds infix operators
//! and calls onto it for as long as they bind tighter than the threshold it
//! was called with.

use monkey_ir::{Expr, FunctionLiteral, Precedence, TokenKind, UnaryOp};
use monkey_stack::ensure_sufficient_stack;

use super::operators::{match_binary_op, match_unary_op};
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than
    /// `threshold`.
    pub(crate) fn parse_expression(&mut self, threshold: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(threshold))
    }

    fn parse_expression_inner(&mut self, threshold: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        loop {
            let peek = self.cursor.peek_kind();

            if peek == TokenKind::LeftParen {
                if Precedence::Call <= threshold {
                    break;
                }
                self.cursor.advance();
                let arguments =
                    self.parse_expression_list(TokenKind::RightParen, ParseErrorKind::CallMissingComma)?;
                left = Expr::call(left, arguments);
                continue;
            }

            let Some(op) = match_binary_op(peek) else {
                break;
            };
            // `<=` keeps equal precedence levels left-associative.
            if op.precedence() <= threshold {
                break;
            }

            self.cursor.advance();
            self.cursor.advance();
            let right = self.parse_expression(op.precedence())?;
            left = Expr::infix(op, left, right);
        }

        Ok(left)
    }

    /// Leaf or prefix form starting at the current token.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let kind = self.cursor.current_kind();

        if let Some(op) = match_unary_op(kind) {
            self.cursor.advance();
            // The magnitude of `i64::MIN` only fits once negated.
            if op == UnaryOp::Neg && self.at_min_integer_magnitude() {
                return Ok(Expr::Integer(i64::MIN));
            }
            let operand = self.parse_expression(Precedence::Prefix)?;
            return Ok(Expr::prefix(op, operand));
        }

        match kind {
            TokenKind::Identifier => Ok(Expr::Identifier(self.cursor.current().lexeme.clone())),
            TokenKind::Integer => self.parse_integer(),
            TokenKind::String => Ok(Expr::String(self.cursor.current().lexeme.clone())),
            TokenKind::True => Ok(Expr::Boolean(true)),
            TokenKind::False => Ok(Expr::Boolean(false)),
            TokenKind::LeftParen => self.parse_grouped(),
            TokenKind::If => self.parse_conditional(),
            TokenKind::Function => self.parse_function(),
            TokenKind::LeftBracket => {
                let elements = self.parse_expression_list(
                    TokenKind::RightBracket,
                    ParseErrorKind::ArrayMissingComma,
                )?;
                Ok(Expr::Array(elements))
            }
            TokenKind::Puts => self.parse_puts(),
            TokenKind::Illegal => Err(self.error_here(ParseErrorKind::IllegalToken)),
            _ => Err(self.error_here(ParseErrorKind::UnexpectedToken)),
        }
    }

    fn parse_integer(&mut self) -> Result<Expr, ParseError> {
        self.cursor
            .current()
            .lexeme
            .parse::<i64>()
            .map(Expr::Integer)
            .map_err(|_| self.error_here(ParseErrorKind::IntegerOutOfRange))
    }

    fn at_min_integer_magnitude(&self) -> bool {
        let token = self.cursor.current();
        token.is(TokenKind::Integer) && token.lexeme.parse::<u64>() == Ok(i64::MIN.unsigned_abs())
    }

    /// `( expr )`. The group leaves no node behind.
    fn parse_grouped(&mut self) -> Result<Expr, ParseError> {
        self.cursor.advance();
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightParen, ParseErrorKind::GroupMissingCloseParen)?;
        Ok(inner)
    }

    /// `if (cond) { .. } [else { .. }]`
    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        self.expect_peek(
            TokenKind::LeftParen,
            ParseErrorKind::ConditionalMissingOpenParen,
        )?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(
            TokenKind::RightParen,
            ParseErrorKind::ConditionalMissingCloseParen,
        )?;

        let consequence = self.parse_braced_block()?;

        let alternate = if self.cursor.check_peek(TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_braced_block()?)
        } else {
            None
        };

        Ok(Expr::Conditional {
            condition: Box::new(condition),
            consequence,
            alternate,
        })
    }

    /// `fn(a, b) { .. }`
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        self.expect_peek(TokenKind::LeftParen, ParseErrorKind::FunctionMissingOpenParen)?;
        let parameters = self.parse_parameters()?;
        let body = self.parse_braced_block()?;
        Ok(Expr::Function(FunctionLiteral { parameters, body }))
    }

    /// Parameter names, entered on `(`, left on `)`.
    fn parse_parameters(&mut self) -> Result<Vec<String>, ParseError> {
        let mut parameters = Vec::new();
        if self.cursor.check_peek(TokenKind::RightParen) {
            self.cursor.advance();
            return Ok(parameters);
        }

        loop {
            self.expect_peek(
                TokenKind::Identifier,
                ParseErrorKind::FunctionMissingIdentifier,
            )?;
            parameters.push(self.cursor.current().lexeme.clone());

            match self.cursor.peek_kind() {
                TokenKind::Comma => self.cursor.advance(),
                TokenKind::RightParen => {
                    self.cursor.advance();
                    return Ok(parameters);
                }
                _ => return Err(self.error_at_peek(ParseErrorKind::FunctionMissingComma)),
            }
        }
    }

    /// `puts(args)` parses as an ordinary call of the `puts` builtin.
    fn parse_puts(&mut self) -> Result<Expr, ParseError> {
        let callee = Expr::Identifier(self.cursor.current().lexeme.clone());
        self.expect_peek(TokenKind::LeftParen, ParseErrorKind::PutsMissingOpenParen)?;
        let arguments =
            self.parse_expression_list(TokenKind::RightParen, ParseErrorKind::CallMissingComma)?;
        Ok(Expr::call(callee, arguments))
    }

    /// Comma-separated expressions, entered on the opening delimiter and
    /// left on `close`.
    fn parse_expression_list(
        &mut self,
        close: TokenKind,
        missing_comma: ParseErrorKind,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.check_peek(close) {
            self.cursor.advance();
            return Ok(items);
        }

        self.cursor.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        loop {
            match self.cursor.peek_kind() {
                TokenKind::Comma => {
                    self.cursor.advance();
                    self.cursor.advance();
                    items.push(self.parse_expression(Precedence::Lowest)?);
                }
                kind if kind == close => {
                    self.cursor.advance();
                    return Ok(items);
                }
                _ => return Err(self.error_at_peek(missing_comma)),
            }
        }
    }
}
