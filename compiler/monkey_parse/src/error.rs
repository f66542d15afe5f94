//! Parse errors.
//!
//! Every error carries the offending token, so it can be rendered as
//! `line:column: message` without access to the source.

use std::fmt;

use monkey_diagnostic::{Diagnostic, ErrorCode};
use monkey_ir::{Position, Token, TokenKind};

/// What the parser expected and did not find.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected identifier in let statement")]
    LetMissingIdentifier,
    #[error("expected assignment op in let statement")]
    LetMissingAssign,
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("unrecognized token")]
    IllegalToken,
    #[error("expected closing parenthesis in grouped expression")]
    GroupMissingCloseParen,
    #[error("expected opening left brace before block")]
    BlockMissingOpenBrace,
    #[error("expected closing right brace at end of block")]
    BlockMissingCloseBrace,
    #[error("expected opening left parenthesis in conditional expression")]
    ConditionalMissingOpenParen,
    #[error("expected closing right parenthesis in conditional expression")]
    ConditionalMissingCloseParen,
    #[error("expected left paren in function expression")]
    FunctionMissingOpenParen,
    #[error("expected identifier in function expression")]
    FunctionMissingIdentifier,
    #[error("expected comma in function parameters")]
    FunctionMissingComma,
    #[error("expected comma in function arguments")]
    CallMissingComma,
    #[error("expected comma in array elements")]
    ArrayMissingComma,
    #[error("expected opening left parenthesis in puts expression")]
    PutsMissingOpenParen,
    #[error("integer literal out of range")]
    IntegerOutOfRange,
}

impl ParseErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            ParseErrorKind::IllegalToken => ErrorCode::E0001,
            ParseErrorKind::UnexpectedToken => ErrorCode::E1001,
            ParseErrorKind::LetMissingIdentifier => ErrorCode::E1002,
            ParseErrorKind::LetMissingAssign => ErrorCode::E1003,
            ParseErrorKind::GroupMissingCloseParen => ErrorCode::E1004,
            ParseErrorKind::BlockMissingOpenBrace => ErrorCode::E1005,
            ParseErrorKind::BlockMissingCloseBrace => ErrorCode::E1006,
            ParseErrorKind::ConditionalMissingOpenParen => ErrorCode::E1007,
            ParseErrorKind::ConditionalMissingCloseParen => ErrorCode::E1008,
            ParseErrorKind::FunctionMissingOpenParen => ErrorCode::E1009,
            ParseErrorKind::FunctionMissingIdentifier => ErrorCode::E1010,
            ParseErrorKind::FunctionMissingComma => ErrorCode::E1011,
            ParseErrorKind::CallMissingComma => ErrorCode::E1012,
            ParseErrorKind::ArrayMissingComma => ErrorCode::E1013,
            ParseErrorKind::PutsMissingOpenParen => ErrorCode::E1014,
            ParseErrorKind::IntegerOutOfRange => ErrorCode::E1015,
        }
    }
}

/// A parse failure at a specific token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The token that did not fit.
    pub token: Token,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, token: Token) -> Self {
        ParseError { kind, token }
    }

    pub fn position(&self) -> Position {
        self.token.position
    }

    /// Message without the position prefix: the kind's text, followed by
    /// the offending token's text.
    pub fn message(&self) -> String {
        if self.token.is(TokenKind::End) {
            format!("{}: end of input", self.kind)
        } else {
            format!("{}: {}", self.kind, self.token.lexeme)
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code())
            .with_message(self.message())
            .at(self.token.position)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token.position, self.message())
    }
}

impl std::error::Error for ParseError {}
