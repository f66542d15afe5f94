//! Raw token enum matched by logos, before conversion to `TokenKind`.

use logos::Logos;
use monkey_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // === Keywords ===
    #[token("let")]
    Let,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("fn")]
    Function,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("puts")]
    Puts,

    // === Literals ===
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r#""[^"]*""#)]
    String,
    // Longest match means this only wins when the closing quote is missing.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    // === Operators ===
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("!")]
    Bang,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
}

impl RawToken {
    /// Kind of a token that maps one-to-one onto `TokenKind`.
    ///
    /// Comments and string variants are handled by the lexer before this is
    /// called; they map to the nearest kind so the match stays exhaustive.
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Let => TokenKind::Let,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Function => TokenKind::Function,
            RawToken::Return => TokenKind::Return,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::Puts => TokenKind::Puts,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Integer => TokenKind::Integer,
            RawToken::String => TokenKind::String,
            RawToken::LineComment | RawToken::UnterminatedString => TokenKind::Illegal,
            RawToken::Equal => TokenKind::Equal,
            RawToken::NotEqual => TokenKind::NotEqual,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Less => TokenKind::Less,
            RawToken::Greater => TokenKind::Greater,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::LeftBracket => TokenKind::LeftBracket,
            RawToken::RightBracket => TokenKind::RightBracket,
        }
    }
}
