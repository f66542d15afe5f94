//! Lexer for Monkey using logos.
//!
//! The lexer is pull-based: the parser asks for one token at a time with
//! [`Lexer::next_token`]. It never fails. Anything it cannot classify comes
//! back as a [`TokenKind::Illegal`] token carrying the offending text, and
//! the parser decides how to report it.
//!
//! Whitespace and `//` line comments are skipped. String literals have no
//! escape sequences; the token's lexeme is the raw text between the quotes.

mod line_index;
mod raw_token;

use logos::Logos;
use monkey_ir::{Token, TokenKind};

use line_index::LineIndex;
use raw_token::RawToken;

/// Pull lexer over a source string.
pub struct Lexer<'src> {
    source: &'src str,
    logos: logos::Lexer<'src, RawToken>,
    lines: LineIndex,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            logos: RawToken::lexer(source),
            lines: LineIndex::new(source),
        }
    }

    /// Lex a whole source string, including the trailing `End` token.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.is_end();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Produce the next token. Once the input is exhausted every call
    /// returns an `End` token positioned just past the last character.
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(result) = self.logos.next() else {
                let position = self.lines.position(self.source, self.source.len());
                return Token::new(TokenKind::End, "", position);
            };

            let span = self.logos.span();
            let slice = self.logos.slice();
            let position = self.lines.position(self.source, span.start);

            let raw = match result {
                Ok(RawToken::LineComment) => continue,
                Ok(raw) => raw,
                Err(()) => {
                    tracing::debug!(%position, lexeme = slice, "illegal character");
                    return Token::new(TokenKind::Illegal, slice, position);
                }
            };

            return match raw {
                RawToken::String => {
                    let contents = slice
                        .strip_prefix('"')
                        .and_then(|s| s.strip_suffix('"'))
                        .unwrap_or(slice);
                    Token::new(TokenKind::String, contents, position)
                }
                RawToken::UnterminatedString => {
                    tracing::debug!(%position, "unterminated string literal");
                    Token::new(TokenKind::Illegal, slice, position)
                }
                other => Token::new(other.kind(), slice, position),
            };
        }
    }
}
