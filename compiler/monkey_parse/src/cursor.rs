//! Token cursor over the pull lexer.
//!
//! Holds the current token and one token of lookahead. Advancing consumes
//! the current token and pulls the next lookahead from the lexer.
//! The cursor also counts the braces it has consumed, so recovery can tell
//! whether it is still inside a block.

use monkey_ir::{Token, TokenKind};
use monkey_lexer::Lexer;

pub(crate) struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
    /// Unclosed `{` among the consumed tokens.
    depth: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Cursor {
            lexer,
            current,
            peek,
            depth: 0,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub(crate) fn peek(&self) -> &Token {
        &self.peek
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub(crate) fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_end()
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Move to the next token. At the end of input this is a no-op, since
    /// the lexer keeps producing `End`.
    pub(crate) fn advance(&mut self) {
        match self.current.kind {
            TokenKind::LeftBrace => self.depth += 1,
            TokenKind::RightBrace => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }
}
