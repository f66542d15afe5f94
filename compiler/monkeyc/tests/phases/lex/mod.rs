//! Lexer phase tests.

use monkey_ir::{Position, TokenKind};
use monkeyc::tokenize;
use pretty_assertions::assert_eq;

fn dump(source: &str) -> Vec<String> {
    let (tokens, _) = tokenize(source);
    tokens
        .iter()
        .map(|token| format!("{} {token}", token.position))
        .collect()
}

#[test]
fn token_dump_format() {
    assert_eq!(
        dump("let x = \"hi\";\nputs(x <= 10);"),
        vec![
            "1:1 LET",
            "1:5 IDENTIFIER(x)",
            "1:7 OPERATOR[=]",
            "1:9 STRING(hi)",
            "1:13 SEMICOLON",
            "2:1 PUTS",
            "2:5 LEFT_PAREN",
            "2:6 IDENTIFIER(x)",
            "2:8 OPERATOR[<=]",
            "2:11 INTEGER(10)",
            "2:13 RIGHT_PAREN",
            "2:14 SEMICOLON",
            "2:15 END",
        ]
    );
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let (tokens, diagnostics) = tokenize("// header\n  1 // trailing\n");
    assert!(diagnostics.is_empty());
    let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Integer, TokenKind::End]);
    assert_eq!(tokens[0].position, Position::new(2, 3));
}

#[test]
fn illegal_characters_are_tokens_not_failures() {
    let (tokens, diagnostics) = tokenize("1 # 2 $");
    let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Illegal,
            TokenKind::Integer,
            TokenKind::Illegal,
            TokenKind::End,
        ]
    );
    let messages: Vec<_> = diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec!["1:3: unrecognized token: #", "1:7: unrecognized token: $"]
    );
}

#[test]
fn empty_source_is_just_end() {
    let (tokens, diagnostics) = tokenize("");
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_end());
}
