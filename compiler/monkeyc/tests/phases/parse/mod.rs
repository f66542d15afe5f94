//! Parser phase tests: diagnostics and recovery seen through the driver.

use monkey_diagnostic::ErrorCode;
use monkeyc::parse;
use pretty_assertions::assert_eq;

fn messages(source: &str) -> Vec<String> {
    parse(source)
        .expect_err("source should not parse")
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn canonical_form() {
    let program = parse("let x = 1 + 2 * 3; if (x > 1) { x } else { -x }").unwrap();
    assert_eq!(
        program.to_string(),
        "let x = (1 + (2 * 3));\nif ((x > 1)) { x; } else { (-x); };"
    );
}

#[test]
fn missing_let_identifier_points_at_assign() {
    assert_eq!(
        messages("let = 5;"),
        vec!["1:5: expected identifier in let statement: ="]
    );
}

#[test]
fn independent_errors_are_all_reported() {
    let diagnostics = parse("let = 1;\nlet y 2;\nlet z = 3;\n)").expect_err("three errors");
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::E1002, ErrorCode::E1003, ErrorCode::E1001]
    );
    assert_eq!(
        diagnostics[1].to_string(),
        "2:7: expected assignment op in let statement: 2"
    );
}

#[test]
fn unterminated_block_reports_end_of_input() {
    assert_eq!(
        messages("fn(x) { x"),
        vec!["1:10: expected closing right brace at end of block: end of input"]
    );
}

#[test]
fn illegal_character_in_expression() {
    let diagnostics = parse("let a = @;").expect_err("illegal token");
    assert_eq!(diagnostics[0].code, ErrorCode::E0001);
    assert_eq!(diagnostics[0].to_string(), "1:9: unrecognized token: @");
}

#[test]
fn deeply_nested_input_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(parse(&source).is_ok());
}
