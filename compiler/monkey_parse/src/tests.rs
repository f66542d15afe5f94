#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use monkey_diagnostic::ErrorCode;
use monkey_ir::{BinaryOp, Block, Expr, FunctionLiteral, Position, Program, Stmt, UnaryOp};
use pretty_assertions::assert_eq;

use super::*;

fn parse_ok(source: &str) -> Program {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.errors
    );
    output.program
}

fn parse_expr(source: &str) -> Expr {
    let mut program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "{source:?}");
    match program.statements.remove(0) {
        Stmt::Expression(expr) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Canonical printed form, the easiest way to check grouping.
fn printed(source: &str) -> String {
    parse_expr(source).to_string()
}

fn first_error(source: &str) -> ParseError {
    let output = parse(source);
    output.errors.into_iter().next().unwrap()
}

fn int(n: i64) -> Expr {
    Expr::Integer(n)
}

// --- Statements ---

#[test]
fn test_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");
    assert_eq!(
        program.statements,
        vec![
            Stmt::Let {
                name: "x".into(),
                value: int(5)
            },
            Stmt::Let {
                name: "y".into(),
                value: Expr::Boolean(true)
            },
            Stmt::Let {
                name: "foobar".into(),
                value: Expr::ident("y")
            },
        ]
    );
}

#[test]
fn test_return_statements() {
    let program = parse_ok("return 5; return x + 1");
    assert_eq!(
        program.statements,
        vec![
            Stmt::Return(int(5)),
            Stmt::Return(Expr::infix(BinaryOp::Add, Expr::ident("x"), int(1))),
        ]
    );
}

#[test]
fn test_semicolons_are_optional() {
    let with = parse_ok("let a = 1; a; a + 1;");
    let without = parse_ok("let a = 1 a a + 1");
    assert_eq!(with, without);
}

#[test]
fn test_empty_program() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("  // only a comment\n").is_empty());
}

// --- Literals ---

#[test]
fn test_literals() {
    assert_eq!(parse_expr("foobar;"), Expr::ident("foobar"));
    assert_eq!(parse_expr("5;"), int(5));
    assert_eq!(parse_expr("false"), Expr::Boolean(false));
    assert_eq!(parse_expr("\"hello world\""), Expr::String("hello world".into()));
    assert_eq!(
        parse_expr("[1, 2 * 2, \"x\"]"),
        Expr::Array(vec![
            int(1),
            Expr::infix(BinaryOp::Mul, int(2), int(2)),
            Expr::String("x".into()),
        ])
    );
    assert_eq!(parse_expr("[]"), Expr::Array(Vec::new()));
}

#[test]
fn test_integer_limits() {
    assert_eq!(parse_expr("9223372036854775807"), int(i64::MAX));
    let error = first_error("9223372036854775808");
    assert_eq!(error.kind, ParseErrorKind::IntegerOutOfRange);

    assert_eq!(parse_expr("-9223372036854775808"), int(i64::MIN));
    assert_eq!(printed("-9223372036854775808 * 1"), "(-9223372036854775808 * 1)");
    assert_eq!(printed("-9223372036854775808"), "-9223372036854775808");
    assert_eq!(
        first_error("-9223372036854775809").kind,
        ParseErrorKind::IntegerOutOfRange
    );
    assert_eq!(
        printed("-9223372036854775807"),
        "(-9223372036854775807)"
    );
}

// --- Operators ---

#[test]
fn test_prefix_expressions() {
    assert_eq!(parse_expr("!5"), Expr::prefix(UnaryOp::Not, int(5)));
    assert_eq!(parse_expr("-15"), Expr::prefix(UnaryOp::Neg, int(15)));
    assert_eq!(printed("!!true"), "(!(!true))");
    assert_eq!(printed("-a * b"), "((-a) * b)");
}

#[test]
fn test_infix_expressions() {
    for op in BinaryOp::ALL {
        let source = format!("5 {op} 6");
        assert_eq!(parse_expr(&source), Expr::infix(op, int(5), int(6)));
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 <= 4 != 3 >= 4", "((5 <= 4) != (3 >= 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("1 < 2 == true", "((1 < 2) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("-f(x)", "(-f(x))"),
    ];
    for (source, expected) in cases {
        assert_eq!(printed(source), expected, "{source}");
    }
}

#[test]
fn test_same_precedence_is_left_associative() {
    assert_eq!(
        parse_expr("10 - 4 - 3"),
        Expr::infix(
            BinaryOp::Sub,
            Expr::infix(BinaryOp::Sub, int(10), int(4)),
            int(3)
        )
    );
    assert_eq!(printed("1 == 2 == 3"), "((1 == 2) == 3)");
}

// --- Compound expressions ---

#[test]
fn test_conditional() {
    assert_eq!(
        parse_expr("if (x < y) { x }"),
        Expr::Conditional {
            condition: Box::new(Expr::infix(BinaryOp::Lt, Expr::ident("x"), Expr::ident("y"))),
            consequence: Block::new(vec![Stmt::Expression(Expr::ident("x"))]),
            alternate: None,
        }
    );
}

#[test]
fn test_conditional_with_else() {
    let expr = parse_expr("if (x) { x } else { let z = 1; z }");
    let Expr::Conditional { alternate, .. } = &expr else {
        panic!("expected conditional");
    };
    assert_eq!(
        alternate,
        &Some(Block::new(vec![
            Stmt::Let {
                name: "z".into(),
                value: int(1)
            },
            Stmt::Expression(Expr::ident("z")),
        ]))
    );
}

#[test]
fn test_function_literal() {
    assert_eq!(
        parse_expr("fn(x, y) { x + y; }"),
        Expr::Function(FunctionLiteral {
            parameters: vec!["x".into(), "y".into()],
            body: Block::new(vec![Stmt::Expression(Expr::infix(
                BinaryOp::Add,
                Expr::ident("x"),
                Expr::ident("y")
            ))]),
        })
    );
}

#[test]
fn test_function_parameter_counts() {
    for (source, expected) in [
        ("fn() {};", vec![]),
        ("fn(x) {};", vec!["x"]),
        ("fn(x, y, z) {};", vec!["x", "y", "z"]),
    ] {
        let expr = parse_expr(source);
        let Expr::Function(literal) = &expr else {
            panic!("expected function for {source}");
        };
        assert_eq!(literal.parameters, expected);
        assert!(literal.body.is_empty());
    }
}

#[test]
fn test_call_expression() {
    assert_eq!(
        parse_expr("add(1, 2 * 3, 4 + 5);"),
        Expr::call(
            Expr::ident("add"),
            vec![
                int(1),
                Expr::infix(BinaryOp::Mul, int(2), int(3)),
                Expr::infix(BinaryOp::Add, int(4), int(5)),
            ]
        )
    );
    assert_eq!(parse_expr("f()"), Expr::call(Expr::ident("f"), Vec::new()));
}

#[test]
fn test_chained_and_immediate_calls() {
    assert_eq!(printed("f(1)(2)"), "f(1)(2)");
    assert_eq!(printed("fn(x) { x }(5)"), "fn(x) { x; }(5)");
}

#[test]
fn test_puts_is_a_call_of_the_builtin() {
    assert_eq!(
        parse_expr("puts(1, x)"),
        Expr::call(Expr::ident("puts"), vec![int(1), Expr::ident("x")])
    );
}

// --- Errors ---

#[test]
fn test_let_missing_identifier_points_at_assign() {
    let output = parse("let = 5;");
    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.kind, ParseErrorKind::LetMissingIdentifier);
    assert_eq!(error.token.lexeme, "=");
    assert_eq!(error.position(), Position::new(1, 5));
    assert_eq!(
        error.to_string(),
        "1:5: expected identifier in let statement: ="
    );
}

#[test]
fn test_error_kinds() {
    let cases = [
        ("let x 5;", ParseErrorKind::LetMissingAssign),
        ("let 5 = 5;", ParseErrorKind::LetMissingIdentifier),
        ("let x = ;", ParseErrorKind::UnexpectedToken),
        ("}", ParseErrorKind::UnexpectedToken),
        ("1 @ 2", ParseErrorKind::IllegalToken),
        ("(1 + 2", ParseErrorKind::GroupMissingCloseParen),
        ("if x { 1 }", ParseErrorKind::ConditionalMissingOpenParen),
        ("if (x { 1 }", ParseErrorKind::ConditionalMissingCloseParen),
        ("if (x) 1", ParseErrorKind::BlockMissingOpenBrace),
        ("if (x) { 1 } else 2", ParseErrorKind::BlockMissingOpenBrace),
        ("fn(x) { x", ParseErrorKind::BlockMissingCloseBrace),
        ("fn x { x }", ParseErrorKind::FunctionMissingOpenParen),
        ("fn(1) { 1 }", ParseErrorKind::FunctionMissingIdentifier),
        ("fn(x,) { x }", ParseErrorKind::FunctionMissingIdentifier),
        ("fn(x y) { x }", ParseErrorKind::FunctionMissingComma),
        ("f(1 2)", ParseErrorKind::CallMissingComma),
        ("f(1", ParseErrorKind::CallMissingComma),
        ("[1 2]", ParseErrorKind::ArrayMissingComma),
        ("puts 1", ParseErrorKind::PutsMissingOpenParen),
        ("let puts = 1;", ParseErrorKind::LetMissingIdentifier),
    ];
    for (source, expected) in cases {
        assert_eq!(first_error(source).kind, expected, "{source}");
    }
}

#[test]
fn test_error_at_end_of_input() {
    let error = first_error("let x = ");
    assert_eq!(error.kind, ParseErrorKind::UnexpectedToken);
    assert!(error.token.is_end());
    assert_eq!(error.message(), "unexpected token: end of input");
}

#[test]
fn test_accumulates_independent_errors() {
    let output = parse("let = 1;\nlet y = 2;\nlet z 3;\nlet w = 4;");
    let kinds: Vec<_> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::LetMissingIdentifier,
            ParseErrorKind::LetMissingAssign
        ]
    );
    assert_eq!(output.errors[1].position(), Position::new(3, 7));
    // The good statements survive.
    let names: Vec<_> = output
        .program
        .statements
        .iter()
        .filter_map(|s| match s {
            Stmt::Let { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["y", "w"]);
}

#[test]
fn test_recovery_does_not_swallow_following_statement() {
    let output = parse("let x = ; x + 1;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.program.statements,
        vec![Stmt::Expression(Expr::infix(
            BinaryOp::Add,
            Expr::ident("x"),
            int(1)
        ))]
    );
}

#[test]
fn test_recovery_skips_rest_of_enclosing_block() {
    let output = parse("let f = fn() { let = 1; 2 }; let y = 3;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ParseErrorKind::LetMissingIdentifier);
    assert_eq!(output.errors[0].position(), Position::new(1, 20));
    assert_eq!(
        output.program.statements,
        vec![Stmt::Let {
            name: "y".to_string(),
            value: int(3)
        }]
    );
}

#[test]
fn test_recovery_skips_nested_blocks() {
    let source = "if (true) { fn(x) { x + } } else { 1 }\nlet a = 1;\nlet b 2;";
    let output = parse(source);
    let kinds: Vec<_> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::UnexpectedToken,
            ParseErrorKind::LetMissingAssign
        ]
    );
    assert_eq!(output.errors[1].position(), Position::new(3, 7));
    assert_eq!(output.program.statements.len(), 1);
}

#[test]
fn test_stray_close_brace_is_one_error() {
    let output = parse("} let x = 1;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.program.statements.len(), 1);
}

#[test]
fn test_unterminated_constructs_terminate() {
    for source in ["{", "fn(", "if (", "[1,", "f(", "let", "(((((", "if (x) {"] {
        let output = parse(source);
        assert!(output.has_errors(), "{source:?} should fail");
    }
}

#[test]
fn test_diagnostic_conversion() {
    let diagnostic = first_error("let x 5;").to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E1003);
    assert_eq!(diagnostic.position, Some(Position::new(1, 7)));
    assert_eq!(
        diagnostic.to_string(),
        "1:7: expected assignment op in let statement: 5"
    );
}

#[test]
fn test_diagnostics_follow_source_order() {
    let output = parse("let = 1; )");
    let codes: Vec<_> = output.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1002, ErrorCode::E1001]);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_expr(&source), int(1));

    let source = format!("{}1", "-".repeat(depth));
    assert!(!parse(&source).has_errors());
}

#[test]
fn test_very_deep_tree_is_released() {
    let source = format!("{}1", "-".repeat(1_000_000));
    let output = parse(&source);
    assert!(output.errors.is_empty());
    drop(output);
}
