//! Evaluator phase tests: whole programs through `run_source`.

use monkey_eval::{buffer_handler, InterpreterConfig};
use monkeyc::run_source;
use pretty_assertions::assert_eq;

/// Final value (if any) and captured output.
fn run(source: &str) -> (Option<String>, String) {
    let print = buffer_handler();
    let value = run_source(source, InterpreterConfig::default(), print.clone())
        .unwrap_or_else(|diagnostics| panic!("{source:?} failed: {diagnostics:?}"));
    (value, print.get_output())
}

fn run_err(source: &str) -> String {
    let diagnostics = run_source(source, InterpreterConfig::default(), buffer_handler())
        .expect_err("program should fail");
    diagnostics[0].to_string()
}

#[test]
fn map_and_reduce_with_closures() {
    let source = r#"
        let first = fn(arr) { if (len(arr) == 0) { 0 } else { 1 } };
        let sum = fn(n) { if (n == 0) { 0 } else { n + sum(n - 1) } };
        let twice = fn(f) { fn(x) { f(f(x)) } };
        let add3 = fn(x) { x + 3 };
        puts(twice(add3)(10));
        puts(sum(100));
        first([])
    "#;
    assert_eq!(run(source), (Some("0".to_string()), "16\n5050\n".to_string()));
}

#[test]
fn counter_closures_are_independent() {
    let source = "
        let make = fn(start) { fn(step) { start + step } };
        let a = make(10);
        let b = make(100);
        puts(a(1));
        puts(b(1));
        a(2)
    ";
    assert_eq!(run(source), (Some("12".to_string()), "11\n101\n".to_string()));
}

#[test]
fn strings_and_arrays_print_raw() {
    let (value, output) = run("puts(\"a\" + \"b\"); [1, \"two\", [true]]");
    assert_eq!(output, "ab\n");
    assert_eq!(value.as_deref(), Some("[1, two, [true]]"));
}

#[test]
fn runtime_errors_render_without_position() {
    assert_eq!(run_err("let x = 1; y"), "error: missing variable: y");
    assert_eq!(
        run_err("if (1) { 2 }"),
        "error: non-bool result in conditional expression: found integer"
    );
    assert_eq!(
        run_err("let f = fn(a, b) { a }; f(1)"),
        "error: not enough arguments in call to f: expected 2, got 1"
    );
}

#[test]
fn errors_inside_calls_carry_notes() {
    assert_eq!(
        run_err("let div = fn(a, b) { a / b }; let go = fn() { div(1, 0) }; go()"),
        "error: division by zero\n  = note: in call to div\n  = note: in call to go"
    );
}

#[test]
fn call_depth_limit_is_configurable() {
    let config = InterpreterConfig { max_call_depth: 20 };
    let diagnostics = run_source(
        "let f = fn(n) { f(n + 1) }; f(0)",
        config,
        buffer_handler(),
    )
    .expect_err("limit reached");
    assert!(diagnostics[0]
        .to_string()
        .starts_with("error: maximum call depth exceeded (limit: 20)"));
}

#[test]
fn deep_but_bounded_recursion_succeeds() {
    let source = "let down = fn(n) { if (n == 0) { 0 } else { down(n - 1) } }; down(2000)";
    assert_eq!(run(source).0.as_deref(), Some("0"));
}
