//! Debug commands: `tokenize` and `parse` for inspecting the front end.

use super::{read_source, report_and_exit};

/// Print one token per line as `line:column TOKEN`.
///
/// Unrecognized characters are listed like any other token and then
/// reported; the command fails if there were any.
pub fn tokenize_file(path: &str) {
    let source = read_source(path);
    let (tokens, diagnostics) = crate::tokenize(&source);

    for token in &tokens {
        println!("{} {token}", token.position);
    }

    if !diagnostics.is_empty() {
        report_and_exit(&diagnostics);
    }
}

/// Print the canonical form of the parsed program, one statement per line.
pub fn parse_file(path: &str) {
    let source = read_source(path);
    match crate::parse(&source) {
        Ok(program) => {
            if !program.is_empty() {
                println!("{program}");
            }
        }
        Err(diagnostics) => report_and_exit(&diagnostics),
    }
}
