//! Monkey driver.
//!
//! Ties the phases together: source text goes through `monkey_lexer`,
//! `monkey_parse` and `monkey_eval`, and every failure comes back as a list
//! of [`Diagnostic`]s. The `monkey` binary is a thin layer over
//! [`commands`].

pub mod commands;
mod error;

use std::sync::Once;

use monkey_diagnostic::{Diagnostic, ErrorCode};
use monkey_eval::{Interpreter, InterpreterConfig, SharedPrintHandler};
use monkey_ir::{Program, Token, TokenKind};
use monkey_lexer::Lexer;

pub use error::{read_file, CliError};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. With `MONKEY_LOG_TREE` also set,
/// spans render as an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if std::env::var("MONKEY_LOG_TREE").is_ok() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Tokens of `source`, ending with `End`, plus one diagnostic per
/// unrecognized character.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let tokens = Lexer::tokenize(source);
    let diagnostics = tokens
        .iter()
        .filter(|token| token.is(TokenKind::Illegal))
        .map(|token| {
            Diagnostic::error(ErrorCode::E0001)
                .with_message(format!("unrecognized token: {}", token.lexeme))
                .at(token.position)
        })
        .collect();
    (tokens, diagnostics)
}

/// Parse `source`, failing with every accumulated parse error.
pub fn parse(source: &str) -> Result<Program, Vec<Diagnostic>> {
    let output = monkey_parse::parse(source);
    if output.has_errors() {
        Err(output.diagnostics())
    } else {
        Ok(output.program)
    }
}

/// Parse and evaluate `source`, writing `puts` output to `print`.
///
/// Returns the textual form of the program's final value, or `None` when
/// that value is null.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_source(
    source: &str,
    config: InterpreterConfig,
    print: SharedPrintHandler,
) -> Result<Option<String>, Vec<Diagnostic>> {
    let program = parse(source)?;
    let mut interpreter = Interpreter::with_print_handler(print).with_config(config);
    let result = interpreter.eval_program(&program);
    match result {
        Ok(value) if value.is_null() => Ok(None),
        Ok(value) => Ok(Some(value.to_string())),
        Err(err) => Err(vec![err.to_diagnostic()]),
    }
}
