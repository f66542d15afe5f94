//! The `eval` command: parse and evaluate a Monkey source file.

use monkey_eval::{stdout_handler, InterpreterConfig};

use super::{read_source, report_and_exit};
use crate::{run_source, CliError};

/// Options accepted after the file path.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct RunOptions {
    pub config: InterpreterConfig,
}

/// Parse `--max-depth=N`; anything else is an error.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, CliError> {
    let mut options = RunOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.config.max_call_depth = value
                .parse::<usize>()
                .ok()
                .filter(|depth| *depth > 0)
                .ok_or_else(|| CliError::InvalidMaxDepth {
                    value: value.to_string(),
                })?;
        } else {
            return Err(CliError::UnknownOption {
                option: arg.clone(),
            });
        }
    }
    Ok(options)
}

/// Evaluate a file. `puts` output goes to stdout as it happens; a final
/// value other than null is printed last, through the same handler.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_source(path);
    let print = stdout_handler();
    match run_source(&source, options.config, print.clone()) {
        Ok(Some(value)) => print.println(&value),
        Ok(None) => {}
        Err(diagnostics) => report_and_exit(&diagnostics),
    }
}
