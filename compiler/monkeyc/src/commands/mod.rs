//! Command handlers for the `monkey` CLI.
//!
//! Each submodule implements one command. Handlers print their results to
//! stdout and exit with status 1 on failure; shared helpers for reading
//! input and reporting diagnostics live here.

use monkey_diagnostic::Diagnostic;

use crate::read_file;

mod debug;
mod explain;
mod run;

pub use debug::{parse_file, tokenize_file};
pub use explain::explain_error;
pub use run::{parse_run_options, run_file, RunOptions};

/// Read a file from disk, exiting with a user-friendly error on failure.
fn read_source(path: &str) -> String {
    match read_file(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Print diagnostics as `line:column: message` and exit with status 1.
fn report_and_exit(diagnostics: &[Diagnostic]) -> ! {
    for diagnostic in diagnostics {
        println!("{diagnostic}");
    }
    std::process::exit(1);
}
