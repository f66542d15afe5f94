//! The `explain` command: documentation for error codes.

use monkey_diagnostic::{ErrorCode, ErrorDocs};

pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        let documented: Vec<&str> = ErrorDocs::all_codes().map(|code| code.as_str()).collect();
        eprintln!("Documented codes: {}", documented.join(", "));
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code}");
        std::process::exit(1);
    }
}
