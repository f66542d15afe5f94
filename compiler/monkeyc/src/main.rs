//! Monkey interpreter CLI.

use monkeyc::commands::{explain_error, parse_file, parse_run_options, run_file, tokenize_file};
use monkeyc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "eval" | "run" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey eval <file> [--max-depth=N]");
                std::process::exit(1);
            }

            let mut file_path = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    flags.push(arg.clone());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: monkey eval <file> [--max-depth=N]");
                std::process::exit(1);
            };

            let options = match parse_run_options(&flags) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };

            run_file(path, &options);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "tokenize" | "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey tokenize <file>");
                std::process::exit(1);
            }
            tokenize_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey explain <ERROR_CODE>");
                eprintln!("Example: monkey explain E1002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval <file>          Evaluate a program (alias: run)");
    println!("  parse <file>         Print the parsed program in canonical form");
    println!("  tokenize <file>      Print the token stream (alias: lex)");
    println!("  explain <code>       Explain an error code (e.g., E1002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Eval options:");
    println!("  --max-depth=<N>      Maximum nested function calls (default: 10000)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing output (e.g., monkey_eval=debug)");
    println!("  MONKEY_LOG_TREE      Render tracing spans as a tree");
    println!();
    println!("Examples:");
    println!("  monkey eval fib.mk");
    println!("  monkey eval deep.mk --max-depth=50000");
    println!("  monkey parse fib.mk");
    println!("  monkey explain E2002            # Explain type mismatch");
}
