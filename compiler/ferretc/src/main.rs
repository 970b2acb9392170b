//! Ferret Compiler CLI

use std::io::{self, Write};

use ferretc::commands::{
    explain_error, lex_file, parse_lex_options, EXIT_FAILURE, EXIT_SUCCESS,
};
use ferretc::tracing_setup::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    std::process::exit(run(&args));
}

fn run(args: &[String]) -> i32 {
    let Some(command) = args.get(1) else {
        print_usage(&mut io::stderr());
        return EXIT_FAILURE;
    };

    match command.as_str() {
        "lex" => lex(&args[2..]),
        "--explain" | "explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: ferret explain <ERROR_CODE>");
                eprintln!("Example: ferret explain E0001");
                return EXIT_FAILURE;
            };
            explain_error(code, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
        "help" | "--help" | "-h" => {
            print_usage(&mut io::stdout());
            EXIT_SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("Ferret Compiler {}", env!("CARGO_PKG_VERSION"));
            EXIT_SUCCESS
        }
        _ => {
            // A bare source path is shorthand for `lex <path>`.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("fl"))
            {
                lex(&args[1..])
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage(&mut io::stderr());
                EXIT_FAILURE
            }
        }
    }
}

fn lex(args: &[String]) -> i32 {
    match parse_lex_options(args) {
        Ok(options) => lex_file(&options),
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("Usage: ferret lex <file.fl> [--color=auto|always|never]");
            EXIT_FAILURE
        }
    }
}

fn print_usage(w: &mut impl Write) {
    let _ = writeln!(
        w,
        "\
Ferret Compiler

Usage: ferret <command> [options]

Commands:
  lex <file.fl>        Tokenize a file and print its tokens
  <file.fl>            Shorthand for `lex <file.fl>`
  explain <code>       Explain an error code (e.g., E0001)
  help                 Show this help message
  version              Show version information

Lex options:
  --color=<mode>       Colour diagnostics: auto (default), always, never

Output:
  One `<kind>:<lexeme>` line per token on stdout. Lexical errors are
  reported on stderr with exit code 1; unreadable files exit with 2.

Environment:
  FERRET_LOG           Tracing filter for compiler internals (e.g. debug)"
    );
}
