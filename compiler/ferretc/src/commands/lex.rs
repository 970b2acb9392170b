//! The `lex` command: tokenize a file and print its tokens.
//!
//! Output contract:
//! - success: one `<ordinal>:<lexeme>` line per token on stdout, exit 0
//! - lexical errors: the rendered report on stderr, exit 1
//! - unreadable file: `error: <reason>` on stderr, exit 2, nothing is lexed

use std::io::{self, IsTerminal, Write};

use ferret_diagnostic::emitter::{ColorMode, DiagnosticEmitter, Palette, TerminalEmitter};
use ferret_ir::Token;
use ferret_lexer::{lexeme, tokenize};
use ferret_lexer_core::SourceBuffer;

use super::{EXIT_FAILURE, EXIT_LEX_ERROR, EXIT_SUCCESS};

/// Options for the `lex` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub path: String,
    pub color: ColorMode,
}

/// Parse the arguments following `lex`.
///
/// Accepts one path and an optional `--color=auto|always|never`, in any
/// order.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut path: Option<&str> = None;
    let mut color = ColorMode::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::from_flag(value)
                .ok_or_else(|| format!("invalid value '{value}' for --color"))?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg);
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(LexOptions {
        path: path.to_string(),
        color,
    })
}

/// Load and lex the file named in `options`, writing to stdout/stderr.
pub fn lex_file(options: &LexOptions) -> i32 {
    let buffer = match SourceBuffer::from_file(&options.path) {
        Ok(buffer) => buffer,
        Err(e) => {
            tracing::debug!(path = %options.path, error = %e, "failed to load source");
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };

    let palette = Palette::for_mode(options.color, io::stderr().is_terminal());
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    lex_source(&buffer, &mut out, &mut err, palette)
}

/// Lex an already-loaded buffer.
///
/// Tokens go to `out`; the diagnostic report goes to `err`. Returns the
/// exit code.
pub fn lex_source<O: Write, E: Write>(
    buffer: &SourceBuffer,
    out: &mut O,
    err: &mut E,
    palette: Palette,
) -> i32 {
    match tokenize(buffer) {
        Ok(tokens) => {
            for token in &tokens {
                let _ = writeln!(out, "{}", format_token(buffer, token));
            }
            let _ = out.flush();
            EXIT_SUCCESS
        }
        Err(diagnostics) => {
            let mut emitter = TerminalEmitter::new(err, palette);
            emitter.emit_all(&diagnostics);
            emitter.emit_summary(diagnostics.error_count());
            emitter.flush();
            EXIT_LEX_ERROR
        }
    }
}

/// `<ordinal>:<lexeme>`, the per-token output line.
fn format_token(buffer: &SourceBuffer, token: &Token) -> String {
    format!("{}:{}", token.kind.ordinal(), lexeme(buffer, token))
}
