//! The `explain` command: display documentation for compiler error codes.

use std::io::Write;

use ferret_diagnostic::{ErrorCode, ErrorDocs};

use super::{EXIT_FAILURE, EXIT_SUCCESS};

/// Write the documentation for `code_str` to `out`.
///
/// Unknown codes are reported on `err` with the list of documented ones.
pub fn explain_error<O: Write, E: Write>(code_str: &str, out: &mut O, err: &mut E) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(err, "error: unknown error code '{code_str}'");
        let _ = writeln!(err);
        let known: Vec<&str> = ErrorDocs::all_codes().map(|code| code.as_str()).collect();
        let _ = writeln!(err, "Known codes: {}", known.join(", "));
        return EXIT_FAILURE;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = write!(out, "{doc}");
        let _ = out.flush();
        EXIT_SUCCESS
    } else {
        let _ = writeln!(err, "error: no documentation available for {code}");
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(code: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = explain_error(code, &mut out, &mut err);
        (
            status,
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
        )
    }

    #[test]
    fn test_explain_known_code() {
        let (status, out, err) = run("E0001");
        assert_eq!(status, EXIT_SUCCESS);
        assert!(out.starts_with("# E0001: invalid float literal"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_explain_is_case_insensitive() {
        let (status, out, _) = run("e0004");
        assert_eq!(status, EXIT_SUCCESS);
        assert!(out.contains("invalid character"));
    }

    #[test]
    fn test_explain_unknown_code() {
        let (status, out, err) = run("E9999");
        assert_eq!(status, EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(err.contains("unknown error code 'E9999'"));
        assert!(err.contains("E0001, E0002, E0003, E0004"));
    }
}
