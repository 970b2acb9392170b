use pretty_assertions::assert_eq;

use super::*;

fn sample_block() -> DiagnosticBlock {
    DiagnosticBlock::new(
        DiagnosticDetails::error(ErrorCode::InvalidFloatLiteral, "main.fl", Span::new(1, 5, 2)),
        ErrorInfo::new("12.3.4")
            .with_headline("invalid float literal")
            .with_message("numbers can have at most one decimal point")
            .with_hint("remove any extra decimal points"),
    )
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::default(), Severity::Error);
}

#[test]
fn test_block_accessors() {
    let block = sample_block();
    assert_eq!(block.severity(), Severity::Error);
    assert_eq!(block.filepath(), "main.fl");
    assert_eq!(block.location(), Span::new(1, 5, 2));
    assert_eq!(block.code(), ErrorCode::InvalidFloatLiteral);
    assert_eq!(block.line_content(), "12.3.4");
    assert_eq!(block.headline(), "invalid float literal");
    assert_eq!(block.message(), "numbers can have at most one decimal point");
    assert_eq!(block.hint(), "remove any extra decimal points");
    assert!(block.is_error());
}

#[test]
fn test_block_display_summary() {
    assert_eq!(
        sample_block().to_string(),
        "error[E0001]: invalid float literal (main.fl:1:5)"
    );
}

#[test]
fn test_error_info_builder_defaults_empty() {
    let info = ErrorInfo::new("abc");
    assert_eq!(info.line_content, "abc");
    assert_eq!(info.headline, "");
    assert_eq!(info.message, "");
    assert_eq!(info.hint, "");
}

#[test]
fn test_details_error_constructor() {
    let details = DiagnosticDetails::error(ErrorCode::InvalidCharacter, "x.fl", Span::point(2, 3));
    assert_eq!(details.severity, Severity::Error);
    assert_eq!(details.filepath, "x.fl");
    assert_eq!(details.location.length, 1);
}
