use ferret_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn details(code: ErrorCode, column: u32) -> DiagnosticDetails {
    DiagnosticDetails::error(code, "main.fl", Span::point(1, column))
}

#[test]
fn new_collection_is_empty() {
    let diags = Diagnostics::new();
    assert!(diags.is_empty());
    assert_eq!(diags.len(), 0);
    assert_eq!(diags.error_count(), 0);
    assert_eq!(diags, Diagnostics::default());
}

#[test]
fn create_block_returns_stored_block() {
    let mut diags = Diagnostics::new();
    let block = diags.create_block(
        details(ErrorCode::InvalidCharacter, 3),
        ErrorInfo::new("ab$").with_headline("invalid character"),
    );
    assert_eq!(block.code(), ErrorCode::InvalidCharacter);
    assert_eq!(block.headline(), "invalid character");
    assert_eq!(diags.len(), 1);
}

#[test]
fn blocks_keep_insertion_order() {
    let mut diags = Diagnostics::new();
    let _ = diags.create_block(details(ErrorCode::InvalidNumberLiteral, 5), ErrorInfo::new("x"));
    let _ = diags.create_block(details(ErrorCode::InvalidFloatLiteral, 1), ErrorInfo::new("x"));
    let _ = diags.create_block(details(ErrorCode::InvalidCharacter, 9), ErrorInfo::new("x"));

    let codes: Vec<ErrorCode> = diags.iter().map(DiagnosticBlock::code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::InvalidNumberLiteral,
            ErrorCode::InvalidFloatLiteral,
            ErrorCode::InvalidCharacter,
        ]
    );
    assert_eq!(diags.error_count(), 3);
    assert_eq!(diags.get(1).map(|b| b.location().column), Some(1));
    assert!(diags.get(3).is_none());
}

#[test]
fn into_iterator_yields_owned_blocks() {
    let mut diags = Diagnostics::new();
    let _ = diags.create_block(details(ErrorCode::InvalidVariableName, 2), ErrorInfo::new("a@b"));
    let owned: Vec<DiagnosticBlock> = diags.into_iter().collect();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].line_content(), "a@b");
}
