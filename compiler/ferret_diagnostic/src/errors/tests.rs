use super::*;

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::get(*code).is_some(), "{code} has no documentation");
    }
    assert_eq!(ErrorDocs::all_codes().count(), ErrorCode::ALL.len());
}

#[test]
fn test_doc_title_names_its_code() {
    for code in ErrorDocs::all_codes() {
        let Some(doc) = ErrorDocs::get(code) else {
            panic!("missing doc for {code}");
        };
        let title = doc.lines().next().unwrap_or_default();
        assert!(title.starts_with(&format!("# {code}:")), "bad title for {code}: {title}");
        assert!(title.contains(code.category()), "title should name the category: {title}");
    }
}

#[test]
fn test_docs_have_example_section() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(doc.contains("## Example"), "{code} doc lacks an example");
        assert!(doc.contains("```ferret"), "{code} doc lacks a code block");
    }
}
