use pretty_assertions::assert_eq;

use crate::{
    eval::prelude::{RuntimeError, RuntimeErrorType},
    lexer::prelude::{LexicalError, LexicalErrorType}
};

use super::prelude::{Error, SrcSpan};

#[test]
fn test_span_union() {
    let left = SrcSpan::from(4, 7);
    let right = SrcSpan::from(1, 5);

    assert_eq!(left.to(right), SrcSpan::from(1, 7));
    assert!(left.contains(4));
    assert!(!left.contains(7));
    assert_eq!(SrcSpan::point(3).to_string(), "3..3");
}

#[test]
fn test_error_display_is_plain_message() {
    let error = Error::from(LexicalError::new(
        LexicalErrorType::UnrecognizedCharacter { ch: '$' },
        SrcSpan::from(4, 5)
    ));

    assert_eq!(error.to_string(), "lexical error: unexpected character `$`");
    assert_eq!(error.title(), "Lexical error");
    assert_eq!(error.location(), SrcSpan::from(4, 5));
}

#[test]
fn test_pretty_string_points_into_line() {
    let src = "1 + $ 2";
    let error = Error::from(LexicalError::new(
        LexicalErrorType::UnrecognizedCharacter { ch: '$' },
        SrcSpan::from(4, 5)
    ));

    let pretty = error.pretty_string(src);

    assert!(pretty.contains("error: Lexical error"), "{pretty}");
    assert!(pretty.contains("<line>:1:5"), "{pretty}");
    assert!(pretty.contains("1 + $ 2"), "{pretty}");
    assert!(pretty.contains("not part of the language"), "{pretty}");
    assert!(pretty.contains("unexpected character `$`"), "{pretty}");
}

#[test]
fn test_out_of_line_span_renders_title_only() {
    let error = Error::from(RuntimeError::new(
        RuntimeErrorType::UndeclaredVariable { name: "y".into() },
        SrcSpan::from(30, 31)
    ));

    let diagnostic = error.to_diagnostic("f(1)");

    assert!(diagnostic.location.is_none());
    assert_eq!(diagnostic.title, "Reference error");

    let pretty = error.pretty_string("f(1)");

    assert!(pretty.contains("error: Reference error"), "{pretty}");
    assert!(pretty.contains("variable `y` is not declared"), "{pretty}");
}

#[test]
fn test_recursion_limit_title() {
    let error = Error::from(RuntimeError::new(
        RuntimeErrorType::RecursionLimitExceeded { limit: 8 },
        SrcSpan::from(0, 1)
    ));

    assert_eq!(error.title(), "Runtime error");
    assert!(error.to_string().starts_with("runtime error: recursion limit exceeded"));
}

#[test]
fn test_diagnostic_labels_the_error_span() {
    let error = Error::from(RuntimeError::new(
        RuntimeErrorType::UndeclaredVariable { name: "x".into() },
        SrcSpan::from(4, 5)
    ));

    let diagnostic = error.to_diagnostic("1 + x");
    let location = diagnostic.location.expect("span fits the line");

    assert_eq!(location.label.span, SrcSpan::from(4, 5));
    assert_eq!(location.label.text.as_deref(), Some("not found in this scope"));
    assert_eq!(location.name, "<line>");
}

#[test]
fn test_nesting_limit_title() {
    let error = Error::from(RuntimeError::new(
        RuntimeErrorType::NestingTooDeep { limit: 16 },
        SrcSpan::from(0, 1)
    ));

    assert_eq!(error.title(), "Runtime error");
    assert_eq!(error.to_string(), "runtime error: expression nested deeper than 16 levels during evaluation");
}
