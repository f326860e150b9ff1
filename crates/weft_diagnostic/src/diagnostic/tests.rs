use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error()
        .with_message("unbalanced parenthesis")
        .with_label(Span::new(4, 5), "expected `)`")
        .with_secondary_label(Span::new(0, 1), "opened here")
        .with_note("every `(` needs a matching `)`");

    assert!(diag.is_error());
    assert_eq!(diag.message, "unbalanced parenthesis");
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::warning()
        .with_secondary_label(Span::new(0, 1), "context")
        .with_label(Span::new(7, 9), "here");

    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(7, 9)));
    assert_eq!(Diagnostic::error().primary_span(), None);
}

#[test]
fn test_from_failure() {
    let failure = ExpectationFailure::new(12, "\"bar\"");
    let diag = Diagnostic::from_failure(&failure);

    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "expected \"bar\"");
    assert_eq!(diag.primary_span(), Some(Span::point(12)));
    assert_eq!(diag.labels[0].message, "expected \"bar\" here");
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error()
        .with_message("test error")
        .with_label(Span::new(0, 5), "here")
        .with_note("context");

    assert_eq!(
        diag.to_string(),
        "error: test error\n  0..5: here\n  = note: context"
    );
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Note.to_string(), "note");
}
