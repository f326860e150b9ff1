#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::Span;

fn render(emitter_source: Option<&str>, diag: &Diagnostic, mode: ColorMode) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
        if let Some(text) = emitter_source {
            emitter = emitter.with_source("input", text);
        }
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_snippet_with_source() {
    let diag = Diagnostic::error()
        .with_message("expected `)`")
        .with_label(Span::point(4), "expected `)` here");

    let text = render(Some("(1+2"), &diag, ColorMode::Never);
    assert_eq!(
        text,
        "error: expected `)`\n --> input:1:5\n  |\n1 | (1+2\n  |     ^ expected `)` here\n\n"
    );
}

#[test]
fn test_snippet_second_line() {
    let diag = Diagnostic::error()
        .with_message("bad")
        .with_label(Span::new(6, 8), "this");

    let text = render(Some("first\nab cd\n"), &diag, ColorMode::Never);
    assert!(text.contains("input:2:1"), "got:\n{text}");
    assert!(text.contains("2 | ab cd"), "got:\n{text}");
    assert!(text.contains("  | ^^ this"), "got:\n{text}");
}

#[test]
fn test_without_source_uses_ranges() {
    let diag = Diagnostic::error()
        .with_message("bad")
        .with_label(Span::new(3, 7), "here")
        .with_secondary_label(Span::new(0, 1), "there")
        .with_note("more");

    let text = render(None, &diag, ColorMode::Never);
    assert!(text.contains("--> 3..7: here"), "got:\n{text}");
    assert!(text.contains("::: 0..1: there"), "got:\n{text}");
    assert!(text.contains("= note: more"), "got:\n{text}");
}

#[test]
fn test_color_modes() {
    let diag = Diagnostic::error().with_message("colored");
    assert!(render(None, &diag, ColorMode::Always).contains("\x1b["));
    assert!(!render(None, &diag, ColorMode::Never).contains("\x1b["));
    assert!(!render(None, &diag, ColorMode::Auto).contains("\x1b["));
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_emit_all_and_summary() {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        emitter.emit_all(&[
            Diagnostic::error().with_message("error 1"),
            Diagnostic::warning().with_message("warning 1"),
        ]);
        emitter.emit_summary(1, 1);
        emitter.emit_summary(0, 3);
        emitter.emit_summary(0, 0);
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error: error 1"));
    assert!(text.contains("warning: warning 1"));
    assert!(text.contains("aborting due to previous error; 1 warning emitted"));
    assert!(text.contains("warning: 3 warnings emitted"));
}
