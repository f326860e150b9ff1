use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_failure_on_second_line() {
    for line_break in ["\n", "\r", "\r\n"] {
        let input = format!("foo{line_break}  foo{line_break}git");
        let position = input.find("  foo").map(|p| p + 2);
        let failure = ExpectationFailure::new(position.unwrap_or_default(), "\"bar\"");

        assert_eq!(
            Report::new(&input).render_failure(&failure),
            "In line 2:\nError! Expecting: \"bar\" here:\n  foo\n__^_\n"
        );
    }
}

#[test]
fn test_failure_at_end_of_first_line() {
    let input = "foo\n  foo\ngit";
    let failure = ExpectationFailure::new(3, "\"bar\"");

    assert_eq!(
        Report::new(input).render_failure(&failure),
        "In line 1:\nError! Expecting: \"bar\" here:\nfoo\n___^_\n"
    );
}

#[test]
fn test_leading_line_break() {
    let input = "\nfoo  foo\ngit";
    let failure = ExpectationFailure::new(6, "\"bar\"");

    assert_eq!(
        Report::new(input).render_failure(&failure),
        "In line 2:\nError! Expecting: \"bar\" here:\nfoo  foo\n_____^_\n"
    );
}

#[test]
fn test_file_name_and_tabs() {
    let input = "\tx";
    let report = Report::new(input).with_file("calc.txt").with_tab_width(2);

    assert_eq!(
        report.render(1, "oops"),
        "In file calc.txt, line 1:\noops\n\tx\n__^_\n"
    );
}

#[test]
fn test_position_past_end_is_clamped() {
    assert_eq!(Report::new("ab").render(99, "m"), "In line 1:\nm\nab\n__^_\n");
}
