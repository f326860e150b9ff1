use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn test_partial_match_reports_position() {
    let mut value = 0_i32;
    let result = parse("12abc", &int_(), &mut value);
    assert!(result.matched);
    assert!(result.is_partial_match());
    assert!(!result.is_full_match());
    assert_eq!(result.remainder("12abc"), "abc");
    assert_eq!(value, 12);
}

#[test]
fn test_failure_leaves_attribute_untouched() {
    let mut values = vec![9];
    let result = parse("1,2,x", &(int_() % ',' >> eoi()), &mut values);
    assert!(!result.matched);
    assert_eq!(result.position, 0);
    assert_eq!(values, vec![9]);
}

#[test]
fn test_success_appends_to_container() {
    let mut values = vec![9];
    assert!(parse("1,2", &(int_() % ','), &mut values).is_full_match());
    assert_eq!(values, vec![9, 1, 2]);
}

#[test]
fn test_post_skip() {
    let input = "1 ,2  ";
    let p = int_() % ',';

    let mut always: Vec<i32> = Vec::new();
    let result = phrase_parse(input, &p, &space(), PostSkip::Always, &mut always);
    assert!(result.is_full_match());

    let mut never: Vec<i32> = Vec::new();
    let result = phrase_parse(input, &p, &space(), PostSkip::Never, &mut never);
    assert!(result.is_partial_match());
    assert_eq!(result.remainder(input), "  ");
    assert_eq!(always, never);
}

#[test]
fn test_failure_tracking_can_be_disabled() {
    let p = lit('a') >> expect('b');
    let mut unused = Unused;

    let tracked = parse("ac", &p, &mut unused);
    assert_eq!(tracked.failure.map(|f| (f.position, f.which)), Some((1, "'b'".to_owned())));

    let options = ParseOptions {
        track_failures: false,
        ..ParseOptions::default()
    };
    let untracked = parse_with_options("ac", &p, &space(), options, &mut unused);
    assert!(!untracked.matched);
    assert_eq!(untracked.failure, None);
}

#[test]
fn test_parse_all_ok() {
    let values: Vec<u32> = phrase_parse_all("1, 2, 3 ", &(uint_() % ','), &space())
        .unwrap_or_default();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_parse_all_no_match() {
    let err = parse_all::<_, i32>("x", &int_()).err();
    assert_eq!(err, Some(ParseError::NoMatch));
    assert_eq!(ParseError::NoMatch.position(), None);
}

#[test]
fn test_parse_all_incomplete() {
    let input = "1,\n2;";
    let err = parse_all::<_, Vec<i32>>(input, &(int_() % (lit(',') >> eol()))).err();
    assert_eq!(
        err,
        Some(ParseError::Incomplete {
            position: 4,
            line: 2,
            column: 2,
        })
    );
    assert_eq!(
        err.map(|e| e.to_string()).unwrap_or_default(),
        "unexpected input at line 2, column 2"
    );
}

#[test]
fn test_parse_all_expectation() {
    let input = "let\n  x =";
    let p = lit("let") >> expect(plus(alpha())) >> expect(lit('=')) >> expect(int_());
    let err = phrase_parse_all::<_, _, (String, i32)>(input, &p, &space()).err();
    assert_eq!(
        err,
        Some(ParseError::Expectation {
            position: 9,
            line: 2,
            column: 6,
            which: "integer".to_owned(),
        })
    );
    assert_eq!(err.and_then(|e| e.position()), Some(9));
}
