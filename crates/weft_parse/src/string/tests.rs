use pretty_assertions::assert_eq;

use super::*;
use crate::directive::no_case;
use crate::entry::parse;

#[test]
fn test_match_literal() {
    assert_eq!(match_literal("foobar", "foo", false), Some(3));
    assert_eq!(match_literal("fo", "foo", false), None);
    assert_eq!(match_literal("FOObar", "foo", true), Some(3));
    assert_eq!(match_literal("FOO", "foo", true), Some(3));
    assert_eq!(match_literal("FOO", "foo", false), None);
}

#[test]
fn test_string_exposes_input() {
    let mut text = String::new();
    assert!(parse("KeyWord!", &no_case(string("keyword")), &mut text).matched);
    assert_eq!(text, "KeyWord");
}

#[test]
fn test_lit_forms() {
    let mut unused = Unused;
    assert!(parse("if", &lit("if"), &mut unused).is_full_match());
    assert!(parse("x", &lit('x'), &mut unused).is_full_match());
    assert!(!parse("i", &lit("if"), &mut unused).matched);
}

#[test]
fn test_failed_literal_restores_cursor() {
    let mut text = String::new();
    let result = parse("fox", &string("foo"), &mut text);
    assert!(!result.matched);
    assert_eq!(result.position, 0);
    assert_eq!(text, "");
}
