use pretty_assertions::assert_eq;

use super::*;
use crate::directive::no_case;
use crate::entry::parse;

fn first_char<P: Parser<Attribute = char>>(input: &str, p: &P) -> Option<char> {
    let mut c = '\0';
    parse(input, p, &mut c).matched.then_some(c)
}

#[test]
fn test_single_and_any() {
    assert_eq!(first_char("x", &char_('x')), Some('x'));
    assert_eq!(first_char("y", &char_('x')), None);
    assert_eq!(first_char("é", &any_char()), Some('é'));
    assert_eq!(first_char("", &any_char()), None);
}

#[test]
fn test_set_definition() {
    let ident = char_set("a-z_");
    assert_eq!(first_char("q", &ident), Some('q'));
    assert_eq!(first_char("_", &ident), Some('_'));
    assert_eq!(first_char("Q", &ident), None);

    let with_dash = char_set("+-");
    assert_eq!(first_char("-", &with_dash), Some('-'));
    assert_eq!(first_char(",", &with_dash), None);
}

#[test]
fn test_negation() {
    let not_digit = digit().negate();
    assert_eq!(first_char("a", &not_digit), Some('a'));
    assert_eq!(first_char("5", &not_digit), None);
    assert_eq!(not_digit.what(), "~digit");
}

#[test]
fn test_classes() {
    assert_eq!(first_char("\x0b", &space()), Some('\x0b'));
    assert_eq!(first_char("\n", &blank()), None);
    assert_eq!(first_char("F", &xdigit()), Some('F'));
    assert_eq!(first_char("!", &punct()), Some('!'));
    assert_eq!(first_char(" ", &graph()), None);
    assert_eq!(first_char(" ", &print()), Some(' '));
    assert_eq!(first_char("\x07", &cntrl()), Some('\x07'));
}

#[test]
fn test_no_case() {
    assert_eq!(first_char("X", &no_case(char_('x'))), Some('X'));
    assert_eq!(first_char("M", &no_case(char_range('a', 'z'))), Some('M'));
    assert_eq!(first_char("a", &no_case(upper())), Some('a'));
    assert_eq!(first_char("1", &no_case(lower())), None);
}

#[test]
fn test_lit_char_has_no_attribute() {
    let mut unused = Unused;
    assert!(parse("a", &LitChar::new('a'), &mut unused).is_full_match());
    assert!(!parse("b", &LitChar::new('a'), &mut unused).matched);
}
