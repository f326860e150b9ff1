use pretty_assertions::assert_eq;

use crate::prelude::*;
use crate::ParserFlags;

#[test]
fn test_flags_of_terminals() {
    assert_eq!(
        <crate::numeric::IntParser<i32>>::flags(),
        ParserFlags::HAS_ATTRIBUTE
    );
    assert_eq!(crate::char::LitChar::flags(), ParserFlags::empty());
}

#[test]
fn test_flags_propagate_through_composites() {
    fn flags_of<P: Parser>(_: &P) -> ParserFlags {
        P::flags()
    }

    let collected = kleene(digit());
    assert_eq!(
        flags_of(&collected),
        ParserFlags::HAS_ATTRIBUTE | ParserFlags::HANDLES_CONTAINER
    );

    let with_action = digit().action(|_, _| {}) >> 'x';
    assert!(flags_of(&with_action).contains(ParserFlags::HAS_ACTION));
    assert!(!flags_of(&as_::<char, _>(digit().action(|_, _| {}))).contains(ParserFlags::HAS_ACTION));
}

#[test]
fn test_literals_convert_on_the_right() {
    let p = digit() >> ':' >> "end";
    let mut value = '\0';
    assert!(parse("7:end", &p, &mut value).is_full_match());
    assert_eq!(value, '7');
}

#[test]
fn test_what_describes_tree() {
    assert_eq!((lit('a') >> 'b').what(), "('a' >> 'b')");
    assert_eq!((lit("if") | "else").what(), "(\"if\" | \"else\")");
    assert_eq!(kleene(digit()).what(), "*digit");
}

#[test]
fn test_then_expect_records_failure() {
    let p = lit('(').then_expect(')');
    let mut unused = Unused;
    let result = parse("(]", &p, &mut unused);
    assert!(!result.matched);
    let failure = result.failure.unwrap();
    assert_eq!(failure.position, 1);
    assert_eq!(failure.which, "')'");
}

#[test]
fn test_omit_and_raw() {
    let mut text = String::new();
    assert!(parse("12ab", &(digit() >> digit()).raw(), &mut text).matched);
    assert_eq!(text, "12");

    let mut value = '\0';
    assert!(parse("1x", &(digit().omit() >> char_('x')), &mut value).matched);
    assert_eq!(value, 'x');
}
