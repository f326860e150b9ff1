use std::cell::Cell;

use pretty_assertions::assert_eq;

use crate::context::Key;
use crate::prelude::*;

struct Counter;
impl Key for Counter {
    type Value = Cell<u32>;
}

struct Level;
impl Key for Level {
    type Value = u32;
}

type Visible = Cell<(Option<u32>, Option<u32>)>;

/// Records which of `Counter` and `Level` the context shows.
fn observe(seen: &Visible) -> impl Parser<Attribute = Unused> + Copy + '_ {
    eps().action(move |_, cx| {
        seen.set((cx.get::<Counter>().map(Cell::get), cx.get::<Level>().copied()));
    })
}

fn ws() -> impl Parser<Attribute = char> + Copy {
    space()
}

#[test]
fn test_lexeme_disables_inner_skipping() {
    let ident = lexeme(raw(alpha() >> kleene(alnum())));
    let mut names: Vec<String> = Vec::new();
    let result = phrase_parse("  ab1 cd", &kleene(ident), &ws(), PostSkip::Always, &mut names);
    assert!(result.is_full_match());
    assert_eq!(names, vec!["ab1".to_owned(), "cd".to_owned()]);
}

#[test]
fn test_no_skip_does_not_pre_skip() {
    let mut unused = Unused;
    let result = phrase_parse(" a", &no_skip(lit('a')), &ws(), PostSkip::Never, &mut unused);
    assert!(!result.matched);
}

#[test]
fn test_skip_reenables() {
    let mut text = String::new();
    let p = no_skip(alpha() >> skip(alpha()));
    let result = phrase_parse("a  b", &p, &ws(), PostSkip::Never, &mut text);
    assert!(result.is_full_match());
    assert_eq!(text, "ab");
}

#[test]
fn test_skip_with_installs_skipper() {
    let p = skip_with(char_('.'), int_() >> int_());
    let mut value = (0_i32, 0_i32);
    assert!(parse("1..2", &p, &mut value).is_full_match());
    assert_eq!(value, (1, 2));
}

#[test]
fn test_raw_excludes_leading_skip() {
    let mut text = String::new();
    let result = phrase_parse("   12.5", &raw(double_()), &ws(), PostSkip::Always, &mut text);
    assert!(result.is_full_match());
    assert_eq!(text, "12.5");
}

#[test]
fn test_matches_always_succeeds() {
    let mut found = true;
    let result = parse("x", &matches(digit()), &mut found);
    assert!(result.matched);
    assert!(!found);
    assert_eq!(result.position, 0);
}

#[test]
fn test_repeat_bounds() {
    let mut text = String::new();
    assert!(parse("abc", &repeat(3, alpha()), &mut text).is_full_match());
    assert_eq!(text, "abc");

    let mut text = String::new();
    let result = parse("abcdef", &repeat(2..=4, alpha()), &mut text);
    assert_eq!((text.as_str(), result.position), ("abcd", 4));

    let mut text = String::new();
    assert!(!parse("a", &repeat(2.., alpha()), &mut text).matched);
}

#[test]
fn test_repeat_exact_then_literal() {
    let p = repeat(8, alpha()) >> 'X';
    let mut text = String::new();
    assert!(parse("abcdefghX", &p, &mut text).is_full_match());

    let mut text = String::new();
    let result = parse("abcdefgX", &p, &mut text);
    assert!(!result.matched);
    assert_eq!(result.position, 0);
}

#[test]
fn test_seek_finds_later_match() {
    let mut value = 0_u32;
    let result = parse("abc 42 rest", &seek(uint_()), &mut value);
    assert!(result.matched);
    assert_eq!((value, result.position), (42, 6));
    assert!(!parse("none", &seek(uint_()), &mut value).matched);
}

#[test]
fn test_as_and_narrow() {
    let mut wide: i64 = 0;
    assert!(parse("12", &as_::<i64, _>(int_()), &mut wide).matched);
    assert_eq!(wide, 12);

    let mut small: u8 = 0;
    assert!(parse("255", &narrow::<u8, _>(uint_()), &mut small).matched);
    assert_eq!(small, 255);
    let result = parse("256", &narrow::<u8, _>(uint_()), &mut small);
    assert!(!result.matched);
    assert_eq!(result.position, 0);
}

#[test]
fn test_with_binds_shared_value() {
    let count = Cell::new(0);
    let counted = alpha().action(|_, cx| {
        if let Some(counter) = cx.get::<Counter>() {
            counter.set(counter.get() + 1);
        }
    });
    let mut text = String::new();
    let result = parse("abc", &with(Counter, &count, kleene(counted)), &mut text);
    assert!(result.is_full_match());
    assert_eq!(count.get(), 3);
}

#[test]
fn test_with_local_is_fresh_per_invocation() {
    let seen = Cell::new(0);
    let counted = alpha().action(|_, cx| {
        if let Some(counter) = cx.get::<Counter>() {
            counter.set(counter.get() + 1);
            seen.set(counter.get());
        }
    });
    let word = with_local(Counter, plus(counted));
    let mut words: Vec<String> = Vec::new();
    let result = phrase_parse("ab abc", &kleene(lexeme(word)), &ws(), PostSkip::Always, &mut words);
    assert!(result.is_full_match());
    assert_eq!(seen.get(), 3);
}

#[test]
fn test_without_hides_tag() {
    let seen = Visible::default();
    let mut unused = Unused;

    let p = with(Level, Own(1), without(Level, observe(&seen)));
    assert!(parse("", &p, &mut unused).matched);
    assert_eq!(seen.get(), (None, None));

    let p = with(Level, Own(1), without(Counter, observe(&seen)));
    assert!(parse("", &p, &mut unused).matched);
    assert_eq!(seen.get(), (None, Some(1)));
}

#[test]
fn test_without_keeps_other_tags() {
    let seen = Visible::default();
    let count = Cell::new(7);
    let mut unused = Unused;

    let p = with(Counter, &count, with(Level, Own(2), without(Level, observe(&seen))));
    assert!(parse("", &p, &mut unused).matched);
    assert_eq!(seen.get(), (Some(7), None));

    let p = with(Counter, &count, with(Level, Own(2), without(Counter, observe(&seen))));
    assert!(parse("", &p, &mut unused).matched);
    assert_eq!(seen.get(), (None, Some(2)));

    let both = without(Counter, without(Level, observe(&seen)));
    let p = with(Counter, &count, with(Level, Own(2), both));
    assert!(parse("", &p, &mut unused).matched);
    assert_eq!(seen.get(), (None, None));
}

#[test]
fn test_without_hides_shadowed_values_too() {
    let seen = Visible::default();
    let mut unused = Unused;
    let p = with(Level, Own(1), with(Level, Own(2), without(Level, observe(&seen))));
    assert!(parse("", &p, &mut unused).matched);
    assert_eq!(seen.get(), (None, None));
}

#[test]
fn test_without_is_scoped_to_subject() {
    let seen = Visible::default();
    let mut text = String::new();
    let p = with(Level, Own(5), without(Level, raw(alpha())) >> observe(&seen));
    assert!(parse("a", &p, &mut text).is_full_match());
    assert_eq!(text, "a");
    assert_eq!(seen.get(), (None, Some(5)));
    assert_eq!(without(Level, alpha()).what(), format!("without[{}]", alpha().what()));
}
