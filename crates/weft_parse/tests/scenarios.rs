//! End-to-end behaviour of whole grammars through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use weft_parse::prelude::*;

rule! {
    AbChain: Unused = "ab-chain" => (lit('a') | 'b') >> (AbChain::rule() | 'b');
}

#[test]
fn unsigned_without_width_limit() {
    let mut value = 0_u32;
    let result = parse("123456", &uint_(), &mut value);
    assert!(result.is_full_match());
    assert_eq!(result.position, 6);
    assert_eq!(value, 123_456);
}

#[test]
fn signed_overflow_rolls_back() {
    let mut value = 7_i32;
    let result = parse("2147483648", &int_(), &mut value);
    assert!(!result.matched);
    assert_eq!(result.position, 0);
    assert_eq!(value, 7);

    let result = parse("2147483647", &int_(), &mut value);
    assert!(result.is_full_match());
    assert_eq!(value, i32::MAX);
}

#[test]
fn exact_repeat_then_literal() {
    let grammar = repeat(8, alpha()) >> 'X';

    let mut letters = String::new();
    let result = parse("abcdefghX", &grammar, &mut letters);
    assert!(result.is_full_match());
    assert_eq!(letters, "abcdefgh");

    let mut letters = String::new();
    let result = parse("abcdefgX", &grammar, &mut letters);
    assert!(!result.matched);
    assert_eq!(result.position, 0);
    assert_eq!(letters, "");
}

#[test]
fn failed_alternative_leaves_no_partial_container() {
    let grammar = int_() >> int_() >> eps_if(false) | attr(98) >> attr(99);
    let mut values: Vec<i32> = Vec::new();
    let result = phrase_parse("1 2", &grammar, &space(), PostSkip::Always, &mut values);
    assert!(result.matched);
    assert_eq!(values, vec![98, 99]);
}

#[test]
fn failed_alternative_leaves_no_partial_string() {
    let grammar = string("foo") >> "fan" | string("foodie");
    let mut text = String::new();
    let result = parse("foodie", &grammar, &mut text);
    assert!(result.is_full_match());
    assert_eq!(text, "foodie");
}

#[test]
fn self_recursive_rule() {
    let mut unused = Unused;

    let input = "aaaabababaaabbb";
    let result = parse(input, &AbChain::rule(), &mut unused);
    assert!(result.is_full_match());

    let input = "aaaabababaaabba";
    let result = parse(input, &AbChain::rule(), &mut unused);
    assert!(result.is_partial_match());
    assert_eq!(result.remainder(input), "a");
    assert!(result.clone().into_result(input).is_err());
}

#[test]
fn self_recursive_rule_injected() {
    let chain = AbChain::rule().define((lit('a') | 'b') >> (AbChain::rule() | 'b'));
    let mut unused = Unused;
    let result = parse("abab", &chain, &mut unused);
    assert!(result.is_full_match());
}

#[test]
fn key_value_list_with_diagnostics() {
    rule! {
        Name: String = "name" => lexeme(raw(alpha() >> kleene(alnum() | '_')));
        Pair: (String, i64) = "pair" => Name::rule() >> expect('=') >> expect(long_());
    }

    let grammar = Pair::rule() % ';';
    let pairs: Vec<(String, i64)> =
        phrase_parse_all("width = 80; depth=-3", &grammar, &space()).unwrap();
    assert_eq!(
        pairs,
        vec![("width".to_owned(), 80), ("depth".to_owned(), -3)]
    );

    let input = "width = 80;\ndepth 3";
    let err = phrase_parse_all::<_, _, Vec<(String, i64)>>(input, &grammar, &space()).unwrap_err();
    assert_eq!(err.to_string(), "expecting '=' at line 2, column 7");
}
