use std::cell::RefCell;

use pretty_assertions::assert_eq;
use weft_diagnostic::{ExpectationFailure, Report};

use crate::prelude::*;
use crate::rule::call_rule_definition;

rule! {
    Digits: String = "digits" => plus(digit());
    Pair: (u32, u32) = "pair" => uint_() >> ',' >> uint_();
    Silent: String = "digits" => plus(digit()).action(|_, _| {});
    Loud: String = "digits" %= plus(digit()).action(|_, _| {});
    Nested: u32 = "nested";
    Bar: Unused = "\"bar\"" => lit("bar");
    Sum: i32 = "sum" => omit((int_() % '+').action(|values, cx| {
        if let Some(mut total) = cx.val::<i32>() {
            *total = values.iter().sum();
        }
    }));
}

#[test]
fn test_name_and_what() {
    assert_eq!(Digits::rule().name(), "digits");
    assert_eq!(Pair::rule().what(), "pair");
    assert_eq!(format!("{:?}", Pair::rule()), "Rule(pair)");
}

#[test]
fn test_out_of_line_body() {
    let mut digits = String::new();
    assert!(parse("123", &Digits::rule(), &mut digits).is_full_match());
    assert_eq!(digits, "123");

    let mut pair = (0_u32, 0_u32);
    assert!(parse("4,5", &Pair::rule(), &mut pair).is_full_match());
    assert_eq!(pair, (4, 5));
}

#[test]
fn test_rule_inside_larger_grammar() {
    let pairs = Pair::rule() % ';';
    let mut values: Vec<(u32, u32)> = Vec::new();
    let result = phrase_parse("1, 2; 3 ,4", &pairs, &space(), PostSkip::Always, &mut values);
    assert!(result.is_full_match());
    assert_eq!(values, vec![(1, 2), (3, 4)]);
}

#[test]
fn test_failed_rule_restores_cursor() {
    let p = raw(Pair::rule() >> '!') | raw(uint_() >> ",?");
    let mut value = String::new();
    let result = parse("7,?", &p, &mut value);
    assert!(result.is_full_match());
    assert_eq!(value, "7,?");
}

#[test]
fn test_action_suppresses_attribute() {
    let mut value = String::new();
    assert!(parse("123", &Silent::rule(), &mut value).is_full_match());
    assert_eq!(value, "");
}

#[test]
fn test_forced_rule_keeps_attribute() {
    let mut value = String::new();
    assert!(parse("123", &Loud::rule(), &mut value).is_full_match());
    assert_eq!(value, "123");
}

#[test]
fn test_define_forced_matches_percent_form() {
    let body = || plus(digit()).action(|_, _| {});
    let mut plain = String::new();
    let mut forced = String::new();
    assert!(parse("42", &Digits::rule().define(body()), &mut plain).matched);
    assert!(parse("42", &Digits::rule().define_forced(body()), &mut forced).matched);
    assert_eq!((plain.as_str(), forced.as_str()), ("", "42"));
}

#[test]
fn test_actions_write_rule_variable() {
    let mut total = 0_i32;
    assert!(parse("1+2+39", &Sum::rule(), &mut total).is_full_match());
    assert_eq!(total, 42);
}

#[test]
fn test_injected_definition_recurses() {
    let nested = Nested::rule().define(omit(
        (lit('(') >> -Nested::rule() >> ')').action(|inner, cx| {
            if let Some(mut depth) = cx.val::<u32>() {
                *depth = inner.unwrap_or(0) + 1;
            }
        }),
    ));

    for (input, expected) in [("()", 1), ("((()))", 3), ("(((((((())))))))", 8)] {
        let mut depth = 0_u32;
        assert!(parse(input, &nested, &mut depth).is_full_match(), "{input}");
        assert_eq!(depth, expected, "{input}");
    }

    let mut depth = 0_u32;
    let result = parse("((()", &nested, &mut depth);
    assert!(!result.matched);
    assert_eq!(depth, 0);
}

#[test]
fn test_deep_recursion() {
    let nested = Nested::rule().define(omit(
        (lit('(') >> -Nested::rule() >> ')').action(|inner, cx| {
            if let Some(mut depth) = cx.val::<u32>() {
                *depth = inner.unwrap_or(0) + 1;
            }
        }),
    ));
    let input = format!("{}{}", "(".repeat(5000), ")".repeat(5000));
    let mut depth = 0_u32;
    assert!(parse(&input, &nested, &mut depth).is_full_match());
    assert_eq!(depth, 5000);
}

struct Even;

impl RuleId for Even {
    type Attribute = u32;
    const NAME: &'static str = "even number";

    fn on_success(attr: &mut u32, cx: &mut ActionContext<'_>) {
        if *attr % 2 != 0 {
            cx.fail();
        }
    }

    fn parse_rule<C: Context>(cur: &mut Cursor<'_>, ctx: &C, attr: &mut u32) -> bool {
        call_rule_definition::<Self, _, C>(&uint_(), false, cur, ctx, attr)
    }
}

#[test]
fn test_on_success_veto() {
    let mut value = 0_u32;
    assert!(parse("8", &Even::rule(), &mut value).is_full_match());
    assert_eq!(value, 8);

    let mut value = 0_u32;
    let result = parse("7", &Even::rule(), &mut value);
    assert!(!result.matched);
    assert_eq!((result.position, value), (0, 0));
}

struct ErrorSink;

impl Key for ErrorSink {
    type Value = RefCell<String>;
}

struct Document;

impl RuleId for Document {
    type Attribute = Unused;
    const NAME: &'static str = "document";

    fn on_error(failure: &ExpectationFailure, cx: &mut ActionContext<'_>) {
        if let Some(sink) = cx.get::<ErrorSink>() {
            let report = Report::new(cx.input()).render_failure(failure);
            sink.borrow_mut().push_str(&report);
        }
    }
}

#[test]
fn test_on_error_reports_through_bound_sink() {
    let sink = RefCell::new(String::new());
    let document = with(
        ErrorSink,
        &sink,
        Document::rule().define(lit("foo") >> expect(Bar::rule()) >> expect(lit("git"))),
    );

    let mut unused = Unused;
    let input = "foo\n  foo\ngit";
    let result = phrase_parse(input, &document, &space(), PostSkip::Always, &mut unused);
    assert!(!result.matched);
    assert_eq!(
        sink.borrow().as_str(),
        "In line 2:\nError! Expecting: \"bar\" here:\n  foo\n__^_\n"
    );

    sink.borrow_mut().clear();
    let result = phrase_parse("foo bar git", &document, &space(), PostSkip::Always, &mut unused);
    assert!(result.is_full_match());
    assert_eq!(sink.borrow().as_str(), "");
}
