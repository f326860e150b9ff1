//! Invariants that hold for every input.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use weft_diagnostic::{FailureCell, FailureChannel};
use weft_parse::prelude::*;

fn input() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ab1-9 ,;=X]{0,24}").unwrap()
}

rule! {
    Item: Vec<u32> = "item" => uint_() % ',' >> ';';
}

proptest! {
    #[test]
    fn rollback_on_failure(text in input()) {
        let mut numbers: Vec<u32> = Vec::new();
        let result = phrase_parse(&text, &(uint_() % ',' >> ';'), &space(), PostSkip::Never, &mut numbers);
        if !result.matched {
            prop_assert_eq!(result.position, 0);
            prop_assert!(numbers.is_empty());
        }

        let mut letters = String::new();
        let result = parse(&text, &(repeat(2..=3, alpha()) >> '='), &mut letters);
        if !result.matched {
            prop_assert_eq!(result.position, 0);
            prop_assert!(letters.is_empty());
        }

        let mut unused = Unused;
        let result = parse(&text, &(lit('a') >> expect('b') >> -lit('X')), &mut unused);
        if !result.matched {
            prop_assert_eq!(result.position, 0);
        }
    }

    #[test]
    fn reparse_is_idempotent(text in input()) {
        let grammar = kleene(Item::rule()) >> -raw(plus(alpha()));
        let mut first: (Vec<Vec<u32>>, Option<String>) = Default::default();
        let mut second: (Vec<Vec<u32>>, Option<String>) = Default::default();
        let a = phrase_parse(&text, &grammar, &space(), PostSkip::Always, &mut first);
        let b = phrase_parse(&text, &grammar, &space(), PostSkip::Always, &mut second);
        prop_assert_eq!(a, b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn furthest_failure_wins(positions in proptest::collection::vec(0_usize..1000, 1..20)) {
        let cell = FailureCell::new();
        for (i, &position) in positions.iter().enumerate() {
            (&cell).record(position, || format!("#{i}"));
        }
        let stored = cell.into_inner().unwrap();
        prop_assert_eq!(Some(stored.position), positions.iter().copied().max());
    }

    #[test]
    fn failed_branch_does_not_leak(numbers in proptest::collection::vec(0_u32..10_000, 1..12)) {
        let text = numbers.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
        let text = format!("{text}?");
        let grammar = (uint_() % ',' >> '!') | (uint_() % ',' >> '?');
        let mut parsed: Vec<u32> = Vec::new();
        let result = parse(&text, &grammar, &mut parsed);
        prop_assert!(result.is_full_match());
        prop_assert_eq!(parsed, numbers);
    }

    #[test]
    fn attribute_categories_merge_totally(
        text in "[a-z]{0,8}",
        base in proptest::collection::vec(0_i32..100, 0..4),
        extra in proptest::collection::vec(0_i32..100, 0..4),
    ) {
        use weft_parse::attribute::Merge;

        let mut plain = String::new();
        plain.merge(text.clone());
        prop_assert_eq!(&plain, &text);

        let mut optional: Option<String> = None;
        optional.merge(text.clone());
        prop_assert_eq!(optional.as_deref(), Some(text.as_str()));

        let mut container = base.clone();
        container.merge(extra.clone());
        prop_assert_eq!(container.len(), base.len() + extra.len());
        prop_assert_eq!(&container[base.len()..], extra.as_slice());

        let mut unused = Unused;
        unused.merge(extra);
    }
}
