use pretty_assertions::assert_eq;

use super::*;
use crate::prelude::*;

#[derive(Debug, Default, PartialEq)]
struct Ident {
    name: String,
    tag: PositionTag,
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident {
            name,
            tag: PositionTag::default(),
        }
    }
}

weft_attr::plain_attribute!(Ident);

impl PositionTagged for Ident {
    fn position_tag(&self) -> PositionTag {
        self.tag
    }

    fn position_tag_mut(&mut self) -> &mut PositionTag {
        &mut self.tag
    }
}

rule! {
    Name: Ident = "name" => lexeme(raw(alpha() >> kleene(alnum()))), annotate(success);
    Names: Vec<Ident> = "names" => lit('[') >> (Name::rule() % ',') >> expect(lit(']')),
        annotate(error);
    Word: Ident = "word", annotate(success);
}

#[test]
fn test_cache_records_spans_in_order() {
    let mut cache = PositionCache::new();
    let mut first = Ident::from(String::from("a"));
    let mut second = Ident::from(String::from("b"));
    assert!(!first.tag.is_tagged());

    cache.annotate(&mut first, Span::new(0, 1));
    cache.annotate(&mut second, Span::new(4, 9));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.position_of(&second), Some(Span::new(4, 9)));
    assert_eq!(cache.position_of(&first), Some(Span::new(0, 1)));
    assert_eq!(cache.positions(), &[Span::new(0, 1), Span::new(4, 9)]);

    let untagged = Ident::default();
    assert_eq!(cache.position_of(&untagged), None);
    assert_eq!(PositionCache::new().position_of(&second), None);
}

#[test]
fn test_annotated_rule_tags_nodes() {
    let annotations = Annotations::new();
    let grammar = with(ErrorHandler, &annotations, Names::rule());
    let input = "[ab, c1 ,d]";
    let mut names: Vec<Ident> = Vec::new();
    let result = phrase_parse(input, &grammar, &space(), PostSkip::Always, &mut names);
    assert!(result.is_full_match());

    let spans: Vec<_> = names.iter().map(|n| annotations.position_of(n)).collect();
    assert_eq!(
        spans,
        vec![
            Some(Span::new(1, 3)),
            Some(Span::new(5, 7)),
            Some(Span::new(9, 10)),
        ]
    );
    let text: Vec<_> = spans
        .iter()
        .flatten()
        .filter_map(|span| span.slice(input))
        .collect();
    assert_eq!(text, vec!["ab", "c1", "d"]);
    assert!(annotations.reports().is_empty());
}

#[test]
fn test_annotated_rule_reports_failure() {
    let annotations = Annotations::new();
    let grammar = with(ErrorHandler, &annotations, Names::rule());
    let mut names: Vec<Ident> = Vec::new();
    let result = phrase_parse("[ab, c1 d]", &grammar, &space(), PostSkip::Always, &mut names);
    assert!(!result.matched);
    assert!(names.is_empty());

    let (positions, reports) = annotations.into_parts();
    assert_eq!(positions.len(), 2);
    assert_eq!(
        reports,
        vec!["In line 1:\nError! Expecting: ']' here:\n[ab, c1 d]\n________^_\n".to_owned()]
    );
}

#[test]
fn test_hooks_are_inert_without_handler() {
    let mut names: Vec<Ident> = Vec::new();
    let result = phrase_parse("[x]", &Names::rule(), &space(), PostSkip::Always, &mut names);
    assert!(result.is_full_match());
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].name, "x");
    assert!(!names[0].tag.is_tagged());
}

#[test]
fn test_declared_rule_takes_hooks() {
    let annotations = Annotations::new();
    let word = Word::rule().define(lexeme(raw(plus(alpha()))));
    let mut ident = Ident::default();
    let result = phrase_parse(
        "  hello",
        &with(ErrorHandler, &annotations, word),
        &space(),
        PostSkip::Always,
        &mut ident,
    );
    assert!(result.is_full_match());
    assert_eq!(ident.name, "hello");
    assert_eq!(annotations.position_of(&ident), Some(Span::new(2, 7)));
}
