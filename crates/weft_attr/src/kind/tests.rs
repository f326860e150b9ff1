use std::collections::{BTreeMap, HashSet};

use pretty_assertions::assert_eq;
use smallvec::SmallVec;

use super::*;
use crate::{Either, Unused};

#[derive(Default)]
struct Point {
    x: i32,
}

crate::plain_attribute!(Point);

#[derive(Default)]
enum Token {
    #[default]
    Eof,
}

crate::variant_attribute!(Token);

#[test]
fn test_classify_unused() {
    assert_eq!(classify::<Unused>(), Category::Unused);
}

#[test]
fn test_classify_plain() {
    assert_eq!(classify::<i32>(), Category::Plain);
    assert_eq!(classify::<f64>(), Category::Plain);
    assert_eq!(classify::<char>(), Category::Plain);
    assert_eq!(classify::<bool>(), Category::Plain);
    assert_eq!(classify::<Box<i64>>(), Category::Plain);
    assert_eq!(classify::<Point>(), Category::Plain);
    assert_eq!(Point::default().x, 0);
}

#[test]
fn test_classify_tuple_like() {
    assert_eq!(classify::<(i32,)>(), Category::TupleLike);
    assert_eq!(classify::<(i32, String)>(), Category::TupleLike);
    assert_eq!(classify::<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>(), Category::TupleLike);
}

#[test]
fn test_classify_optional() {
    assert_eq!(classify::<Option<i32>>(), Category::Optional);
    assert_eq!(classify::<Option<Vec<char>>>(), Category::Optional);
}

#[test]
fn test_classify_variant() {
    assert_eq!(classify::<Either<i32, String>>(), Category::Variant);
    assert_eq!(classify::<Token>(), Category::Variant);
    assert!(matches!(Token::default(), Token::Eof));
}

#[test]
fn test_classify_container() {
    assert_eq!(classify::<String>(), Category::Container);
    assert_eq!(classify::<Vec<i32>>(), Category::Container);
    assert_eq!(classify::<HashSet<char>>(), Category::Container);
    assert_eq!(classify::<BTreeMap<String, i32>>(), Category::Container);
    assert_eq!(classify::<SmallVec<[u8; 4]>>(), Category::Container);
}

#[test]
fn test_presence() {
    assert!(!Category::Unused.is_present());
    assert!(Category::Plain.is_present());
    assert!(Category::Container.is_present());
}

#[test]
fn test_display() {
    assert_eq!(Category::TupleLike.to_string(), "tuple-like");
    assert_eq!(Category::Container.to_string(), "container");
}
