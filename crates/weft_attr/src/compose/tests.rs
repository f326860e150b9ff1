use pretty_assertions::assert_eq;

use super::*;

fn seq3<A: Attribute, B: Attribute, C: Attribute>(
    a: A,
    b: B,
    c: C,
) -> <Pushed<Pushed<Pushed<(), A>, B>, C> as TupleBuilder>::Finished {
    push(push(push((), a), b), c).finish()
}

#[test]
fn test_sequence_of_unused_is_unused() {
    let out: Unused = seq3(Unused, Unused, Unused);
    assert_eq!(out, Unused);
}

#[test]
fn test_sequence_with_one_value_is_that_value() {
    let out: i32 = seq3(Unused, 7, Unused);
    assert_eq!(out, 7);
}

#[test]
fn test_sequence_filters_unused_slots() {
    let out: (char, String) = seq3('a', Unused, String::from("bc"));
    assert_eq!(out, ('a', String::from("bc")));
}

#[test]
fn test_sequence_keeps_nested_tuples_intact() {
    let out: ((i32, i32), i32) = seq3(Unused, (1, 2), 3);
    assert_eq!(out, ((1, 2), 3));
}

#[test]
fn test_optional_of_value() {
    let out: Option<u8> = optional_of(4u8);
    assert_eq!(out, Some(4));
}

#[test]
fn test_optional_of_unused() {
    let out: Unused = optional_of(Unused);
    assert_eq!(out, Unused);
}

#[test]
fn test_alternative_both_present() {
    let left: Either<i32, String> = alternative_left::<i32, String>(1);
    let right: Either<i32, String> = alternative_right::<i32, String>("x".into());
    assert_eq!(left, Either::Left(1));
    assert_eq!(right, Either::Right("x".into()));
}

#[test]
fn test_alternative_right_absent() {
    let left: Option<i32> = alternative_left::<i32, Unused>(5);
    let right: Option<i32> = alternative_right::<i32, Unused>(Unused);
    assert_eq!(left, Some(5));
    assert_eq!(right, None);
}

#[test]
fn test_alternative_left_absent() {
    let left: Option<char> = alternative_left::<Unused, char>(Unused);
    let right: Option<char> = alternative_right::<Unused, char>('z');
    assert_eq!(left, None);
    assert_eq!(right, Some('z'));
}

#[test]
fn test_alternative_both_absent() {
    let out: Unused = alternative_left::<Unused, Unused>(Unused);
    assert_eq!(out, Unused);
}

#[test]
fn test_presence_consts() {
    assert!(<Present as Presence>::PRESENT);
    assert!(!<Absent as Presence>::PRESENT);
}

#[test]
fn test_thirteenth_value_nests() {
    let acc = (0u8, 1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u8, 9u8, 10u8, 11u8);
    let out = push(acc, 12u8).finish();
    assert_eq!(out.0 .11, 11);
    assert_eq!(out.1, 12);
}
