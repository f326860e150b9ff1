use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_next_char_walks_utf8() {
    let mut cur = Cursor::new("aé€");
    assert_eq!(cur.next_char(), Some('a'));
    assert_eq!(cur.position(), 1);
    assert_eq!(cur.next_char(), Some('é'));
    assert_eq!(cur.position(), 3);
    assert_eq!(cur.next_char(), Some('€'));
    assert!(cur.at_end());
    assert_eq!(cur.next_char(), None);
}

#[test]
fn test_eat_and_restore() {
    let mut cur = Cursor::new("foobar");
    let start = cur.position();
    assert!(cur.eat("foo"));
    assert!(!cur.eat("baz"));
    assert_eq!(cur.rest(), "bar");
    assert_eq!(cur.slice(start, cur.position()), "foo");
    cur.set_position(start);
    assert_eq!(cur.rest(), "foobar");
}

#[test]
fn test_peek_does_not_consume() {
    let cur = Cursor::new("x");
    assert_eq!(cur.peek(), Some('x'));
    assert_eq!(cur.position(), 0);
    assert_eq!(Cursor::new("").peek(), None);
}
