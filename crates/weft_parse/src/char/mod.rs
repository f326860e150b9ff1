//! Single-character terminals.
//!
//! [`Chars<T>`] matches one character accepted by the test `T` and exposes
//! it as a `char`; [`LitChar`] matches one fixed character and exposes
//! nothing. All of them skip first and honour `no_case`.
//!
//! The named classes follow the ASCII definitions (`space` includes the
//! vertical tab, `blank` is space and tab only).

mod class;

pub use class::CharClass;

use weft_attr::Unused;

use crate::{Context, Cursor, Parser};

/// A predicate on characters.
pub trait CharTest {
    fn test(&self, c: char, no_case: bool) -> bool;

    fn what(&self) -> String;
}

fn eq_no_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Exactly one character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Single(char);

impl CharTest for Single {
    fn test(&self, c: char, no_case: bool) -> bool {
        if no_case {
            eq_no_case(c, self.0)
        } else {
            c == self.0
        }
    }

    fn what(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Any character at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnyChar;

impl CharTest for AnyChar {
    fn test(&self, _c: char, _no_case: bool) -> bool {
        true
    }

    fn what(&self) -> String {
        "any char".to_owned()
    }
}

/// An inclusive range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Range {
    lo: char,
    hi: char,
}

impl Range {
    fn contains(&self, c: char) -> bool {
        (self.lo..=self.hi).contains(&c)
    }
}

impl CharTest for Range {
    fn test(&self, c: char, no_case: bool) -> bool {
        self.contains(c)
            || (no_case
                && (c.to_lowercase().any(|l| self.contains(l))
                    || c.to_uppercase().any(|u| self.contains(u))))
    }

    fn what(&self) -> String {
        format!("{:?}-{:?}", self.lo, self.hi)
    }
}

/// A set written like a regex class body: `"a-zA-Z_"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set {
    definition: String,
    ranges: Vec<Range>,
}

impl Set {
    fn new(definition: &str) -> Self {
        let chars: Vec<char> = definition.chars().collect();
        let mut ranges = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            // `-` is literal at either end of the definition.
            if i + 2 < chars.len() && chars[i + 1] == '-' {
                ranges.push(Range {
                    lo: chars[i],
                    hi: chars[i + 2],
                });
                i += 3;
            } else {
                ranges.push(Range {
                    lo: chars[i],
                    hi: chars[i],
                });
                i += 1;
            }
        }
        Set {
            definition: definition.to_owned(),
            ranges,
        }
    }
}

impl CharTest for Set {
    fn test(&self, c: char, no_case: bool) -> bool {
        self.ranges.iter().any(|r| r.test(c, no_case))
    }

    fn what(&self) -> String {
        format!("[{}]", self.definition)
    }
}

/// Inverts another test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Negated<T>(T);

impl<T: CharTest> CharTest for Negated<T> {
    fn test(&self, c: char, no_case: bool) -> bool {
        !self.0.test(c, no_case)
    }

    fn what(&self) -> String {
        format!("~{}", self.0.what())
    }
}

/// One character accepted by `T`, exposed as `char`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Chars<T> {
    test: T,
}

impl<T: CharTest> Chars<T> {
    pub fn new(test: T) -> Self {
        Chars { test }
    }

    /// Match every character this one does not.
    pub fn negate(self) -> Chars<Negated<T>> {
        Chars {
            test: Negated(self.test),
        }
    }
}

impl<T: CharTest> Parser for Chars<T> {
    type Attribute = char;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut char) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        match cur.peek() {
            Some(c) if self.test.test(c, ctx.no_case()) => {
                cur.next_char();
                *attr = c;
                true
            }
            _ => {
                cur.set_position(start);
                false
            }
        }
    }

    fn what(&self) -> String {
        self.test.what()
    }
}

/// One fixed character, without an attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LitChar {
    ch: char,
}

impl LitChar {
    pub fn new(ch: char) -> Self {
        LitChar { ch }
    }
}

impl Parser for LitChar {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        match cur.peek() {
            Some(c) if Single(self.ch).test(c, ctx.no_case()) => {
                cur.next_char();
                true
            }
            _ => {
                cur.set_position(start);
                false
            }
        }
    }

    fn what(&self) -> String {
        format!("{:?}", self.ch)
    }
}

crate::parser::impl_operators! {
    [T: CharTest,] Chars<T>;
    [] LitChar;
}

pub fn char_(ch: char) -> Chars<Single> {
    Chars::new(Single(ch))
}

pub fn any_char() -> Chars<AnyChar> {
    Chars::new(AnyChar)
}

pub fn char_range(lo: char, hi: char) -> Chars<Range> {
    Chars::new(Range { lo, hi })
}

/// ```
/// use weft_parse::prelude::*;
///
/// let mut ident = String::new();
/// let result = parse("snake_case1", &(char_set("a-z_") >> kleene(char_set("a-z0-9_"))), &mut ident);
/// assert!(result.is_full_match());
/// assert_eq!(ident, "snake_case1");
/// ```
pub fn char_set(definition: &str) -> Chars<Set> {
    Chars::new(Set::new(definition))
}

macro_rules! classes {
    ($($(#[$meta:meta])* $name:ident => $class:ident;)*) => {$(
        $(#[$meta])*
        pub fn $name() -> Chars<CharClass> {
            Chars::new(CharClass::$class)
        }
    )*};
}

classes! {
    alpha => Alpha;
    alnum => Alnum;
    digit => Digit;
    /// Hexadecimal digit.
    xdigit => XDigit;
    upper => Upper;
    lower => Lower;
    /// Whitespace including the vertical tab.
    space => Space;
    /// Space or tab.
    blank => Blank;
    punct => Punct;
    graph => Graph;
    print => Print;
    cntrl => Cntrl;
}

#[cfg(test)]
mod tests;
