//! Literal string terminals.

use weft_attr::Unused;

use crate::{Context, Cursor, Parser};

/// Match `literal` at the cursor, honouring `no_case`; returns the length
/// of the matched input.
fn match_literal(rest: &str, literal: &str, no_case: bool) -> Option<usize> {
    if !no_case {
        return rest.starts_with(literal).then_some(literal.len());
    }
    let mut input = rest.char_indices();
    for expected in literal.chars() {
        let (_, c) = input.next()?;
        if c != expected && !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(input.next().map_or(rest.len(), |(offset, _)| offset))
}

fn parse_literal<C: Context>(literal: &str, cur: &mut Cursor<'_>, ctx: &C) -> Option<usize> {
    let start = cur.position();
    ctx.skip_over(cur);
    if let Some(len) = match_literal(cur.rest(), literal, ctx.no_case()) {
        let begin = cur.position();
        cur.advance(len);
        Some(begin)
    } else {
        cur.set_position(start);
        None
    }
}

/// A fixed string without an attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LitStr {
    literal: &'static str,
}

impl LitStr {
    pub fn new(literal: &'static str) -> Self {
        LitStr { literal }
    }
}

impl Parser for LitStr {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        parse_literal(self.literal, cur, ctx).is_some()
    }

    fn what(&self) -> String {
        format!("{:?}", self.literal)
    }
}

/// A fixed string exposed as `String`.
///
/// Under `no_case` the attribute is the input as written, not the literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StrParser {
    literal: &'static str,
}

impl Parser for StrParser {
    type Attribute = String;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut String) -> bool {
        match parse_literal(self.literal, cur, ctx) {
            Some(begin) => {
                attr.push_str(cur.slice(begin, cur.position()));
                true
            }
            None => false,
        }
    }

    fn what(&self) -> String {
        format!("{:?}", self.literal)
    }
}

crate::parser::impl_operators! {
    [] LitStr;
    [] StrParser;
}

pub fn string(literal: &'static str) -> StrParser {
    StrParser { literal }
}

/// Literals of either kind.
pub trait IntoLiteral {
    type Parser: Parser;

    fn into_literal(self) -> Self::Parser;
}

impl IntoLiteral for char {
    type Parser = crate::char::LitChar;

    fn into_literal(self) -> Self::Parser {
        crate::char::LitChar::new(self)
    }
}

impl IntoLiteral for &'static str {
    type Parser = LitStr;

    fn into_literal(self) -> LitStr {
        LitStr::new(self)
    }
}

/// A character or string that must appear but yields no attribute.
pub fn lit<L: IntoLiteral>(literal: L) -> L::Parser {
    literal.into_literal()
}

#[cfg(test)]
mod tests;
