//! Zero-width lookahead: `and_pred(p)` and `!p`.

use weft_attr::Unused;

use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// Matches where `subject` would, without consuming input.
#[derive(Copy, Clone, Debug)]
pub struct AndPred<P> {
    subject: P,
}

/// Matches where `subject` would not, without consuming input.
#[derive(Copy, Clone, Debug)]
pub struct NotPred<P> {
    subject: P,
}

impl<P> NotPred<P> {
    pub fn new(subject: P) -> Self {
        NotPred { subject }
    }
}

pub fn and_pred<P: IntoParser>(subject: P) -> AndPred<P::Parser> {
    AndPred {
        subject: subject.into_parser(),
    }
}

pub fn not_pred<P: IntoParser>(subject: P) -> NotPred<P::Parser> {
    NotPred::new(subject.into_parser())
}

fn lookahead<P: Parser, C: Context>(subject: &P, cur: &mut Cursor<'_>, ctx: &C) -> bool {
    let start = cur.position();
    let mut discarded = P::Attribute::default();
    let matched = subject.parse(cur, ctx, &mut discarded);
    cur.set_position(start);
    matched
}

impl<P: Parser> Parser for AndPred<P> {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        lookahead(&self.subject, cur, ctx)
    }

    fn what(&self) -> String {
        format!("&{}", self.subject.what())
    }
}

impl<P: Parser> Parser for NotPred<P> {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        !lookahead(&self.subject, cur, ctx)
    }

    fn what(&self) -> String {
        format!("!{}", self.subject.what())
    }
}

crate::parser::impl_operators! {
    [P,] AndPred<P>;
    [P,] NotPred<P>;
}
