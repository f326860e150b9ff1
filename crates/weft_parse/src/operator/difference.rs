//! `a - b`: `a`, unless `b` matches at the same place.

use crate::parser::Parser;
use crate::{Context, Cursor};

#[derive(Copy, Clone, Debug)]
pub struct Difference<A, B> {
    subject: A,
    excluded: B,
}

impl<A, B> Difference<A, B> {
    pub fn new(subject: A, excluded: B) -> Self {
        Difference { subject, excluded }
    }
}

impl<A: Parser, B: Parser> Parser for Difference<A, B> {
    type Attribute = A::Attribute;

    const HAS_ACTION: bool = A::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let start = cur.position();
        let mut discarded = B::Attribute::default();
        if self.excluded.parse(cur, ctx, &mut discarded) {
            cur.set_position(start);
            return false;
        }
        self.subject.parse(cur, ctx, attr)
    }

    fn what(&self) -> String {
        format!("({} - {})", self.subject.what(), self.excluded.what())
    }
}

crate::parser::impl_operators! { [A, B,] Difference<A, B>; }
