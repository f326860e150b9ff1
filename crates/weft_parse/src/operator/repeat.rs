//! Kleene star and plus.
//!
//! Both collect into `A::Repeated` of the subject's attribute `A`. A
//! subject that matches without consuming input ends the loop after one
//! iteration, so `kleene(eps())` terminates.

use weft_attr::Attribute;

use super::failure_pending;
use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// Zero or more.
#[derive(Copy, Clone, Debug)]
pub struct Kleene<P> {
    subject: P,
}

/// One or more.
#[derive(Copy, Clone, Debug)]
pub struct Plus<P> {
    subject: P,
}

pub fn kleene<P: IntoParser>(subject: P) -> Kleene<P::Parser> {
    Kleene {
        subject: subject.into_parser(),
    }
}

pub fn plus<P: IntoParser>(subject: P) -> Plus<P::Parser> {
    Plus {
        subject: subject.into_parser(),
    }
}

/// Match `subject` as often as possible; returns the number of matches.
pub(crate) fn repeat_into<P: Parser, C: Context>(
    subject: &P,
    cur: &mut Cursor<'_>,
    ctx: &C,
    attr: &mut <P::Attribute as Attribute>::Repeated,
    max: Option<usize>,
) -> usize {
    let mut count = 0;
    while max.map_or(true, |max| count < max) {
        let before = cur.position();
        let mut value = P::Attribute::default();
        if !subject.parse(cur, ctx, &mut value) {
            break;
        }
        P::Attribute::push_repeated(attr, value);
        count += 1;
        if cur.position() == before && max.is_none() {
            break;
        }
    }
    count
}

impl<P: Parser> Parser for Kleene<P> {
    type Attribute = <P::Attribute as Attribute>::Repeated;

    const HANDLES_CONTAINER: bool = true;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let start = cur.position();
        repeat_into(&self.subject, cur, ctx, attr, None);
        if failure_pending(ctx) {
            cur.set_position(start);
            return false;
        }
        true
    }

    fn what(&self) -> String {
        format!("*{}", self.subject.what())
    }
}

impl<P: Parser> Parser for Plus<P> {
    type Attribute = <P::Attribute as Attribute>::Repeated;

    const HANDLES_CONTAINER: bool = true;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let start = cur.position();
        let count = repeat_into(&self.subject, cur, ctx, attr, None);
        if count == 0 || failure_pending(ctx) {
            cur.set_position(start);
            return false;
        }
        true
    }

    fn what(&self) -> String {
        format!("+{}", self.subject.what())
    }
}

crate::parser::impl_operators! {
    [P,] Kleene<P>;
    [P,] Plus<P>;
}
