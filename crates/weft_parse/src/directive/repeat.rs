//! Bounded repetition and search.

use std::ops::{RangeFrom, RangeInclusive};

use weft_attr::Attribute;

use crate::operator::{failure_pending, repeat_into};
use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// Repetition counts accepted by [`repeat`]: exactly `n`, `min..=max` or
/// `min..`.
pub trait Bounds {
    fn lower(&self) -> usize;

    fn upper(&self) -> Option<usize>;
}

impl Bounds for usize {
    fn lower(&self) -> usize {
        *self
    }

    fn upper(&self) -> Option<usize> {
        Some(*self)
    }
}

impl Bounds for RangeInclusive<usize> {
    fn lower(&self) -> usize {
        *self.start()
    }

    fn upper(&self) -> Option<usize> {
        Some(*self.end())
    }
}

impl Bounds for RangeFrom<usize> {
    fn lower(&self) -> usize {
        self.start
    }

    fn upper(&self) -> Option<usize> {
        None
    }
}

/// The subject between `min` and `max` times, greedily.
#[derive(Copy, Clone, Debug)]
pub struct Repeat<P> {
    subject: P,
    min: usize,
    max: Option<usize>,
}

/// Skip ahead one character at a time until the subject matches.
#[derive(Copy, Clone, Debug)]
pub struct Seek<P> {
    subject: P,
}

pub fn repeat<B: Bounds, P: IntoParser>(bounds: B, subject: P) -> Repeat<P::Parser> {
    Repeat {
        subject: subject.into_parser(),
        min: bounds.lower(),
        max: bounds.upper(),
    }
}

pub fn seek<P: IntoParser>(subject: P) -> Seek<P::Parser> {
    Seek {
        subject: subject.into_parser(),
    }
}

impl<P: Parser> Parser for Repeat<P> {
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
        let count = repeat_into(&self.subject, cur, ctx, attr, self.max);
        if count < self.min || failure_pending(ctx) {
            cur.set_position(start);
            return false;
        }
        true
    }

    fn what(&self) -> String {
        match self.max {
            Some(max) if max == self.min => format!("repeat({})[{}]", max, self.subject.what()),
            Some(max) => format!(
                "repeat({}, {})[{}]",
                self.min,
                max,
                self.subject.what()
            ),
            None => format!("repeat({}, inf)[{}]", self.min, self.subject.what()),
        }
    }
}

impl<P: Parser> Parser for Seek<P> {
    type Attribute = P::Attribute;

    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let start = cur.position();
        loop {
            let mut value = P::Attribute::default();
            if self.subject.parse(cur, ctx, &mut value) {
                *attr = value;
                return true;
            }
            if failure_pending(ctx) || cur.next_char().is_none() {
                cur.set_position(start);
                return false;
            }
        }
    }

    fn what(&self) -> String {
        format!("seek[{}]", self.subject.what())
    }
}

crate::parser::impl_operators! {
    [P,] Repeat<P>;
    [P,] Seek<P>;
}
