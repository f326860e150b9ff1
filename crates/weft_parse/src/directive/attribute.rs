//! Directives that change the exposed attribute.

use std::marker::PhantomData;

use weft_attr::{Attribute, Merge, Unused};

use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// The text the subject matched, without leading skipped input.
#[derive(Copy, Clone, Debug)]
pub struct Raw<P> {
    subject: P,
}

/// The subject, with its attribute discarded.
#[derive(Copy, Clone, Debug)]
pub struct Omit<P> {
    subject: P,
}

/// Whether the subject matched; always succeeds.
#[derive(Copy, Clone, Debug)]
pub struct Matches<P> {
    subject: P,
}

/// The subject's attribute merged into a fresh `T`.
///
/// The wrapper hides any semantic action below it, so a rule defined with
/// `=` over an `as_` still materialises its attribute.
#[derive(Debug)]
pub struct As<T, P> {
    subject: P,
    target: PhantomData<fn() -> T>,
}

/// The subject's attribute converted with `TryFrom`; a failed conversion
/// is a failed match.
#[derive(Debug)]
pub struct Narrow<T, P> {
    subject: P,
    target: PhantomData<fn() -> T>,
}

macro_rules! subject_ctor {
    ($($name:ident),*) => {$(
        impl<P> $name<P> {
            pub fn new(subject: P) -> Self {
                $name { subject }
            }
        }
    )*};
}

subject_ctor!(Raw, Omit, Matches);

macro_rules! typed_wrapper {
    ($($name:ident),*) => {$(
        impl<T, P> $name<T, P> {
            pub fn new(subject: P) -> Self {
                $name {
                    subject,
                    target: PhantomData,
                }
            }
        }

        impl<T, P: Clone> Clone for $name<T, P> {
            fn clone(&self) -> Self {
                $name::new(self.subject.clone())
            }
        }

        impl<T, P: Copy> Copy for $name<T, P> {}
    )*};
}

typed_wrapper!(As, Narrow);

pub fn raw<P: IntoParser>(subject: P) -> Raw<P::Parser> {
    Raw::new(subject.into_parser())
}

pub fn omit<P: IntoParser>(subject: P) -> Omit<P::Parser> {
    Omit::new(subject.into_parser())
}

pub fn matches<P: IntoParser>(subject: P) -> Matches<P::Parser> {
    Matches::new(subject.into_parser())
}

pub fn as_<T, P>(subject: P) -> As<T, P::Parser>
where
    P: IntoParser,
    T: Attribute + Merge<<P::Parser as Parser>::Attribute>,
{
    As::new(subject.into_parser())
}

pub fn narrow<T, P>(subject: P) -> Narrow<T, P::Parser>
where
    P: IntoParser,
    T: Attribute + TryFrom<<P::Parser as Parser>::Attribute>,
{
    Narrow::new(subject.into_parser())
}

impl<P: Parser> Parser for Raw<P> {
    type Attribute = String;

    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut String) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        let begin = cur.position();
        let mut discarded = P::Attribute::default();
        if !self.subject.parse(cur, ctx, &mut discarded) {
            cur.set_position(start);
            return false;
        }
        attr.push_str(cur.slice(begin, cur.position()));
        true
    }

    fn what(&self) -> String {
        format!("raw[{}]", self.subject.what())
    }
}

impl<P: Parser> Parser for Omit<P> {
    type Attribute = Unused;

    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        let mut discarded = P::Attribute::default();
        self.subject.parse(cur, ctx, &mut discarded)
    }

    fn what(&self) -> String {
        format!("omit[{}]", self.subject.what())
    }
}

impl<P: Parser> Parser for Matches<P> {
    type Attribute = bool;

    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut bool) -> bool {
        let mut discarded = P::Attribute::default();
        *attr = self.subject.parse(cur, ctx, &mut discarded);
        true
    }

    fn what(&self) -> String {
        format!("matches[{}]", self.subject.what())
    }
}

impl<T, P> Parser for As<T, P>
where
    P: Parser,
    T: Attribute + Merge<P::Attribute>,
{
    type Attribute = T;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut T) -> bool {
        let mut value = P::Attribute::default();
        if !self.subject.parse(cur, ctx, &mut value) {
            return false;
        }
        attr.merge(value);
        true
    }

    fn what(&self) -> String {
        self.subject.what()
    }
}

impl<T, P> Parser for Narrow<T, P>
where
    P: Parser,
    T: Attribute + TryFrom<P::Attribute>,
{
    type Attribute = T;

    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut T) -> bool {
        let start = cur.position();
        let mut value = P::Attribute::default();
        if !self.subject.parse(cur, ctx, &mut value) {
            return false;
        }
        if let Ok(narrowed) = T::try_from(value) {
            *attr = narrowed;
            return true;
        }
        cur.set_position(start);
        false
    }

    fn what(&self) -> String {
        self.subject.what()
    }
}

crate::parser::impl_operators! {
    [P,] Raw<P>;
    [P,] Omit<P>;
    [P,] Matches<P>;
    [T, P,] As<T, P>;
    [T, P,] Narrow<T, P>;
}
