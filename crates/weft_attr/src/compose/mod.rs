//! Natural attributes of composite parsers.
//!
//! Combinators never inspect the category of their children at run time.
//! Each child's [`Presence`] marker picks, at compile time, the attribute the
//! composite exposes and the constructor that builds it:
//!
//! - sequence: present children are collected left to right with
//!   [`TupleBuilder`]; none gives `Unused`, one gives that attribute, more
//!   give a flat tuple.
//! - alternative: `Unused`, `Option<L>`, `Option<R>` or `Either<L, R>`.
//! - optional: `Option<A>`, or `Unused` when the subject has nothing.

use crate::kind::{sealed, PresenceOf};
use crate::{Attribute, Either, Unused};

/// Whether an attribute carries a value.
pub trait Presence: sealed::Sealed + 'static {
    const PRESENT: bool;

    /// Sequence accumulator after offering it one more child attribute.
    type Push<T: TupleBuilder, A: Attribute>: TupleBuilder;
    fn push<T: TupleBuilder, A: Attribute>(acc: T, value: A) -> Self::Push<T, A>;

    /// Attribute of an optional whose subject exposes `A`.
    type Opt<A: Attribute>: Attribute;
    fn some<A: Attribute>(value: A) -> Self::Opt<A>;

    /// Attribute of `left | right` where `Self` is the left presence.
    type Alt<R: Presence, LA: Attribute, RA: Attribute>: Attribute;
    fn alt_left<R: Presence, LA: Attribute, RA: Attribute>(value: LA) -> Self::Alt<R, LA, RA>;
    fn alt_right<R: Presence, LA: Attribute, RA: Attribute>(value: RA) -> Self::Alt<R, LA, RA>;

    /// Right-hand step of [`Presence::Alt`] when the left side is absent.
    type AfterAbsent<RA: Attribute>: Attribute;
    fn after_absent_left<RA: Attribute>() -> Self::AfterAbsent<RA>;
    fn after_absent_right<RA: Attribute>(value: RA) -> Self::AfterAbsent<RA>;

    /// Right-hand step of [`Presence::Alt`] when the left side is present.
    type AfterPresent<LA: Attribute, RA: Attribute>: Attribute;
    fn after_present_left<LA: Attribute, RA: Attribute>(value: LA) -> Self::AfterPresent<LA, RA>;
    fn after_present_right<LA: Attribute, RA: Attribute>(value: RA)
        -> Self::AfterPresent<LA, RA>;
}

/// The attribute is [`Unused`].
pub enum Absent {}
/// The attribute carries a value.
pub enum Present {}

impl sealed::Sealed for Absent {}
impl sealed::Sealed for Present {}

impl Presence for Absent {
    const PRESENT: bool = false;

    type Push<T: TupleBuilder, A: Attribute> = T;
    fn push<T: TupleBuilder, A: Attribute>(acc: T, _value: A) -> T {
        acc
    }

    type Opt<A: Attribute> = Unused;
    fn some<A: Attribute>(_value: A) -> Unused {
        Unused
    }

    type Alt<R: Presence, LA: Attribute, RA: Attribute> = R::AfterAbsent<RA>;
    fn alt_left<R: Presence, LA: Attribute, RA: Attribute>(_value: LA) -> R::AfterAbsent<RA> {
        R::after_absent_left::<RA>()
    }
    fn alt_right<R: Presence, LA: Attribute, RA: Attribute>(value: RA) -> R::AfterAbsent<RA> {
        R::after_absent_right(value)
    }

    type AfterAbsent<RA: Attribute> = Unused;
    fn after_absent_left<RA: Attribute>() -> Unused {
        Unused
    }
    fn after_absent_right<RA: Attribute>(_value: RA) -> Unused {
        Unused
    }

    type AfterPresent<LA: Attribute, RA: Attribute> = Option<LA>;
    fn after_present_left<LA: Attribute, RA: Attribute>(value: LA) -> Option<LA> {
        Some(value)
    }
    fn after_present_right<LA: Attribute, RA: Attribute>(_value: RA) -> Option<LA> {
        None
    }
}

impl Presence for Present {
    const PRESENT: bool = true;

    type Push<T: TupleBuilder, A: Attribute> = T::Append<A>;
    fn push<T: TupleBuilder, A: Attribute>(acc: T, value: A) -> T::Append<A> {
        acc.append(value)
    }

    type Opt<A: Attribute> = Option<A>;
    fn some<A: Attribute>(value: A) -> Option<A> {
        Some(value)
    }

    type Alt<R: Presence, LA: Attribute, RA: Attribute> = R::AfterPresent<LA, RA>;
    fn alt_left<R: Presence, LA: Attribute, RA: Attribute>(
        value: LA,
    ) -> R::AfterPresent<LA, RA> {
        R::after_present_left::<LA, RA>(value)
    }
    fn alt_right<R: Presence, LA: Attribute, RA: Attribute>(
        value: RA,
    ) -> R::AfterPresent<LA, RA> {
        R::after_present_right::<LA, RA>(value)
    }

    type AfterAbsent<RA: Attribute> = Option<RA>;
    fn after_absent_left<RA: Attribute>() -> Option<RA> {
        None
    }
    fn after_absent_right<RA: Attribute>(value: RA) -> Option<RA> {
        Some(value)
    }

    type AfterPresent<LA: Attribute, RA: Attribute> = Either<LA, RA>;
    fn after_present_left<LA: Attribute, RA: Attribute>(value: LA) -> Either<LA, RA> {
        Either::Left(value)
    }
    fn after_present_right<LA: Attribute, RA: Attribute>(value: RA) -> Either<LA, RA> {
        Either::Right(value)
    }
}

/// Left-to-right accumulator for sequence attributes.
///
/// Starts at `()`, grows by one slot per present child and is turned into
/// the exposed attribute by [`TupleBuilder::finish`].
pub trait TupleBuilder: Sized {
    type Append<A: Attribute>: TupleBuilder;
    fn append<A: Attribute>(self, value: A) -> Self::Append<A>;

    type Finished: Attribute;
    fn finish(self) -> Self::Finished;
}

/// Accumulator after offering `A` to `T`.
pub type Pushed<T, A> = <PresenceOf<A> as Presence>::Push<T, A>;

/// Offer one child attribute to a sequence accumulator.
#[inline]
pub fn push<T: TupleBuilder, A: Attribute>(acc: T, value: A) -> Pushed<T, A> {
    <PresenceOf<A> as Presence>::push(acc, value)
}

/// Attribute of an optional over a subject exposing `A`.
pub type OptionOf<A> = <PresenceOf<A> as Presence>::Opt<A>;

/// Wrap a parsed value for an optional over it.
#[inline]
pub fn optional_of<A: Attribute>(value: A) -> OptionOf<A> {
    <PresenceOf<A> as Presence>::some(value)
}

/// Attribute of an alternative over `LA | RA`.
pub type AlternativeOf<LA, RA> = <PresenceOf<LA> as Presence>::Alt<PresenceOf<RA>, LA, RA>;

/// The alternative's attribute when its left branch matched.
#[inline]
pub fn alternative_left<LA: Attribute, RA: Attribute>(value: LA) -> AlternativeOf<LA, RA> {
    <PresenceOf<LA> as Presence>::alt_left::<PresenceOf<RA>, LA, RA>(value)
}

/// The alternative's attribute when its right branch matched.
#[inline]
pub fn alternative_right<LA: Attribute, RA: Attribute>(value: RA) -> AlternativeOf<LA, RA> {
    <PresenceOf<LA> as Presence>::alt_right::<PresenceOf<RA>, LA, RA>(value)
}

impl TupleBuilder for () {
    type Append<A: Attribute> = (A,);
    fn append<A: Attribute>(self, value: A) -> (A,) {
        (value,)
    }

    type Finished = Unused;
    fn finish(self) -> Unused {
        Unused
    }
}

impl<A0: Attribute> TupleBuilder for (A0,) {
    type Append<A: Attribute> = (A0, A);
    fn append<A: Attribute>(self, value: A) -> (A0, A) {
        (self.0, value)
    }

    type Finished = A0;
    fn finish(self) -> A0 {
        self.0
    }
}

macro_rules! tuple_builders {
    ($( ($($t:ident $i:tt),+) )*) => {$(
        impl<$($t: Attribute),+> TupleBuilder for ($($t,)+) {
            type Append<A: Attribute> = ($($t,)+ A);
            fn append<A: Attribute>(self, value: A) -> Self::Append<A> {
                ($(self.$i,)+ value)
            }

            type Finished = Self;
            fn finish(self) -> Self {
                self
            }
        }
    )*};
}

tuple_builders! {
    (A0 0, A1 1)
    (A0 0, A1 1, A2 2)
    (A0 0, A1 1, A2 2, A3 3)
    (A0 0, A1 1, A2 2, A3 3, A4 4)
    (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5)
    (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6)
    (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7)
    (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8)
    (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9)
    (A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10)
}

// Twelve slots is the widest flat tuple; a thirteenth value nests the
// first twelve as one slot.
impl<A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11> TupleBuilder
    for (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11)
where
    A0: Attribute,
    A1: Attribute,
    A2: Attribute,
    A3: Attribute,
    A4: Attribute,
    A5: Attribute,
    A6: Attribute,
    A7: Attribute,
    A8: Attribute,
    A9: Attribute,
    A10: Attribute,
    A11: Attribute,
{
    type Append<A: Attribute> = (Self, A);
    fn append<A: Attribute>(self, value: A) -> (Self, A) {
        (self, value)
    }

    type Finished = Self;
    fn finish(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests;
