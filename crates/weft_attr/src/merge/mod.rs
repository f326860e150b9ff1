//! Moving a parsed value into a destination of a compatible type.
//!
//! [`Merge`] is implemented once, for every destination/source pair whose
//! kind markers have a [`Strategy`]. The strategy table:
//!
//! | destination \ source | unused | plain / variant      | tuple          | optional          | `Either`     | container                  |
//! |----------------------|--------|----------------------|----------------|-------------------|--------------|----------------------------|
//! | unused               | drop   | drop                 | drop           | drop              | drop         | drop                       |
//! | plain / variant      | keep   | `From`               | `From`         | `From`            | unwrap       | `From`                     |
//! | tuple                | keep   | -                    | per slot       | -                 | unwrap       | -                          |
//! | optional             | keep   | set                  | set            | assign            | unwrap       | set                        |
//! | container            | keep   | push                 | spread or push | push or push if some | unwrap    | append, push or flatten    |
//! | `Either`             | keep   | -                    | -              | -                 | assign       | -                          |
//!
//! "keep" leaves the destination untouched, "-" is a compile error. Plain
//! destinations only accept what `From` accepts, so widening compiles and
//! narrowing does not.

use crate::attribute::{Container, Optional};
use crate::kind::{
    ContainerKind, EitherKind, Nested, OptionalKind, PlainKind, Scalar, ShapeOf, TupleKind,
    UnusedKind, VariantKind,
};
use crate::{Attribute, Either};

/// Merge a parsed `S` into `self`.
pub trait Merge<S> {
    fn merge(&mut self, src: S);
}

impl<D, S> Merge<S> for D
where
    D: Attribute,
    S: Attribute,
    (D::Kind, S::Kind): Strategy<D, S>,
{
    #[inline]
    fn merge(&mut self, src: S) {
        <(D::Kind, S::Kind) as Strategy<D, S>>::apply(self, src);
    }
}

/// Merge code selected by a `(destination kind, source kind)` pair.
pub trait Strategy<D, S> {
    fn apply(dest: &mut D, src: S);
}

/// A fresh `D` built from `src`.
#[inline]
fn converted<D: Attribute + Merge<S>, S>(src: S) -> D {
    let mut value = D::default();
    value.merge(src);
    value
}

impl<D, S, K> Strategy<D, S> for (UnusedKind, K) {
    #[inline]
    fn apply(_dest: &mut D, _src: S) {}
}

macro_rules! ignore_unused {
    ($($dest:ty),*) => {$(
        impl<D, S> Strategy<D, S> for ($dest, UnusedKind) {
            #[inline]
            fn apply(_dest: &mut D, _src: S) {}
        }
    )*};
}

ignore_unused!(PlainKind, TupleKind, OptionalKind, VariantKind, EitherKind, ContainerKind);

macro_rules! unwrap_either {
    ($($dest:ty),*) => {$(
        impl<D, L, R> Strategy<D, Either<L, R>> for ($dest, EitherKind)
        where
            D: Merge<L> + Merge<R>,
        {
            #[inline]
            fn apply(dest: &mut D, src: Either<L, R>) {
                match src {
                    Either::Left(l) => <D as Merge<L>>::merge(dest, l),
                    Either::Right(r) => <D as Merge<R>>::merge(dest, r),
                }
            }
        }
    )*};
}

unwrap_either!(PlainKind, TupleKind, OptionalKind, VariantKind, ContainerKind);

impl<D, S: Into<D>> Strategy<D, S> for (EitherKind, EitherKind) {
    #[inline]
    fn apply(dest: &mut D, src: S) {
        *dest = src.into();
    }
}

macro_rules! assign_from {
    ($dest:ty => $($src:ty),*) => {$(
        impl<D: From<S>, S> Strategy<D, S> for ($dest, $src) {
            #[inline]
            fn apply(dest: &mut D, src: S) {
                *dest = D::from(src);
            }
        }
    )*};
}

assign_from!(PlainKind => PlainKind, TupleKind, OptionalKind, VariantKind, ContainerKind);
assign_from!(VariantKind => PlainKind, TupleKind, OptionalKind, VariantKind, ContainerKind);

impl<D: TupleMerge<S>, S> Strategy<D, S> for (TupleKind, TupleKind) {
    #[inline]
    fn apply(dest: &mut D, src: S) {
        dest.merge_slots(src);
    }
}

impl<D, S> Strategy<D, S> for (OptionalKind, OptionalKind)
where
    D: Optional,
    S: Optional,
    D::Inner: Merge<S::Inner>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        match src.into_inner() {
            Some(value) => dest.set(converted(value)),
            None => dest.reset(),
        }
    }
}

macro_rules! set_optional {
    ($($src:ty),*) => {$(
        impl<D, S> Strategy<D, S> for (OptionalKind, $src)
        where
            D: Optional,
            D::Inner: Merge<S>,
        {
            #[inline]
            fn apply(dest: &mut D, src: S) {
                dest.set(converted(src));
            }
        }
    )*};
}

set_optional!(PlainKind, TupleKind, VariantKind, ContainerKind);

macro_rules! push_element {
    ($($src:ty),*) => {$(
        impl<D, S> Strategy<D, S> for (ContainerKind, $src)
        where
            D: Container,
            D::Item: Merge<S>,
        {
            #[inline]
            fn apply(dest: &mut D, src: S) {
                dest.push(converted(src));
            }
        }
    )*};
}

push_element!(PlainKind, VariantKind);

impl<D, S> Strategy<D, S> for (ContainerKind, OptionalKind)
where
    D: Container,
    <D::Item as Attribute>::Kind: OptionalIntoContainer<D, S>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        <<D::Item as Attribute>::Kind as OptionalIntoContainer<D, S>>::apply(dest, src);
    }
}

impl<D, S> Strategy<D, S> for (ContainerKind, TupleKind)
where
    D: Container,
    <D::Item as Attribute>::Kind: TupleIntoContainer<D, S>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        <<D::Item as Attribute>::Kind as TupleIntoContainer<D, S>>::apply(dest, src);
    }
}

impl<D, S> Strategy<D, S> for (ContainerKind, ContainerKind)
where
    D: Container,
    S: Container,
    (ShapeOf<D::Item>, ShapeOf<S::Item>): ContainerStrategy<D, S>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        <(ShapeOf<D::Item>, ShapeOf<S::Item>) as ContainerStrategy<D, S>>::apply(dest, src);
    }
}

/// Tuple into container: push the tuple whole when the container stores
/// tuples (maps), otherwise spread its slots.
pub trait TupleIntoContainer<D, S> {
    fn apply(dest: &mut D, src: S);
}

impl<D, S> TupleIntoContainer<D, S> for TupleKind
where
    D: Container,
    D::Item: Merge<S>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        dest.push(converted(src));
    }
}

macro_rules! spread_tuple {
    ($($item:ty),*) => {$(
        impl<D, S: Spread<D>> TupleIntoContainer<D, S> for $item {
            #[inline]
            fn apply(dest: &mut D, src: S) {
                src.spread_into(dest);
            }
        }
    )*};
}

spread_tuple!(UnusedKind, PlainKind, OptionalKind, VariantKind, EitherKind, ContainerKind);

/// Optional into container: a container of optionals stores the value
/// whole, empty or not; any other container receives the inner value only
/// when there is one.
pub trait OptionalIntoContainer<D, S> {
    fn apply(dest: &mut D, src: S);
}

impl<D, S> OptionalIntoContainer<D, S> for OptionalKind
where
    D: Container,
    D::Item: Merge<S>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        dest.push(converted(src));
    }
}

macro_rules! push_if_some {
    ($($item:ty),*) => {$(
        impl<D, S> OptionalIntoContainer<D, S> for $item
        where
            D: Merge<S::Inner>,
            S: Optional,
        {
            #[inline]
            fn apply(dest: &mut D, src: S) {
                if let Some(value) = src.into_inner() {
                    dest.merge(value);
                }
            }
        }
    )*};
}

push_if_some!(UnusedKind, PlainKind, TupleKind, VariantKind, EitherKind, ContainerKind);

/// Container into container, by element depth.
pub trait ContainerStrategy<D, S> {
    fn apply(dest: &mut D, src: S);
}

impl<D, S> ContainerStrategy<D, S> for (Scalar, Scalar)
where
    D: Container,
    S: Container,
    <S::Item as Attribute>::Kind: AppendItems<D, S>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        <<S::Item as Attribute>::Kind as AppendItems<D, S>>::apply(dest, src);
    }
}

impl<D, S> ContainerStrategy<D, S> for (Nested, Nested)
where
    D: Container,
    S: Container,
    D::Item: Merge<S::Item>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        src.for_each_item(|item| dest.push(converted(item)));
    }
}

/// `Vec<String>` receiving a `String`: the source is one element.
impl<D, S> ContainerStrategy<D, S> for (Nested, Scalar)
where
    D: Container,
    D::Item: Merge<S>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        dest.push(converted(src));
    }
}

/// `String` receiving a `Vec<String>`: flatten one level.
impl<D, S> ContainerStrategy<D, S> for (Scalar, Nested)
where
    S: Container,
    D: Merge<S::Item>,
{
    #[inline]
    fn apply(dest: &mut D, src: S) {
        src.for_each_item(|item| dest.merge(item));
    }
}

/// Appending a range of scalars, by the source element's kind.
///
/// Tuple and optional elements go through the destination's own merge, so
/// `(char, char)` pairs spread into a `String` and `None` lands in a
/// `Vec<Option<_>>`. Other elements convert to the destination's item.
pub trait AppendItems<D, S> {
    fn apply(dest: &mut D, src: S);
}

macro_rules! append_through_merge {
    ($($item:ty),*) => {$(
        impl<D, S> AppendItems<D, S> for $item
        where
            S: Container,
            D: Merge<S::Item>,
        {
            #[inline]
            fn apply(dest: &mut D, src: S) {
                src.for_each_item(|item| dest.merge(item));
            }
        }
    )*};
}

append_through_merge!(TupleKind, OptionalKind);

macro_rules! append_converted {
    ($($item:ty),*) => {$(
        impl<D, S> AppendItems<D, S> for $item
        where
            D: Container,
            S: Container,
            D::Item: Merge<S::Item>,
        {
            #[inline]
            fn apply(dest: &mut D, src: S) {
                src.for_each_item(|item| dest.push(converted(item)));
            }
        }
    )*};
}

append_converted!(UnusedKind, PlainKind, VariantKind, EitherKind);

/// Slot-wise merge between tuples of equal arity.
pub trait TupleMerge<S> {
    fn merge_slots(&mut self, src: S);
}

/// Merge every slot of a tuple into one destination, in order.
pub trait Spread<D> {
    fn spread_into(self, dest: &mut D);
}

macro_rules! tuple_merges {
    ($( ($($d:ident $s:ident $i:tt),+) )*) => {$(
        impl<$($d,)+ $($s,)+> TupleMerge<($($s,)+)> for ($($d,)+)
        where
            $($d: Merge<$s>,)+
        {
            #[inline]
            fn merge_slots(&mut self, src: ($($s,)+)) {
                $(self.$i.merge(src.$i);)+
            }
        }

        impl<Dest, $($s,)+> Spread<Dest> for ($($s,)+)
        where
            $(Dest: Merge<$s>,)+
        {
            #[inline]
            fn spread_into(self, dest: &mut Dest) {
                $(<Dest as Merge<$s>>::merge(dest, self.$i);)+
            }
        }
    )*};
}

tuple_merges! {
    (D0 S0 0)
    (D0 S0 0, D1 S1 1)
    (D0 S0 0, D1 S1 1, D2 S2 2)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4, D5 S5 5)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4, D5 S5 5, D6 S6 6)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4, D5 S5 5, D6 S6 6, D7 S7 7)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4, D5 S5 5, D6 S6 6, D7 S7 7, D8 S8 8)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4, D5 S5 5, D6 S6 6, D7 S7 7, D8 S8 8, D9 S9 9)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4, D5 S5 5, D6 S6 6, D7 S7 7, D8 S8 8, D9 S9 9, D10 S10 10)
    (D0 S0 0, D1 S1 1, D2 S2 2, D3 S3 3, D4 S4 4, D5 S5 5, D6 S6 6, D7 S7 7, D8 S8 8, D9 S9 9, D10 S10 10, D11 S11 11)
}
