//! The [`Attribute`] trait and its impls for standard types.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use smallvec::SmallVec;

use crate::kind::{
    ContainerKind, EitherKind, Kind, OptionalKind, PlainKind, TupleKind, UnusedKind,
};
use crate::{Either, Unused};

/// A type that can receive the result of a parse.
///
/// `Default` provides the fresh slot each speculative branch parses into.
/// `'static` lets rule attributes travel through the context as `dyn Any`.
pub trait Attribute: Default + 'static {
    /// Category marker; decides how values merge into and out of `Self`.
    type Kind: Kind;

    /// What a repetition of `Self` collects into.
    type Repeated: Attribute;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self);
}

/// A collection attribute.
pub trait Container: Attribute<Kind = ContainerKind> {
    type Item: Attribute;

    fn push(&mut self, item: Self::Item);

    /// Consume the container, handing each element to `f` in order.
    fn for_each_item(self, f: impl FnMut(Self::Item));

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// An attribute holding zero or one value.
pub trait Optional: Attribute<Kind = OptionalKind> {
    type Inner: Attribute;

    fn set(&mut self, value: Self::Inner);
    fn reset(&mut self);
    fn into_inner(self) -> Option<Self::Inner>;
}

/// Declare user types as plain attributes (assigned through `From`).
///
/// ```text
/// struct Employee { name: String, age: u32 }
/// impl From<(String, u32)> for Employee { ... }
/// weft_attr::plain_attribute!(Employee);
/// ```
#[macro_export]
macro_rules! plain_attribute {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Attribute for $ty {
            type Kind = $crate::kind::PlainKind;
            type Repeated = ::std::vec::Vec<$ty>;

            fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
                repeated.push(value);
            }
        }
    )*};
}

/// Declare user enums as variant attributes.
///
/// Each alternative the enum accepts needs a `From` impl.
#[macro_export]
macro_rules! variant_attribute {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Attribute for $ty {
            type Kind = $crate::kind::VariantKind;
            type Repeated = ::std::vec::Vec<$ty>;

            fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
                repeated.push(value);
            }
        }
    )*};
}

impl Attribute for Unused {
    type Kind = UnusedKind;
    type Repeated = Unused;

    fn push_repeated(_repeated: &mut Unused, _value: Unused) {}
}

impl Attribute for char {
    type Kind = PlainKind;
    type Repeated = String;

    fn push_repeated(repeated: &mut String, value: char) {
        repeated.push(value);
    }
}

plain_attribute!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl<T: Attribute> Attribute for Box<T> {
    type Kind = PlainKind;
    type Repeated = Vec<Box<T>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl<T: Attribute> Attribute for Option<T> {
    type Kind = OptionalKind;
    type Repeated = Vec<Option<T>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl<T: Attribute> Optional for Option<T> {
    type Inner = T;

    fn set(&mut self, value: T) {
        *self = Some(value);
    }

    fn reset(&mut self) {
        *self = None;
    }

    fn into_inner(self) -> Option<T> {
        self
    }
}

impl<L: Attribute, R: Attribute> Attribute for Either<L, R> {
    type Kind = EitherKind;
    type Repeated = Vec<Either<L, R>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl Attribute for String {
    type Kind = ContainerKind;
    type Repeated = Vec<String>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl Container for String {
    type Item = char;

    fn push(&mut self, item: char) {
        String::push(self, item);
    }

    fn for_each_item(self, f: impl FnMut(char)) {
        self.chars().for_each(f);
    }

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}

macro_rules! sequence_containers {
    ($($name:ident, $push:ident;)*) => {$(
        impl<T: Attribute> Attribute for $name<T> {
            type Kind = ContainerKind;
            type Repeated = Vec<$name<T>>;

            fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
                repeated.push(value);
            }
        }

        impl<T: Attribute> Container for $name<T> {
            type Item = T;

            fn push(&mut self, item: T) {
                self.$push(item);
            }

            fn for_each_item(self, f: impl FnMut(T)) {
                self.into_iter().for_each(f);
            }

            fn len(&self) -> usize {
                $name::len(self)
            }

            fn clear(&mut self) {
                $name::clear(self);
            }
        }
    )*};
}

sequence_containers! {
    Vec, push;
    VecDeque, push_back;
}

impl<T: Attribute, const N: usize> Attribute for SmallVec<[T; N]> {
    type Kind = ContainerKind;
    type Repeated = Vec<SmallVec<[T; N]>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl<T: Attribute, const N: usize> Container for SmallVec<[T; N]> {
    type Item = T;

    fn push(&mut self, item: T) {
        SmallVec::push(self, item);
    }

    fn for_each_item(self, f: impl FnMut(T)) {
        self.into_iter().for_each(f);
    }

    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn clear(&mut self) {
        SmallVec::clear(self);
    }
}

impl<T: Attribute + Ord> Attribute for BTreeSet<T> {
    type Kind = ContainerKind;
    type Repeated = Vec<BTreeSet<T>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl<T: Attribute + Ord> Container for BTreeSet<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn for_each_item(self, f: impl FnMut(T)) {
        self.into_iter().for_each(f);
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

impl<T, S> Attribute for HashSet<T, S>
where
    T: Attribute + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    type Kind = ContainerKind;
    type Repeated = Vec<HashSet<T, S>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Attribute + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    type Item = T;

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn for_each_item(self, f: impl FnMut(T)) {
        self.into_iter().for_each(f);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }
}

impl<K: Attribute + Ord, V: Attribute> Attribute for BTreeMap<K, V> {
    type Kind = ContainerKind;
    type Repeated = Vec<BTreeMap<K, V>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

/// Later keys overwrite earlier ones.
impl<K: Attribute + Ord, V: Attribute> Container for BTreeMap<K, V> {
    type Item = (K, V);

    fn push(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    fn for_each_item(self, f: impl FnMut((K, V))) {
        self.into_iter().for_each(f);
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }
}

impl<K, V, S> Attribute for HashMap<K, V, S>
where
    K: Attribute + Eq + Hash,
    V: Attribute,
    S: BuildHasher + Default + 'static,
{
    type Kind = ContainerKind;
    type Repeated = Vec<HashMap<K, V, S>>;

    fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
        repeated.push(value);
    }
}

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Attribute + Eq + Hash,
    V: Attribute,
    S: BuildHasher + Default + 'static,
{
    type Item = (K, V);

    fn push(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    fn for_each_item(self, f: impl FnMut((K, V))) {
        self.into_iter().for_each(f);
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }
}

macro_rules! tuple_attributes {
    ($( ($($t:ident),+) )*) => {$(
        impl<$($t: Attribute),+> Attribute for ($($t,)+) {
            type Kind = TupleKind;
            type Repeated = Vec<($($t,)+)>;

            fn push_repeated(repeated: &mut Self::Repeated, value: Self) {
                repeated.push(value);
            }
        }
    )*};
}

tuple_attributes! {
    (A0)
    (A0, A1)
    (A0, A1, A2)
    (A0, A1, A2, A3)
    (A0, A1, A2, A3, A4)
    (A0, A1, A2, A3, A4, A5)
    (A0, A1, A2, A3, A4, A5, A6)
    (A0, A1, A2, A3, A4, A5, A6, A7)
    (A0, A1, A2, A3, A4, A5, A6, A7, A8)
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9)
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10)
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11)
}
