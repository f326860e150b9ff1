//! Binding and hiding user values for the duration of a subject.
//!
//! Each binding adds a node to the context's type. Binding inside a rule
//! body that recurses through the binding would grow that type without
//! bound; bind outside the recursion instead. The same holds for
//! [`without`].

use std::fmt;
use std::marker::PhantomData;

use crate::context::{Holder, Key};
use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// The subject with `holder` bound under tag `K`.
pub struct With<K, H, P> {
    holder: H,
    subject: P,
    tag: PhantomData<fn() -> K>,
}

/// The subject with a fresh `K::Value::default()` bound under tag `K` on
/// every invocation.
pub struct WithLocal<K, P> {
    subject: P,
    tag: PhantomData<fn() -> K>,
}

/// The subject with every value tagged `K` hidden.
pub struct Without<K, P> {
    subject: P,
    tag: PhantomData<fn() -> K>,
}

/// Bind `holder` (a reference, or [`Own`] for `Copy` values) under `tag`.
///
/// [`Own`]: crate::context::Own
pub fn with<K, H, P>(_tag: K, holder: H, subject: P) -> With<K, H, P::Parser>
where
    K: Key,
    H: Holder<K::Value>,
    P: IntoParser,
{
    With {
        holder,
        subject: subject.into_parser(),
        tag: PhantomData,
    }
}

pub fn with_local<K, P>(_tag: K, subject: P) -> WithLocal<K, P::Parser>
where
    K: Key,
    K::Value: Default,
    P: IntoParser,
{
    WithLocal {
        subject: subject.into_parser(),
        tag: PhantomData,
    }
}

/// Parse `subject` as if nothing were bound under `tag`.
///
/// Nest to hide several tags: `without(A, without(B, p))`.
pub fn without<K, P>(_tag: K, subject: P) -> Without<K, P::Parser>
where
    K: Key,
    P: IntoParser,
{
    Without {
        subject: subject.into_parser(),
        tag: PhantomData,
    }
}

impl<K, H: Clone, P: Clone> Clone for With<K, H, P> {
    fn clone(&self) -> Self {
        With {
            holder: self.holder.clone(),
            subject: self.subject.clone(),
            tag: PhantomData,
        }
    }
}

impl<K, H: Copy, P: Copy> Copy for With<K, H, P> {}

impl<K, P: Clone> Clone for WithLocal<K, P> {
    fn clone(&self) -> Self {
        WithLocal {
            subject: self.subject.clone(),
            tag: PhantomData,
        }
    }
}

impl<K, P: Copy> Copy for WithLocal<K, P> {}

impl<K, P: Clone> Clone for Without<K, P> {
    fn clone(&self) -> Self {
        Without {
            subject: self.subject.clone(),
            tag: PhantomData,
        }
    }
}

impl<K, P: Copy> Copy for Without<K, P> {}

impl<K, H, P: fmt::Debug> fmt::Debug for With<K, H, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("With")
            .field("tag", &std::any::type_name::<K>())
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

impl<K, P: fmt::Debug> fmt::Debug for WithLocal<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithLocal")
            .field("tag", &std::any::type_name::<K>())
            .field("subject", &self.subject)
            .finish()
    }
}

impl<K, P: fmt::Debug> fmt::Debug for Without<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Without")
            .field("tag", &std::any::type_name::<K>())
            .field("subject", &self.subject)
            .finish()
    }
}

impl<K, H, P> Parser for With<K, H, P>
where
    K: Key,
    H: Holder<K::Value>,
    P: Parser,
{
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        self.subject
            .parse(cur, &ctx.with_value::<K, H>(self.holder), attr)
    }

    fn what(&self) -> String {
        self.subject.what()
    }
}

impl<K, P> Parser for WithLocal<K, P>
where
    K: Key,
    K::Value: Default,
    P: Parser,
{
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let local = K::Value::default();
        self.subject
            .parse(cur, &ctx.with_value::<K, &K::Value>(&local), attr)
    }

    fn what(&self) -> String {
        self.subject.what()
    }
}

impl<K: Key, P: Parser> Parser for Without<K, P> {
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        self.subject.parse(cur, &ctx.without_value::<K>(), attr)
    }

    fn what(&self) -> String {
        format!("without[{}]", self.subject.what())
    }
}

crate::parser::impl_operators! {
    [K, H, P,] With<K, H, P>;
    [K, P,] WithLocal<K, P>;
    [K, P,] Without<K, P>;
}
