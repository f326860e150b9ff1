//! The chain of user values and injected rule definitions.
//!
//! A chain is a cons list encoded in its type: `Entry<A, _, Entry<B, _,
//! Nil>>`. [`Chain::make`] pushes to the front, so a newer entry shadows an
//! older one with the same tag without touching it.
//!
//! Two lookup styles exist. [`Get`], [`ReplaceFirst`] and [`RemoveFirst`]
//! are resolved by the type checker through a [`Here`]/[`There`] index that
//! is always inferred; asking for a tag the chain does not contain fails to
//! compile. Parsers that are generic over every context cannot name such an
//! index, so they use the run-time [`Chain::find`] instead.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use weft_attr::Merge;

use crate::rule::{call_rule_definition, RuleId};
use crate::{Context, Cursor, Parser};

/// A tag naming one kind of user value.
///
/// ```
/// use std::cell::Cell;
/// use weft_parse::context::Key;
///
/// struct Depth;
/// impl Key for Depth {
///     type Value = Cell<u32>;
/// }
/// ```
pub trait Key: 'static {
    type Value: Any;
}

/// How an entry holds its value: borrowed (`&T`) or by value ([`Own`]).
pub trait Holder<T>: Copy {
    fn get(&self) -> &T;
}

impl<T> Holder<T> for &T {
    #[inline]
    fn get(&self) -> &T {
        self
    }
}

/// A value stored in the chain itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Own<T>(pub T);

impl<T: Copy> Holder<T> for Own<T> {
    #[inline]
    fn get(&self) -> &T {
        &self.0
    }
}

/// Object-safe, type-erased lookup; what semantic actions see.
pub trait ChainView {
    fn find_any(&self, key: TypeId) -> Option<&dyn Any>;
}

/// Operations every chain supports.
pub trait Chain: ChainView + Copy {
    /// Push `holder` under tag `K`.
    #[inline]
    fn make<K: Key, H: Holder<K::Value>>(self, holder: H) -> Entry<K, H, Self> {
        Entry {
            holder,
            parent: self,
            key: PhantomData,
        }
    }

    /// First value tagged `K`, if any.
    #[inline]
    fn find<K: Key>(&self) -> Option<&K::Value> {
        self.find_any(TypeId::of::<K>())?.downcast_ref()
    }

    /// Hide every value tagged `K` from run-time lookups below this point.
    #[inline]
    fn hide<K: Key>(self) -> Hidden<K, Self> {
        Hidden {
            parent: self,
            key: PhantomData,
        }
    }

    /// Parse with the injected definition of rule `R`, if this chain has one.
    fn parse_injected<R: RuleId, C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut R::Attribute,
    ) -> Option<bool>;
}

/// The empty chain.
#[derive(Copy, Clone, Debug, Default)]
pub struct Nil;

impl ChainView for Nil {
    #[inline]
    fn find_any(&self, _key: TypeId) -> Option<&dyn Any> {
        None
    }
}

impl Chain for Nil {
    #[inline]
    fn parse_injected<R: RuleId, C: Context>(
        &self,
        _cur: &mut Cursor<'_>,
        _ctx: &C,
        _attr: &mut R::Attribute,
    ) -> Option<bool> {
        None
    }
}

/// A user value in front of `parent`.
pub struct Entry<K, H, P> {
    holder: H,
    parent: P,
    key: PhantomData<fn() -> K>,
}

impl<K, H: Copy, P: Copy> Clone for Entry<K, H, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, H: Copy, P: Copy> Copy for Entry<K, H, P> {}

impl<K, H, P: fmt::Debug> fmt::Debug for Entry<K, H, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &std::any::type_name::<K>())
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl<K, H, P> Entry<K, H, P> {
    pub fn parent(&self) -> &P {
        &self.parent
    }
}

impl<K: Key, H: Holder<K::Value>, P: ChainView> ChainView for Entry<K, H, P> {
    fn find_any(&self, key: TypeId) -> Option<&dyn Any> {
        if key == TypeId::of::<K>() {
            Some(self.holder.get())
        } else {
            self.parent.find_any(key)
        }
    }
}

impl<K: Key, H: Holder<K::Value>, P: Chain> Chain for Entry<K, H, P> {
    #[inline]
    fn parse_injected<R: RuleId, C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut R::Attribute,
    ) -> Option<bool> {
        self.parent.parse_injected::<R, C>(cur, ctx, attr)
    }
}

/// `parent` with every value tagged `K` out of sight.
///
/// Parsers cannot name the static index [`RemoveFirst`] needs, so the
/// `without` directive masks the tag instead of erasing its nodes.
pub struct Hidden<K, P> {
    parent: P,
    key: PhantomData<fn() -> K>,
}

impl<K, P: Copy> Clone for Hidden<K, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, P: Copy> Copy for Hidden<K, P> {}

impl<K, P: fmt::Debug> fmt::Debug for Hidden<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hidden")
            .field("key", &std::any::type_name::<K>())
            .field("parent", &self.parent)
            .finish()
    }
}

impl<K: Key, P: ChainView> ChainView for Hidden<K, P> {
    fn find_any(&self, key: TypeId) -> Option<&dyn Any> {
        if key == TypeId::of::<K>() {
            None
        } else {
            self.parent.find_any(key)
        }
    }
}

impl<K: Key, P: Chain> Chain for Hidden<K, P> {
    #[inline]
    fn parse_injected<R: RuleId, C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut R::Attribute,
    ) -> Option<bool> {
        self.parent.parse_injected::<R, C>(cur, ctx, attr)
    }
}

/// A rule definition injected by an enclosing [`RuleDefinition`] parse.
///
/// [`RuleDefinition`]: crate::rule::RuleDefinition
pub struct RuleEntry<'d, R, D, P> {
    definition: &'d D,
    force: bool,
    parent: P,
    rule: PhantomData<fn() -> R>,
}

impl<'d, R, D, P> RuleEntry<'d, R, D, P> {
    pub(crate) fn new(definition: &'d D, force: bool, parent: P) -> Self {
        RuleEntry {
            definition,
            force,
            parent,
            rule: PhantomData,
        }
    }
}

impl<R, D, P: Copy> Clone for RuleEntry<'_, R, D, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, D, P: Copy> Copy for RuleEntry<'_, R, D, P> {}

impl<R, D, P: fmt::Debug> fmt::Debug for RuleEntry<'_, R, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEntry")
            .field("rule", &std::any::type_name::<R>())
            .field("force", &self.force)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl<R, D, P: ChainView> ChainView for RuleEntry<'_, R, D, P> {
    #[inline]
    fn find_any(&self, key: TypeId) -> Option<&dyn Any> {
        self.parent.find_any(key)
    }
}

impl<R2, D, P> Chain for RuleEntry<'_, R2, D, P>
where
    R2: RuleId,
    D: Parser,
    R2::Attribute: Merge<D::Attribute>,
    P: Chain,
{
    fn parse_injected<R: RuleId, C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut R::Attribute,
    ) -> Option<bool> {
        if TypeId::of::<R>() == TypeId::of::<R2>() {
            let erased: &mut dyn Any = &mut *attr;
            if let Some(attr) = erased.downcast_mut::<R2::Attribute>() {
                return Some(call_rule_definition::<R2, D, C>(
                    self.definition,
                    self.force,
                    cur,
                    ctx,
                    attr,
                ));
            }
        }
        self.parent.parse_injected::<R, C>(cur, ctx, attr)
    }
}

/// Index: the tag is in the first node.
pub enum Here {}

/// Index: the tag is somewhere behind the first node.
pub struct There<I>(PhantomData<I>);

/// Statically resolved lookup.
pub trait Get<K: Key, I> {
    fn get(&self) -> &K::Value;
}

impl<K: Key, H: Holder<K::Value>, P> Get<K, Here> for Entry<K, H, P> {
    #[inline]
    fn get(&self) -> &K::Value {
        self.holder.get()
    }
}

impl<K: Key, K2, H, P: Get<K, I>, I> Get<K, There<I>> for Entry<K2, H, P> {
    #[inline]
    fn get(&self) -> &K::Value {
        self.parent.get()
    }
}

impl<K: Key, R, D, P: Get<K, I>, I> Get<K, There<I>> for RuleEntry<'_, R, D, P> {
    #[inline]
    fn get(&self) -> &K::Value {
        self.parent.get()
    }
}

/// Rewrite the first node tagged `K`, possibly changing its holder type.
pub trait ReplaceFirst<K: Key, I> {
    type Output<H2: Holder<K::Value>>;

    fn replace_first<H2: Holder<K::Value>>(self, holder: H2) -> Self::Output<H2>;
}

impl<K: Key, H, P> ReplaceFirst<K, Here> for Entry<K, H, P> {
    type Output<H2: Holder<K::Value>> = Entry<K, H2, P>;

    fn replace_first<H2: Holder<K::Value>>(self, holder: H2) -> Entry<K, H2, P> {
        Entry {
            holder,
            parent: self.parent,
            key: PhantomData,
        }
    }
}

impl<K: Key, K2, H, P: ReplaceFirst<K, I>, I> ReplaceFirst<K, There<I>> for Entry<K2, H, P> {
    type Output<H2: Holder<K::Value>> = Entry<K2, H, P::Output<H2>>;

    fn replace_first<H2: Holder<K::Value>>(self, holder: H2) -> Self::Output<H2> {
        Entry {
            holder: self.holder,
            parent: self.parent.replace_first(holder),
            key: PhantomData,
        }
    }
}

impl<'d, K: Key, R, D, P: ReplaceFirst<K, I>, I> ReplaceFirst<K, There<I>>
    for RuleEntry<'d, R, D, P>
{
    type Output<H2: Holder<K::Value>> = RuleEntry<'d, R, D, P::Output<H2>>;

    fn replace_first<H2: Holder<K::Value>>(self, holder: H2) -> Self::Output<H2> {
        RuleEntry::new(
            self.definition,
            self.force,
            self.parent.replace_first(holder),
        )
    }
}

/// Erase the first node tagged `K` from the chain's type.
pub trait RemoveFirst<K: Key, I> {
    type Output;

    fn remove_first(self) -> Self::Output;
}

impl<K: Key, H, P> RemoveFirst<K, Here> for Entry<K, H, P> {
    type Output = P;

    fn remove_first(self) -> P {
        self.parent
    }
}

impl<K: Key, K2, H, P: RemoveFirst<K, I>, I> RemoveFirst<K, There<I>> for Entry<K2, H, P> {
    type Output = Entry<K2, H, P::Output>;

    fn remove_first(self) -> Self::Output {
        Entry {
            holder: self.holder,
            parent: self.parent.remove_first(),
            key: PhantomData,
        }
    }
}

impl<'d, K: Key, R, D, P: RemoveFirst<K, I>, I> RemoveFirst<K, There<I>>
    for RuleEntry<'d, R, D, P>
{
    type Output = RuleEntry<'d, R, D, P::Output>;

    fn remove_first(self) -> Self::Output {
        RuleEntry::new(self.definition, self.force, self.parent.remove_first())
    }
}
