//! The context threaded through every parse call.
//!
//! A [`Ctx`] bundles four statically typed slots and two run-time flags:
//!
//! | slot      | type parameter      | root value   |
//! |-----------|---------------------|--------------|
//! | skipper   | `S: Skipper`        | `NoSkipper`  |
//! | failure   | `F: FailureChannel` | `NoFailure`  |
//! | values    | `V: Chain`          | `Nil`        |
//! | rule var  | `R: RuleVar`        | `NoRuleVar`  |
//!
//! plus the [`SkipMode`] and the `no_case` flag. Every slot is `Copy`, so
//! directives derive a new context by value and hand a reference to it
//! down; nothing is ever mutated in place except through the two shared
//! resources (the failure cell and values bound by reference).
//!
//! Parsers are generic over [`Context`], which only `Ctx` implements. The
//! builder methods on it keep the context *type* unchanged wherever the
//! change is a run-time flag, so a recursive rule instantiates its body a
//! bounded number of times.

mod chain;

pub use chain::{
    Chain, ChainView, Entry, Get, Here, Hidden, Holder, Key, Nil, Own, RemoveFirst,
    ReplaceFirst, RuleEntry, There,
};

use std::any::Any;
use std::cell::RefCell;

use weft_attr::Attribute;
use weft_diagnostic::{FailureCell, FailureChannel, NoFailure};

use crate::{Cursor, Parser};

/// Whether the skipper runs before terminals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SkipMode {
    #[default]
    Enabled,
    /// Inside `lexeme` / `no_skip`.
    Disabled,
}

/// Something that can consume insignificant input.
pub trait Skipper: Copy {
    fn skip(self, cur: &mut Cursor<'_>);
}

/// The absent skipper.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSkipper;

impl Skipper for NoSkipper {
    #[inline]
    fn skip(self, _cur: &mut Cursor<'_>) {}
}

impl<P: Parser> Skipper for &P {
    fn skip(self, cur: &mut Cursor<'_>) {
        let root = Ctx::new();
        loop {
            let before = cur.position();
            let mut discarded = P::Attribute::default();
            if !self.parse(cur, &root, &mut discarded) || cur.position() == before {
                break;
            }
        }
    }
}

/// The rule-variable slot: the attribute of the innermost rule being parsed.
pub trait RuleVar: Copy {
    /// Type-erased view for semantic actions.
    fn erased<'a>(self) -> Option<&'a dyn Any>
    where
        Self: 'a;
}

/// No rule is being parsed, or the rule is invisible to this parser.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoRuleVar;

impl RuleVar for NoRuleVar {
    fn erased<'a>(self) -> Option<&'a dyn Any>
    where
        Self: 'a,
    {
        None
    }
}

impl<A: Attribute> RuleVar for &RefCell<A> {
    fn erased<'a>(self) -> Option<&'a dyn Any>
    where
        Self: 'a,
    {
        Some(self)
    }
}

/// The context value.
#[derive(Copy, Clone, Debug)]
pub struct Ctx<S, F, V, R> {
    skipper: S,
    failure: F,
    values: V,
    rule_var: R,
    skip_mode: SkipMode,
    no_case: bool,
}

/// The context every top-level parse starts from.
pub type RootCtx = Ctx<NoSkipper, NoFailure, Nil, NoRuleVar>;

impl Ctx<NoSkipper, NoFailure, Nil, NoRuleVar> {
    pub const fn new() -> Self {
        Ctx {
            skipper: NoSkipper,
            failure: NoFailure,
            values: Nil,
            rule_var: NoRuleVar,
            skip_mode: SkipMode::Enabled,
            no_case: false,
        }
    }
}

impl Default for Ctx<NoSkipper, NoFailure, Nil, NoRuleVar> {
    fn default() -> Self {
        Ctx::new()
    }
}

impl<S, F, V: Chain, R> Ctx<S, F, V, R> {
    /// Statically resolved lookup; an absent tag is a compile error.
    pub fn get<K: Key, I>(&self) -> &K::Value
    where
        V: Get<K, I>,
    {
        self.values.get()
    }

    /// Erase the first value tagged `K` from the context's type.
    pub fn remove_value<K: Key, I>(self) -> Ctx<S, F, V::Output, R>
    where
        V: RemoveFirst<K, I>,
    {
        Ctx {
            skipper: self.skipper,
            failure: self.failure,
            values: self.values.remove_first(),
            rule_var: self.rule_var,
            skip_mode: self.skip_mode,
            no_case: self.no_case,
        }
    }
}

/// Access to a [`Ctx`] from code generic over it.
pub trait Context: Copy {
    type Skipper: Skipper;
    type Failure: FailureChannel;
    type Values: Chain;
    type RuleVar: RuleVar;

    fn frame(&self) -> Ctx<Self::Skipper, Self::Failure, Self::Values, Self::RuleVar>;

    #[inline]
    fn failure(&self) -> Self::Failure {
        self.frame().failure
    }

    #[inline]
    fn values(&self) -> Self::Values {
        self.frame().values
    }

    #[inline]
    fn rule_var(&self) -> Self::RuleVar {
        self.frame().rule_var
    }

    #[inline]
    fn skip_mode(&self) -> SkipMode {
        self.frame().skip_mode
    }

    #[inline]
    fn no_case(&self) -> bool {
        self.frame().no_case
    }

    /// Run the skipper unless skipping is disabled.
    #[inline]
    fn skip_over(&self, cur: &mut Cursor<'_>) {
        let frame = self.frame();
        if frame.skip_mode == SkipMode::Enabled {
            frame.skipper.skip(cur);
        }
    }

    /// Same context with a different skip mode.
    #[inline]
    fn with_skip_mode(
        &self,
        skip_mode: SkipMode,
    ) -> Ctx<Self::Skipper, Self::Failure, Self::Values, Self::RuleVar> {
        Ctx {
            skip_mode,
            ..self.frame()
        }
    }

    #[inline]
    fn with_no_case(&self) -> Ctx<Self::Skipper, Self::Failure, Self::Values, Self::RuleVar> {
        Ctx {
            no_case: true,
            ..self.frame()
        }
    }

    /// Install a skipper and enable skipping.
    fn with_skipper<S: Skipper>(
        &self,
        skipper: S,
    ) -> Ctx<S, Self::Failure, Self::Values, Self::RuleVar> {
        let frame = self.frame();
        Ctx {
            skipper,
            failure: frame.failure,
            values: frame.values,
            rule_var: frame.rule_var,
            skip_mode: SkipMode::Enabled,
            no_case: frame.no_case,
        }
    }

    fn with_failure<'f>(
        &self,
        cell: &'f FailureCell,
    ) -> Ctx<Self::Skipper, &'f FailureCell, Self::Values, Self::RuleVar> {
        let frame = self.frame();
        Ctx {
            skipper: frame.skipper,
            failure: cell,
            values: frame.values,
            rule_var: frame.rule_var,
            skip_mode: frame.skip_mode,
            no_case: frame.no_case,
        }
    }

    /// Push a user value, shadowing any earlier value of the same tag.
    fn with_value<K: Key, H: Holder<K::Value>>(
        &self,
        holder: H,
    ) -> Ctx<Self::Skipper, Self::Failure, Entry<K, H, Self::Values>, Self::RuleVar> {
        let frame = self.frame();
        Ctx {
            skipper: frame.skipper,
            failure: frame.failure,
            values: frame.values.make::<K, H>(holder),
            rule_var: frame.rule_var,
            skip_mode: frame.skip_mode,
            no_case: frame.no_case,
        }
    }

    /// Hide every user value tagged `K`.
    fn without_value<K: Key>(
        &self,
    ) -> Ctx<Self::Skipper, Self::Failure, Hidden<K, Self::Values>, Self::RuleVar> {
        let frame = self.frame();
        Ctx {
            skipper: frame.skipper,
            failure: frame.failure,
            values: frame.values.hide::<K>(),
            rule_var: frame.rule_var,
            skip_mode: frame.skip_mode,
            no_case: frame.no_case,
        }
    }

    /// Inject a rule definition for the rest of this call.
    fn with_rule<'d, R, D>(
        &self,
        definition: &'d D,
        force: bool,
    ) -> Ctx<Self::Skipper, Self::Failure, RuleEntry<'d, R, D, Self::Values>, Self::RuleVar> {
        let frame = self.frame();
        Ctx {
            skipper: frame.skipper,
            failure: frame.failure,
            values: RuleEntry::new(definition, force, frame.values),
            rule_var: frame.rule_var,
            skip_mode: frame.skip_mode,
            no_case: frame.no_case,
        }
    }

    /// Point the rule-variable slot at `var`.
    fn replace_rule_var<'v, A: Attribute>(
        &self,
        var: &'v RefCell<A>,
    ) -> Ctx<Self::Skipper, Self::Failure, Self::Values, &'v RefCell<A>> {
        let frame = self.frame();
        Ctx {
            skipper: frame.skipper,
            failure: frame.failure,
            values: frame.values,
            rule_var: var,
            skip_mode: frame.skip_mode,
            no_case: frame.no_case,
        }
    }

    /// Drop the rule-variable slot; every rule call goes through this so
    /// its body sees the same context type at any recursion depth.
    fn rule_agnostic(&self) -> Ctx<Self::Skipper, Self::Failure, Self::Values, NoRuleVar> {
        let frame = self.frame();
        Ctx {
            skipper: frame.skipper,
            failure: frame.failure,
            values: frame.values,
            rule_var: NoRuleVar,
            skip_mode: frame.skip_mode,
            no_case: frame.no_case,
        }
    }
}

impl<S: Skipper, F: FailureChannel, V: Chain, R: RuleVar> Context for Ctx<S, F, V, R> {
    type Skipper = S;
    type Failure = F;
    type Values = V;
    type RuleVar = R;

    #[inline]
    fn frame(&self) -> Self {
        *self
    }
}
