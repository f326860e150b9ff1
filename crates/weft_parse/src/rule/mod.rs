//! Rules: named, possibly recursive grammar nonterminals.
//!
//! A rule has an identity type implementing [`RuleId`], which fixes its
//! attribute and its diagnostic name. [`Rule<R>`] is the zero-sized handle
//! used inside grammars. A definition is found in one of two places:
//!
//! 1. Injected: [`Rule::define`] wraps a right-hand side in a
//!    [`RuleDefinition`]. Parsing it pushes the definition onto the context
//!    chain, so every `Rule<R>` reached below resolves to it. This is how a
//!    grammar expression refers to itself.
//! 2. Out of line: [`RuleId::parse_rule`], usually written by [`rule!`].
//!
//! Every handle call strips the rule variable from the context before it
//! descends, so the body of a recursive rule is instantiated once, however
//! deep the recursion goes at run time.
//!
//! # Attribute materialisation
//!
//! The body parses into a temporary. It is merged into the rule's variable
//! when the body contains no semantic action, or when the rule is forced
//! (`define_forced`, `%=` in [`rule!`], or [`RuleId::FORCE_ATTRIBUTE`]).
//! Actions reach the variable through [`ActionContext::val`]. The caller's
//! slot receives the variable only once the rule has matched.
//!
//! The rule's attribute must accept the body's attribute through `Merge`
//! even when actions suppress the merge. A body whose attribute does not
//! fit is wrapped in `omit` and fills the rule's attribute from actions.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

use tracing::{error, trace};
use weft_attr::{Attribute, Merge};
use weft_diagnostic::{ExpectationFailure, FailureChannel, Span};
use weft_stack::{ensure_sufficient_stack, remaining_stack};

use crate::action::ActionContext;
use crate::context::{Chain, RuleVar};
use crate::{Context, Cursor, Parser};

/// Identity of a rule.
pub trait RuleId: Sized + 'static {
    type Attribute: Attribute;

    /// Name used in diagnostics and traces.
    const NAME: &'static str;

    /// Materialise the attribute even when the body has actions.
    const FORCE_ATTRIBUTE: bool = false;

    /// Called after the body matched. `cx.fail()` rejects the match.
    fn on_success(_attr: &mut Self::Attribute, _cx: &mut ActionContext<'_>) {}

    /// Called after the body failed while an expectation failure is stored.
    fn on_error(_failure: &ExpectationFailure, _cx: &mut ActionContext<'_>) {}

    /// The out-of-line definition.
    ///
    /// The default is reached only when a rule is used without any
    /// definition, which is a grammar bug.
    fn parse_rule<C: Context>(
        cur: &mut Cursor<'_>,
        _ctx: &C,
        _attr: &mut Self::Attribute,
    ) -> bool {
        error!(rule = Self::NAME, position = cur.position(), "rule has no definition");
        if cfg!(debug_assertions) {
            panic!("rule `{}` used without a definition", Self::NAME);
        }
        false
    }

    fn rule() -> Rule<Self> {
        Rule::new()
    }
}

/// Handle to the rule identified by `R`.
pub struct Rule<R> {
    id: PhantomData<fn() -> R>,
}

impl<R> Rule<R> {
    pub const fn new() -> Self {
        Rule { id: PhantomData }
    }
}

impl<R> Clone for Rule<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Rule<R> {}

impl<R> Default for Rule<R> {
    fn default() -> Self {
        Rule::new()
    }
}

impl<R: RuleId> fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({})", R::NAME)
    }
}

impl<R: RuleId> Rule<R> {
    pub fn name(self) -> &'static str {
        R::NAME
    }

    /// Bind `rhs` as this rule's body for the duration of each parse of
    /// the returned definition.
    pub fn define<D>(self, rhs: D) -> RuleDefinition<R, D>
    where
        D: Parser,
        R::Attribute: Merge<D::Attribute>,
    {
        RuleDefinition::new(rhs, false)
    }

    /// As [`Rule::define`], materialising the attribute even when `rhs`
    /// has semantic actions.
    pub fn define_forced<D>(self, rhs: D) -> RuleDefinition<R, D>
    where
        D: Parser,
        R::Attribute: Merge<D::Attribute>,
    {
        RuleDefinition::new(rhs, true)
    }
}

impl<R: RuleId> Parser for Rule<R> {
    type Attribute = R::Attribute;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut R::Attribute) -> bool {
        let ctx = ctx.rule_agnostic();
        if let Some(matched) = ctx.values().parse_injected::<R, _>(cur, &ctx, attr) {
            return matched;
        }
        R::parse_rule(cur, &ctx, attr)
    }

    fn what(&self) -> String {
        R::NAME.to_owned()
    }
}

/// A rule together with its body.
pub struct RuleDefinition<R, D> {
    rhs: D,
    force: bool,
    id: PhantomData<fn() -> R>,
}

impl<R, D> RuleDefinition<R, D> {
    fn new(rhs: D, force: bool) -> Self {
        RuleDefinition {
            rhs,
            force,
            id: PhantomData,
        }
    }
}

impl<R, D: Clone> Clone for RuleDefinition<R, D> {
    fn clone(&self) -> Self {
        RuleDefinition::new(self.rhs.clone(), self.force)
    }
}

impl<R: RuleId, D: fmt::Debug> fmt::Debug for RuleDefinition<R, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("rule", &R::NAME)
            .field("force", &self.force)
            .field("rhs", &self.rhs)
            .finish()
    }
}

impl<R, D> Parser for RuleDefinition<R, D>
where
    R: RuleId,
    D: Parser,
    R::Attribute: Merge<D::Attribute>,
{
    type Attribute = R::Attribute;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut R::Attribute) -> bool {
        let ctx = ctx.rule_agnostic().with_rule::<R, D>(&self.rhs, self.force);
        call_rule_definition::<R, D, _>(&self.rhs, self.force, cur, &ctx, attr)
    }

    fn what(&self) -> String {
        R::NAME.to_owned()
    }
}

crate::parser::impl_operators! {
    [R,] Rule<R>;
    [R, D,] RuleDefinition<R, D>;
}

/// Parse the body `rhs` of rule `R`.
///
/// Shared by injected and out-of-line definitions; [`rule!`] expansions
/// call it from downstream crates.
pub fn call_rule_definition<R, D, C>(
    rhs: &D,
    force: bool,
    cur: &mut Cursor<'_>,
    ctx: &C,
    attr: &mut R::Attribute,
) -> bool
where
    R: RuleId,
    D: Parser,
    C: Context,
    R::Attribute: Merge<D::Attribute>,
{
    let var = RefCell::new(R::Attribute::default());
    let rule_ctx = ctx.replace_rule_var(&var);

    let start = cur.position();
    ctx.skip_over(cur);
    let begin = cur.position();
    trace!(
        rule = R::NAME,
        position = begin,
        flags = ?D::flags(),
        remaining_stack = ?remaining_stack(),
        "try"
    );

    let mut value = D::Attribute::default();
    let matched = ensure_sufficient_stack(|| rhs.parse(cur, &rule_ctx, &mut value));
    let values = ctx.values();

    if !matched {
        cur.set_position(start);
        trace!(rule = R::NAME, position = begin, "fail");
        if <C::Failure as FailureChannel>::PRESENT {
            if let Some(failure) = ctx.failure().get() {
                let span = Span::new(begin, failure.position.max(begin));
                let mut cx =
                    ActionContext::new(cur.input(), span, &values, rule_ctx.rule_var().erased());
                R::on_error(&failure, &mut cx);
            }
        }
        return false;
    }

    if force || R::FORCE_ATTRIBUTE || !D::HAS_ACTION {
        var.borrow_mut().merge(value);
    }

    let mut result = var.into_inner();
    let mut cx = ActionContext::new(
        cur.input(),
        Span::new(begin, cur.position()),
        &values,
        None,
    );
    R::on_success(&mut result, &mut cx);
    if !cx.passed() {
        cur.set_position(start);
        trace!(rule = R::NAME, position = begin, "vetoed");
        return false;
    }

    trace!(rule = R::NAME, from = begin, to = cur.position(), "success");
    *attr = result;
    true
}

/// Declare rule identities, optionally with an out-of-line body.
///
/// ```
/// use weft_parse::prelude::*;
///
/// rule! {
///     /// A comma-separated list of integers.
///     pub Numbers: Vec<i32> = "numbers" => int_() % ',';
/// }
///
/// let mut numbers: Vec<i32> = Vec::new();
/// let result = parse("1,2,3", &Numbers::rule(), &mut numbers);
/// assert!(result.is_full_match());
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// | form                         | body                               |
/// |------------------------------|------------------------------------|
/// | `Name: Attr = "label";`      | none; use [`Rule::define`]         |
/// | `Name: Attr = "label" => p;` | `p`                                |
/// | `Name: Attr = "label" %= p;` | `p`, attribute always materialised |
///
/// Any form may end in `, annotate(success)`, `, annotate(error)` or
/// `, annotate(success, error)` to install the hooks of
/// [`crate::annotate`].
#[macro_export]
macro_rules! rule {
    (@id [$($meta:tt)*] $vis:vis $name:ident) => {
        $($meta)*
        #[derive(Copy, Clone, Debug, Default)]
        $vis struct $name;
    };
    (@hook success $attr:ty) => {
        fn on_success(attr: &mut $attr, cx: &mut $crate::action::ActionContext<'_>) {
            $crate::annotate::annotate_success(attr, cx);
        }
    };
    (@hook error $attr:ty) => {
        fn on_error(
            failure: &$crate::annotate::ExpectationFailure,
            cx: &mut $crate::action::ActionContext<'_>,
        ) {
            $crate::annotate::report_failure(failure, cx);
        }
    };
    (@declared $name:ident, $attr:ty, $label:literal, [$($hook:ident)*]) => {
        impl $crate::rule::RuleId for $name {
            type Attribute = $attr;
            const NAME: &'static str = $label;

            $($crate::rule!(@hook $hook $attr);)*
        }
    };
    (@defined $name:ident, $attr:ty, $label:literal, $force:literal, $rhs:expr, [$($hook:ident)*]) => {
        impl $crate::rule::RuleId for $name {
            type Attribute = $attr;
            const NAME: &'static str = $label;

            $($crate::rule!(@hook $hook $attr);)*

            fn parse_rule<C: $crate::Context>(
                cur: &mut $crate::Cursor<'_>,
                ctx: &C,
                attr: &mut $attr,
            ) -> bool {
                $crate::rule::call_rule_definition::<Self, _, C>(&$rhs, $force, cur, ctx, attr)
            }
        }
    };
    () => {};
    ($(#[$meta:meta])* $vis:vis $name:ident : $attr:ty = $label:literal
        $(, annotate($($hook:ident),+))?; $($rest:tt)*) => {
        $crate::rule!(@id [$(#[$meta])*] $vis $name);
        $crate::rule!(@declared $name, $attr, $label, [$($($hook)+)?]);
        $crate::rule!($($rest)*);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident : $attr:ty = $label:literal => $rhs:expr
        $(, annotate($($hook:ident),+))?; $($rest:tt)*) => {
        $crate::rule!(@id [$(#[$meta])*] $vis $name);
        $crate::rule!(@defined $name, $attr, $label, false, $rhs, [$($($hook)+)?]);
        $crate::rule!($($rest)*);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident : $attr:ty = $label:literal %= $rhs:expr
        $(, annotate($($hook:ident),+))?; $($rest:tt)*) => {
        $crate::rule!(@id [$(#[$meta])*] $vis $name);
        $crate::rule!(@defined $name, $attr, $label, true, $rhs, [$($($hook)+)?]);
        $crate::rule!($($rest)*);
    };
}

#[cfg(test)]
mod tests;
