//! Semantic actions.
//!
//! An action runs after its subject matched, with the subject's attribute
//! and an [`ActionContext`]. It may veto the match; the cursor then goes
//! back to where the subject started. Side effects the action already had
//! are not undone.

use std::any::{Any, TypeId};
use std::cell::{RefCell, RefMut};
use std::fmt;

use weft_diagnostic::Span;

use crate::context::{ChainView, Key, RuleVar};
use crate::parser::Parser;
use crate::{Context, Cursor};

/// What an action sees besides the attribute.
pub struct ActionContext<'a> {
    input: &'a str,
    span: Span,
    pass: bool,
    values: &'a dyn ChainView,
    rule_var: Option<&'a dyn Any>,
}

impl<'a> ActionContext<'a> {
    pub(crate) fn new(
        input: &'a str,
        span: Span,
        values: &'a dyn ChainView,
        rule_var: Option<&'a dyn Any>,
    ) -> Self {
        ActionContext {
            input,
            span,
            pass: true,
            values,
            rule_var,
        }
    }

    /// Reject the match.
    pub fn fail(&mut self) {
        self.pass = false;
    }

    pub fn passed(&self) -> bool {
        self.pass
    }

    /// Matched input, from after leading skipped input to the cursor.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The whole input of the parse.
    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn matched(&self) -> &'a str {
        self.span.slice(self.input).unwrap_or_default()
    }

    /// The innermost value bound under tag `K`.
    pub fn get<K: Key>(&self) -> Option<&'a K::Value> {
        self.values.find_any(TypeId::of::<K>())?.downcast_ref()
    }

    /// The attribute of the enclosing rule, if it is a `T` and not already
    /// borrowed.
    pub fn val<T: Any>(&self) -> Option<RefMut<'a, T>> {
        self.rule_var?.downcast_ref::<RefCell<T>>()?.try_borrow_mut().ok()
    }
}

impl fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("span", &self.span)
            .field("pass", &self.pass)
            .field("has_rule_var", &self.rule_var.is_some())
            .finish_non_exhaustive()
    }
}

/// `subject` followed by the action `f`.
#[derive(Copy, Clone)]
pub struct Action<P, F> {
    subject: P,
    f: F,
}

impl<P, F> Action<P, F> {
    pub fn new(subject: P, f: F) -> Self {
        Action { subject, f }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Action<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

impl<P, F> Parser for Action<P, F>
where
    P: Parser,
    F: Fn(&mut P::Attribute, &mut ActionContext<'_>),
{
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = true;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        let begin = cur.position();
        if !self.subject.parse(cur, ctx, attr) {
            cur.set_position(start);
            return false;
        }

        let values = ctx.values();
        let mut action_ctx = ActionContext::new(
            cur.input(),
            Span::new(begin, cur.position()),
            &values,
            ctx.rule_var().erased(),
        );
        (self.f)(attr, &mut action_ctx);
        if action_ctx.passed() {
            return true;
        }
        cur.set_position(start);
        false
    }

    fn what(&self) -> String {
        self.subject.what()
    }
}

crate::parser::impl_operators! { [P, F,] Action<P, F>; }
