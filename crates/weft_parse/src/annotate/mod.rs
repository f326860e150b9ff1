//! Source positions for AST nodes, and rule hooks that report to a handler
//! bound in the context.
//!
//! A grammar binds an [`Annotations`] value under the [`ErrorHandler`] tag
//! around the parse. Rules declared with `annotate(success)` in
//! [`rule!`](crate::rule!) record the span of every node they produce;
//! rules declared with `annotate(error)` render a report for every
//! expectation failure they see. Without a bound handler both hooks do
//! nothing.
//!
//! Failures propagate outwards through every enclosing rule, so `error` is
//! usually declared on the root rule only.

use std::cell::RefCell;

use tracing::debug;
use weft_diagnostic::Report;

pub use weft_diagnostic::{ExpectationFailure, Span};

use crate::action::ActionContext;
use crate::context::Key;

/// Index of a node's span in a [`PositionCache`]; empty until annotated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PositionTag(Option<usize>);

impl PositionTag {
    pub fn is_tagged(self) -> bool {
        self.0.is_some()
    }
}

/// An AST node that carries a [`PositionTag`].
pub trait PositionTagged {
    fn position_tag(&self) -> PositionTag;
    fn position_tag_mut(&mut self) -> &mut PositionTag;
}

/// Spans of annotated nodes, in annotation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionCache {
    positions: Vec<Span>,
}

impl PositionCache {
    pub fn new() -> Self {
        PositionCache::default()
    }

    /// Record `span` and point `node` at it.
    pub fn annotate<N: PositionTagged + ?Sized>(&mut self, node: &mut N, span: Span) {
        *node.position_tag_mut() = PositionTag(Some(self.positions.len()));
        self.positions.push(span);
    }

    /// The span recorded for `node`; `None` for nodes never annotated here.
    pub fn position_of<N: PositionTagged + ?Sized>(&self, node: &N) -> Option<Span> {
        self.positions.get(node.position_tag().0?).copied()
    }

    pub fn positions(&self) -> &[Span] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// What annotated rules report to: node positions and rendered failures.
#[derive(Debug, Default)]
pub struct Annotations {
    positions: RefCell<PositionCache>,
    reports: RefCell<Vec<String>>,
}

impl Annotations {
    pub fn new() -> Self {
        Annotations::default()
    }

    pub fn on_success<N: PositionTagged + ?Sized>(&self, node: &mut N, span: Span) {
        self.positions.borrow_mut().annotate(node, span);
    }

    /// Render `failure` against `input` in the classic caret layout.
    pub fn on_error(&self, input: &str, failure: &ExpectationFailure) {
        debug!(
            position = failure.position,
            which = failure.which.as_str(),
            "reporting expectation failure"
        );
        self.reports
            .borrow_mut()
            .push(Report::new(input).render_failure(failure));
    }

    pub fn position_of<N: PositionTagged + ?Sized>(&self, node: &N) -> Option<Span> {
        self.positions.borrow().position_of(node)
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.borrow().clone()
    }

    pub fn into_parts(self) -> (PositionCache, Vec<String>) {
        (self.positions.into_inner(), self.reports.into_inner())
    }
}

/// Context tag for the [`Annotations`] that annotated rules report to.
#[derive(Copy, Clone, Debug, Default)]
pub struct ErrorHandler;

impl Key for ErrorHandler {
    type Value = Annotations;
}

/// `on_success` hook: record the node's span with the bound handler.
pub fn annotate_success<N: PositionTagged>(node: &mut N, cx: &mut ActionContext<'_>) {
    if let Some(handler) = cx.get::<ErrorHandler>() {
        handler.on_success(node, cx.span());
    }
}

/// `on_error` hook: hand the failure to the bound handler.
pub fn report_failure(failure: &ExpectationFailure, cx: &mut ActionContext<'_>) {
    if let Some(handler) = cx.get::<ErrorHandler>() {
        handler.on_error(cx.input(), failure);
    }
}

#[cfg(test)]
mod tests;
