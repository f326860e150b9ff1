//! The expectation failure record and the channel that collects it.
//!
//! A channel is threaded through a whole top-level parse by reference.
//! Grammars that never commit use [`NoFailure`], for which every operation
//! is a constant that the optimiser removes.
//!
//! # Recording policy
//!
//! | stored      | incoming position | result                     |
//! |-------------|-------------------|----------------------------|
//! | none        | any               | incoming stored            |
//! | at `p`      | `< p`             | stored kept                |
//! | at `p`      | `>= p`            | incoming replaces stored   |
//!
//! Ties go to the newer record, which comes from a later stage of the same
//! commit chain and is the more specific of the two.

use std::cell::RefCell;
use std::fmt;

use tracing::trace;

use crate::Span;

/// What was expected, and where.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpectationFailure {
    /// Byte offset into the input.
    pub position: usize,
    /// Description of the parser that failed to match.
    pub which: String,
}

impl ExpectationFailure {
    pub fn new(position: usize, which: impl Into<String>) -> Self {
        ExpectationFailure {
            position,
            which: which.into(),
        }
    }

    pub fn span(&self) -> Span {
        Span::point(self.position)
    }
}

impl fmt::Display for ExpectationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expecting {} at offset {}", self.which, self.position)
    }
}

/// Access to a (possibly absent) failure channel.
pub trait FailureChannel: Copy {
    /// `false` for [`NoFailure`]; lets callers skip work at compile time.
    const PRESENT: bool;

    /// Offer a failure; `which` is only evaluated if it could be stored.
    fn record(self, position: usize, which: impl FnOnce() -> String);

    /// Whether a failure has been recorded.
    fn is_pending(self) -> bool;

    /// Copy of the stored failure.
    fn get(self) -> Option<ExpectationFailure>;
}

/// The absent channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoFailure;

impl FailureChannel for NoFailure {
    const PRESENT: bool = false;

    #[inline]
    fn record(self, _position: usize, _which: impl FnOnce() -> String) {}

    #[inline]
    fn is_pending(self) -> bool {
        false
    }

    #[inline]
    fn get(self) -> Option<ExpectationFailure> {
        None
    }
}

/// Storage for the furthest expectation failure of one parse.
#[derive(Debug, Default)]
pub struct FailureCell {
    slot: RefCell<Option<ExpectationFailure>>,
}

impl FailureCell {
    pub fn new() -> Self {
        FailureCell::default()
    }

    /// Drop the stored failure, e.g. after an error hook has handled it.
    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn take(&self) -> Option<ExpectationFailure> {
        self.slot.borrow_mut().take()
    }

    pub fn into_inner(self) -> Option<ExpectationFailure> {
        self.slot.into_inner()
    }
}

impl FailureChannel for &FailureCell {
    const PRESENT: bool = true;

    fn record(self, position: usize, which: impl FnOnce() -> String) {
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|stored| position < stored.position) {
            trace!(position, "expectation failure shadowed by a deeper one");
            return;
        }
        let which = which();
        trace!(position, %which, "expectation failure recorded");
        *slot = Some(ExpectationFailure { position, which });
    }

    fn is_pending(self) -> bool {
        self.slot.borrow().is_some()
    }

    fn get(self) -> Option<ExpectationFailure> {
        self.slot.borrow().clone()
    }
}
