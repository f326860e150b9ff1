//! Combinators built by the grammar operators.
//!
//! Every composite here follows the same discipline: children parse into
//! fresh temporaries, and the composite writes its own slot only after it
//! has matched as a whole. A failed branch therefore never leaks into the
//! attribute of the caller. Semantic actions that already ran are the one
//! exception; their side effects stay.
//!
//! A pending expectation failure is sticky: alternatives stop trying
//! further branches, and repetitions and optionals report failure instead
//! of settling for a shorter match.

mod alternative;
mod difference;
mod expect;
mod list;
mod optional;
mod predicate;
mod repeat;
mod sequence;

pub use alternative::Alt;
pub use difference::Difference;
pub use expect::{expect, Expect};
pub use list::{list, List};
pub use optional::{opt, Optional};
pub use predicate::{and_pred, not_pred, AndPred, NotPred};
pub use repeat::{kleene, plus, Kleene, Plus};
pub(crate) use repeat::repeat_into;
pub use sequence::Seq;

use weft_diagnostic::FailureChannel;

use crate::Context;

/// Whether an expectation failure has been recorded in this parse.
#[inline]
pub(crate) fn failure_pending<C: Context>(ctx: &C) -> bool {
    <C::Failure as FailureChannel>::PRESENT && ctx.failure().is_pending()
}
