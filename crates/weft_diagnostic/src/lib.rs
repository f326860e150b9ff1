//! Diagnostics for weft parsers.
//!
//! Ordinary parse failures are plain `false` returns and need nothing from
//! this crate. An *expectation* failure (a commit point that did not match)
//! additionally deposits an [`ExpectationFailure`] into a shared
//! [`FailureCell`]; this crate owns that record, the channel abstraction
//! ([`FailureChannel`]) and the ways of showing it to a human:
//!
//! - [`Report`]: the classic `In line N:` / source line / `____^_` layout.
//! - [`Diagnostic`] + [`emitter::TerminalEmitter`]: labelled, optionally
//!   colored output.

mod diagnostic;
pub mod emitter;
mod failure;
mod report;
mod span;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use failure::{ExpectationFailure, FailureCell, FailureChannel, NoFailure};
pub use report::Report;
pub use span::Span;
