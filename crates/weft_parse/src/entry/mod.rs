//! Top-level entry points.
//!
//! Every entry point parses into a fresh value and merges it into the
//! caller's attribute only on success; a failed parse leaves the attribute
//! as it was. Success means the parser matched at the start of the input,
//! not that it consumed all of it; see [`ParseResult::is_full_match`].

mod error;
mod result;

pub use error::ParseError;
pub use result::{ParseOptions, ParseResult, PostSkip};

use tracing::debug;
use weft_attr::Merge;
use weft_diagnostic::FailureCell;

use crate::context::{Ctx, NoSkipper, Skipper};
use crate::{Context, Cursor, Parser};

/// Parse `input` without a skipper.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse<P, A>(input: &str, parser: &P, attr: &mut A) -> ParseResult
where
    P: Parser,
    A: Merge<P::Attribute>,
{
    run(input, parser, NoSkipper, ParseOptions::default(), attr)
}

/// Parse `input`, running `skipper` before every terminal.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len(), post_skip = ?post_skip))]
pub fn phrase_parse<P, S, A>(
    input: &str,
    parser: &P,
    skipper: &S,
    post_skip: PostSkip,
    attr: &mut A,
) -> ParseResult
where
    P: Parser,
    S: Parser,
    A: Merge<P::Attribute>,
{
    let options = ParseOptions {
        post_skip,
        ..ParseOptions::default()
    };
    run(input, parser, skipper, options, attr)
}

/// Parse with an arbitrary skipper and explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len(), options = ?options))]
pub fn parse_with_options<P, S, A>(
    input: &str,
    parser: &P,
    skipper: S,
    options: ParseOptions,
    attr: &mut A,
) -> ParseResult
where
    P: Parser,
    S: Skipper,
    A: Merge<P::Attribute>,
{
    run(input, parser, skipper, options, attr)
}

/// Parse all of `input` into a fresh `A`.
pub fn parse_all<P, A>(input: &str, parser: &P) -> Result<A, ParseError>
where
    P: Parser,
    A: Default + Merge<P::Attribute>,
{
    let mut attr = A::default();
    parse(input, parser, &mut attr).into_result(input)?;
    Ok(attr)
}

/// Parse all of `input` into a fresh `A`, skipping with `skipper`.
pub fn phrase_parse_all<P, S, A>(input: &str, parser: &P, skipper: &S) -> Result<A, ParseError>
where
    P: Parser,
    S: Parser,
    A: Default + Merge<P::Attribute>,
{
    let mut attr = A::default();
    phrase_parse(input, parser, skipper, PostSkip::Always, &mut attr).into_result(input)?;
    Ok(attr)
}

fn run<P, S, A>(
    input: &str,
    parser: &P,
    skipper: S,
    options: ParseOptions,
    attr: &mut A,
) -> ParseResult
where
    P: Parser,
    S: Skipper,
    A: Merge<P::Attribute>,
{
    let mut cur = Cursor::new(input);
    let ctx = Ctx::new().with_skipper(skipper);
    let cell = FailureCell::new();
    let mut value = P::Attribute::default();

    let matched = if options.track_failures {
        parser.parse(&mut cur, &ctx.with_failure(&cell), &mut value)
    } else {
        parser.parse(&mut cur, &ctx, &mut value)
    };

    if matched {
        if options.post_skip == PostSkip::Always {
            ctx.skip_over(&mut cur);
        }
        attr.merge(value);
    }

    let result = ParseResult {
        matched,
        position: cur.position(),
        end: input.len(),
        failure: cell.into_inner(),
    };
    debug!(
        matched,
        position = result.position,
        full = result.is_full_match(),
        failure = ?result.failure,
        "parse finished"
    );
    result
}

#[cfg(test)]
mod tests;
