use weft_diagnostic::span_utils::offset_to_line_col;
use weft_diagnostic::ExpectationFailure;

use super::ParseError;

/// Whether the skipper runs once more after a successful parse.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PostSkip {
    /// Trailing skippable input counts as consumed.
    #[default]
    Always,
    /// Trailing skippable input stays in the remainder.
    Never,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub post_skip: PostSkip,
    /// Thread a failure cell through the parse so commit points can record
    /// what they expected.
    pub track_failures: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            post_skip: PostSkip::Always,
            track_failures: true,
        }
    }
}

/// Outcome of a top-level parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    /// The parser matched at the start of the input.
    pub matched: bool,
    /// Cursor after the parse; 0 when nothing matched.
    pub position: usize,
    /// Length of the input.
    pub end: usize,
    /// The furthest expectation failure, if a commit point missed.
    pub failure: Option<ExpectationFailure>,
}

impl ParseResult {
    /// Matched and consumed the whole input.
    pub fn is_full_match(&self) -> bool {
        self.matched && self.position == self.end
    }

    /// Matched, leaving input behind.
    pub fn is_partial_match(&self) -> bool {
        self.matched && self.position < self.end
    }

    /// Unconsumed input.
    pub fn remainder<'i>(&self, input: &'i str) -> &'i str {
        input.get(self.position..).unwrap_or_default()
    }

    /// `Ok` for a full match, otherwise the reason it is not one.
    pub fn into_result(self, input: &str) -> Result<(), ParseError> {
        if self.is_full_match() {
            return Ok(());
        }
        if let Some(failure) = self.failure {
            let (line, column) = offset_to_line_col(input, failure.position);
            return Err(ParseError::Expectation {
                position: failure.position,
                line,
                column,
                which: failure.which,
            });
        }
        if self.matched {
            let (line, column) = offset_to_line_col(input, self.position);
            return Err(ParseError::Incomplete {
                position: self.position,
                line,
                column,
            });
        }
        Err(ParseError::NoMatch)
    }
}
