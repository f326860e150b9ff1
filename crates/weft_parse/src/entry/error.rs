use thiserror::Error;

/// Why a parse that had to consume all of its input did not.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input does not match")]
    NoMatch,

    #[error("unexpected input at line {line}, column {column}")]
    Incomplete {
        position: usize,
        line: usize,
        column: usize,
    },

    #[error("expecting {which} at line {line}, column {column}")]
    Expectation {
        position: usize,
        line: usize,
        column: usize,
        which: String,
    },
}

impl ParseError {
    /// Byte offset the error points at; `None` for [`ParseError::NoMatch`].
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::NoMatch => None,
            ParseError::Incomplete { position, .. } | ParseError::Expectation { position, .. } => {
                Some(*position)
            }
        }
    }
}
