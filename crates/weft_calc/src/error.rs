use thiserror::Error;
use weft_diagnostic::{Diagnostic, ExpectationFailure, Span};

/// Why an input did not evaluate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("expected an expression")]
    Empty,

    #[error("unexpected input at offset {position}")]
    Trailing { position: usize },

    #[error("{0}")]
    Expected(ExpectationFailure),
}

impl CalcError {
    pub fn position(&self) -> usize {
        match self {
            CalcError::Empty => 0,
            CalcError::Trailing { position } => *position,
            CalcError::Expected(failure) => failure.position,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CalcError::Empty => Diagnostic::error()
                .with_message("expected an expression")
                .with_label(Span::point(0), "nothing to evaluate"),
            CalcError::Trailing { position } => Diagnostic::error()
                .with_message("unexpected input after expression")
                .with_label(Span::point(*position), "expression ends here")
                .with_note("operators are `+`, `-`, `*` and `/`"),
            CalcError::Expected(failure) => Diagnostic::from_failure(failure),
        }
    }

    /// Message for the plain caret report.
    pub fn report_message(&self) -> String {
        match self {
            CalcError::Expected(failure) => format!("Error! Expecting: {} here:", failure.which),
            CalcError::Empty => "Error! Expecting: expression here:".to_owned(),
            CalcError::Trailing { .. } => "Error! Unexpected input here:".to_owned(),
        }
    }
}
