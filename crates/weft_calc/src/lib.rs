//! A floating-point calculator over `weft_parse`.
//!
//! ```
//! use weft_calc::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.evaluate("2 * (3 + 4)"), Ok(14.0));
//! ```

mod error;
pub mod grammar;

use std::sync::Once;

use tracing::debug;
use weft_parse::prelude::*;

pub use error::CalcError;
use grammar::{Constants, Expression};

/// Evaluates expressions against a table of named constants.
#[derive(Debug)]
pub struct Calculator {
    constants: Symbols<f64>,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    /// A calculator knowing `pi`, `e` and `tau`.
    pub fn new() -> Self {
        Calculator {
            constants: Symbols::from_pairs([
                ("pi", std::f64::consts::PI),
                ("e", std::f64::consts::E),
                ("tau", std::f64::consts::TAU),
            ]),
        }
    }

    pub fn define(&mut self, name: &str, value: f64) -> &mut Self {
        self.constants.add(name, value);
        self
    }

    pub fn undefine(&mut self, name: &str) -> Option<f64> {
        self.constants.remove(name)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, source: &str) -> Result<f64, CalcError> {
        let grammar = with(Constants, &self.constants, Expression::rule());
        let mut value = 0.0_f64;
        let result = phrase_parse(source, &grammar, &space(), PostSkip::Always, &mut value);

        if let Some(failure) = result.failure {
            return Err(CalcError::Expected(failure));
        }
        if !result.matched {
            return Err(CalcError::Empty);
        }
        if !result.is_full_match() {
            return Err(CalcError::Trailing {
                position: result.position,
            });
        }
        debug!(value, "evaluated");
        Ok(value)
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical trace subscriber when `WEFT_LOG` is set.
///
/// Safe to call more than once. `WEFT_LOG=weft_parse=trace` shows every
/// rule attempt.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if let Ok(filter) = EnvFilter::try_from_env("WEFT_LOG") {
            tracing_subscriber::registry()
                .with(filter)
                .with(HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
