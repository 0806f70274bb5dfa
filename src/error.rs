use thiserror::Error;

/// Parameter validation failures for the SEIR-AHD derivative evaluator.
///
/// All variants are precondition violations detected before any
/// computation; an evaluation never runs partially.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeirAhdError {
    /// Raw parameter sequence length is not exactly 8.
    #[error("expected 8 parameters, got {0}")]
    InvalidParameterCount(usize),

    /// Population size n0 has a nonzero fractional part.
    #[error("population size n0 must be a whole number, got {0}")]
    InvalidPopulationSize(f64),

    /// A rate or fraction is negative.
    #[error("parameter {name} must be >= 0, got {value}")]
    NegativeParameter { name: &'static str, value: f64 },

    /// A fraction (f_e or kappa_h) exceeds 1.
    #[error("parameter {name} must be <= 1, got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },
}
