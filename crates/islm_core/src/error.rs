use thiserror::Error;

/// Reasons a parameter set is rejected by [`crate::ModelParameters::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("price level must be positive, got {0}")]
    NonPositivePriceLevel(f64),
    #[error("marginal propensity to consume must lie in [0, 1], got {0}")]
    PropensityOutOfRange(f64),
}

/// Reasons a settings bundle is rejected by [`crate::ModelSettings::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("determinant tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    #[error("range setting `{name}` must be finite, got {value}")]
    NonFiniteRange { name: &'static str, value: f64 },
    #[error("range factors must satisfy 0 <= lower <= upper, got lower={lower}, upper={upper}")]
    InvalidFactors { lower: f64, upper: f64 },
    #[error("minimum upper bound must be non-negative, got {0}")]
    NegativeMinimumUpper(f64),
    #[error("sampling needs at least 2 points, got {0}")]
    TooFewSamples(usize),
}
