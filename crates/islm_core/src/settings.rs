//! Tunable policy constants.
//!
//! The defaults are presentation policy rather than anything derived from the
//! model, and may be overridden per call.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Absolute tolerance below which `|det|` is treated as singular.
    pub determinant_tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            determinant_tolerance: 1e-6,
        }
    }
}

/// How the output-axis interval is derived from an equilibrium output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangePolicy {
    /// Center used when neither equilibrium is defined.
    pub fallback_center: f64,
    pub lower_factor: f64,
    pub upper_factor: f64,
    /// Smallest allowed upper bound.
    pub minimum_upper: f64,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            fallback_center: 100.0,
            lower_factor: 0.5,
            upper_factor: 1.5,
            minimum_upper: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    pub samples: usize,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            samples: crate::curves::DEFAULT_SAMPLES,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub solver: SolverSettings,
    pub range: RangePolicy,
    pub sampling: SamplingSettings,
}

impl ModelSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let tol = self.solver.determinant_tolerance;
        if !tol.is_finite() || tol <= 0.0 {
            return Err(SettingsError::InvalidTolerance(tol));
        }

        let range = &self.range;
        for (name, value) in [
            ("fallback_center", range.fallback_center),
            ("lower_factor", range.lower_factor),
            ("upper_factor", range.upper_factor),
            ("minimum_upper", range.minimum_upper),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::NonFiniteRange { name, value });
            }
        }
        if range.lower_factor < 0.0 || range.upper_factor < range.lower_factor {
            return Err(SettingsError::InvalidFactors {
                lower: range.lower_factor,
                upper: range.upper_factor,
            });
        }
        if range.minimum_upper < 0.0 {
            return Err(SettingsError::NegativeMinimumUpper(range.minimum_upper));
        }

        if self.sampling.samples < 2 {
            return Err(SettingsError::TooFewSamples(self.sampling.samples));
        }
        Ok(())
    }
}
