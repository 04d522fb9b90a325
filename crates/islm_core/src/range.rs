//! Plotting domain for the output axis.

use crate::equilibrium::EquilibriumResult;
use crate::settings::RangePolicy;
use serde::{Deserialize, Serialize};

/// Closed output-level interval `[y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRange {
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotRange {
    pub fn width(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, y: f64) -> bool {
        self.y_min <= y && y <= self.y_max
    }
}

/// Derives the output interval from the baseline and shocked equilibria using
/// the default [`RangePolicy`].
pub fn select_range(first: &EquilibriumResult, second: &EquilibriumResult) -> PlotRange {
    select_range_with(first, second, &RangePolicy::default())
}

/// The center is the first defined, finite equilibrium output (`first` before
/// `second`), else `policy.fallback_center`. The lower bound never goes below
/// zero and the upper bound never below `policy.minimum_upper`.
pub fn select_range_with(
    first: &EquilibriumResult,
    second: &EquilibriumResult,
    policy: &RangePolicy,
) -> PlotRange {
    let center = [first.output(), second.output()]
        .into_iter()
        .flatten()
        .find(|y| y.is_finite())
        .unwrap_or(policy.fallback_center);

    let y_min = (center * policy.lower_factor).max(0.0);
    let y_max = (center * policy.upper_factor).max(policy.minimum_upper).max(y_min);
    PlotRange { y_min, y_max }
}
