//! Baseline vs. policy-shock comparison.
//!
//! Runs the full pipeline a presentation layer needs for one render: solve both
//! parameter sets, pick one output interval covering both, sample both curve
//! pairs over it, and report how the equilibrium moved.

use crate::curves::{sample_range, CurveSample};
use crate::equilibrium::{solve_with, EquilibriumResult};
use crate::params::{ModelParameters, PolicyShock};
use crate::range::{select_range_with, PlotRange};
use crate::settings::ModelSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const NO_UNIQUE_EQUILIBRIUM_ADVISORY: &str =
    "The selected parameters may not produce a unique equilibrium. Check the settings.";

/// Change in the equilibrium caused by the shock (`shocked - baseline`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumShift {
    pub output: f64,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyScenario {
    pub baseline: ModelParameters,
    pub shocked: ModelParameters,
    pub baseline_equilibrium: EquilibriumResult,
    pub shocked_equilibrium: EquilibriumResult,
    pub range: PlotRange,
    pub baseline_curves: CurveSample,
    pub shocked_curves: CurveSample,
}

impl PolicyScenario {
    pub fn analyze(
        baseline: &ModelParameters,
        shock: &PolicyShock,
        settings: &ModelSettings,
    ) -> Result<Self> {
        settings.validate().context("Invalid model settings.")?;
        baseline
            .validate()
            .context("Invalid baseline parameters.")?;
        let shocked = shock.apply(baseline);
        shocked.validate().context("Invalid shocked parameters.")?;

        let baseline_equilibrium = solve_with(baseline, &settings.solver);
        let shocked_equilibrium = solve_with(&shocked, &settings.solver);
        let range = select_range_with(&baseline_equilibrium, &shocked_equilibrium, &settings.range);
        debug!(
            y_min = range.y_min,
            y_max = range.y_max,
            "selected output range"
        );

        let samples = settings.sampling.samples;
        let scenario = Self {
            baseline: *baseline,
            shocked,
            baseline_equilibrium,
            shocked_equilibrium,
            range,
            baseline_curves: sample_range(baseline, &range, samples),
            shocked_curves: sample_range(&shocked, &range, samples),
        };
        info!(summary = %scenario.summary(), "analyzed policy shock");
        Ok(scenario)
    }

    /// `None` unless both equilibria are unique.
    pub fn shift(&self) -> Option<EquilibriumShift> {
        let before = self.baseline_equilibrium.equilibrium()?;
        let after = self.shocked_equilibrium.equilibrium()?;
        Some(EquilibriumShift {
            output: after.output - before.output,
            interest_rate: after.interest_rate - before.interest_rate,
        })
    }

    pub fn summary(&self) -> String {
        match (
            self.baseline_equilibrium.equilibrium(),
            self.shocked_equilibrium.equilibrium(),
        ) {
            (Some(before), Some(after)) => format!(
                "Initial equilibrium: Y* = {:.1}, i* = {:.2} | New equilibrium: Y** = {:.1}, i** = {:.2}",
                before.output, before.interest_rate, after.output, after.interest_rate
            ),
            _ => NO_UNIQUE_EQUILIBRIUM_ADVISORY.to_string(),
        }
    }
}

/// Marker label for a single equilibrium: output to one decimal, rate to two.
pub fn format_equilibrium(result: &EquilibriumResult) -> String {
    match result.equilibrium() {
        Some(eq) => format!("Y*={:.1}, i*={:.2}", eq.output, eq.interest_rate),
        None => "no unique equilibrium".to_string(),
    }
}
