use crate::params::ModelParameters;
use crate::settings::SolverSettings;
use crate::traits::LinearRelation;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub output: f64,
    pub interest_rate: f64,
}

impl Equilibrium {
    /// Euclidean norm of the residual of both market-clearing relations at this point.
    pub fn residual_norm(&self, params: &ModelParameters) -> f64 {
        LinearSystem::from_params(params).residual(self).norm()
    }
}

/// Outcome of a solve. A singular system is an expected outcome, not an error:
/// callers must check for it before formatting or plotting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquilibriumResult {
    Unique(Equilibrium),
    NoUniqueEquilibrium,
}

impl EquilibriumResult {
    pub fn equilibrium(&self) -> Option<Equilibrium> {
        match self {
            EquilibriumResult::Unique(eq) => Some(*eq),
            EquilibriumResult::NoUniqueEquilibrium => None,
        }
    }

    pub fn output(&self) -> Option<f64> {
        self.equilibrium().map(|eq| eq.output)
    }

    pub fn interest_rate(&self) -> Option<f64> {
        self.equilibrium().map(|eq| eq.interest_rate)
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, EquilibriumResult::Unique(_))
    }
}

/// The IS and LM relations stacked as `M [Y, i]^T = rhs`.
///
/// ```text
/// | 1 - c    b |   | Y |   | A |
/// |   k     -h | * | i | = | B |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSystem {
    pub matrix: Matrix2<f64>,
    pub rhs: Vector2<f64>,
}

impl LinearSystem {
    pub fn from_params(params: &ModelParameters) -> Self {
        Self::from_relations(&params.is_curve(), &params.lm_curve())
    }

    pub fn from_relations(first: &impl LinearRelation, second: &impl LinearRelation) -> Self {
        Self {
            matrix: Matrix2::new(
                first.output_coefficient(),
                first.rate_coefficient(),
                second.output_coefficient(),
                second.rate_coefficient(),
            ),
            rhs: Vector2::new(first.rhs(), second.rhs()),
        }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.matrix;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
    }

    /// `M x - rhs` at the given point.
    pub fn residual(&self, point: &Equilibrium) -> Vector2<f64> {
        self.matrix * Vector2::new(point.output, point.interest_rate) - self.rhs
    }

    /// Cramer's rule. Returns `NoUniqueEquilibrium` when `|det| < tolerance`
    /// (or the determinant is NaN).
    pub fn solve(&self, tolerance: f64) -> EquilibriumResult {
        let det = self.determinant();
        if det.is_nan() || det.abs() < tolerance {
            warn!(
                determinant = det,
                tolerance, "IS and LM relations are parallel or coincident"
            );
            return EquilibriumResult::NoUniqueEquilibrium;
        }

        let m = &self.matrix;
        let (a, b) = (self.rhs[0], self.rhs[1]);
        let output = (a * m[(1, 1)] - m[(0, 1)] * b) / det;
        let interest_rate = (m[(0, 0)] * b - a * m[(1, 0)]) / det;
        debug!(determinant = det, output, interest_rate, "solved IS-LM system");

        EquilibriumResult::Unique(Equilibrium {
            output,
            interest_rate,
        })
    }
}

/// Solves for `(Y*, i*)` with the default determinant tolerance of `1e-6`.
pub fn solve(params: &ModelParameters) -> EquilibriumResult {
    solve_with(params, &SolverSettings::default())
}

pub fn solve_with(params: &ModelParameters, settings: &SolverSettings) -> EquilibriumResult {
    LinearSystem::from_params(params).solve(settings.determinant_tolerance)
}
