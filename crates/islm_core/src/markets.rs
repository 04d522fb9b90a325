//! The goods-market (IS) and money-market (LM) relations.

use crate::params::ModelParameters;
use crate::traits::LinearRelation;
use serde::{Deserialize, Serialize};

/// Goods-market clearing: `(1 - c) Y + b i = A`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsCurve {
    /// `1 - c`, the share of income not spent on consumption.
    pub leakage: f64,
    /// `b`, interest sensitivity of investment.
    pub rate_sensitivity: f64,
    /// `A`, autonomous aggregate demand.
    pub autonomous_demand: f64,
}

impl IsCurve {
    pub fn from_params(params: &ModelParameters) -> Self {
        Self {
            leakage: 1.0 - params.marginal_propensity_to_consume,
            rate_sensitivity: params.investment_rate_sensitivity,
            autonomous_demand: params.autonomous_demand(),
        }
    }
}

impl LinearRelation for IsCurve {
    fn output_coefficient(&self) -> f64 {
        self.leakage
    }

    fn rate_coefficient(&self) -> f64 {
        self.rate_sensitivity
    }

    fn rhs(&self) -> f64 {
        self.autonomous_demand
    }

    fn rate_at(&self, y: f64) -> Option<f64> {
        if self.rate_sensitivity != 0.0 {
            Some((self.autonomous_demand - self.leakage * y) / self.rate_sensitivity)
        } else {
            None
        }
    }
}

/// Money-market clearing: `k Y - h i = B`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmCurve {
    /// `k`, income sensitivity of money demand.
    pub income_sensitivity: f64,
    /// `h`, interest sensitivity of money demand.
    pub rate_sensitivity: f64,
    /// `B = M/P - L0`.
    pub real_money_gap: f64,
}

impl LmCurve {
    pub fn from_params(params: &ModelParameters) -> Self {
        Self {
            income_sensitivity: params.money_demand_income_sensitivity,
            rate_sensitivity: params.money_demand_rate_sensitivity,
            real_money_gap: params.real_money_gap(),
        }
    }
}

impl LinearRelation for LmCurve {
    fn output_coefficient(&self) -> f64 {
        self.income_sensitivity
    }

    fn rate_coefficient(&self) -> f64 {
        -self.rate_sensitivity
    }

    fn rhs(&self) -> f64 {
        self.real_money_gap
    }

    fn rate_at(&self, y: f64) -> Option<f64> {
        if self.rate_sensitivity != 0.0 {
            Some((self.income_sensitivity * y - self.real_money_gap) / self.rate_sensitivity)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn is_curve_slopes_down() {
        let is = ModelParameters::default().is_curve();
        let low = is.rate_at(100.0).expect("IS defined");
        let high = is.rate_at(500.0).expect("IS defined");
        assert!(high < low, "IS should slope down: {low} -> {high}");
    }

    #[test]
    fn lm_curve_slopes_up() {
        let lm = ModelParameters::default().lm_curve();
        let low = lm.rate_at(100.0).expect("LM defined");
        let high = lm.rate_at(500.0).expect("LM defined");
        assert!(high > low, "LM should slope up: {low} -> {high}");
    }

    #[test]
    fn sampled_points_lie_on_their_relation() {
        let params = ModelParameters::default();
        let is = params.is_curve();
        let lm = params.lm_curve();
        for y in [0.0, 137.5, 400.0, 812.25] {
            let i_is = is.rate_at(y).expect("IS defined");
            let i_lm = lm.rate_at(y).expect("LM defined");
            assert_relative_eq!(is.residual(y, i_is), 0.0, epsilon = 1e-9);
            assert_relative_eq!(lm.residual(y, i_lm), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_sensitivities_make_curves_vertical() {
        let params = ModelParameters {
            investment_rate_sensitivity: 0.0,
            money_demand_rate_sensitivity: 0.0,
            ..ModelParameters::default()
        };
        assert_eq!(params.is_curve().rate_at(10.0), None);
        assert_eq!(params.lm_curve().rate_at(10.0), None);
    }

    #[test]
    fn computed_zero_rate_is_not_undefined() {
        // A = 145, leakage = 0.5: the IS rate crosses zero at Y = 290.
        let params = ModelParameters {
            marginal_propensity_to_consume: 0.5,
            ..ModelParameters::default()
        };
        assert_eq!(params.is_curve().rate_at(290.0), Some(0.0));
    }
}
