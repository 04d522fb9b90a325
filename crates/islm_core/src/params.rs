//! Model parameters and policy shocks.

use crate::error::ParameterError;
use crate::markets::{IsCurve, LmCurve};
use serde::{Deserialize, Serialize};

/// Parameters of the static IS-LM model.
///
/// Goods market:
/// ```text
/// C = C0 + c (Y - T),   I = I0 - b i,   Y = C + I + G + X - M
/// ```
/// Money market:
/// ```text
/// L = L0 + k Y - h i,   L = M_supply / P
/// ```
///
/// The price level must be nonzero. The solver and sampler do not check this;
/// callers that accept untrusted input should run [`ModelParameters::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub autonomous_consumption: f64,
    pub marginal_propensity_to_consume: f64,
    pub autonomous_investment: f64,
    pub investment_rate_sensitivity: f64,
    pub government_spending: f64,
    pub taxes: f64,
    pub exports: f64,
    pub imports: f64,
    pub autonomous_money_demand: f64,
    pub money_demand_income_sensitivity: f64,
    pub money_demand_rate_sensitivity: f64,
    pub money_supply: f64,
    pub price_level: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            autonomous_consumption: 20.0,
            marginal_propensity_to_consume: 0.8,
            autonomous_investment: 50.0,
            investment_rate_sensitivity: 10.0,
            government_spending: 100.0,
            taxes: 50.0,
            exports: 0.0,
            imports: 0.0,
            autonomous_money_demand: 0.0,
            money_demand_income_sensitivity: 0.5,
            money_demand_rate_sensitivity: 10.0,
            money_supply: 150.0,
            price_level: 1.0,
        }
    }
}

impl ModelParameters {
    /// Autonomous aggregate demand `A = C0 - c*T + I0 + G + X - M_imp`.
    pub fn autonomous_demand(&self) -> f64 {
        self.autonomous_consumption - self.marginal_propensity_to_consume * self.taxes
            + self.autonomous_investment
            + self.government_spending
            + self.exports
            - self.imports
    }

    /// Real money supply net of autonomous demand, `B = M_supply / P - L0`.
    pub fn real_money_gap(&self) -> f64 {
        (self.money_supply / self.price_level) - self.autonomous_money_demand
    }

    pub fn is_curve(&self) -> IsCurve {
        IsCurve::from_params(self)
    }

    pub fn lm_curve(&self) -> LmCurve {
        LmCurve::from_params(self)
    }

    /// Checks the preconditions the core leaves to the caller.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in self.named_fields() {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        if self.price_level <= 0.0 {
            return Err(ParameterError::NonPositivePriceLevel(self.price_level));
        }
        let c = self.marginal_propensity_to_consume;
        if !(0.0..=1.0).contains(&c) {
            return Err(ParameterError::PropensityOutOfRange(c));
        }
        Ok(())
    }

    fn named_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("autonomous_consumption", self.autonomous_consumption),
            (
                "marginal_propensity_to_consume",
                self.marginal_propensity_to_consume,
            ),
            ("autonomous_investment", self.autonomous_investment),
            ("investment_rate_sensitivity", self.investment_rate_sensitivity),
            ("government_spending", self.government_spending),
            ("taxes", self.taxes),
            ("exports", self.exports),
            ("imports", self.imports),
            ("autonomous_money_demand", self.autonomous_money_demand),
            (
                "money_demand_income_sensitivity",
                self.money_demand_income_sensitivity,
            ),
            (
                "money_demand_rate_sensitivity",
                self.money_demand_rate_sensitivity,
            ),
            ("money_supply", self.money_supply),
            ("price_level", self.price_level),
        ]
    }
}

/// Fiscal and monetary overrides applied on top of a baseline parameter set.
/// A `None` field keeps the baseline value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyShock {
    pub government_spending: Option<f64>,
    pub taxes: Option<f64>,
    pub money_supply: Option<f64>,
}

impl PolicyShock {
    pub fn is_empty(&self) -> bool {
        self.government_spending.is_none() && self.taxes.is_none() && self.money_supply.is_none()
    }

    /// Returns a copy of `baseline` with the shocked fields replaced.
    pub fn apply(&self, baseline: &ModelParameters) -> ModelParameters {
        ModelParameters {
            government_spending: self
                .government_spending
                .unwrap_or(baseline.government_spending),
            taxes: self.taxes.unwrap_or(baseline.taxes),
            money_supply: self.money_supply.unwrap_or(baseline.money_supply),
            ..*baseline
        }
    }
}
