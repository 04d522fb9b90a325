use crate::markets::{IsCurve, LmCurve};
use crate::params::ModelParameters;
use crate::range::PlotRange;
use crate::traits::LinearRelation;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_SAMPLES: usize = 200;

/// IS and LM interest rates sampled over a shared output grid.
///
/// `None` marks a sample where the curve is vertical (its rate coefficient is
/// zero), so no interest rate can be read off as a function of output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub output: Vec<f64>,
    pub is_rate: Vec<Option<f64>>,
    pub lm_rate: Vec<Option<f64>>,
}

impl CurveSample {
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Defined `(Y, i)` points on the IS curve.
    pub fn points_is(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        defined_points(&self.output, &self.is_rate)
    }

    /// Defined `(Y, i)` points on the LM curve.
    pub fn points_lm(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        defined_points(&self.output, &self.lm_rate)
    }
}

fn defined_points<'a>(
    output: &'a [f64],
    rates: &'a [Option<f64>],
) -> impl Iterator<Item = (f64, f64)> + 'a {
    output
        .iter()
        .zip(rates)
        .filter_map(|(&y, rate)| rate.map(|i| (y, i)))
}

/// `n` evenly spaced values from `start` to `stop`, both endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Samples both curves at `n` points over `[y_min, y_max]`.
pub fn sample(params: &ModelParameters, y_min: f64, y_max: f64, n: usize) -> CurveSample {
    let output = linspace(y_min, y_max, n);
    let is_rate = sample_relation(&IsCurve::from_params(params), &output);
    let lm_rate = sample_relation(&LmCurve::from_params(params), &output);
    debug!(
        samples = n,
        y_min,
        y_max,
        is_vertical = params.investment_rate_sensitivity == 0.0,
        lm_vertical = params.money_demand_rate_sensitivity == 0.0,
        "sampled IS-LM curves"
    );

    CurveSample {
        output,
        is_rate,
        lm_rate,
    }
}

pub fn sample_range(params: &ModelParameters, range: &PlotRange, n: usize) -> CurveSample {
    sample(params, range.y_min, range.y_max, n)
}

fn sample_relation(relation: &impl LinearRelation, output: &[f64]) -> Vec<Option<f64>> {
    output.iter().map(|&y| relation.rate_at(y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn default_sample_spans_range_with_exact_endpoints() {
        let params = ModelParameters::default();
        let curves = sample(&params, 200.0, 600.0, DEFAULT_SAMPLES);
        assert_eq!(curves.len(), 200);
        assert_eq!(curves.is_rate.len(), 200);
        assert_eq!(curves.lm_rate.len(), 200);
        assert_eq!(curves.output[0], 200.0);
        assert_eq!(curves.output[199], 600.0);
    }

    #[test]
    fn curves_match_closed_form_rates() {
        let params = ModelParameters::default();
        let curves = sample(&params, 0.0, 800.0, 5);
        assert_eq!(curves.output, vec![0.0, 200.0, 400.0, 600.0, 800.0]);

        // IS: i = (130 - 0.2 Y) / 10,  LM: i = (0.5 Y - 150) / 10
        let expected_is = [13.0, 9.0, 5.0, 1.0, -3.0];
        let expected_lm = [-15.0, -5.0, 5.0, 15.0, 25.0];
        for idx in 0..5 {
            let is = curves.is_rate[idx].expect("IS defined");
            let lm = curves.lm_rate[idx].expect("LM defined");
            assert_relative_eq!(is, expected_is[idx], epsilon = 1e-9);
            assert_relative_eq!(lm, expected_lm[idx], epsilon = 1e-9);
        }
    }

    #[test]
    fn curves_cross_at_equilibrium_output() {
        let params = ModelParameters::default();
        let curves = sample(&params, 400.0, 400.0, 3);
        for (is, lm) in curves.is_rate.iter().zip(&curves.lm_rate) {
            assert_relative_eq!(is.expect("IS"), lm.expect("LM"), epsilon = 1e-9);
        }
    }

    #[test]
    fn vertical_is_does_not_affect_lm() {
        let params = ModelParameters {
            investment_rate_sensitivity: 0.0,
            ..ModelParameters::default()
        };
        let curves = sample(&params, 0.0, 100.0, 11);
        assert!(curves.is_rate.iter().all(Option::is_none));
        assert!(curves.lm_rate.iter().all(Option::is_some));
        assert_eq!(curves.points_is().count(), 0);
        assert_eq!(curves.points_lm().count(), 11);
    }

    #[test]
    fn vertical_lm_does_not_affect_is() {
        let params = ModelParameters {
            money_demand_rate_sensitivity: 0.0,
            ..ModelParameters::default()
        };
        let curves = sample(&params, 0.0, 100.0, 11);
        assert!(curves.lm_rate.iter().all(Option::is_none));
        assert!(curves.is_rate.iter().all(Option::is_some));
    }

    #[test]
    fn degenerate_sample_counts() {
        let params = ModelParameters::default();
        assert!(sample(&params, 1.0, 2.0, 0).is_empty());

        let single = sample(&params, 1.0, 2.0, 1);
        assert_eq!(single.output, vec![1.0]);
        assert_eq!(single.is_rate.len(), 1);
        assert_eq!(single.lm_rate.len(), 1);
    }

    #[test]
    fn sample_range_uses_plot_bounds() {
        let params = ModelParameters::default();
        let range = PlotRange {
            y_min: 50.0,
            y_max: 150.0,
        };
        let curves = sample_range(&params, &range, 3);
        assert_eq!(curves.output, vec![50.0, 100.0, 150.0]);
    }

    proptest! {
        #[test]
        fn grid_is_monotone_with_exact_endpoints(
            y_min in 0.0..1e4f64,
            width in 0.0..1e4f64,
            n in 2usize..500,
        ) {
            let y_max = y_min + width;
            let curves = sample(&ModelParameters::default(), y_min, y_max, n);
            prop_assert_eq!(curves.output.len(), n);
            prop_assert_eq!(curves.is_rate.len(), n);
            prop_assert_eq!(curves.lm_rate.len(), n);
            prop_assert_eq!(curves.output[0], y_min);
            prop_assert_eq!(curves.output[n - 1], y_max);
            prop_assert!(curves.output.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
