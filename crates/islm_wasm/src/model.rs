//! Model wrapper and free-standing helpers exposed to JS.

use crate::shared::{error_message, from_js_or_default, to_js};
use islm_core::curves::sample;
use islm_core::equilibrium::{solve_with, EquilibriumResult};
use islm_core::params::{ModelParameters, PolicyShock};
use islm_core::range::select_range_with;
use islm_core::scenario::{format_equilibrium, PolicyScenario};
use islm_core::settings::ModelSettings;
use serde::Serialize;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct EquilibriumPayload {
    result: EquilibriumResult,
    label: String,
}

#[wasm_bindgen]
pub struct WasmModel {
    params: ModelParameters,
    settings: ModelSettings,
}

#[wasm_bindgen]
impl WasmModel {
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue, settings: JsValue) -> Result<WasmModel, JsValue> {
        console_error_panic_hook::set_once();

        let params: ModelParameters = from_js_or_default(params, "parameters")?;
        let settings: ModelSettings = from_js_or_default(settings, "settings")?;
        settings
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?;
        params
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {}", e)))?;

        Ok(WasmModel { params, settings })
    }

    pub fn set_params(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: ModelParameters = from_value(params)
            .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {}", e)))?;
        params
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {}", e)))?;
        self.params = params;
        Ok(())
    }

    pub fn get_params(&self) -> Result<JsValue, JsValue> {
        to_js(&self.params)
    }

    /// `{ result: { kind, output?, interest_rate? }, label }`
    pub fn solve_equilibrium(&self) -> Result<JsValue, JsValue> {
        let result = solve_with(&self.params, &self.settings.solver);
        to_js(&EquilibriumPayload {
            label: format_equilibrium(&result),
            result,
        })
    }

    pub fn sample_curves(&self, y_min: f64, y_max: f64, samples: u32) -> Result<JsValue, JsValue> {
        if !y_min.is_finite() || !y_max.is_finite() {
            return Err(JsValue::from_str("Curve bounds must be finite."));
        }
        to_js(&sample(&self.params, y_min, y_max, samples as usize))
    }

    /// Baseline vs. shocked comparison for the current parameters.
    pub fn analyze_policy(&self, shock: JsValue) -> Result<JsValue, JsValue> {
        let shock: PolicyShock = from_js_or_default(shock, "policy shock")?;
        let scenario = PolicyScenario::analyze(&self.params, &shock, &self.settings)
            .map_err(|e| JsValue::from_str(&error_message(&e)))?;
        to_js(&scenario)
    }

    pub fn summary(&self, shock: JsValue) -> Result<String, JsValue> {
        let shock: PolicyShock = from_js_or_default(shock, "policy shock")?;
        PolicyScenario::analyze(&self.params, &shock, &self.settings)
            .map(|scenario| scenario.summary())
            .map_err(|e| JsValue::from_str(&error_message(&e)))
    }
}

#[wasm_bindgen]
pub fn default_parameters() -> Result<JsValue, JsValue> {
    to_js(&ModelParameters::default())
}

#[wasm_bindgen]
pub fn default_settings() -> Result<JsValue, JsValue> {
    to_js(&ModelSettings::default())
}

/// Output-axis interval for two serialized `EquilibriumResult`s.
#[wasm_bindgen]
pub fn select_plot_range(
    first: JsValue,
    second: JsValue,
    settings: JsValue,
) -> Result<JsValue, JsValue> {
    let first: EquilibriumResult = from_value(first)
        .map_err(|e| JsValue::from_str(&format!("Invalid equilibrium: {}", e)))?;
    let second: EquilibriumResult = from_value(second)
        .map_err(|e| JsValue::from_str(&format!("Invalid equilibrium: {}", e)))?;
    let settings: ModelSettings = from_js_or_default(settings, "settings")?;
    to_js(&select_range_with(&first, &second, &settings.range))
}
