//! WASM bridge exposing the population growth engine to the browser UI.
//!
//! This crate is transport glue only: it deserializes the caller's
//! request, delegates to `verhulst_core`, and hands the keyed result
//! back as a JS value. All numerical behavior lives in the core crate.

use serde_wasm_bindgen::{from_value, to_value};
use verhulst_core::simulation::{simulate, SimulationParameters};
use wasm_bindgen::prelude::*;

/// Runs the three-method comparison for one parameter set.
///
/// The request carries the fields `P0_initial`, `t_start`, `t_end`,
/// `delta_t`, `r_growth` and `K_carrying_capacity`. The response holds
/// one `{ times, populations }` series per method under the keys
/// `euler_method`, `runge_kutta_2` and `runge_kutta_4`. Invalid
/// configurations are rejected before any computation runs.
#[wasm_bindgen]
pub fn predict_population(params_val: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let params: SimulationParameters = from_value(params_val)
        .map_err(|e| JsValue::from_str(&format!("Invalid simulation parameters: {}", e)))?;

    let result = simulate(&params).map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_value(&result).map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}
