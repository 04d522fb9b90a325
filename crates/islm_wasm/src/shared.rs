//! Serialization helpers shared by the bindings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::new().serialize_missing_as_null(true))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Deserializes `value`, falling back to `T::default()` for `undefined`/`null`.
pub(crate) fn from_js_or_default<T>(value: JsValue, what: &str) -> Result<T, JsValue>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

/// Renders an error together with its context chain.
pub(crate) fn error_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

#[cfg(test)]
mod tests {
    use super::error_message;
    use anyhow::Context;

    #[test]
    fn error_message_includes_context_chain() {
        let err = Err::<(), _>(anyhow::anyhow!("price level must be positive, got 0"))
            .context("Invalid baseline parameters.")
            .expect_err("error");
        assert_eq!(
            error_message(&err),
            "Invalid baseline parameters.: price level must be positive, got 0"
        );
    }
}
