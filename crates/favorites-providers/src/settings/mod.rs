//! Settings registry backends.

#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

use serde::Serialize;
use serde_json::{Map, Value};

use favorites_core::error::AppError;
use favorites_core::result::AppResult;
use favorites_core::traits::settings::SettingValue;

pub use provider::SettingsManager;

/// Read one key from a schema's user data and defaults.
pub(crate) fn read_key(
    user: Option<&Map<String, Value>>,
    defaults: Option<&Map<String, Value>>,
    key: &str,
) -> SettingValue {
    let user = user.and_then(|u| u.get(key)).cloned();
    let composite = user
        .clone()
        .or_else(|| defaults.and_then(|d| d.get(key)).cloned());
    SettingValue { composite, user }
}

/// Parse a raw settings document; it must be a JSON object.
pub(crate) fn parse_document(schema_id: &str, raw: &str) -> AppResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::validation(format!(
            "Settings for '{schema_id}' must be a JSON object, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(AppError::validation(format!(
            "Settings for '{schema_id}' are not valid JSON: {e}"
        ))),
    }
}

/// Serialize a value the way settings files are written (4-space indent).
pub fn to_settings_json<T: Serialize>(value: &T) -> AppResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| AppError::internal(format!("Invalid UTF-8 in JSON: {e}")))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
