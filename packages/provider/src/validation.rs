// ABOUTME: Validators for catalog payloads
// ABOUTME: URL, response shape, model entry, and pricing checks as plain verdicts

use serde_json::Value;
use tracing::error;
use url::Url;

const REQUIRED_ENTRY_FIELDS: &[&str] = &["name", "value", "config"];
const REQUIRED_PRICING_KEYS: &[&str] = &["input_token_pricing", "output_token_pricing"];

/// True iff the string parses into a URL carrying both a scheme and a host.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Validate the top-level catalog response shape.
///
/// Failures abort the whole discovery run, so each one is error-logged here.
pub fn validate_server_response(response: &Value) -> bool {
    let mapping = match response.as_object() {
        Some(mapping) => mapping,
        None => {
            error!("Invalid server response format");
            return false;
        }
    };

    let models = match mapping.get("models") {
        Some(models) => models,
        None => {
            error!("Missing 'models' field in response");
            return false;
        }
    };

    if !models.is_array() {
        error!("Models field must be a list");
        return false;
    }

    true
}

/// Validate one candidate model entry.
///
/// Returns the human-readable rejection reason; the first failing check wins.
pub fn validate_model_entry(model_info: &Value) -> Result<(), String> {
    for field in REQUIRED_ENTRY_FIELDS {
        match model_info.get(field) {
            None => {
                return Err(format!("Missing required field '{}' in model info", field));
            }
            Some(value) if is_falsy(value) => {
                return Err(format!("Empty value for required field '{}'", field));
            }
            Some(_) => {}
        }
    }

    if !model_info["config"].is_object() {
        return Err("Config must be a mapping".to_string());
    }

    Ok(())
}

/// Validate the pricing sub-mapping: both keys present, numeric, non-negative.
pub fn validate_pricing_config(pricing: &Value) -> bool {
    for key in REQUIRED_PRICING_KEYS {
        let value = match pricing.get(key) {
            Some(value) => value,
            None => {
                error!("Missing pricing key: {}", key);
                return false;
            }
        };

        let amount = match value.as_f64() {
            Some(amount) => amount,
            None => {
                error!("Invalid pricing type for {}", key);
                return false;
            }
        };

        if amount < 0.0 {
            error!("Negative pricing for {}", key);
            return false;
        }
    }

    true
}

/// JSON falsiness: null, false, zero, and empty strings/arrays/objects.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
