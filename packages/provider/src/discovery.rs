// ABOUTME: Model discovery pipeline for the Autobyteus catalog server
// ABOUTME: Fetches available models, validates and repairs entries, registers them

use serde_json::Value;
use tracing::{error, info, warn};

use autobyteus_config::constants::{AUTOBYTEUS_SERVER_URL, DEFAULT_SERVER_URL};
use autobyteus_config::env_or;
use autobyteus_models::{LLMConfig, LLMProvider, Model, ModelRegistry};

use crate::client::AutobyteusClient;
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::validation::{
    is_valid_url, validate_model_entry, validate_pricing_config, validate_server_response,
};

/// Resolve the catalog endpoint from the environment, falling back to the
/// default. No validation happens here.
pub fn resolve_server_url() -> String {
    env_or(AUTOBYTEUS_SERVER_URL, DEFAULT_SERVER_URL)
}

/// Parse and repair one entry's `config` mapping.
///
/// Pricing is validated before construction; an absent `pricing_config`
/// behaves like an empty one and fails the required-key check. Token limits
/// below 1 and temperatures outside [0, 2] are forced back to their defaults.
pub fn parse_llm_config(config: &Value) -> DiscoveryResult<LLMConfig> {
    let empty = Value::Object(serde_json::Map::new());
    let pricing = config.get("pricing_config").unwrap_or(&empty);
    if !validate_pricing_config(pricing) {
        return Err(DiscoveryError::config("Invalid pricing configuration"));
    }

    // The typed limit is unsigned, so numeric values below 1 (negatives
    // included) are repaired on the raw mapping before construction.
    let mut config = config.clone();
    if let Some(limit) = config.get("token_limit").and_then(Value::as_f64) {
        if limit < 1.0 {
            warn!("Token limit below minimum, using default (8192)");
            config["token_limit"] = Value::from(8192);
        }
    }

    let mut llm_config = LLMConfig::from_value(&config)?;

    if !(0.0..=2.0).contains(&llm_config.temperature) {
        warn!("Temperature out of range, resetting to 0.7");
        llm_config.temperature = 0.7;
    }

    Ok(llm_config)
}

/// Discover models from the configured endpoint and register the valid ones.
///
/// Never fails: every failure path degrades to a logged no-op. Returns the
/// number of models registered by this invocation.
pub async fn discover_and_register(registry: &ModelRegistry) -> usize {
    let server_url = resolve_server_url();
    discover_from(&server_url, registry).await
}

/// Run the discovery pipeline against an explicit endpoint.
///
/// Pre-loop failures (bad URL, client build, fetch, response shape) abort the
/// whole run with zero registrations; per-entry failures skip that entry and
/// keep processing siblings.
pub async fn discover_from(server_url: &str, registry: &ModelRegistry) -> usize {
    if !is_valid_url(server_url) {
        error!("Invalid server URL: {}", server_url);
        return 0;
    }

    let client = match AutobyteusClient::new(server_url) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build catalog client: {}", e);
            return 0;
        }
    };

    // The client is scoped to this function; its connections are released
    // when it drops, on every path out.
    let response = match client.get_available_models().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Connection failed: {}", e);
            return 0;
        }
    };

    if !validate_server_response(&response) {
        return 0;
    }

    let models = match response.get("models").and_then(Value::as_array) {
        Some(models) => models,
        None => return 0,
    };

    let mut registered_count = 0;

    for model_info in models {
        if let Err(reason) = validate_model_entry(model_info) {
            warn!("{}", reason);
            continue;
        }

        let llm_config = match parse_llm_config(&model_info["config"]) {
            Ok(config) => config,
            Err(e) => {
                error!("Config parsing failed: {}", e);
                continue;
            }
        };

        let name = field_as_string(&model_info["name"]);
        let value = field_as_string(&model_info["value"]);

        registry
            .register_model(Model {
                name: name.clone(),
                value,
                provider: LLMProvider::Autobyteus,
                default_config: llm_config,
            })
            .await;
        registered_count += 1;
        info!("Registered model: {}", name);
    }

    info!("Registered {} valid models", registered_count);
    registered_count
}

/// Identity fields are usually strings; other non-empty JSON values are kept
/// under their JSON text rather than rejected.
fn field_as_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
