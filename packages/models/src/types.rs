use std::fmt;

use serde::{Deserialize, Serialize};

/// Provider a model is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProvider {
    OpenAi,
    Anthropic,
    Autobyteus,
}

impl fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LLMProvider::OpenAi => "openai",
            LLMProvider::Anthropic => "anthropic",
            LLMProvider::Autobyteus => "autobyteus",
        };
        write!(f, "{}", name)
    }
}

/// Per-token cost metadata attached to a model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenPricingConfig {
    #[serde(default)]
    pub input_token_pricing: f64,
    #[serde(default)]
    pub output_token_pricing: f64,
}

/// Runtime configuration carried by a registered model.
///
/// Unknown fields in the source mapping are ignored; missing fields fall back
/// to the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLMConfig {
    /// Maximum context window in tokens
    #[serde(default = "default_token_limit")]
    pub token_limit: u32,
    /// Sampling temperature, expected within [0, 2]
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub pricing_config: TokenPricingConfig,
}

fn default_token_limit() -> u32 {
    8192
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            token_limit: default_token_limit(),
            temperature: default_temperature(),
            pricing_config: TokenPricingConfig::default(),
        }
    }
}

impl LLMConfig {
    /// Build a config from a raw JSON mapping.
    ///
    /// Fails when the mapping is structurally invalid (wrong types for known
    /// fields, or not a mapping at all).
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

/// A validated model descriptor, the unit stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Display name, unique within the registry
    pub name: String,
    /// Identifier the serving backend expects in API calls
    pub value: String,
    pub provider: LLMProvider,
    pub default_config: LLMConfig,
}
