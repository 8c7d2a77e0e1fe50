// ABOUTME: LLM model registry
// ABOUTME: Model descriptors, runtime config, and in-memory lookup

pub mod registry;
pub mod types;

pub use registry::{ModelRegistry, REGISTRY};
pub use types::{LLMConfig, LLMProvider, Model, TokenPricingConfig};
