use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::{LLMProvider, Model};

/// In-memory registry of known models, keyed by model name.
///
/// Registration replaces any existing entry with the same name, so repeated
/// registration of the same model is safe.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: Arc<RwLock<HashMap<String, Model>>>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, replacing any existing entry with the same name.
    pub async fn register_model(&self, model: Model) {
        debug!(
            model = %model.name,
            provider = %model.provider,
            "Registering model"
        );
        let mut models = self.models.write().await;
        models.insert(model.name.clone(), model);
    }

    /// Get a model by name.
    pub async fn get_model(&self, name: &str) -> Option<Model> {
        let models = self.models.read().await;
        models.get(name).cloned()
    }

    /// Check if a model is registered.
    pub async fn contains(&self, name: &str) -> bool {
        let models = self.models.read().await;
        models.contains_key(name)
    }

    /// All registered models, sorted by name for consistent ordering.
    pub async fn list_models(&self) -> Vec<Model> {
        let models = self.models.read().await;
        let mut all: Vec<Model> = models.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Registered models served by a specific provider, sorted by name.
    pub async fn models_by_provider(&self, provider: LLMProvider) -> Vec<Model> {
        let models = self.models.read().await;
        let mut matching: Vec<Model> = models
            .values()
            .filter(|m| m.provider == provider)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        matching
    }

    /// Number of registered models.
    pub async fn len(&self) -> usize {
        let models = self.models.read().await;
        models.len()
    }

    /// Check if the registry is empty.
    pub async fn is_empty(&self) -> bool {
        let models = self.models.read().await;
        models.is_empty()
    }

    /// Remove all registered models.
    pub async fn clear(&self) {
        let mut models = self.models.write().await;
        models.clear();
    }
}

/// Process-wide registry instance used by the host application.
pub static REGISTRY: Lazy<ModelRegistry> = Lazy::new(ModelRegistry::new);
