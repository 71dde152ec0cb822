use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::FulfillmentProvider;
use crate::{CoreError, CoreResult};

/// Fulfillment providers available to the host, keyed by identifier.
///
/// Built once at start-up, read-only afterwards.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn FulfillmentProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Arc<dyn FulfillmentProvider>) -> CoreResult<()> {
        let id = provider.identifier();
        if self.providers.contains_key(id) {
            return Err(CoreError::DuplicateProvider(id.to_string()));
        }

        tracing::info!("Registered fulfillment provider: {}", id);
        self.providers.insert(id.to_string(), provider);
        Ok(())
    }

    pub fn get(&self, id: &str) -> CoreResult<Arc<dyn FulfillmentProvider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::UnknownProvider(id.to_string()))
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.identifiers())
            .finish()
    }
}
