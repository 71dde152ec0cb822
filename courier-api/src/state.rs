use std::sync::Arc;

use anyhow::{bail, Context};
use courier_core::{ProviderContext, ProviderRegistry};

use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ProviderRegistry>,
}

impl AppState {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Build the registry from the enabled providers in `config`
    pub fn from_config(config: &Config, context: ProviderContext) -> anyhow::Result<Self> {
        let mut registry = ProviderRegistry::new();

        for (id, provider) in config.enabled_providers() {
            match id {
                courier_custom::IDENTIFIER => {
                    courier_custom::register(&mut registry, context.clone(), provider.options.clone())
                        .with_context(|| format!("Failed to register provider {}", id))?;
                }
                other => bail!("No fulfillment provider named {:?} is available", other),
            }
        }

        if registry.is_empty() {
            tracing::warn!("No fulfillment providers enabled");
        }

        Ok(Self::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_from_config() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9000

            [providers.custom-fulfillment]
            enabled = true
            "#,
        )
        .unwrap();

        let state = AppState::from_config(&config, ProviderContext::default()).unwrap();
        assert_eq!(state.registry.identifiers(), vec!["custom-fulfillment".to_string()]);
    }

    #[test]
    fn test_unknown_provider_in_config() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9000

            [providers.pigeon-post]
            enabled = true
            "#,
        )
        .unwrap();

        let err = AppState::from_config(&config, ProviderContext::default()).err().unwrap();
        assert!(err.to_string().contains("pigeon-post"));
    }
}
