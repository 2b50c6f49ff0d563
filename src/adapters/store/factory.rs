//! Store factory
//!
//! Creates the configured order-store backend behind the `OrderStore` trait.

use crate::adapters::store::memory::InMemoryStore;
use crate::adapters::store::rest::RestStore;
use crate::adapters::store::traits::OrderStore;
use crate::config::{OrderliftConfig, StoreTarget};
use crate::domain::{ImportError, Result};
use std::sync::Arc;

/// Creates the order store named by `store_target`
///
/// Dry-run mode always gets the in-memory store regardless of target, so no
/// write ever leaves the process.
pub fn create_store(config: &OrderliftConfig) -> Result<Arc<dyn OrderStore>> {
    if config.application.dry_run {
        tracing::info!("Dry-run mode - using in-memory store");
        return Ok(Arc::new(InMemoryStore::new()));
    }

    match config.store_target {
        StoreTarget::Memory => Ok(Arc::new(InMemoryStore::new())),
        StoreTarget::Rest => {
            let store_config = config.store.as_ref().ok_or_else(|| {
                ImportError::Configuration(
                    "store configuration is required when store_target = 'rest'".to_string(),
                )
            })?;
            Ok(Arc::new(RestStore::new(store_config)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderliftConfig;

    #[test]
    fn test_memory_target() {
        let mut config = OrderliftConfig::default();
        config.store_target = StoreTarget::Memory;

        let store = create_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn test_rest_target_requires_store_config() {
        let mut config = OrderliftConfig::default();
        config.store_target = StoreTarget::Rest;
        config.store = None;

        assert!(create_store(&config).is_err());
    }

    #[test]
    fn test_dry_run_forces_memory() {
        let mut config = OrderliftConfig::default();
        config.store_target = StoreTarget::Rest;
        config.application.dry_run = true;

        let store = create_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }
}
