//! Source platform trait definition
//!
//! This module defines the `SourcePlatform` trait that abstracts the
//! e-commerce platform's order API. The orchestrator only sees decoded,
//! nested-attribute-accessible records; pagination and auth mechanics stay
//! inside the implementation.

use crate::domain::{OrderId, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Trait for source platform implementations
///
/// All records come back as decoded JSON values whose property paths match
/// the ones the mapping schemas reference (e.g. `billing_address.street_1`).
///
/// # Example
///
/// ```no_run
/// use orderlift::adapters::platform::{RestPlatform, SourcePlatform};
/// use orderlift::config::PlatformConfig;
/// use std::collections::BTreeMap;
///
/// # async fn example() -> orderlift::domain::Result<()> {
/// let config = PlatformConfig::default();
/// let platform = RestPlatform::connect(&config).await?;
///
/// let orders = platform.list_orders(10, &BTreeMap::new()).await?;
/// println!("Fetched {} orders", orders.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait SourcePlatform: Send + Sync {
    /// Verify the platform is reachable and the credentials work
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot be reached or rejects the
    /// credentials.
    async fn ping(&self) -> Result<()>;

    /// List orders, eagerly materialized
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of orders; applied only when non-zero
    /// * `filters` - Extra request options merged into the query string
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a list.
    async fn list_orders(
        &self,
        limit: usize,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<Value>>;

    /// List an order's shipping addresses
    ///
    /// # Arguments
    ///
    /// * `order_id` - The source order
    /// * `limit` - Maximum number of addresses; applied only when non-zero
    async fn order_shipping_addresses(
        &self,
        order_id: &OrderId,
        limit: usize,
    ) -> Result<Vec<Value>>;

    /// List an order's line items
    async fn order_line_items(&self, order_id: &OrderId) -> Result<Vec<Value>>;

    /// Base URL of the platform API
    fn base_url(&self) -> &str;
}
