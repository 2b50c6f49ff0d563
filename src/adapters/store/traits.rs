//! Order store abstraction traits
//!
//! This module defines the trait a target order-management store must
//! implement. The contract deliberately mirrors the store's own semantics:
//! a persistence call answers `Ok(true)` on success, `Ok(false)` on
//! rejection, and `Err` only for transport-level defects. Rejections are
//! recorded per record by the orchestrator; transport defects abort the
//! batch.

use crate::domain::{Result, SessionId, TargetRecord};
use async_trait::async_trait;

/// Target store trait for order header and line persistence
///
/// Idempotency is the caller's job for headers (`exists` then create or
/// update); line saves rely on the store's own upsert semantics. The
/// check-then-act on headers is not atomic: callers that parallelize
/// imports must serialize it per order identifier to avoid a
/// duplicate-create race.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Whether a header record already exists for this session and order
    /// number
    ///
    /// # Errors
    ///
    /// Returns an error if the existence query cannot be answered.
    async fn exists(&self, session: &SessionId, order_number: &str) -> Result<bool>;

    /// Create a new header record
    ///
    /// Returns `Ok(false)` when the store rejects the record.
    async fn create_order(&self, record: &TargetRecord) -> Result<bool>;

    /// Update an existing header record
    ///
    /// Returns `Ok(false)` when the store rejects the record.
    async fn update_order(&self, record: &TargetRecord) -> Result<bool>;

    /// Save a line record, creating or replacing per the store's own
    /// idempotency
    ///
    /// Returns `Ok(false)` when the store rejects the record.
    async fn save_line(&self, record: &TargetRecord) -> Result<bool>;

    /// Human-readable name of the store backend, for logs
    fn backend_name(&self) -> &str;
}
