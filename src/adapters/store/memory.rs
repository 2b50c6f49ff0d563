//! In-memory order store
//!
//! Backs dry-run mode and tests. Headers are keyed by (session, order
//! number), lines by (order number, line number). Rejections can be scripted
//! per order number or line number to exercise partial-failure paths.

use crate::adapters::store::traits::OrderStore;
use crate::domain::{Result, SessionId, StoreError, TargetRecord};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    headers: HashMap<(String, String), TargetRecord>,
    lines: HashMap<(String, String), TargetRecord>,
    reject_orders: HashSet<String>,
    reject_lines: HashSet<String>,
}

/// Order store held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a header rejection for an order number
    pub fn reject_order(&self, order_number: impl Into<String>) {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .reject_orders
            .insert(order_number.into());
    }

    /// Scripts a line rejection for a line number
    pub fn reject_line(&self, line_number: impl Into<String>) {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .reject_lines
            .insert(line_number.into());
    }

    /// Returns a stored header record
    pub fn order(&self, session: &SessionId, order_number: &str) -> Option<TargetRecord> {
        self.inner
            .lock()
            .expect("store mutex poisoned")
            .headers
            .get(&(session.as_str().to_string(), order_number.to_string()))
            .cloned()
    }

    /// Number of stored header records
    pub fn order_count(&self) -> usize {
        self.inner.lock().expect("store mutex poisoned").headers.len()
    }

    /// Stored line records for an order, in line-number order
    pub fn lines_for(&self, order_number: &str) -> Vec<TargetRecord> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut lines: Vec<(String, TargetRecord)> = inner
            .lines
            .iter()
            .filter(|((orderno, _), _)| orderno == order_number)
            .map(|((_, linenbr), record)| (linenbr.clone(), record.clone()))
            .collect();
        lines.sort_by(|(a, _), (b, _)| a.cmp(b));
        lines.into_iter().map(|(_, record)| record).collect()
    }

    fn record_field(record: &TargetRecord, field: &str) -> Result<String> {
        record
            .get(field)
            .map(str::to_string)
            .ok_or_else(|| StoreError::InvalidRecord(format!("missing '{field}' field")).into())
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn exists(&self, session: &SessionId, order_number: &str) -> Result<bool> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .headers
            .contains_key(&(session.as_str().to_string(), order_number.to_string())))
    }

    async fn create_order(&self, record: &TargetRecord) -> Result<bool> {
        let session = Self::record_field(record, "sessionid")?;
        let orderno = Self::record_field(record, "orderno")?;

        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if inner.reject_orders.contains(&orderno) {
            return Ok(false);
        }
        inner.headers.insert((session, orderno), record.clone());
        Ok(true)
    }

    async fn update_order(&self, record: &TargetRecord) -> Result<bool> {
        // Same shape as create for an in-memory map
        self.create_order(record).await
    }

    async fn save_line(&self, record: &TargetRecord) -> Result<bool> {
        let orderno = Self::record_field(record, "orderno")?;
        let linenbr = Self::record_field(record, "linenbr")?;

        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if inner.reject_lines.contains(&linenbr) {
            return Ok(false);
        }
        inner.lines.insert((orderno, linenbr), record.clone());
        Ok(true)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(session: &str, orderno: &str) -> TargetRecord {
        let mut record = TargetRecord::new();
        record.set("sessionid", session);
        record.set("orderno", orderno);
        record
    }

    fn line(orderno: &str, linenbr: &str) -> TargetRecord {
        let mut record = TargetRecord::new();
        record.set("orderno", orderno);
        record.set("linenbr", linenbr);
        record
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let store = InMemoryStore::new();
        let session = SessionId::new("web").unwrap();

        assert!(!store.exists(&session, "4100").await.unwrap());
        assert!(store.create_order(&header("web", "4100")).await.unwrap());
        assert!(store.exists(&session, "4100").await.unwrap());
        assert_eq!(store.order_count(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_header() {
        let store = InMemoryStore::new();
        let session = SessionId::new("web").unwrap();

        store.create_order(&header("web", "4100")).await.unwrap();
        let mut updated = header("web", "4100");
        updated.set("ordertotal", "10.00");
        assert!(store.update_order(&updated).await.unwrap());

        let stored = store.order(&session, "4100").unwrap();
        assert_eq!(stored.get("ordertotal"), Some("10.00"));
        assert_eq!(store.order_count(), 1);
    }

    #[tokio::test]
    async fn test_scripted_rejection_is_falsy_not_err() {
        let store = InMemoryStore::new();
        store.reject_order("4100");

        let persisted = store.create_order(&header("web", "4100")).await.unwrap();
        assert!(!persisted);
        assert_eq!(store.order_count(), 0);
    }

    #[tokio::test]
    async fn test_save_line_upserts() {
        let store = InMemoryStore::new();
        store.save_line(&line("4100", "16")).await.unwrap();
        store.save_line(&line("4100", "16")).await.unwrap();
        store.save_line(&line("4100", "17")).await.unwrap();

        assert_eq!(store.lines_for("4100").len(), 2);
    }

    #[tokio::test]
    async fn test_record_missing_key_field_is_invalid() {
        let store = InMemoryStore::new();
        let mut record = TargetRecord::new();
        record.set("orderno", "4100");

        let err = store.create_order(&record).await.unwrap_err();
        assert!(err.to_string().contains("sessionid"));
    }
}
