//! Import orchestrator - main coordinator for the order import process
//!
//! This module drives the full import workflow: fetching orders from the
//! source platform, mapping them onto store records, applying post-mapping
//! corrections, and persisting headers and lines with per-order failure
//! isolation.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::adapters::platform::SourcePlatform;
use crate::adapters::store::OrderStore;
use crate::core::import::result::{ErrorScope, HeaderOutcome, ImportResult, LineOutcome};
use crate::core::import::schemas::ImportSchemas;
use crate::core::import::summary::ImportSummary;
use crate::domain::{ImportError, LineId, OrderId, Result, SessionId};
use crate::lookup::{PaymentTypeTable, RegionLookup, UsStateLookup};
use crate::mapping::{apply_schema, resolve_field, MappingRule};

/// Header fields rewritten to region abbreviations after mapping
const REGION_FIELDS: [&str; 2] = ["billstate", "shipstate"];

/// Import orchestrator
pub struct ImportOrchestrator {
    platform: Arc<dyn SourcePlatform>,
    store: Arc<dyn OrderStore>,
    regions: Arc<dyn RegionLookup>,
    payment_types: PaymentTypeTable,
    schemas: ImportSchemas,
    session: SessionId,
}

impl ImportOrchestrator {
    /// Create an orchestrator with the default schemas and lookup tables
    pub fn new(
        platform: Arc<dyn SourcePlatform>,
        store: Arc<dyn OrderStore>,
        session: SessionId,
    ) -> Self {
        Self {
            platform,
            store,
            regions: Arc::new(UsStateLookup),
            payment_types: PaymentTypeTable::default(),
            schemas: ImportSchemas::default(),
            session,
        }
    }

    /// Replace the mapping schemas
    pub fn with_schemas(mut self, schemas: ImportSchemas) -> Self {
        self.schemas = schemas;
        self
    }

    /// Replace the region lookup
    pub fn with_region_lookup(mut self, regions: Arc<dyn RegionLookup>) -> Self {
        self.regions = regions;
        self
    }

    /// Replace the payment type table
    pub fn with_payment_types(mut self, payment_types: PaymentTypeTable) -> Self {
        self.payment_types = payment_types;
        self
    }

    /// Fetch a batch of source orders without importing them
    pub async fn fetch_batch(
        &self,
        limit: usize,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<Value>> {
        tracing::info!(limit, filter_count = filters.len(), "Fetching orders");
        let orders = self.platform.list_orders(limit, filters).await?;
        tracing::info!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    /// Execute the import
    ///
    /// This is the main entry point for the import process. It:
    /// 1. Fetches the order batch from the source platform
    /// 2. Imports each order independently, recording failures inside an
    ///    order instead of aborting the batch
    /// 3. Generates a summary report
    ///
    /// A failure to list orders, or a store transport error, is fatal and
    /// returned as `Err`.
    pub async fn import_batch(
        &self,
        limit: usize,
        filters: &BTreeMap<String, String>,
    ) -> Result<ImportSummary> {
        let start_time = Instant::now();
        let mut summary = ImportSummary::new();

        tracing::info!(session = %self.session, "Starting import");

        let orders = self.fetch_batch(limit, filters).await?;

        for (index, order) in orders.iter().enumerate() {
            match self.import_one(order).await {
                Ok(result) => summary.record(result),
                Err(ImportError::Store(e)) => {
                    // Store transport failures poison the whole batch
                    return Err(ImportError::Store(e));
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping unreadable order record");
                    if let Ok(order_id) = OrderId::from_record(order) {
                        let mut result = ImportResult::new(order_id);
                        result.add_error(ErrorScope::Header, e.to_string());
                        summary.record(result);
                    } else if let Ok(order_id) = OrderId::new(format!("record-{index}")) {
                        let mut result = ImportResult::new(order_id);
                        result.add_error(ErrorScope::Header, e.to_string());
                        summary.record(result);
                    }
                }
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Import a single source order
    ///
    /// Platform failures scoped to this order (shipping address or line-item
    /// fetch) are recorded in the result. Store transport errors propagate
    /// as `Err`; a store rejection (`Ok(false)`) is recorded.
    pub async fn import_one(&self, order: &Value) -> Result<ImportResult> {
        let order_id = OrderId::from_record(order).map_err(ImportError::Validation)?;
        let mut result = ImportResult::new(order_id.clone());

        tracing::debug!(order_id = %order_id, "Importing order");

        // First shipping address feeds the header's shipping section
        let address = match self.platform.order_shipping_addresses(&order_id, 1).await {
            Ok(addresses) => match addresses.into_iter().next() {
                Some(address) => address,
                None => {
                    tracing::warn!(order_id = %order_id, "Order has no shipping address");
                    Value::Object(serde_json::Map::new())
                }
            },
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Shipping address fetch failed");
                result.add_error(
                    ErrorScope::Header,
                    format!("failed to fetch shipping address: {e}"),
                );
                return Ok(result);
            }
        };

        // Fetch line items up front so a fetch failure is known before the
        // header persists
        let lines = match self.platform.order_line_items(&order_id).await {
            Ok(lines) => Some(lines),
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Line item fetch failed");
                result.add_error(ErrorScope::Lines, format!("failed to fetch line items: {e}"));
                None
            }
        };

        let header = self.build_header(order, &address);

        let order_number = header.get("orderno").unwrap_or_default().to_string();
        let exists = self.store.exists(&self.session, &order_number).await?;

        let persisted = if exists {
            self.store.update_order(&header).await?
        } else {
            self.store.create_order(&header).await?
        };

        if !persisted {
            tracing::warn!(order_id = %order_id, "Store rejected order header");
            result.add_error(ErrorScope::Header, "store rejected order header");
            return Ok(result);
        }

        result.header = if exists {
            tracing::info!(order_id = %order_id, "Updated order header");
            HeaderOutcome::Updated { record: header }
        } else {
            tracing::info!(order_id = %order_id, "Created order header");
            HeaderOutcome::Created { record: header }
        };

        let Some(lines) = lines else {
            return Ok(result);
        };

        for line in &lines {
            let line_id = match LineId::from_record(line) {
                Ok(line_id) => line_id,
                Err(e) => {
                    tracing::warn!(order_id = %order_id, error = %e, "Skipping unreadable line item");
                    result.add_error(ErrorScope::Lines, format!("unreadable line item: {e}"));
                    continue;
                }
            };

            let record = self.build_line(line);
            if self.store.save_line(&record).await? {
                tracing::debug!(order_id = %order_id, line_id = %line_id, "Saved line item");
                result.lines.insert(line_id, LineOutcome::Saved { record });
            } else {
                tracing::warn!(order_id = %order_id, line_id = %line_id, "Store rejected line item");
                result.add_error(
                    ErrorScope::Line(line_id.clone()),
                    "store rejected line item",
                );
                result.lines.insert(line_id, LineOutcome::Failed);
            }
        }

        Ok(result)
    }

    /// Build the combined header record from an order and its first
    /// shipping address, then apply post-mapping corrections
    fn build_header(&self, order: &Value, address: &Value) -> crate::domain::TargetRecord {
        let mut header = crate::domain::TargetRecord::new();
        apply_schema(order, &self.schemas.header, &mut header);
        apply_schema(address, &self.schemas.shipping, &mut header);

        for field in REGION_FIELDS {
            if let Some(value) = header.get(field) {
                let abbreviated = self.regions.abbreviate(value);
                header.set(field, abbreviated);
            }
        }

        let payment_label = resolve_field(order, "payment_method", &MappingRule::same_name());
        header.set("paymenttype", self.payment_types.resolve(&payment_label));

        header.set("sessionid", self.session.as_str());
        header
    }

    /// Build a line record from a platform line item
    fn build_line(&self, line: &Value) -> crate::domain::TargetRecord {
        let mut record = crate::domain::TargetRecord::new();
        apply_schema(line, &self.schemas.line, &mut record);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;
    use crate::domain::PlatformError;
    use async_trait::async_trait;
    use serde_json::json;

    /// Scripted platform backed by fixed JSON records
    struct FakePlatform {
        orders: Vec<Value>,
        addresses: BTreeMap<String, Vec<Value>>,
        lines: BTreeMap<String, Vec<Value>>,
        fail_lines_for: Option<String>,
    }

    impl FakePlatform {
        fn new(orders: Vec<Value>) -> Self {
            Self {
                orders,
                addresses: BTreeMap::new(),
                lines: BTreeMap::new(),
                fail_lines_for: None,
            }
        }

        fn with_address(mut self, order_id: &str, address: Value) -> Self {
            self.addresses
                .insert(order_id.to_string(), vec![address]);
            self
        }

        fn with_lines(mut self, order_id: &str, lines: Vec<Value>) -> Self {
            self.lines.insert(order_id.to_string(), lines);
            self
        }

        fn failing_lines_for(mut self, order_id: &str) -> Self {
            self.fail_lines_for = Some(order_id.to_string());
            self
        }
    }

    #[async_trait]
    impl SourcePlatform for FakePlatform {
        async fn ping(&self) -> crate::domain::Result<()> {
            Ok(())
        }

        async fn list_orders(
            &self,
            limit: usize,
            _filters: &BTreeMap<String, String>,
        ) -> crate::domain::Result<Vec<Value>> {
            let mut orders = self.orders.clone();
            if limit > 0 {
                orders.truncate(limit);
            }
            Ok(orders)
        }

        async fn order_shipping_addresses(
            &self,
            order_id: &OrderId,
            _limit: usize,
        ) -> crate::domain::Result<Vec<Value>> {
            Ok(self
                .addresses
                .get(order_id.as_str())
                .cloned()
                .unwrap_or_default())
        }

        async fn order_line_items(&self, order_id: &OrderId) -> crate::domain::Result<Vec<Value>> {
            if self.fail_lines_for.as_deref() == Some(order_id.as_str()) {
                return Err(ImportError::Platform(PlatformError::ConnectionFailed(
                    "connection reset".to_string(),
                )));
            }
            Ok(self.lines.get(order_id.as_str()).cloned().unwrap_or_default())
        }

        fn base_url(&self) -> &str {
            "fake://platform"
        }
    }

    fn sample_order(id: u64) -> Value {
        json!({
            "id": id,
            "customer_id": 7,
            "date_created": "2023-01-05T00:00:00Z",
            "subtotal_ex_tax": "50.00",
            "total_inc_tax": "55.00",
            "total_tax": "5.00",
            "base_shipping_cost": "0",
            "payment_method": "PayPal",
            "billing_address": {
                "first_name": "Jane",
                "last_name": "Doe",
                "street_1": "100 Main St",
                "city": "Portland",
                "state": "Oregon",
                "zip": "97201",
                "country_iso2": "US",
                "email": "jane@example.com"
            }
        })
    }

    fn sample_address() -> Value {
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "street_1": "100 Main St",
            "city": "Portland",
            "state": "Oregon",
            "zip": "97201",
            "country_iso2": "US",
            "base_cost": "0"
        })
    }

    fn sample_line(id: u64, order_id: u64) -> Value {
        json!({
            "id": id,
            "order_id": order_id,
            "product_id": 71,
            "name": "Widget",
            "sku": "WDG-1",
            "base_price": "19.999",
            "base_total": "39.998",
            "quantity": 2,
            "quantity_shipped": 0
        })
    }

    fn orchestrator(
        platform: FakePlatform,
        store: Arc<InMemoryStore>,
    ) -> ImportOrchestrator {
        ImportOrchestrator::new(
            Arc::new(platform),
            store,
            SessionId::new("sess-1").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_import_one_creates_header_and_lines() {
        let platform = FakePlatform::new(vec![sample_order(4100)])
            .with_address("4100", sample_address())
            .with_lines("4100", vec![sample_line(16, 4100), sample_line(17, 4100)]);
        let store = Arc::new(InMemoryStore::new());
        let orchestrator = orchestrator(platform, store.clone());

        let summary = orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();

        assert_eq!(summary.total_orders, 1);
        assert_eq!(summary.headers_created, 1);
        assert_eq!(summary.lines_saved, 2);
        assert!(summary.is_successful());

        let header = store.order(&SessionId::new("sess-1").unwrap(), "4100").unwrap();
        assert_eq!(header.get("sessionid"), Some("sess-1"));
        // Full name passes through region abbreviation
        assert_eq!(header.get("billstate"), Some("OR"));
        assert_eq!(header.get("shipstate"), Some("OR"));
        assert_eq!(header.get("paymenttype"), Some("PP"));
        assert_eq!(header.get("contact"), Some("Jane Doe"));

        assert_eq!(store.lines_for("4100").len(), 2);
    }

    #[tokio::test]
    async fn test_reimport_updates_existing_header() {
        let platform = FakePlatform::new(vec![sample_order(4100)])
            .with_address("4100", sample_address());
        let store = Arc::new(InMemoryStore::new());
        let orchestrator = orchestrator(platform, store.clone());

        orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();
        let summary = orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();

        assert_eq!(summary.headers_created, 0);
        assert_eq!(summary.headers_updated, 1);
        assert_eq!(store.order_count(), 1);
    }

    #[tokio::test]
    async fn test_header_rejection_skips_lines() {
        let platform = FakePlatform::new(vec![sample_order(4100)])
            .with_address("4100", sample_address())
            .with_lines("4100", vec![sample_line(16, 4100)]);
        let store = Arc::new(InMemoryStore::new());
        store.reject_order("4100");
        let orchestrator = orchestrator(platform, store.clone());

        let summary = orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();

        assert_eq!(summary.headers_failed, 1);
        assert_eq!(summary.lines_saved, 0);
        assert!(!summary.is_successful());

        let result = summary
            .results
            .get(&OrderId::new("4100").unwrap())
            .unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].scope, ErrorScope::Header);
        assert!(store.lines_for("4100").is_empty());
    }

    #[tokio::test]
    async fn test_line_fetch_failure_is_isolated() {
        let platform = FakePlatform::new(vec![
            sample_order(4100),
            sample_order(4101),
            sample_order(4102),
        ])
        .with_address("4100", sample_address())
        .with_address("4101", sample_address())
        .with_address("4102", sample_address())
        .with_lines("4100", vec![sample_line(16, 4100)])
        .with_lines("4102", vec![sample_line(20, 4102)])
        .failing_lines_for("4101");
        let store = Arc::new(InMemoryStore::new());
        let orchestrator = orchestrator(platform, store.clone());

        let summary = orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();

        // All three headers persist; only the middle order records an error
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.headers_created, 3);
        assert_eq!(summary.lines_saved, 2);
        assert_eq!(summary.failed_orders(), 1);

        let failed = summary
            .results
            .get(&OrderId::new("4101").unwrap())
            .unwrap();
        assert!(failed.header.is_persisted());
        assert_eq!(failed.errors[0].scope, ErrorScope::Lines);
    }

    #[tokio::test]
    async fn test_line_rejection_recorded_per_line() {
        let platform = FakePlatform::new(vec![sample_order(4100)])
            .with_address("4100", sample_address())
            .with_lines("4100", vec![sample_line(16, 4100), sample_line(17, 4100)]);
        let store = Arc::new(InMemoryStore::new());
        store.reject_line("17");
        let orchestrator = orchestrator(platform, store.clone());

        let summary = orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();

        assert_eq!(summary.lines_saved, 1);
        assert_eq!(summary.lines_failed, 1);

        let result = summary
            .results
            .get(&OrderId::new("4100").unwrap())
            .unwrap();
        assert_eq!(
            result.errors[0].scope,
            ErrorScope::Line(LineId::new("17").unwrap())
        );
    }

    #[tokio::test]
    async fn test_missing_shipping_address_still_imports_header() {
        let platform = FakePlatform::new(vec![sample_order(4100)]);
        let store = Arc::new(InMemoryStore::new());
        let orchestrator = orchestrator(platform, store.clone());

        let summary = orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();

        assert_eq!(summary.headers_created, 1);
        let header = store.order(&SessionId::new("sess-1").unwrap(), "4100").unwrap();
        assert_eq!(header.get("shipcity"), Some(""));
        assert_eq!(header.get("billcity"), Some("Portland"));
    }

    #[tokio::test]
    async fn test_unknown_payment_method_falls_back_to_default() {
        let mut order = sample_order(4100);
        order["payment_method"] = json!("Barter");
        let platform = FakePlatform::new(vec![order]).with_address("4100", sample_address());
        let store = Arc::new(InMemoryStore::new());
        let orchestrator = orchestrator(platform, store.clone());

        orchestrator.import_batch(0, &BTreeMap::new()).await.unwrap();

        let header = store.order(&SessionId::new("sess-1").unwrap(), "4100").unwrap();
        assert_eq!(header.get("paymenttype"), Some("OT"));
    }

    #[tokio::test]
    async fn test_limit_truncates_batch() {
        let platform = FakePlatform::new(vec![sample_order(4100), sample_order(4101)])
            .with_address("4100", sample_address())
            .with_address("4101", sample_address());
        let store = Arc::new(InMemoryStore::new());
        let orchestrator = orchestrator(platform, store.clone());

        let summary = orchestrator.import_batch(1, &BTreeMap::new()).await.unwrap();

        assert_eq!(summary.total_orders, 1);
    }
}
