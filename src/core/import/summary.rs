//! Import summary and reporting
//!
//! This module defines structures for tracking and reporting batch import
//! results.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::core::import::result::ImportResult;
use crate::domain::OrderId;

/// Summary of a batch import operation
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Per-order outcomes, keyed by source order id
    pub results: BTreeMap<OrderId, ImportResult>,

    /// Total number of orders attempted
    pub total_orders: usize,

    /// Number of headers inserted
    pub headers_created: usize,

    /// Number of headers overwritten
    pub headers_updated: usize,

    /// Number of headers that did not persist
    pub headers_failed: usize,

    /// Number of line items saved
    pub lines_saved: usize,

    /// Number of line items that failed
    pub lines_failed: usize,

    /// Duration of the import
    pub duration: Duration,
}

impl ImportSummary {
    /// Create a new empty import summary
    pub fn new() -> Self {
        Self {
            results: BTreeMap::new(),
            total_orders: 0,
            headers_created: 0,
            headers_updated: 0,
            headers_failed: 0,
            lines_saved: 0,
            lines_failed: 0,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Fold one order's outcome into the counters and keep the result
    pub fn record(&mut self, result: ImportResult) {
        use crate::core::import::result::HeaderOutcome;

        self.total_orders += 1;
        match result.header {
            HeaderOutcome::Created { .. } => self.headers_created += 1,
            HeaderOutcome::Updated { .. } => self.headers_updated += 1,
            HeaderOutcome::Failed => self.headers_failed += 1,
        }
        self.lines_saved += result.lines_saved();
        self.lines_failed += result.lines_failed();
        self.results.insert(result.order_id.clone(), result);
    }

    /// Count of orders that imported cleanly
    pub fn successful_orders(&self) -> usize {
        self.results.values().filter(|r| r.is_success()).count()
    }

    /// Count of orders with at least one recorded failure
    pub fn failed_orders(&self) -> usize {
        self.total_orders - self.successful_orders()
    }

    /// Check if the import was successful (no failures anywhere)
    pub fn is_successful(&self) -> bool {
        self.failed_orders() == 0
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_orders == 0 {
            return 100.0;
        }
        (self.successful_orders() as f64 / self.total_orders as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_orders = self.total_orders,
            headers_created = self.headers_created,
            headers_updated = self.headers_updated,
            headers_failed = self.headers_failed,
            lines_saved = self.lines_saved,
            lines_failed = self.lines_failed,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Import completed"
        );

        for result in self.results.values() {
            for entry in &result.errors {
                tracing::warn!(
                    order_id = %result.order_id,
                    scope = ?entry.scope,
                    message = %entry.message,
                    "Import error"
                );
            }
        }
    }
}

impl Default for ImportSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::import::result::{ErrorScope, HeaderOutcome};
    use crate::domain::TargetRecord;

    fn order_id(s: &str) -> OrderId {
        OrderId::new(s).unwrap()
    }

    #[test]
    fn test_import_summary_creation() {
        let summary = ImportSummary::new();

        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.headers_created, 0);
        assert_eq!(summary.lines_saved, 0);
        assert_eq!(summary.duration, Duration::from_secs(0));
        assert!(summary.results.is_empty());
        assert!(summary.is_successful());
        assert_eq!(summary.success_rate(), 100.0);
    }

    #[test]
    fn test_import_summary_with_duration() {
        let summary = ImportSummary::new().with_duration(Duration::from_secs(45));

        assert_eq!(summary.duration, Duration::from_secs(45));
    }

    #[test]
    fn test_record_counts_header_outcomes() {
        let mut summary = ImportSummary::new();

        let mut created = ImportResult::new(order_id("100"));
        created.header = HeaderOutcome::Created {
            record: TargetRecord::new(),
        };
        summary.record(created);

        let mut updated = ImportResult::new(order_id("101"));
        updated.header = HeaderOutcome::Updated {
            record: TargetRecord::new(),
        };
        summary.record(updated);

        summary.record(ImportResult::new(order_id("102")));

        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.headers_created, 1);
        assert_eq!(summary.headers_updated, 1);
        assert_eq!(summary.headers_failed, 1);
        assert_eq!(summary.successful_orders(), 2);
        assert_eq!(summary.failed_orders(), 1);
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_success_rate() {
        let mut summary = ImportSummary::new();

        let mut ok = ImportResult::new(order_id("100"));
        ok.header = HeaderOutcome::Created {
            record: TargetRecord::new(),
        };
        summary.record(ok);

        let mut bad = ImportResult::new(order_id("101"));
        bad.header = HeaderOutcome::Created {
            record: TargetRecord::new(),
        };
        bad.add_error(ErrorScope::Lines, "fetch failed");
        summary.record(bad);

        assert_eq!(summary.success_rate(), 50.0);
    }
}
