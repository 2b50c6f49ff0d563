//! Per-order import outcome
//!
//! One `ImportResult` is produced for every source order the orchestrator
//! attempts, whether or not any part of it persisted. Failures inside an
//! order are recorded here instead of aborting the batch.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{LineId, OrderId, TargetRecord};

/// What happened to the order header
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HeaderOutcome {
    /// Header did not exist and was inserted
    Created { record: TargetRecord },
    /// Header existed and was overwritten
    Updated { record: TargetRecord },
    /// Header could not be built or the store rejected it
    Failed,
}

impl HeaderOutcome {
    /// True when the header landed in the store
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Created { .. } | Self::Updated { .. })
    }
}

/// What happened to a single line item
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LineOutcome {
    Saved { record: TargetRecord },
    Failed,
}

/// Which part of the order an error belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorScope {
    /// Building or persisting the header
    Header,
    /// Fetching or decoding the line-item set as a whole
    Lines,
    /// One specific line item
    Line(LineId),
}

/// A recorded, non-fatal failure within one order
#[derive(Debug, Clone, Serialize)]
pub struct ImportErrorEntry {
    pub scope: ErrorScope,
    pub message: String,
}

/// Aggregated outcome for one source order
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub order_id: OrderId,
    pub header: HeaderOutcome,
    pub lines: BTreeMap<LineId, LineOutcome>,
    pub errors: Vec<ImportErrorEntry>,
}

impl ImportResult {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            header: HeaderOutcome::Failed,
            lines: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, scope: ErrorScope, message: impl Into<String>) {
        self.errors.push(ImportErrorEntry {
            scope,
            message: message.into(),
        });
    }

    /// True when the header persisted and nothing inside the order failed
    pub fn is_success(&self) -> bool {
        self.header.is_persisted() && self.errors.is_empty()
    }

    pub fn lines_saved(&self) -> usize {
        self.lines
            .values()
            .filter(|o| matches!(o, LineOutcome::Saved { .. }))
            .count()
    }

    pub fn lines_failed(&self) -> usize {
        self.lines
            .values()
            .filter(|o| matches!(o, LineOutcome::Failed))
            .count()
    }
}
