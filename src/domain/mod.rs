//! Domain models and types for Orderlift.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrderId`], [`LineId`], [`SessionId`])
//! - **The target record model** ([`TargetRecord`])
//! - **Error types** ([`ImportError`], [`PlatformError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Orderlift uses the newtype pattern for identifiers to prevent mixing
//! different id types:
//!
//! ```rust
//! use orderlift::domain::{OrderId, LineId};
//!
//! # fn example() -> Result<(), String> {
//! let order_id = OrderId::new("4100")?;
//! let line_id = LineId::new("16")?;
//!
//! // This won't compile - type safety prevents mixing ids
//! // let wrong: OrderId = line_id;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ImportError, PlatformError, StoreError};
pub use ids::{LineId, OrderId, SessionId};
pub use record::TargetRecord;
pub use result::Result;
