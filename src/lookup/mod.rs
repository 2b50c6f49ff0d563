//! Lookup collaborators used by post-mapping corrections
//!
//! Two corrections aren't expressible as simple path rules: normalizing a
//! long-form region name to its abbreviated code, and resolving a raw
//! payment-method label to the store's payment-type code.

pub mod payment;
pub mod region;

pub use payment::{PaymentTypeTable, DEFAULT_ENTRY};
pub use region::{RegionLookup, UsStateLookup};
