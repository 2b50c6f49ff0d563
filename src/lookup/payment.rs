//! Payment-type lookup table
//!
//! The platform reports a free-form payment-method label ("Credit Card",
//! "PayPal"); the store wants its own fixed payment-type code. The table is a
//! static mapping with a `default` fallback entry and can be overridden from
//! the `[payment_types]` configuration section.

use std::collections::BTreeMap;

/// Key of the fallback entry
pub const DEFAULT_ENTRY: &str = "default";

/// Static mapping from raw payment-method label to target payment-type code
///
/// Lookups are case-insensitive and whitespace-trimmed. Unmapped labels fall
/// back to the `default` entry.
#[derive(Debug, Clone)]
pub struct PaymentTypeTable {
    entries: BTreeMap<String, String>,
    default: String,
}

impl PaymentTypeTable {
    /// Builds a table from label/code pairs plus a fallback code
    pub fn new(
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
        default: impl Into<String>,
    ) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(label, code)| (normalize(&label.into()), code.into()))
            .collect();
        Self {
            entries,
            default: default.into(),
        }
    }

    /// Builds a table from a config-style map, where the `default` key names
    /// the fallback code
    ///
    /// A missing `default` key falls back to the built-in table's fallback.
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let default = map
            .get(DEFAULT_ENTRY)
            .cloned()
            .unwrap_or_else(|| Self::default().default);
        let pairs = map
            .iter()
            .filter(|(label, _)| label.as_str() != DEFAULT_ENTRY)
            .map(|(label, code)| (label.clone(), code.clone()));
        Self::new(pairs, default)
    }

    /// Resolves a raw label to its payment-type code
    pub fn resolve(&self, label: &str) -> &str {
        self.entries
            .get(&normalize(label))
            .unwrap_or(&self.default)
            .as_str()
    }

    /// The fallback code
    pub fn default_code(&self) -> &str {
        &self.default
    }
}

impl Default for PaymentTypeTable {
    fn default() -> Self {
        Self::new(
            [
                ("credit card", "CC"),
                ("creditcard", "CC"),
                ("visa", "CC"),
                ("mastercard", "CC"),
                ("american express", "CC"),
                ("paypal", "PP"),
                ("gift certificate", "GC"),
                ("store credit", "SC"),
                ("money order", "MO"),
                ("check", "CHK"),
                ("cash on delivery", "COD"),
            ],
            "OT",
        )
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
