//! Target record model
//!
//! A target record is the flat field-set for one header or line row in the
//! destination store. It is built incrementally by applying every rule in a
//! mapping schema, handed to the store, and discarded.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Flat, insertion-ordered mapping from target field name to scalar value
///
/// Field order follows the order fields were set, which in turn follows the
/// schema's rule order, so serialized output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRecord {
    fields: Vec<(String, String)>,
}

impl TargetRecord {
    /// Creates an empty target record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Sets a field value, replacing any existing value for the same field
    ///
    /// Replacement keeps the field's original position so post-mapping
    /// corrections don't reorder the record.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Returns the value of a field, if set
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields set
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for TargetRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
