//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers that cross the
//! platform and store boundaries. Each type ensures the two id spaces (source
//! order ids, source line ids) and the store session cannot be mixed up.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Source order identifier newtype wrapper
///
/// The platform exposes order ids as integers in its JSON payloads; the store
/// keys records by their string form, so the wrapper normalizes to a string.
///
/// # Examples
///
/// ```
/// use orderlift::domain::ids::OrderId;
/// use std::str::FromStr;
///
/// let order_id = OrderId::from_str("4100").unwrap();
/// assert_eq!(order_id.as_str(), "4100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new OrderId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Order ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Reads the `id` property off a decoded platform record
    ///
    /// Integer and string ids both normalize to the string form.
    pub fn from_record(record: &Value) -> Result<Self, String> {
        match record.get("id") {
            Some(Value::String(s)) => Self::new(s.clone()),
            Some(Value::Number(n)) => Self::new(n.to_string()),
            _ => Err("Record has no usable 'id' property".to_string()),
        }
    }

    /// Returns the order ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source line-item identifier newtype wrapper
///
/// Identifies one line item within a source order. Per-line import outcomes
/// are keyed by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(String);

impl LineId {
    /// Creates a new LineId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Line ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Reads the `id` property off a decoded line-item record
    pub fn from_record(record: &Value) -> Result<Self, String> {
        match record.get("id") {
            Some(Value::String(s)) => Self::new(s.clone()),
            Some(Value::Number(n)) => Self::new(n.to_string()),
            _ => Err("Line record has no usable 'id' property".to_string()),
        }
    }

    /// Returns the line ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Store session identifier newtype wrapper
///
/// The order store scopes its existence checks by an import session; the
/// upsert decision is keyed by (session, order number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Session ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the session ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
