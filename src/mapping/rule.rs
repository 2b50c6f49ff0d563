//! Declarative mapping rules and schemas
//!
//! A mapping rule describes how one target field is derived from a source
//! record: which source path(s) to read, how to format the raw value, and
//! what to fall back to. A schema is the ordered rule set for one record
//! section (header, shipping, line). Keeping the rules as data preserves the
//! "add a field by editing a table" extensibility of the rule tables.

/// Output formatting applied to a resolved raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueFormat {
    /// Parse as a loosely-specified date/time string, reformat with the
    /// given chrono pattern (e.g. `%Y%m%d`)
    Date { pattern: String },
    /// Coerce to a float and render fixed-point with two decimals
    Currency,
}

/// Separator used inside a source-path spec to name multiple paths
pub const MULTI_PATH_SEPARATOR: char = '|';

/// Glue inserted between multi-path values when the rule names none
pub const DEFAULT_GLUE: &str = " ";

/// How to derive one target field from a source record
///
/// Exactly one of {derive from `source_path`, use `literal`} is authoritative
/// per evaluation; `default` applies only after formatting, when the value
/// came out empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingRule {
    /// One or more dotted property paths, separated by `|`. When absent the
    /// target field name itself is used as the path.
    pub source_path: Option<String>,

    /// Join string for multi-path rules; a single space when absent
    pub glue: Option<String>,

    /// Optional output formatting
    pub format: Option<ValueFormat>,

    /// Truncation length, applied to the cleaned value when no format is set
    pub max_length: Option<usize>,

    /// Constant that overrides whatever the source resolved to
    pub literal: Option<String>,

    /// Fallback used only when the resolved/formatted value is empty
    pub default: Option<String>,
}

impl MappingRule {
    /// Rule reading a single source path
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            source_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Rule reading the target field name itself as the path
    pub fn same_name() -> Self {
        Self::default()
    }

    /// Rule that ignores the source and always produces a constant
    pub fn constant(value: impl Into<String>) -> Self {
        Self {
            literal: Some(value.into()),
            ..Self::default()
        }
    }

    /// Sets the multi-path glue
    pub fn glue(mut self, glue: impl Into<String>) -> Self {
        self.glue = Some(glue.into());
        self
    }

    /// Formats the value as a date with the given chrono output pattern
    pub fn date(mut self, pattern: impl Into<String>) -> Self {
        self.format = Some(ValueFormat::Date {
            pattern: pattern.into(),
        });
        self
    }

    /// Formats the value as a fixed-point two-decimal amount
    pub fn currency(mut self) -> Self {
        self.format = Some(ValueFormat::Currency);
        self
    }

    /// Truncates the cleaned value to at most `len` characters
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Sets the empty-value fallback
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The effective path spec for a given target field name
    pub(crate) fn effective_path<'a>(&'a self, field_name: &'a str) -> &'a str {
        match self.source_path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => field_name,
        }
    }
}

/// Named, ordered collection of mapping rules for one record section
///
/// Fields are independent, but iteration order is the insertion order so
/// mapped records (and therefore tests and serialized output) are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct MappingSchema {
    name: String,
    rules: Vec<(String, MappingRule)>,
}

impl MappingSchema {
    /// Creates an empty schema with a section name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Section name (e.g. "header", "shipping", "line")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a rule for a target field, replacing any rule already present
    /// under the same field name
    pub fn rule(mut self, field: impl Into<String>, rule: MappingRule) -> Self {
        let field = field.into();
        match self.rules.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = rule,
            None => self.rules.push((field, rule)),
        }
        self
    }

    /// Looks up the rule for a target field
    pub fn get(&self, field: &str) -> Option<&MappingRule> {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    /// Iterates `(field, rule)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingRule)> {
        self.rules
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
