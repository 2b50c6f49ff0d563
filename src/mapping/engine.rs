//! Field resolution and value formatting
//!
//! The engine is pure and stateless: given a decoded source record, a target
//! field name, and a mapping rule, it resolves the raw value(s), joins
//! multi-path values, formats, and defaults. Resolution is total - a missing
//! key at any step degrades to the empty string and never errors. Absent data
//! is therefore indistinguishable from empty data; downstream defaulting
//! relies on that, so the only signal for missing paths is a debug-level
//! diagnostic log.

use crate::mapping::rule::{MappingRule, ValueFormat, DEFAULT_GLUE, MULTI_PATH_SEPARATOR};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Resolves one target field from a source record
///
/// The effective path set is `rule.source_path` when present, else
/// `field_name` itself. A `|`-separated spec resolves each sub-path
/// independently and joins the raw values with the rule's glue before
/// formatting.
///
/// # Examples
///
/// ```
/// use orderlift::mapping::{resolve_field, MappingRule};
/// use serde_json::json;
///
/// let order = json!({"billing_address": {"city": "Portland"}});
/// let rule = MappingRule::path("billing_address.city");
/// assert_eq!(resolve_field(&order, "billcity", &rule), "Portland");
/// ```
pub fn resolve_field(source: &Value, field_name: &str, rule: &MappingRule) -> String {
    let raw = resolve_raw(source, field_name, rule);
    format_value(raw, rule)
}

/// Resolves the unformatted raw value for a rule
///
/// Exposed so callers can observe the join step before cleaning: a missing
/// side of a multi-path rule contributes an empty string but the glue is
/// still inserted (`"Jane "` for `first_name|last_name` with no last name).
pub fn resolve_raw(source: &Value, field_name: &str, rule: &MappingRule) -> String {
    let spec = rule.effective_path(field_name);

    if spec.contains(MULTI_PATH_SEPARATOR) {
        let glue = rule.glue.as_deref().unwrap_or(DEFAULT_GLUE);
        spec.split(MULTI_PATH_SEPARATOR)
            .map(|path| find_value(source, path))
            .collect::<Vec<_>>()
            .join(glue)
    } else {
        find_value(source, spec)
    }
}

/// Travels down a dotted property path and reads the leaf value
///
/// Each `.` descends one named child; the last segment is the leaf property
/// read off the final descended container. A path without `.` reads directly
/// off the source record. Missing keys at any step resolve to empty string.
fn find_value(source: &Value, path: &str) -> String {
    let mut container = source;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            return leaf_value(container, segment, path);
        }
        match container.get(segment) {
            Some(child) => container = child,
            None => {
                tracing::debug!(path, segment, "source path missing, resolved to empty");
                return String::new();
            }
        }
    }
    String::new()
}

/// Reads a named leaf property off a container as a string
fn leaf_value(container: &Value, property: &str, path: &str) -> String {
    match container.get(property) {
        Some(value) => scalar_to_string(value),
        None => {
            tracing::debug!(path, property, "source property missing, resolved to empty");
            String::new()
        }
    }
}

/// Renders a decoded scalar as the string the formatter works on
///
/// Containers and null degrade to empty, matching the missing-path policy.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Applies a rule's formatting, literal override, and defaulting to a raw value
///
/// Order matters and matches the rule semantics exactly:
/// 1. `format` (date/currency), else `max_length` truncation, else cleaning
/// 2. `literal` overrides the computed value, cleaned, unconditionally
/// 3. `default` substitutes only when the result is empty
pub fn format_value(raw: String, rule: &MappingRule) -> String {
    let mut value = match &rule.format {
        Some(ValueFormat::Date { pattern }) => format_date(&clean_value(&raw), pattern),
        Some(ValueFormat::Currency) => format_currency(&raw),
        None => {
            let cleaned = clean_value(&raw);
            match rule.max_length {
                Some(len) => cleaned.chars().take(len).collect(),
                None => cleaned,
            }
        }
    };

    if let Some(literal) = &rule.literal {
        value = clean_value(literal);
    }

    if value.is_empty() {
        if let Some(default) = &rule.default {
            return default.clone();
        }
    }
    value
}

/// Strips all carriage-return and line-feed characters, then trims
/// surrounding whitespace
pub fn clean_value(value: &str) -> String {
    value
        .replace(['\r', '\n'], "")
        .trim()
        .to_string()
}

/// Reformats a loosely-specified date/time string with a chrono pattern
///
/// Accepts RFC 3339, RFC 2822 (the platform's v2 API date form), and the
/// common bare date/date-time layouts. Unparsable input yields the empty
/// string, which lets `default` take over.
fn format_date(raw: &str, pattern: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(pattern).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format(pattern).to_string();
    }
    for layout in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return dt.format(pattern).to_string();
        }
    }
    for layout in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, layout) {
            return d.format(pattern).to_string();
        }
    }

    tracing::debug!(raw, "unparsable date input, resolved to empty");
    String::new()
}

/// Renders a raw value as a fixed-point two-decimal amount
///
/// Non-numeric input coerces to zero; a numeric prefix is honored the way
/// loose float coercion does it. No grouping separators.
fn format_currency(raw: &str) -> String {
    format!("{:.2}", parse_loose_f64(raw.trim()))
}

/// Parses the longest leading float out of a string, zero when there is none
fn parse_loose_f64(raw: &str) -> f64 {
    if let Ok(v) = raw.parse::<f64>() {
        return v;
    }

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in raw.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    raw[..end].parse::<f64>().unwrap_or(0.0)
}

/// Applies every rule in a schema to a source record, writing the resolved
/// values into a target record
pub fn apply_schema(
    source: &Value,
    schema: &crate::mapping::rule::MappingSchema,
    target: &mut crate::domain::TargetRecord,
) {
    for (field, rule) in schema.iter() {
        target.set(field, resolve_field(source, field, rule));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TargetRecord;
    use crate::mapping::rule::MappingSchema;
    use serde_json::json;
    use test_case::test_case;

    fn order() -> Value {
        json!({
            "id": 4100,
            "customer_id": 88,
            "date_created": "2023-01-05T00:00:00Z",
            "total_inc_tax": 123.4,
            "payment_method": "Credit Card",
            "staff_notes": "ship \r\n promptly ",
            "billing_address": {
                "first_name": "Jane",
                "last_name": "Doe",
                "company": "Acme Corp",
                "street_1": "100 Main St",
                "city": "Portland",
                "state": "Oregon"
            }
        })
    }

    #[test]
    fn test_direct_property() {
        let rule = MappingRule::path("customer_id");
        assert_eq!(resolve_field(&order(), "custid", &rule), "88");
    }

    #[test]
    fn test_field_name_used_when_no_source_path() {
        let rule = MappingRule::same_name();
        assert_eq!(resolve_field(&order(), "payment_method", &rule), "Credit Card");
    }

    #[test]
    fn test_dotted_path_descends_named_children() {
        let rule = MappingRule::path("billing_address.street_1");
        assert_eq!(resolve_field(&order(), "billaddress", &rule), "100 Main St");
    }

    #[test]
    fn test_missing_path_resolves_to_empty() {
        let rule = MappingRule::path("billing_address.street_2");
        assert_eq!(resolve_field(&order(), "billaddress2", &rule), "");

        // Missing intermediate container, not just the leaf
        let rule = MappingRule::path("shipping_address.street_1");
        assert_eq!(resolve_field(&order(), "shipaddress", &rule), "");
    }

    #[test]
    fn test_present_path_returns_cleaned_raw_value() {
        let rule = MappingRule::path("staff_notes");
        // Only newline/carriage-return stripping and trimming
        assert_eq!(resolve_field(&order(), "notes", &rule), "ship  promptly");
    }

    #[test]
    fn test_multi_path_join_with_default_glue() {
        let source = json!({"first_name": "Jane", "last_name": "Doe"});
        let rule = MappingRule::path("first_name|last_name");
        assert_eq!(resolve_field(&source, "sconame", &rule), "Jane Doe");
    }

    #[test]
    fn test_multi_path_missing_side_keeps_glue_artifact() {
        let source = json!({"first_name": "Jane"});
        let rule = MappingRule::path("first_name|last_name");

        // The glue is always inserted at the join step...
        assert_eq!(resolve_raw(&source, "sconame", &rule), "Jane ");
        // ...and cleaning trims it off the final value.
        assert_eq!(resolve_field(&source, "sconame", &rule), "Jane");
    }

    #[test]
    fn test_multi_path_custom_glue() {
        let source = json!({"city": "Portland", "state": "OR"});
        let rule = MappingRule::path("city|state").glue(", ");
        assert_eq!(resolve_field(&source, "citystate", &rule), "Portland, OR");
    }

    #[test_case("19.999", "20.00")]
    #[test_case("abc", "0.00")]
    #[test_case("", "0.00")]
    #[test_case("7", "7.00")]
    #[test_case("-1.005", "-1.00" ; "negative rounds per float repr")]
    #[test_case("19.99usd", "19.99" ; "numeric prefix honored")]
    fn test_currency_formatting(raw: &str, expected: &str) {
        let rule = MappingRule::path("amount").currency();
        let source = json!({ "amount": raw });
        assert_eq!(resolve_field(&source, "amount", &rule), expected);
    }

    #[test]
    fn test_currency_no_grouping_separators() {
        let source = json!({"amount": 1234567.891});
        let rule = MappingRule::path("amount").currency();
        assert_eq!(resolve_field(&source, "amount", &rule), "1234567.89");
    }

    #[test]
    fn test_date_formatting_rfc3339() {
        let rule = MappingRule::path("date_created").date("%Y%m%d");
        assert_eq!(resolve_field(&order(), "orderdate", &rule), "20230105");
    }

    #[test]
    fn test_date_formatting_rfc2822() {
        let source = json!({"date_created": "Thu, 05 Jan 2023 00:00:00 +0000"});
        let rule = MappingRule::path("date_created").date("%Y%m%d");
        assert_eq!(resolve_field(&source, "orderdate", &rule), "20230105");
    }

    #[test]
    fn test_date_embedded_newlines_cleaned_before_parse() {
        let source = json!({"date_created": "2023-01-05\r\n"});
        let rule = MappingRule::path("date_created").date("%Y%m%d");
        assert_eq!(resolve_field(&source, "orderdate", &rule), "20230105");
    }

    #[test]
    fn test_unparsable_date_is_empty() {
        let source = json!({"date_created": "not a date"});
        let rule = MappingRule::path("date_created").date("%Y%m%d");
        assert_eq!(resolve_field(&source, "orderdate", &rule), "");
    }

    #[test]
    fn test_unparsable_date_falls_back_to_default() {
        let source = json!({"date_shipped": "garbage"});
        let rule = MappingRule::path("date_shipped")
            .date("%Y%m%d")
            .default_value("00000000");
        assert_eq!(resolve_field(&source, "shipdate", &rule), "00000000");
    }

    #[test]
    fn test_max_length_truncates_cleaned_value() {
        let source = json!({"name": "  Widget Deluxe Edition\n"});
        let rule = MappingRule::path("name").max_length(10);
        assert_eq!(resolve_field(&source, "desc1", &rule), "Widget Del");
    }

    #[test]
    fn test_default_only_when_empty() {
        let source = json!({"company": ""});
        let rule = MappingRule::path("company").default_value("RETAIL");
        assert_eq!(resolve_field(&source, "custname", &rule), "RETAIL");

        // "0" and "0.00" are values, not emptiness
        let source = json!({"qty": "0"});
        let rule = MappingRule::path("qty").default_value("1");
        assert_eq!(resolve_field(&source, "qty", &rule), "0");

        let source = json!({"freight": "0"});
        let rule = MappingRule::path("freight").currency().default_value("9.99");
        assert_eq!(resolve_field(&source, "freight", &rule), "0.00");
    }

    #[test]
    fn test_literal_always_wins() {
        // Even when the path would resolve successfully
        let rule = MappingRule {
            source_path: Some("billing_address.company".to_string()),
            literal: Some(" WEB \n".to_string()),
            ..MappingRule::default()
        };
        assert_eq!(resolve_field(&order(), "source", &rule), "WEB");

        // And when the path is missing
        let rule = MappingRule::constant("WEB");
        assert_eq!(resolve_field(&order(), "nonexistent", &rule), "WEB");
    }

    #[test]
    fn test_literal_then_default_when_literal_cleans_to_empty() {
        let rule = MappingRule::constant("  \r\n  ").default_value("NA");
        assert_eq!(resolve_field(&order(), "anything", &rule), "NA");
    }

    #[test]
    fn test_null_and_container_values_degrade_to_empty() {
        let source = json!({"a": null, "b": [1, 2], "c": {"nested": 1}});
        for field in ["a", "b", "c"] {
            let rule = MappingRule::path(field).default_value("-");
            assert_eq!(resolve_field(&source, field, &rule), "-");
        }
    }

    #[test]
    fn test_apply_schema_writes_every_field_in_order() {
        let schema = MappingSchema::new("header")
            .rule("orderno", MappingRule::path("id"))
            .rule("custid", MappingRule::path("customer_id"))
            .rule("ordertotal", MappingRule::path("total_inc_tax").currency())
            .rule("billcity", MappingRule::path("billing_address.city"));

        let mut record = TargetRecord::new();
        apply_schema(&order(), &schema, &mut record);

        assert_eq!(record.get("orderno"), Some("4100"));
        assert_eq!(record.get("custid"), Some("88"));
        assert_eq!(record.get("ordertotal"), Some("123.40"));
        assert_eq!(record.get("billcity"), Some("Portland"));

        let fields: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(fields, vec!["orderno", "custid", "ordertotal", "billcity"]);
    }

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("  a\r\nb  "), "ab");
        assert_eq!(clean_value("\r\n"), "");
        assert_eq!(clean_value("plain"), "plain");
    }
}
