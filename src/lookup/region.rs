//! Region-abbreviation lookup
//!
//! The platform reports billing and shipping regions as long-form names
//! ("Oregon"); the store wants the abbreviated code ("OR"). The lookup is a
//! trait so deployments can plug in their own source; the built-in table
//! covers US states plus DC.

/// Normalizes a long-form region name to its abbreviated code
pub trait RegionLookup: Send + Sync {
    /// Returns the abbreviation for a long-form name.
    ///
    /// Names the lookup doesn't know pass through unchanged, so already
    /// abbreviated input is stable under repeated application.
    fn abbreviate(&self, long_form: &str) -> String;
}

/// US state + DC abbreviation table
#[derive(Debug, Clone, Default)]
pub struct UsStateLookup;

const US_STATES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("district of columbia", "DC"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

impl RegionLookup for UsStateLookup {
    fn abbreviate(&self, long_form: &str) -> String {
        let needle = long_form.trim().to_lowercase();
        US_STATES
            .iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, code)| (*code).to_string())
            .unwrap_or_else(|| long_form.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Oregon", "OR")]
    #[test_case("california", "CA")]
    #[test_case("  New York  ", "NY")]
    #[test_case("District of Columbia", "DC")]
    fn test_known_states(input: &str, expected: &str) {
        assert_eq!(UsStateLookup.abbreviate(input), expected);
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert_eq!(UsStateLookup.abbreviate("Ontario"), "Ontario");
        assert_eq!(UsStateLookup.abbreviate(""), "");
    }

    #[test]
    fn test_abbreviation_is_stable() {
        let once = UsStateLookup.abbreviate("Oregon");
        let twice = UsStateLookup.abbreviate(&once);
        assert_eq!(twice, "OR");
    }
}
