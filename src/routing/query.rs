//! Query string parsing
//!
//! Decodes `application/x-www-form-urlencoded` pairs. Only the first
//! non-empty value of each key is kept; blank values are dropped entirely,
//! so `?redirect=` does not count as the parameter being present.

use std::collections::HashMap;

/// Parsed query parameters, first value per key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`)
    pub fn parse(raw: &str) -> Self {
        let mut values = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// First of `keys` (in the given order) that is present, with its value
    pub fn first_of<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &str)> {
        keys.iter()
            .find_map(|key| self.get(key).map(|value| (*key, value)))
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let q = QueryParams::parse("next=/a&next=/b");
        assert_eq!(q.get("next"), Some("/a"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let q = QueryParams::parse("redirect=&flag&next=/home");
        assert!(!q.contains("redirect"));
        assert!(!q.contains("flag"));
        assert_eq!(q.get("next"), Some("/home"));

        let q = QueryParams::parse("redirect=&redirect=//x");
        assert_eq!(q.get("redirect"), Some("//x"));
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let q = QueryParams::parse("redirect=https%3A%2F%2Fevil.com%2Fa+b");
        assert_eq!(q.get("redirect"), Some("https://evil.com/a b"));
    }

    #[test]
    fn test_unencoded_url_value() {
        let q = QueryParams::parse("redirect=https://evil-site.com/path?x=1");
        // '&' splits pairs, but ':', '/', '?' and '=' after the first are kept
        assert_eq!(q.get("redirect"), Some("https://evil-site.com/path?x=1"));
    }

    #[test]
    fn test_first_of_respects_key_order() {
        let q = QueryParams::parse("callback=//c&return_to=//r");
        let keys = ["redirect", "return_to", "next", "callback"];
        assert_eq!(q.first_of(&keys), Some(("return_to", "//r")));
        assert_eq!(QueryParams::parse("other=1").first_of(&keys), None);
    }

    #[test]
    fn test_empty_and_malformed_input() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("&&&").is_empty());
        let q = QueryParams::parse("%zz=1");
        assert!(!q.contains("redirect"));
    }
}
