//! Route matching module
//!
//! Implements the path and query predicates a fixture route can be keyed on.

use std::fmt;

use super::RequestView;

/// Route matching condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// Path equals the given string
    Exact(&'static str),
    /// Path ends with the given string
    Suffix(&'static str),
    /// Path starts with the given string
    Prefix(&'static str),
    /// Any of the named query parameters carries a non-empty value
    QueryParam(&'static [&'static str]),
}

impl RouteMatch {
    pub fn matches(&self, req: &RequestView<'_>) -> bool {
        match self {
            Self::Exact(path) => req.path == *path,
            Self::Suffix(suffix) => req.path.ends_with(suffix),
            Self::Prefix(prefix) => req.path.starts_with(prefix),
            Self::QueryParam(names) => names.iter().any(|name| req.query.contains(name)),
        }
    }
}

impl fmt::Display for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => write!(f, "{path}"),
            Self::Suffix(suffix) => write!(f, "*{suffix}"),
            Self::Prefix(prefix) => write!(f, "{prefix}*"),
            Self::QueryParam(names) => {
                let params: Vec<String> = names.iter().map(|n| format!("?{n}=")).collect();
                write!(f, "{}", params.join(" | "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::QueryParams;

    fn matches(rule: RouteMatch, path: &str, query: &str) -> bool {
        let query = QueryParams::parse(query);
        rule.matches(&RequestView { path, query: &query })
    }

    #[test]
    fn test_match_exact() {
        let rule = RouteMatch::Exact("/debug");
        assert!(matches(rule, "/debug", ""));
        assert!(matches(rule, "/debug", "verbose=1"));
        assert!(!matches(rule, "/debug/", ""));
        assert!(!matches(rule, "/debugger", ""));
    }

    #[test]
    fn test_match_suffix() {
        let rule = RouteMatch::Suffix(".env");
        assert!(matches(rule, "/.env", ""));
        assert!(matches(rule, "/deep/path/file.env", ""));
        assert!(!matches(rule, "/.env.bak", ""));
        assert!(!matches(rule, "/", "file=.env"));
    }

    #[test]
    fn test_match_prefix() {
        let rule = RouteMatch::Prefix("/assets/constants.js");
        assert!(matches(rule, "/assets/constants.js", ""));
        assert!(matches(rule, "/assets/constants.jsx", ""));
        assert!(matches(rule, "/assets/constants.js.map", ""));
        assert!(!matches(rule, "/assets/theme.js", ""));
    }

    #[test]
    fn test_match_query_param_presence() {
        let rule = RouteMatch::QueryParam(&["redirect", "next"]);
        assert!(matches(rule, "/", "next=/home"));
        assert!(matches(rule, "/any/path", "redirect=//x"));
        assert!(!matches(rule, "/", "next="));
        assert!(!matches(rule, "/", "nextpage=2"));
        assert!(!matches(rule, "/next", ""));
    }

    #[test]
    fn test_display() {
        assert_eq!(RouteMatch::Exact("/debug").to_string(), "/debug");
        assert_eq!(RouteMatch::Suffix(".env").to_string(), "*.env");
        assert_eq!(RouteMatch::Prefix("/assets").to_string(), "/assets*");
        assert_eq!(
            RouteMatch::QueryParam(&["a", "b"]).to_string(),
            "?a= | ?b="
        );
    }
}
