//! Namespace normalization
//!
//! Customers configure their BambooHR account in whatever shape they copied
//! it from: `acme`, `acme.bamboohr.com` or `https://acme.bamboohr.com/home`.
//! The API gateway only wants the leading subdomain segment.

use once_cell::sync::Lazy;
use regex::Regex;

static NAMESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?([^.:/\s]+)(?:[./]|$)")
        .expect("NAMESPACE_REGEX should compile - this is a bug")
});

/// Extract the account namespace from a subdomain, hostname or URL.
///
/// Returns `None` when nothing precedes the first `.` (or the input is
/// empty).
///
/// # Examples
///
/// ```
/// use peoplesync_domain::utils::namespace::parse_namespace;
///
/// assert_eq!(parse_namespace("https://acme.bamboohr.com"), Some("acme".to_string()));
/// assert_eq!(parse_namespace(""), None);
/// ```
#[must_use]
pub fn parse_namespace(input: &str) -> Option<String> {
    NAMESPACE_REGEX
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|segment| segment.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_subdomain_is_returned_as_is() {
        assert_eq!(parse_namespace("acme"), Some("acme".to_string()));
    }

    #[test]
    fn scheme_and_provider_domain_are_stripped() {
        assert_eq!(parse_namespace("https://acme.bamboohr.com"), Some("acme".to_string()));
        assert_eq!(parse_namespace("http://acme.bamboohr.com"), Some("acme".to_string()));
    }

    #[test]
    fn trailing_path_is_ignored() {
        assert_eq!(parse_namespace("acme.bamboohr.com/path"), Some("acme".to_string()));
        assert_eq!(parse_namespace("https://acme.bamboohr.com/home/"), Some("acme".to_string()));
    }

    #[test]
    fn hyphenated_namespaces_survive() {
        assert_eq!(parse_namespace("acme-corp.bamboohr.com"), Some("acme-corp".to_string()));
    }

    #[test]
    fn empty_or_segmentless_input_yields_none() {
        assert_eq!(parse_namespace(""), None);
        assert_eq!(parse_namespace(".bamboohr.com"), None);
        assert_eq!(parse_namespace("https://"), None);
        assert_eq!(parse_namespace("https://.bamboohr.com"), None);
    }

    #[test]
    fn bare_scheme_is_not_a_namespace() {
        assert_eq!(parse_namespace("http://"), None);
        assert_eq!(parse_namespace("https:"), None);
        assert_eq!(parse_namespace("acme:8080"), None);
    }
}
