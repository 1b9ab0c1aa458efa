//! Known Piano API region endpoints

pub const PRODUCTION: &str = "https://api.piano.io/api/v3";
pub const SANDBOX: &str = "https://sandbox.piano.io/api/v3";
pub const EUROPE: &str = "https://api-eu.piano.io/api/v3";
pub const AUSTRALIA: &str = "https://api-au.piano.io/api/v3";
pub const ASIA_PACIFIC: &str = "https://api-ap.piano.io/api/v3";

pub const DEFAULT_ENDPOINTS: [&str; 5] = [PRODUCTION, SANDBOX, EUROPE, AUSTRALIA, ASIA_PACIFIC];

/// Prefix allow-list for API base URLs.
///
/// Matching is a case-sensitive `starts_with`; no trailing slash or scheme
/// normalization happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointAllowList {
    prefixes: Vec<String>,
}

impl Default for EndpointAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINTS)
    }
}

impl EndpointAllowList {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_endpoint(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        self.prefixes.iter().any(|prefix| url.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

/// Checks `url` against the built-in Piano regions
pub fn is_valid_endpoint(url: &str) -> bool {
    EndpointAllowList::default().is_allowed(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_region_prefixes() {
        assert!(is_valid_endpoint("https://api.piano.io/api/v3/foo"));
        assert!(is_valid_endpoint("https://sandbox.piano.io/api/v3"));
        assert!(is_valid_endpoint("https://api-ap.piano.io/api/v3/publisher/app/get"));
    }

    #[test]
    fn rejects_unknown_hosts() {
        assert!(!is_valid_endpoint("https://evil.example.com"));
        assert!(!is_valid_endpoint(""));
    }

    #[test]
    fn matching_is_exact_prefix_only() {
        assert!(!is_valid_endpoint("HTTPS://api.piano.io/api/v3"));
        assert!(!is_valid_endpoint("http://api.piano.io/api/v3"));
        assert!(!is_valid_endpoint("https://api.piano.io/api/v2"));
        assert!(!is_valid_endpoint("https://api.piano.io"));
    }

    #[test]
    fn default_list_matches_free_function() {
        let allow_list = EndpointAllowList::default();
        assert_eq!(allow_list.prefixes().len(), 5);
        for url in ["https://api-eu.piano.io/api/v3/x", "https://evil.example.com"] {
            assert_eq!(allow_list.is_allowed(url), is_valid_endpoint(url));
        }
    }

    #[test]
    fn custom_list_substitutes_regions() {
        let staging = EndpointAllowList::new(["https://staging.piano.test/api/v3"]);
        assert!(staging.is_allowed("https://staging.piano.test/api/v3/publisher"));
        assert!(!staging.is_allowed("https://api.piano.io/api/v3"));

        let extended = EndpointAllowList::default().with_endpoint("http://127.0.0.1");
        assert!(extended.is_allowed("http://127.0.0.1:1234"));
        assert!(extended.is_allowed("https://api.piano.io/api/v3"));
    }
}
