//! Host environment inputs.
//!
//! The browser exposes the page location and user agent as globals. Here they
//! are plain values so every helper can be driven without a browser.

use crate::utils::dom;

/// The query-bearing parts of a page location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// `location.search`, including its leading `?` when present.
    pub search: String,
    /// `location.hash`, including its leading `#` when present.
    pub hash: String,
}

impl Location {
    pub fn new(search: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            hash: hash.into(),
        }
    }

    /// Read the current page location.
    ///
    /// Empty outside a browser.
    pub fn current() -> Self {
        dom::location_parts()
            .map(|(search, hash)| Self { search, hash })
            .unwrap_or_default()
    }

    /// Query component embedded in the fragment (`#/page?a=1` -> `a=1`).
    ///
    /// Only the text between the first and second `?` counts.
    pub fn hash_query(&self) -> Option<&str> {
        self.hash.split('?').nth(1).filter(|query| !query.is_empty())
    }
}

/// Ambient inputs captured from the host at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostContext {
    pub location: Location,
    pub user_agent: String,
}

impl HostContext {
    pub fn new(location: Location, user_agent: impl Into<String>) -> Self {
        Self {
            location,
            user_agent: user_agent.into(),
        }
    }

    /// Snapshot the browser's location and `navigator.userAgent`.
    pub fn current() -> Self {
        Self {
            location: Location::current(),
            user_agent: dom::user_agent().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_query() {
        assert_eq!(Location::new("", "#/page?a=1").hash_query(), Some("a=1"));
        assert_eq!(Location::new("", "#/page?a=1?b=2").hash_query(), Some("a=1"));
        assert_eq!(Location::new("", "#/page?").hash_query(), None);
        assert_eq!(Location::new("", "#/page").hash_query(), None);
        assert_eq!(Location::default().hash_query(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_current_is_empty_off_browser() {
        assert_eq!(HostContext::current(), HostContext::default());
    }
}
