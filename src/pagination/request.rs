//! Page request and defaults
//!
//! A `PageRequest` is what a caller asked for; `PageDefaults` is what the call
//! site falls back to. Resolving the two yields a `PageWindow`, the concrete
//! `page`/`take`/`skip` triple the pager works with.

use serde::{Deserialize, Serialize};

/// Default page number (1-indexed)
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size
pub const DEFAULT_LIMIT: u32 = 20;

/// Pagination parameters as supplied by a caller
///
/// Both fields are optional; absent values are filled from `PageDefaults`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: Option<u32>,
    /// Number of items per page
    pub limit: Option<u32>,
}

impl PageRequest {
    /// Create a request with both page and limit set
    pub fn new(page: u32, limit: u32) -> Self {
        Self::from_parts(Some(page), Some(limit))
    }

    /// Create a request from optional parts, as parsed from a query string
    pub fn from_parts(page: Option<u32>, limit: Option<u32>) -> Self {
        Self { page, limit }
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resolve this request against the given defaults.
    ///
    /// A zero `page` is floored to 1 and a zero `limit` falls back to the
    /// default limit, so the resulting window always has `page >= 1` and
    /// `take >= 1`.
    pub fn resolve(&self, defaults: PageDefaults) -> PageWindow {
        let page = self.page.unwrap_or(defaults.page).max(1);
        let take = self
            .limit
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.limit)
            .max(1);
        let skip = u64::from(page - 1) * u64::from(take);

        PageWindow { page, take, skip }
    }
}

/// Fallback values used when a request omits page or limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefaults {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageDefaults {
    /// Set the fallback page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// A resolved page position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page number (1-indexed)
    pub page: u32,
    /// Number of records to fetch
    pub take: u32,
    /// Number of records to skip
    pub skip: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let window = PageRequest::default().resolve(PageDefaults::default());
        assert_eq!(window, PageWindow { page: 1, take: 20, skip: 0 });
    }

    #[test]
    fn test_resolve_explicit_matches_defaults() {
        let defaults = PageDefaults::default();
        assert_eq!(
            PageRequest::new(1, 20).resolve(defaults),
            PageRequest::default().resolve(defaults)
        );
    }

    #[test]
    fn test_resolve_skip() {
        let window = PageRequest::new(3, 20).resolve(PageDefaults::default());
        assert_eq!(window.skip, 40);
        assert_eq!(window.take, 20);
        assert_eq!(window.page, 3);
    }

    #[test]
    fn test_resolve_zero_page_floors_to_first() {
        let window = PageRequest::new(0, 10).resolve(PageDefaults::default());
        assert_eq!(window.page, 1);
        assert_eq!(window.skip, 0);
    }

    #[test]
    fn test_resolve_zero_limit_uses_default() {
        let window = PageRequest::new(2, 0).resolve(PageDefaults::default().with_limit(15));
        assert_eq!(window.take, 15);
        assert_eq!(window.skip, 15);
    }

    #[test]
    fn test_resolve_zero_default_limit_never_yields_zero_take() {
        let window = PageRequest::default().resolve(PageDefaults::default().with_limit(0));
        assert_eq!(window.take, 1);
    }

    #[test]
    fn test_resolve_large_page_does_not_overflow() {
        let window = PageRequest::new(u32::MAX, u32::MAX).resolve(PageDefaults::default());
        assert_eq!(window.skip, u64::from(u32::MAX - 1) * u64::from(u32::MAX));
    }

    #[test]
    fn test_builders_match_constructors() {
        assert_eq!(PageRequest::default().with_page(3).with_limit(7), PageRequest::new(3, 7));
        assert_eq!(PageRequest::default().with_limit(7), PageRequest::from_parts(None, Some(7)));
        assert_eq!(PageRequest::from_parts(None, None), PageRequest::default());

        let defaults = PageDefaults::default().with_limit(15);
        assert_eq!(defaults, PageDefaults { page: DEFAULT_PAGE, limit: 15 });
    }

    #[test]
    fn test_limit_is_not_capped() {
        let window = PageRequest::new(1, 5000).resolve(PageDefaults::default());
        assert_eq!(window.take, 5000);
    }
}
