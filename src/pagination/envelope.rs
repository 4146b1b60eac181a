//! Page envelope

use serde::{Deserialize, Serialize};

use super::PageWindow;

/// One page of results plus page metadata
///
/// Serialized as `{ nodes, totalPages, hasNextPage, hasPreviousPage, currentPage }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    /// Items in the current page
    pub nodes: Vec<T>,
    /// Total number of pages under the current filter
    pub total_pages: u64,
    /// Whether a page exists after this one
    pub has_next_page: bool,
    /// Whether the current page number is above the first page
    pub has_previous_page: bool,
    /// Current page number (1-indexed)
    pub current_page: u32,
}

impl<T> PageEnvelope<T> {
    /// Assemble an envelope from a fetched page and the total record count.
    ///
    /// `has_previous_page` only looks at the page number, so it is `true`
    /// for any page above 1 even when there are no pages at all.
    pub fn new(nodes: Vec<T>, total_count: u64, window: &PageWindow) -> Self {
        let total_pages = total_pages(total_count, window.take);

        Self {
            nodes,
            total_pages,
            has_next_page: u64::from(window.page) < total_pages,
            has_previous_page: window.page > 1,
            current_page: window.page,
        }
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of items in the page
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Number of pages needed for `total_count` records at `take` per page
pub fn total_pages(total_count: u64, take: u32) -> u64 {
    if take == 0 {
        return 0;
    }
    let take = u64::from(take);
    (total_count + take - 1) / take
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(page: u32, take: u32) -> PageWindow {
        PageWindow {
            page,
            take,
            skip: u64::from(page.saturating_sub(1)) * u64::from(take),
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(45, 0), 0);
    }

    #[test]
    fn test_envelope_metadata_middle_page() {
        let envelope = PageEnvelope::new(vec![1, 2], 6, &window(2, 2));
        assert_eq!(envelope.total_pages, 3);
        assert!(envelope.has_next_page);
        assert!(envelope.has_previous_page);
        assert_eq!(envelope.current_page, 2);
        assert_eq!(envelope.len(), 2);
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let envelope = PageEnvelope::new(vec!["a"], 1, &window(1, 20));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nodes": ["a"],
                "totalPages": 1,
                "hasNextPage": false,
                "hasPreviousPage": false,
                "currentPage": 1
            })
        );
    }

    #[test]
    fn test_empty_envelope_on_later_page_reports_previous() {
        let envelope: PageEnvelope<u8> = PageEnvelope::new(Vec::new(), 0, &window(3, 20));
        assert!(envelope.is_empty());
        assert_eq!(envelope.total_pages, 0);
        assert!(!envelope.has_next_page);
        assert!(envelope.has_previous_page);
    }
}
