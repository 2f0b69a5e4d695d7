//! Paginated registry results.

use serde::{Deserialize, Serialize};

/// One page of registry results
///
/// `has_more` is a derived projection: it is true when the items served so
/// far (`offset + items.len()`) do not cover the reported total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Build a page from raw items, computing `has_more` from the offset
    pub fn new(items: Vec<T>, total: u64, offset: u64) -> Self {
        let has_more = offset + (items.len() as u64) < total;
        Self {
            items,
            total,
            has_more,
        }
    }

    /// An empty page, used for soft rate-limit and degraded error results
    pub fn empty(has_more: bool) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more_with_full_page() {
        // offset=20, 20 items, total=45: 40 < 45
        let page = PaginatedResponse::new(vec![0u32; 20], 45, 20);
        assert!(page.has_more);
    }

    #[test]
    fn test_has_more_with_final_partial_page() {
        // offset=40, 5 items, total=45: 45 < 45 is false
        let page = PaginatedResponse::new(vec![0u32; 5], 45, 40);
        assert!(!page.has_more);
    }

    #[test]
    fn test_empty_page() {
        let page = PaginatedResponse::<u32>::empty(true);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert!(page.has_more);
    }
}
