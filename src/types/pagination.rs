//! Paginated collections.
//!
//! Buda wraps paginated lists with a `meta` object:
//!
//! ```json
//! {
//!     "orders": [...],
//!     "meta": { "total_pages": 3, "total_count": 55, "current_page": 1 }
//! }
//! ```

use serde::Deserialize;

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PageMeta {
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of records across all pages.
    pub total_count: u64,
    /// The page this response holds, starting at 1.
    pub current_page: u32,
}

impl PageMeta {
    /// Check whether another page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of a paginated collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Create a new page.
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_next_page() {
        let meta: PageMeta =
            serde_json::from_str(r#"{"total_pages":3,"total_count":55,"current_page":1}"#)
                .unwrap();
        assert!(meta.has_next_page());

        let last = PageMeta {
            current_page: 3,
            ..meta
        };
        assert!(!last.has_next_page());
    }

    #[test]
    fn test_page_iteration() {
        let page = Page::new(vec![1, 2, 3], PageMeta::default());
        assert_eq!(page.len(), 3);
        assert_eq!(page.into_iter().sum::<i32>(), 6);
    }
}
