//! # Pagination Types
//!
//! Request and response types for paginated listing. A [`PageRequest`] carries
//! the caller's page index, page size, sort field, and pass-through filter
//! pairs; a [`Page`] is one ordered slice of the collection plus the metadata
//! describing its position and the collection's total size.

use serde::{Deserialize, Serialize};

use crate::error::RepoError;

/// Page size applied by the in-memory backend when the request leaves it
/// unspecified.
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// Parameters for a paginated listing request.
///
/// All parameters are optional; absence defers to service defaults. Filter
/// pairs are passed through to the service verbatim and never interpreted by
/// the repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page index (0-based).
    #[serde(default)]
    pub page: Option<u64>,
    /// Number of items per page.
    #[serde(default)]
    pub size: Option<u64>,
    /// Field name to sort by, ascending.
    #[serde(default)]
    pub sort: Option<String>,
    /// Extra key/value filter pairs, in the order they were supplied.
    #[serde(default)]
    pub filters: Vec<(String, String)>,
}

impl PageRequest {
    /// A request with every parameter deferred to service defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 0-based page index.
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the sort field.
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    /// Append a filter pair.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Client-side guard for parameters the remote would reject anyway.
    ///
    /// The repository calls this before issuing the request, so a zero page
    /// size never reaches the wire. Negative values are unrepresentable.
    pub fn validate(&self) -> Result<(), RepoError> {
        if self.size == Some(0) {
            return Err(RepoError::InvalidArgument(
                "page size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The page index after applying defaults.
    pub fn effective_page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    /// The page size after applying defaults.
    pub fn effective_size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Index of the first item on the requested page.
    pub fn offset(&self) -> u64 {
        self.effective_page() * self.effective_size()
    }
}

/// One retrieved slice of a collection, in server-side order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Page index (0-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Create a page, deriving the positional metadata.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            (total_items + page_size.max(1) - 1) / page_size.max(1)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page + 1 < total_pages,
            has_previous: page > 0,
        }
    }

    /// An empty page positioned at the requested index.
    pub fn empty(request: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            page: request.effective_page(),
            page_size: request.effective_size(),
            total_items: 0,
            total_pages: 1,
            has_next: false,
            has_previous: false,
        }
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_is_derived_from_totals() {
        let page = Page::new(vec![1, 2], 0, 2, 5);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(!page.has_previous);

        let last = Page::new(vec![5], 2, 2, 5);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let page: Page<u32> = Page::new(Vec::new(), 0, 10, 0);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(page.is_empty());
    }

    #[test]
    fn zero_size_is_rejected_client_side() {
        let request = PageRequest::new().size(0);
        assert!(matches!(
            request.validate(),
            Err(RepoError::InvalidArgument(_))
        ));
        assert!(PageRequest::new().size(1).validate().is_ok());
        assert!(PageRequest::new().validate().is_ok());
    }

    #[test]
    fn defaults_apply_when_parameters_are_absent() {
        let request = PageRequest::new();
        assert_eq!(request.effective_page(), 0);
        assert_eq!(request.effective_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(request.offset(), 0);

        let request = PageRequest::new().page(3).size(10);
        assert_eq!(request.offset(), 30);
    }
}
