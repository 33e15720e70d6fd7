//! Search results and pagination.

use crate::model::SearchResultItem;

pub const DEFAULT_PER_PAGE: usize = 10;

/// View data for the pagination chrome of one results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// The results of one search. Replaced wholesale by the next search.
#[derive(Debug, Clone, Default)]
pub struct SearchModel {
    pub query: String,
    pub results: Vec<SearchResultItem>,
    per_page: usize,
}

impl SearchModel {
    pub fn new(query: impl Into<String>, results: Vec<SearchResultItem>) -> Self {
        Self::with_per_page(query, results, DEFAULT_PER_PAGE)
    }

    pub fn with_per_page(
        query: impl Into<String>,
        results: Vec<SearchResultItem>,
        per_page: usize,
    ) -> Self {
        Self {
            query: query.into(),
            results,
            per_page: per_page.max(1),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.results.len().div_ceil(self.per_page)
    }

    /// The items of one page (1-based) plus its pagination metadata.
    /// Pages past the end are empty.
    pub fn page(&self, page: usize) -> (&[SearchResultItem], Pagination) {
        let page = page.max(1);
        let total_pages = self.total_pages();
        let start = (page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.results.len());
        let items = if start >= self.results.len() {
            &[]
        } else {
            &self.results[start..end]
        };

        (
            items,
            Pagination {
                page,
                total_pages,
                has_prev: page > 1,
                has_next: page < total_pages,
            },
        )
    }

    /// Look up one search result by recipe id.
    pub fn find(&self, id: &str) -> Option<&SearchResultItem> {
        self.results.iter().find(|item| item.id == id)
    }
}
