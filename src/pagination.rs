//! This modules defines the common functionality for paging data.

use serde::Deserialize;

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of items on each page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
        }
    }
}

/// The query string for endpoints that return a page of results.
///
/// `page` is kept as a string so that a malformed value falls back to the
/// default page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// The 1-based page number.
    pub page: Option<String>,
}

/// A validated page of results, expressed as an SQL limit and offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// The maximum number of rows to return.
    pub limit: i64,
    /// The number of rows to skip.
    pub offset: i64,
}

impl PaginationConfig {
    /// Resolve the page requested in `query`.
    ///
    /// A missing or non-integer page number uses [PaginationConfig::default_page].
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the page number is less than one, since
    /// such a page can never contain any items.
    pub fn page(&self, query: &PageQuery) -> Result<Page, Error> {
        let number = query
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(self.default_page as i64);

        if number < 1 {
            return Err(Error::NotFound);
        }

        let limit = self.page_size as i64;

        Ok(Page {
            limit,
            offset: (number - 1).saturating_mul(limit),
        })
    }
}
