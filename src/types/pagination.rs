//! Pagination parameters for list endpoints.

use serde::Serialize;

/// Page size used by the no-argument list helpers.
pub const DEFAULT_LIMIT: u32 = 100;

/// A `limit`/`offset` window over a list endpoint.
///
/// Both values are forwarded verbatim as query parameters; the service
/// decides what bounds it accepts.
///
/// # Example
///
/// ```rust
/// use coinjar_api_client::types::Pagination;
///
/// let page = Pagination::new(50, 25);
/// assert_eq!(serde_urlencoded::to_string(page).unwrap(), "limit=50&offset=25");
/// assert_eq!(page.next_page(), Pagination::new(50, 75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: u32,
    /// Number of records to skip.
    pub offset: u32,
}

impl Pagination {
    /// Create a new pagination window.
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// The window immediately following this one.
    pub fn next_page(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}
