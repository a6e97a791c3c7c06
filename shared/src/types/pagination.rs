//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// First page, used when the caller omits `page` or sends a value below 1
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller omits `limit` or sends a value below 1
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Create a pagination, replacing values below 1 with the defaults
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: if page < 1 { DEFAULT_PAGE } else { page },
            page_size: if page_size < 1 { DEFAULT_PAGE_SIZE } else { page_size },
        }
    }

    /// Build from raw query-string values.
    ///
    /// Missing, non-numeric, zero or negative inputs fall back to the
    /// defaults instead of producing an error.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| {
            raw.and_then(|value| value.trim().parse::<i64>().ok())
                .filter(|value| *value >= 1)
                .map(|value| value.min(u32::MAX as i64) as u32)
                .unwrap_or(0)
        };
        Self::new(parse(page), parse(page_size))
    }

    /// Row offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Row limit for database queries
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Calculate total pages from a total item count
    pub fn total_pages(&self, total_items: u64) -> u64 {
        total_pages(total_items, self.page_size)
    }
}

/// `ceil(total_items / page_size)`, zero when there are no items
pub fn total_pages(total_items: u64, page_size: u32) -> u64 {
    let page_size = u64::from(page_size.max(1));
    total_items.div_ceil(page_size)
}

/// Pagination block returned alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_tasks: u64,
}

impl PageMeta {
    /// Derive the pagination block for a page of a result set
    pub fn new(pagination: Pagination, total_items: u64) -> Self {
        Self {
            current_page: pagination.page,
            total_pages: pagination.total_pages(total_items),
            total_tasks: total_items,
        }
    }
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
