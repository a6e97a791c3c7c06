//! Type definitions module
//!
//! - `pagination` - Page/offset pagination for list endpoints
//! - `response` - Health check response

pub mod pagination;
pub mod response;

pub use pagination::{total_pages, PageMeta, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use response::HealthResponse;
