//! Result types returned by the task service

use crate::domain::value_objects::TaskPage;
use crate::errors::CacheError;

/// A served list page.
///
/// `snapshot` is the exact JSON stored in the cache; on a hit it is the
/// cached string unchanged.
#[derive(Debug, Clone)]
pub struct ListedPage {
    pub page: TaskPage,
    pub snapshot: String,
    pub from_cache: bool,
}

impl ListedPage {
    /// Rebuild a page from a cached snapshot, keeping the snapshot verbatim
    pub fn from_snapshot(snapshot: String) -> Result<Self, CacheError> {
        let page = serde_json::from_str::<TaskPage>(&snapshot)
            .map_err(|e| CacheError::corrupt(e.to_string()))?;
        Ok(Self {
            page,
            snapshot,
            from_cache: true,
        })
    }
}
