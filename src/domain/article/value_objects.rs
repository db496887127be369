// src/domain/article/value_objects.rs

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// Requested window into the article list. Values are passed through as given;
/// range policy belongs to the source answering the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Zero-based offset of the first item on this page, if the request is
    /// well-formed (`page >= 1`, `page_size >= 1`).
    pub fn offset(&self) -> Option<i64> {
        if self.page < 1 || self.page_size < 1 {
            return None;
        }
        (self.page - 1).checked_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}
