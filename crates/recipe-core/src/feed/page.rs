//! Page-number pagination

use serde::Serialize;

use crate::error::DomainError;

/// Requested page (1-based) and its size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// # Errors
    /// Fails when `page` is 0 or `page_size` is 0
    pub fn new(page: u32, page_size: u32) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::ValidationError(
                "page must be a positive integer".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(DomainError::ValidationError(
                "page size must be positive".to_string(),
            ));
        }
        Ok(Self { page, page_size })
    }

    pub fn first(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of results plus the total size of the underlying set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub page: u32,
    pub page_size: u32,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, count: i64, results: Vec<T>) -> Self {
        Self {
            count,
            page: request.page,
            page_size: request.page_size,
            results,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(request, 0, Vec::new())
    }

    pub fn has_next(&self) -> bool {
        i64::from(self.page) * i64::from(self.page_size) < self.count
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// A page past the end. The first page always exists, even when empty.
    pub fn is_out_of_range(&self) -> bool {
        self.page > 1 && i64::from(self.page - 1) * i64::from(self.page_size) >= self.count
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            count: self.count,
            page: self.page,
            page_size: self.page_size,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
