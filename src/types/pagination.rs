//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::{AppError, AppResult};

/// Page selection (1-indexed page, bounded page size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationParams {
    pub page: u64,
    pub page_size: u64,
}

impl PaginationParams {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Like `new`, but rejects pages whose offset the store cannot bind
    /// (it must fit in an `i64`).
    pub fn checked(page: u64, page_size: u64) -> AppResult<Self> {
        let params = Self::new(page, page_size);
        let in_range = page
            .saturating_sub(1)
            .checked_mul(params.limit())
            .is_some_and(|offset| offset <= i64::MAX as u64);

        if !in_range {
            return Err(AppError::validation("page is too large"));
        }
        Ok(params)
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.page_size.min(MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the total count ignoring pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Create new paginated response echoing the requested page
    pub fn new(data: Vec<T>, params: PaginationParams, total_count: u64) -> Self {
        Self {
            total_count,
            page: params.page,
            page_size: params.page_size,
            data,
        }
    }

    /// Convert every item, keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let params = PaginationParams::new(2, 10);
        assert_eq!(params.offset(), 10);
        assert_eq!(params.limit(), 10);

        let first = PaginationParams::new(1, 25);
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_limit_is_capped() {
        let params = PaginationParams::new(3, 500);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), 2 * MAX_PAGE_SIZE);
    }

    #[test]
    fn test_checked_rejects_unbindable_offsets() {
        assert!(PaginationParams::checked(2, 10).is_ok());
        assert!(PaginationParams::checked(u64::MAX, 1).is_err());
        assert!(PaginationParams::checked(u64::MAX, 2).is_err());
        assert!(matches!(
            PaginationParams::checked(184_467_440_737_095_517, 100),
            Err(AppError::Validation(_))
        ));

        // Largest page whose offset still fits
        let last = i64::MAX as u64 / 100 + 1;
        assert!(PaginationParams::checked(last, 100).is_ok());
        assert!(PaginationParams::checked(last + 1, 100).is_err());
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(PaginationParams::new(u64::MAX, 2).offset(), u64::MAX);
    }

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Paginated::new(vec![1, 2, 3], PaginationParams::new(2, 3), 8);
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.data, vec![10, 20, 30]);
        assert_eq!(mapped.total_count, 8);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.page_size, 3);
    }
}
