//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::repositories::{PageRequest, SortDirection, SortField};

/// Query parameters for the paginated employee listing.
///
/// Page numbers are 0-based: `pageNumber=0` is the first page.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePageParams {
    /// Page number (0-based)
    #[serde(default)]
    #[validate(range(min = 0, message = "Page number must not be negative"))]
    #[param(minimum = 0, example = 0)]
    pub page_number: i64,

    /// Number of items per page (max 100)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 20)]
    pub page_size: i64,

    /// Field to sort by
    #[serde(default)]
    pub sort_field: SortField,

    /// Sort direction
    #[serde(default)]
    pub sort_direction: SortDirection,
}

fn default_page_size() -> i64 {
    20
}

impl EmployeePageParams {
    /// Converts the validated parameters into a store page request.
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest {
            page_number: self.page_number,
            page_size: self.page_size,
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
        }
    }
}

/// Generic paged response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct PagedResponse<T> {
    /// The data items for this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number (0-based)
    #[schema(example = 0)]
    pub page_number: i64,

    /// Number of items per page
    #[schema(example = 20)]
    pub page_size: i64,

    /// Field the page is sorted by
    pub sort_field: SortField,

    /// Direction the page is sorted in
    pub sort_direction: SortDirection,

    /// Total number of items across all pages
    #[schema(example = 100)]
    pub total_items: i64,

    /// Total number of pages
    #[schema(example = 5)]
    pub total_pages: i64,

    /// Whether there is a next page
    #[schema(example = true)]
    pub has_next: bool,

    /// Whether there is a previous page
    #[schema(example = false)]
    pub has_prev: bool,
}

impl<T> PagedResponse<T> {
    /// Creates a new paged response.
    pub fn new(data: Vec<T>, params: &EmployeePageParams, total_items: i64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + params.page_size - 1) / params.page_size
        };
        let has_next = params.page_number + 1 < total_pages;
        let has_prev = params.page_number > 0 && total_pages > 0;

        Self {
            data,
            pagination: PaginationMeta {
                page_number: params.page_number,
                page_size: params.page_size,
                sort_field: params.sort_field,
                sort_direction: params.sort_direction,
                total_items,
                total_pages,
                has_next,
                has_prev,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params(page_number: i64, page_size: i64) -> EmployeePageParams {
        EmployeePageParams {
            page_number,
            page_size,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Asc,
        }
    }

    #[test]
    fn defaults_deserialize_from_empty_query() {
        let parsed: EmployeePageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.page_number, 0);
        assert_eq!(parsed.page_size, 20);
        assert_eq!(parsed.sort_field, SortField::Id);
        assert_eq!(parsed.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn first_page_of_five_items() {
        let response = PagedResponse::new(vec![1, 2], &params(0, 2), 5);
        let meta = &response.pagination;
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn last_page_has_no_next() {
        let response = PagedResponse::new(vec![5], &params(2, 2), 5);
        let meta = &response.pagination;
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn empty_set_has_zero_pages() {
        let response: PagedResponse<i32> = PagedResponse::new(vec![], &params(0, 20), 0);
        let meta = &response.pagination;
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    proptest! {
        #[test]
        fn pagination_meta_laws(
            page_number in 0i64..1000,
            page_size in 1i64..100,
            total_items in 0i64..10_000,
        ) {
            let response: PagedResponse<i64> =
                PagedResponse::new(vec![], &params(page_number, page_size), total_items);
            let meta = response.pagination;

            // Pages cover exactly the item count.
            prop_assert!(meta.total_pages * page_size >= total_items);
            prop_assert!((meta.total_pages - 1) * page_size < total_items || meta.total_pages == 0);

            // Navigation flags are consistent with the page position.
            prop_assert_eq!(meta.has_next, page_number + 1 < meta.total_pages);
            prop_assert!(!(meta.has_prev && meta.total_pages == 0));
        }
    }
}
