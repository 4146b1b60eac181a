//! Common API utilities and shared types
//!
//! Query-string validation shared by the listing endpoints.

use axum::extract::{rejection::QueryRejection, Query};
use std::str::FromStr;

use super::middleware::ApiError;
use crate::config::PaginationConfig;
use crate::pagination::{PageRequest, SortDirection};

/// Unwrap a query extraction, turning rejections into validation errors
pub fn query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    result
        .map(|Query(query)| query)
        .map_err(|rejection| ApiError::validation_error(rejection.body_text()))
}

// ============================================================================
// Pagination
// ============================================================================

/// Validate `page` / `limit` against the configured bounds
///
/// Absent values stay `None` so that the pager applies its defaults.
pub fn page_request(
    page: Option<u32>,
    limit: Option<u32>,
    config: &PaginationConfig,
) -> Result<PageRequest, ApiError> {
    if page == Some(0) {
        return Err(ApiError::validation_error("page must be at least 1"));
    }
    if let Some(limit) = limit {
        if limit == 0 || limit > config.max_limit {
            return Err(ApiError::with_details(
                "VALIDATION_ERROR",
                format!("limit must be between 1 and {}", config.max_limit),
                serde_json::json!({ "max_limit": config.max_limit }),
            ));
        }
    }
    Ok(PageRequest::from_parts(page, limit))
}

// ============================================================================
// Sorting and enum parameters
// ============================================================================

/// Parse `sort`, falling back to `default`
pub fn sort_field<T: FromStr>(sort: Option<&str>, default: T) -> Result<T, ApiError> {
    match sort {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ApiError::validation_error(format!("Unknown sort field: {}", value))),
    }
}

/// Parse `order` ("asc" / "desc"), falling back to `default`
pub fn sort_direction(order: Option<&str>, default: SortDirection) -> Result<SortDirection, ApiError> {
    match order {
        None => Ok(default),
        Some(value) => SortDirection::from_str(value)
            .ok_or_else(|| ApiError::validation_error(format!("Unknown sort order: {}", value))),
    }
}

/// Parse an optional enum-valued filter such as `status` or `role`
pub fn optional_enum<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| v.parse::<T>().map_err(|e| ApiError::validation_error(e.to_string())))
        .transpose()
}

/// Trim a free-text parameter; blank values count as absent
pub fn search_term(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
