//! Course API endpoints
//!
//! - GET /api/v1/courses - List courses with teacher and rating summary
//! - GET /api/v1/courses/{id}/reviews - List reviews of one course

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::common::{optional_enum, page_request, query, search_term, sort_direction, sort_field};
use super::middleware::{ApiError, AppState};
use super::responses::{CourseSummary, ReviewSummary};
use crate::models::{
    Course, CourseFilter, CourseInclude, CourseSort, CourseStatus, Review, ReviewFilter,
    ReviewInclude, ReviewSort,
};
use crate::pagination::{FilterSpec, PageEnvelope, SortDirection};

/// Query parameters for listing courses
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub teacher_id: Option<i64>,
    /// open, in_progress or completed
    pub status: Option<String>,
    pub search: Option<String>,
    /// created_at (default), starts_at, title or capacity
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Query parameters for listing a course's reviews
#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    /// Only reviews rated at least this high
    pub min_rating: Option<i32>,
    /// created_at (default) or rating
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/v1/courses
pub async fn list_courses(
    State(state): State<AppState>,
    params: Result<Query<ListCoursesQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<CourseSummary>>, ApiError> {
    let params = query(params)?;
    let request = page_request(params.page, params.limit, &state.pagination)?;

    let filter = CourseFilter {
        teacher_id: params.teacher_id,
        status: optional_enum::<CourseStatus>(params.status.as_deref())?,
        search: search_term(params.search),
    };
    let spec = FilterSpec::<Course>::new(filter)
        .order_by(
            sort_field(params.sort.as_deref(), CourseSort::CreatedAt)?,
            sort_direction(params.order.as_deref(), SortDirection::Desc)?,
        )
        .include(CourseInclude {
            teacher: true,
            review_stats: true,
        });

    let page = state.listing.list(&spec, request, CourseSummary::from).await?;
    Ok(Json(page))
}

/// GET /api/v1/courses/{id}/reviews
pub async fn list_course_reviews(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    params: Result<Query<ListReviewsQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<ReviewSummary>>, ApiError> {
    let params = query(params)?;
    let request = page_request(params.page, params.limit, &state.pagination)?;

    if let Some(min_rating) = params.min_rating {
        if !(crate::models::MIN_RATING..=crate::models::MAX_RATING).contains(&min_rating) {
            return Err(ApiError::validation_error(format!(
                "min_rating must be between {} and {}",
                crate::models::MIN_RATING,
                crate::models::MAX_RATING
            )));
        }
    }

    let filter = ReviewFilter {
        course_id: Some(course_id),
        user_id: None,
        min_rating: params.min_rating,
    };
    let spec = FilterSpec::<Review>::new(filter)
        .order_by(
            sort_field(params.sort.as_deref(), ReviewSort::CreatedAt)?,
            sort_direction(params.order.as_deref(), SortDirection::Desc)?,
        )
        .include(ReviewInclude { reviewer: true });

    let page = state.listing.list(&spec, request, ReviewSummary::from).await?;
    Ok(Json(page))
}
