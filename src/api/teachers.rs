//! Teacher API endpoints
//!
//! - GET /api/v1/teachers - List teacher profiles with account name and email

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::common::{page_request, query, search_term, sort_direction, sort_field};
use super::middleware::{ApiError, AppState};
use super::responses::TeacherSummary;
use crate::models::{Teacher, TeacherFilter, TeacherInclude, TeacherSort};
use crate::pagination::{FilterSpec, PageEnvelope, SortDirection};

#[derive(Debug, Deserialize)]
pub struct ListTeachersQuery {
    pub subject: Option<String>,
    /// Minimum years of experience
    pub min_experience: Option<i32>,
    /// created_at (default) or experience_years
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/v1/teachers
pub async fn list_teachers(
    State(state): State<AppState>,
    params: Result<Query<ListTeachersQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<TeacherSummary>>, ApiError> {
    let params = query(params)?;
    let request = page_request(params.page, params.limit, &state.pagination)?;

    if params.min_experience.is_some_and(|years| years < 0) {
        return Err(ApiError::validation_error("min_experience cannot be negative"));
    }

    let filter = TeacherFilter {
        subject: search_term(params.subject),
        min_experience: params.min_experience,
    };
    let spec = FilterSpec::<Teacher>::new(filter)
        .order_by(
            sort_field(params.sort.as_deref(), TeacherSort::CreatedAt)?,
            sort_direction(params.order.as_deref(), SortDirection::Desc)?,
        )
        .include(TeacherInclude { user: true });

    let page = state.listing.list(&spec, request, TeacherSummary::from).await?;
    Ok(Json(page))
}
