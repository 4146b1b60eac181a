//! User API endpoints
//!
//! - GET /api/v1/users - List users

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::common::{optional_enum, page_request, query, search_term, sort_direction, sort_field};
use super::middleware::{ApiError, AppState};
use super::responses::UserSummary;
use crate::models::{User, UserFilter, UserRole, UserSort};
use crate::pagination::{FilterSpec, PageEnvelope, SortDirection};

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// student, teacher or admin
    pub role: Option<String>,
    pub verified: Option<bool>,
    /// Substring of email, first or last name
    pub search: Option<String>,
    /// created_at (default), email or last_name
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    params: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<UserSummary>>, ApiError> {
    let params = query(params)?;
    let request = page_request(params.page, params.limit, &state.pagination)?;

    let filter = UserFilter {
        role: optional_enum::<UserRole>(params.role.as_deref())?,
        is_verified: params.verified,
        search: search_term(params.search),
    };
    let spec = FilterSpec::<User>::new(filter).order_by(
        sort_field(params.sort.as_deref(), UserSort::CreatedAt)?,
        sort_direction(params.order.as_deref(), SortDirection::Desc)?,
    );

    let page = state.listing.list(&spec, request, UserSummary::from).await?;
    Ok(Json(page))
}
