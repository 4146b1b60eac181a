//! Olympiad API endpoints
//!
//! - GET /api/v1/olympiads - List olympiads, soonest first by default

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::common::{optional_enum, page_request, query, search_term, sort_direction, sort_field};
use super::middleware::{ApiError, AppState};
use super::responses::OlympiadSummary;
use crate::models::{Olympiad, OlympiadFilter, OlympiadSort, OlympiadStatus};
use crate::pagination::{FilterSpec, PageEnvelope, SortDirection};

#[derive(Debug, Deserialize)]
pub struct ListOlympiadsQuery {
    pub subject: Option<String>,
    pub grade: Option<i32>,
    /// upcoming, ongoing or finished
    pub status: Option<String>,
    pub search: Option<String>,
    /// starts_at (default), created_at or title
    pub sort: Option<String>,
    /// asc (default) or desc
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/v1/olympiads
pub async fn list_olympiads(
    State(state): State<AppState>,
    params: Result<Query<ListOlympiadsQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<OlympiadSummary>>, ApiError> {
    let params = query(params)?;
    let request = page_request(params.page, params.limit, &state.pagination)?;

    let filter = OlympiadFilter {
        subject: search_term(params.subject),
        grade: params.grade,
        status: optional_enum::<OlympiadStatus>(params.status.as_deref())?,
        search: search_term(params.search),
    };
    let spec = FilterSpec::<Olympiad>::new(filter).order_by(
        sort_field(params.sort.as_deref(), OlympiadSort::StartsAt)?,
        sort_direction(params.order.as_deref(), SortDirection::Asc)?,
    );

    let page = state.listing.list(&spec, request, OlympiadSummary::from).await?;
    Ok(Json(page))
}
