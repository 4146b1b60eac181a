//! FAQ API endpoints
//!
//! - GET /api/v1/faqs - List FAQ entries in display order

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::common::{page_request, query, search_term};
use super::middleware::{ApiError, AppState};
use super::responses::FaqSummary;
use crate::models::{Faq, FaqFilter, FaqSort};
use crate::pagination::{FilterSpec, PageEnvelope, SortDirection};

#[derive(Debug, Deserialize)]
pub struct ListFaqsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/v1/faqs
pub async fn list_faqs(
    State(state): State<AppState>,
    params: Result<Query<ListFaqsQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<FaqSummary>>, ApiError> {
    let params = query(params)?;
    let request = page_request(params.page, params.limit, &state.pagination)?;

    let filter = FaqFilter {
        category: search_term(params.category),
        search: search_term(params.search),
    };
    let spec = FilterSpec::<Faq>::new(filter)
        .order_by(FaqSort::Position, SortDirection::Asc)
        .order_by(FaqSort::CreatedAt, SortDirection::Asc);

    let page = state.listing.list(&spec, request, FaqSummary::from).await?;
    Ok(Json(page))
}
