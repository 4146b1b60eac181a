//! Article API endpoints
//!
//! - GET /api/v1/articles - List articles with pagination

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::common::{optional_enum, page_request, query, search_term, sort_direction, sort_field};
use super::middleware::{ApiError, AppState};
use super::responses::ArticleSummary;
use crate::models::{Article, ArticleFilter, ArticleInclude, ArticleSort, ArticleStatus};
use crate::pagination::{FilterSpec, PageEnvelope, SortDirection};

/// Query parameters for listing articles
#[derive(Debug, Deserialize)]
pub struct ListArticlesQuery {
    /// Filter by status (draft, published, archived)
    pub status: Option<String>,
    pub author_id: Option<i64>,
    /// Substring of title or content
    pub search: Option<String>,
    /// created_at (default), published_at or title
    pub sort: Option<String>,
    /// asc or desc (default)
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /api/v1/articles - List articles with their author's name
pub async fn list_articles(
    State(state): State<AppState>,
    params: Result<Query<ListArticlesQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<ArticleSummary>>, ApiError> {
    let params = query(params)?;
    let request = page_request(params.page, params.limit, &state.pagination)?;

    let filter = ArticleFilter {
        status: optional_enum::<ArticleStatus>(params.status.as_deref())?,
        author_id: params.author_id,
        search: search_term(params.search),
    };
    let spec = FilterSpec::<Article>::new(filter)
        .order_by(
            sort_field(params.sort.as_deref(), ArticleSort::CreatedAt)?,
            sort_direction(params.order.as_deref(), SortDirection::Desc)?,
        )
        .include(ArticleInclude { author: true });

    let page = state
        .listing
        .list(&spec, request, ArticleSummary::from)
        .await?;

    Ok(Json(page))
}
