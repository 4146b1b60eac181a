//! API layer - HTTP handlers and routing
//!
//! This module contains all HTTP API endpoints for the EduHub backend.
//! Every listing endpoint returns a page envelope:
//! - Article, course and review listings
//! - Olympiad listings
//! - User and teacher listings
//! - FAQ listings
//! - Health check

pub mod articles;
pub mod common;
pub mod courses;
pub mod faqs;
pub mod health;
pub mod middleware;
pub mod olympiads;
pub mod responses;
pub mod teachers;
pub mod users;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use middleware::{ApiError, AppState};

/// Build the `/api/v1` routes
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/articles", get(articles::list_articles))
        .route("/courses", get(courses::list_courses))
        .route("/courses/{id}/reviews", get(courses::list_course_reviews))
        .route("/olympiads", get(olympiads::list_olympiads))
        .route("/users", get(users::list_users))
        .route("/teachers", get(teachers::list_teachers))
        .route("/faqs", get(faqs::list_faqs))
}

/// Build the complete router with middleware
///
/// # Errors
///
/// Returns an error if `cors_origin` is not a valid header value.
pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Ok(Router::new()
        .nest("/api/v1", build_api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[cfg(test)]
mod tests;
