//! End-to-end tests through the router

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use super::{build_router, AppState};
use crate::config::PaginationConfig;
use crate::db::{fixtures::seeded_pool, SqlxDataSource};
use crate::services::ListingService;

async fn app_with(pagination: PaginationConfig) -> Router {
    let pool = seeded_pool().await.expect("Failed to seed pool");
    let listing = ListingService::new(
        SqlxDataSource::shared(pool.clone()),
        pagination.page_defaults(),
    );
    let state = AppState {
        pool,
        listing,
        pagination,
    };
    build_router(state, "http://localhost:3000").expect("Failed to build router")
}

async fn app() -> Router {
    app_with(PaginationConfig::default()).await
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn field<'a>(body: &'a Value, key: &str) -> Vec<&'a Value> {
    body["nodes"]
        .as_array()
        .expect("nodes should be an array")
        .iter()
        .map(|node| &node[key])
        .collect()
}

// ============================================================================
// Envelope
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app().await, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_articles_default_page() {
    let (status, body) = get_json(app().await, "/api/v1/articles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["hasNextPage"], false);
    assert_eq!(body["hasPreviousPage"], false);
    assert_eq!(
        field(&body, "slug"),
        vec!["recursion", "draft-notes", "loops", "fractions", "old-news"]
    );
    assert_eq!(body["nodes"][0]["author_name"], "Grace Hopper");
}

#[tokio::test]
async fn test_articles_second_page_of_published() {
    let (status, body) = get_json(
        app().await,
        "/api/v1/articles?status=published&limit=2&page=2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "slug"), vec!["fractions"]);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["hasNextPage"], false);
    assert_eq!(body["hasPreviousPage"], true);
    assert_eq!(body["currentPage"], 2);
}

#[tokio::test]
async fn test_articles_sort_and_search() {
    let (_, body) = get_json(app().await, "/api/v1/articles?sort=title&order=asc&limit=1").await;
    assert_eq!(field(&body, "title"), vec!["Draft Notes"]);
    assert_eq!(body["totalPages"], 5);

    let (_, body) = get_json(app().await, "/api/v1/articles?search=%20LOOP%20").await;
    assert_eq!(field(&body, "slug"), vec!["loops"]);
}

#[tokio::test]
async fn test_page_beyond_last() {
    let (status, body) = get_json(app().await, "/api/v1/faqs?page=5&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["nodes"].as_array().unwrap().is_empty());
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["hasNextPage"], false);
    assert_eq!(body["hasPreviousPage"], true);
    assert_eq!(body["currentPage"], 5);
}

#[tokio::test]
async fn test_empty_listing() {
    let (status, body) = get_json(app().await, "/api/v1/courses/999/reviews").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["nodes"].as_array().unwrap().is_empty());
    assert_eq!(body["totalPages"], 0);
    assert_eq!(body["hasNextPage"], false);
    assert_eq!(body["hasPreviousPage"], false);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_invalid_parameters_are_rejected() {
    for uri in [
        "/api/v1/articles?page=0",
        "/api/v1/articles?limit=0",
        "/api/v1/articles?limit=101",
        "/api/v1/articles?page=abc",
        "/api/v1/articles?page=-1",
        "/api/v1/articles?status=deleted",
        "/api/v1/articles?sort=password",
        "/api/v1/articles?order=sideways",
        "/api/v1/courses?status=cancelled",
        "/api/v1/users?role=editor",
        "/api/v1/teachers?min_experience=-3",
        "/api/v1/courses/1/reviews?min_rating=9",
    ] {
        let (status, body) = get_json(app().await, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{}", uri);
    }
}

#[tokio::test]
async fn test_configured_page_limits() {
    let pagination = PaginationConfig {
        default_limit: 2,
        max_limit: 3,
    };

    let (status, body) = get_json(app_with(pagination).await, "/api/v1/faqs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalPages"], 3);

    let (status, body) = get_json(app_with(pagination).await, "/api/v1/faqs?limit=4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"]["max_limit"], 3);
}

// ============================================================================
// Collections
// ============================================================================

#[tokio::test]
async fn test_courses_include_teacher_and_rating() {
    let (status, body) = get_json(app().await, "/api/v1/courses").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&body, "title"),
        vec!["Intro to Programming", "Algebra Basics", "Geometry"]
    );

    let algebra = &body["nodes"][1];
    assert_eq!(algebra["teacher_name"], "Ada Lovelace");
    assert_eq!(algebra["review_count"], 3);
    assert_eq!(algebra["average_rating"], 3.67);

    let geometry = &body["nodes"][2];
    assert_eq!(geometry["review_count"], 0);
    assert!(geometry["average_rating"].is_null());
}

#[tokio::test]
async fn test_course_reviews() {
    let (status, body) = get_json(
        app().await,
        "/api/v1/courses/1/reviews?min_rating=4&sort=rating&order=desc",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "rating"), vec![5, 4]);
    assert_eq!(field(&body, "reviewer_name"), vec!["Alan Turing", "Emmy Noether"]);
}

#[tokio::test]
async fn test_olympiads_default_order() {
    let (_, body) = get_json(app().await, "/api/v1/olympiads?subject=mathematics").await;
    assert_eq!(
        field(&body, "title"),
        vec!["School Math Cup", "Junior Math Sprint", "City Math Olympiad"]
    );

    let (_, body) = get_json(app().await, "/api/v1/olympiads?status=upcoming&grade=10").await;
    assert_eq!(field(&body, "title"), vec!["Regional Informatics"]);
}

#[tokio::test]
async fn test_users_filters() {
    let (_, body) = get_json(app().await, "/api/v1/users?role=teacher&sort=last_name&order=asc").await;
    assert_eq!(field(&body, "full_name"), vec!["Grace Hopper", "Ada Lovelace"]);

    let (_, body) = get_json(app().await, "/api/v1/users?verified=false").await;
    assert_eq!(field(&body, "email"), vec!["alan@example.com"]);
}

#[tokio::test]
async fn test_teachers_include_account() {
    let (status, body) = get_json(app().await, "/api/v1/teachers?min_experience=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "name"), vec!["Ada Lovelace"]);
    assert_eq!(field(&body, "email"), vec!["ada@example.com"]);
}

#[tokio::test]
async fn test_faqs_by_category() {
    let (_, body) = get_json(app().await, "/api/v1/faqs?category=courses").await;
    assert_eq!(
        field(&body, "question"),
        vec!["How do I enroll?", "Can I leave a course?", "Are courses free?"]
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get_json(app().await, "/api/v1/lessons").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
