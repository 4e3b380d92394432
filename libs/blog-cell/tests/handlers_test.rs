// libs/blog-cell/tests/handlers_test.rs

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use blog_cell::models::POST_WITH_RELATIONS;
use blog_cell::router::blog_routes;
use shared_utils::test_utils::{send_json, EchoInserted, MockSupabaseResponses, TestConfig};

fn app_for(mock_server: &MockServer) -> axum::Router {
    blog_routes(TestConfig::with_supabase_url(&mock_server.uri()).to_state())
}

/// Stands in for the `views` column of a single post row.
#[derive(Clone)]
struct StoredViews(Arc<AtomicI64>);

impl Respond for StoredViews {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        if request.method.as_str() == "PATCH" {
            let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
            if let Some(views) = body["views"].as_i64() {
                self.0.store(views, Ordering::SeqCst);
            }
        }
        let views = self.0.load(Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::post_with_relations("p1", "understanding-heart-health", "d1", views)
        ]))
    }
}

// ==============================================================================
// LISTING
// ==============================================================================

#[tokio::test]
async fn list_posts_embeds_relations_newest_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("select", POST_WITH_RELATIONS))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::post_with_relations("p2", "newer", "d1", 0),
            MockSupabaseResponses::post_with_relations("p1", "older", "d2", 7),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(app_for(&mock_server), Method::GET, "/posts", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["slug"], "newer");
    assert_eq!(body[0]["author"]["name"], "Dr. Sarah Johnson");
    assert_eq!(body[1]["comments"].as_array().map(|c| c.len()), Some(1));
}

#[tokio::test]
async fn list_posts_applies_category_and_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("category", "eq.Health Tips"))
        .and(query_param("or", "(title.ilike.\"*heart*\",content.ilike.\"*heart*\")"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(
        app_for(&mock_server),
        Method::GET,
        "/posts?category=Health%20Tips&search=heart",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn asterisk_in_search_matches_literally() {
    let mock_server = MockServer::start().await;

    let mut literal = MockSupabaseResponses::post_with_relations("p1", "five-star-care", "d1", 0);
    literal["title"] = json!("Rated 5* by patients");
    let mut lookalike = MockSupabaseResponses::post_with_relations("p2", "five-stars", "d1", 0);
    lookalike["title"] = json!("Rated 5/5 by patients");

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("or", "(title.ilike.\"*5_*\",content.ilike.\"*5_*\")"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([literal, lookalike])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(app_for(&mock_server), Method::GET, "/posts?search=5*", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));
    assert_eq!(body[0]["slug"], "five-star-care");
}

// ==============================================================================
// READ BY SLUG
// ==============================================================================

#[tokio::test]
async fn reading_a_post_counts_one_view() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("slug", "eq.understanding-heart-health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::post_with_relations("p1", "understanding-heart-health", "d1", 4),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/posts"))
        .and(query_param("id", "eq.p1"))
        .and(body_partial_json(json!({ "views": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::post_row("p1", "understanding-heart-health", "d1", 5),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(
        app_for(&mock_server),
        Method::GET,
        "/posts/understanding-heart-health",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["views"], 5);
    assert_eq!(body["author"]["id"], "d1");
}

#[tokio::test]
async fn sequential_reads_count_every_view() {
    let mock_server = MockServer::start().await;
    let stored = StoredViews(Arc::new(AtomicI64::new(0)));

    Mock::given(path("/rest/v1/posts"))
        .respond_with(stored.clone())
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    for expected in 1..=3 {
        let (status, body) = send_json(
            app.clone(),
            Method::GET,
            "/posts/understanding-heart-health",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["views"], expected);
    }

    assert_eq!(stored.0.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(app_for(&mock_server), Method::GET, "/posts/no-such-post", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found");
}

// ==============================================================================
// COMMENTS
// ==============================================================================

#[tokio::test]
async fn comment_gets_server_side_id_and_post_from_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/comments"))
        .and(body_partial_json(json!({ "post_id": "p1", "email": "john@example.com" })))
        .respond_with(EchoInserted)
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(
        app_for(&mock_server),
        Method::POST,
        "/posts/p1/comments",
        Some(json!({
            "id": "client-id",
            "post_id": "another-post",
            "name": "John Smith",
            "email": "john@example.com",
            "content": "Very informative article!"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["post_id"], "p1");
    assert_ne!(body["id"], "client-id");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn comment_without_email_is_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, _) = send_json(
        app_for(&mock_server),
        Method::POST,
        "/posts/p1/comments",
        Some(json!({ "name": "John", "content": "Hi" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
