use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::{Request as MockRequest, Respond, ResponseTemplate};

use shared_config::AppConfig;

use crate::state::AppState;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_api_key: String,
    pub environment: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_api_key: "test-api-key".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl TestConfig {
    /// Config pointing the store client at a mock server.
    pub fn with_supabase_url(url: &str) -> Self {
        Self {
            supabase_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn production(mut self) -> Self {
        self.environment = "production".to_string();
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_api_key: self.supabase_api_key.clone(),
            port: 8080,
            environment: self.environment.clone(),
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }

    pub fn to_state(&self) -> Arc<AppState> {
        AppState::new(self.to_app_config()).into_shared()
    }
}

/// Drives a single request through `router` and returns the status and the
/// decoded JSON body (`Value::Null` for an empty body).
pub async fn send_json(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .oneshot(builder.body(body).expect("valid request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// Answers an insert the way PostgREST does with `return=representation`:
/// the posted row wrapped in an array.
pub struct EchoInserted;

impl Respond for EchoInserted {
    fn respond(&self, request: &MockRequest) -> ResponseTemplate {
        let row: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        ResponseTemplate::new(201).set_body_json(json!([row]))
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn doctor_row(id: &str, name: &str, specialty: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialty": specialty,
            "image": "https://images.example.com/doctor.jpg",
            "experience": 10,
            "bio": null,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    pub fn service_row(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "description": format!("{} services", name),
            "icon": "Stethoscope",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    pub fn appointment_row(id: &str, doctor_id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "doctor_id": doctor_id,
            "patient_name": "Alice",
            "date": "2025-03-01",
            "time": "10:00",
            "status": status,
            "notes": null,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    pub fn post_row(id: &str, slug: &str, author_id: &str, views: i64) -> Value {
        json!({
            "id": id,
            "title": "Understanding Heart Health",
            "slug": slug,
            "content": "<p>Heart disease remains one of the leading causes of death.</p>",
            "summary": "Cardiovascular health basics.",
            "author_id": author_id,
            "category": "Health Tips",
            "image": null,
            "published": true,
            "views": views,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    /// Post row with embedded author and comments, as returned by a
    /// `select=*,author:...,comments(*)` query.
    pub fn post_with_relations(id: &str, slug: &str, author_id: &str, views: i64) -> Value {
        let mut post = Self::post_row(id, slug, author_id, views);
        post["author"] = Self::doctor_row(author_id, "Dr. Sarah Johnson", "Cardiology");
        post["comments"] = json!([Self::comment_row(&Uuid::new_v4().to_string(), id)]);
        post
    }

    pub fn comment_row(id: &str, post_id: &str) -> Value {
        json!({
            "id": id,
            "post_id": post_id,
            "name": "John Smith",
            "email": "john@example.com",
            "content": "Very informative article!",
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        })
    }

    pub fn contact_row(id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Opening hours",
            "message": "Are you open on Saturdays?",
            "status": status,
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        })
    }
}
