// libs/doctor-cell/tests/handlers_test.rs

use axum::http::{Method, StatusCode};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doctor_cell::models::{Doctor, DoctorFilters};
use doctor_cell::router::doctor_routes;
use shared_utils::test_utils::{send_json, MockSupabaseResponses, TestConfig};

async fn app_for(mock_server: &MockServer) -> axum::Router {
    doctor_routes(TestConfig::with_supabase_url(&mock_server.uri()).to_state())
}

#[tokio::test]
async fn list_doctors_without_filters_returns_everything() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("select", "*"))
        .and(query_param_is_missing("name"))
        .and(query_param_is_missing("specialty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::doctor_row("d1", "Dr. Sarah Johnson", "Cardiology"),
            MockSupabaseResponses::doctor_row("d2", "Dr. Michael Chen", "Neurology"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(app_for(&mock_server).await, Method::GET, "/doctors", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(2));
    assert_eq!(body[0]["name"], "Dr. Sarah Johnson");
}

#[tokio::test]
async fn list_doctors_combines_search_and_specialty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("name", "ilike.*sarah*"))
        .and(query_param("specialty", "eq.Cardiology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::doctor_row("d1", "Dr. Sarah Johnson", "Cardiology"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(
        app_for(&mock_server).await,
        Method::GET,
        "/doctors?search=sarah&specialty=Cardiology",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let filters = DoctorFilters {
        name_contains: Some("sarah".to_string()),
        specialty: Some("Cardiology".to_string()),
    };
    let doctors: Vec<Doctor> = serde_json::from_value(body).unwrap();
    assert_eq!(doctors.len(), 1);
    assert!(doctors.iter().all(|d| filters.matches(d)));
}

#[tokio::test]
async fn empty_filter_values_are_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param_is_missing("name"))
        .and(query_param_is_missing("specialty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(
        app_for(&mock_server).await,
        Method::GET,
        "/doctors?search=&specialty=",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn store_failure_is_a_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(503).set_body_string("database offline"))
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(app_for(&mock_server).await, Method::GET, "/doctors", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap_or_default().contains("database offline"));
}

#[tokio::test]
async fn list_services_returns_catalog() {
    let mock_server = MockServer::start().await;

    let rows: Vec<_> = ["General Medicine", "Cardiology", "Neurology"]
        .iter()
        .enumerate()
        .map(|(i, name)| MockSupabaseResponses::service_row(&format!("s{}", i), name))
        .collect();

    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(rows)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(app_for(&mock_server).await, Method::GET, "/services", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(3));
    assert_eq!(body[1]["name"], "Cardiology");
}

#[tokio::test]
async fn asterisk_in_search_matches_literally() {
    let mock_server = MockServer::start().await;

    // The store can only narrow `*` to a single-character wildcard.
    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("name", "ilike.*Dr_Chen*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::doctor_row("d1", "Dr*Chen Clinic", "Neurology"),
            MockSupabaseResponses::doctor_row("d2", "Dr.Chen", "Neurology"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(
        app_for(&mock_server).await,
        Method::GET,
        "/doctors?search=Dr*Chen",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));
    assert_eq!(body[0]["id"], "d1");
}

#[tokio::test]
async fn malformed_store_rows_are_an_internal_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 7, "name": null }])))
        .mount(&mock_server)
        .await;

    let (status, body) = send_json(app_for(&mock_server).await, Method::GET, "/doctors", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Failed to decode database response"));
}
