use anyhow::{anyhow, Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::query::RestQuery;

/// Handle on the Supabase (PostgREST) interface of the clinic database.
///
/// Built once at startup and shared through the application state; the
/// inner `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.clone(),
            api_key: config.supabase_api_key.clone(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.api_key).context("API key is not a valid header value")?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .context("API key is not a valid header value")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers()?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url).headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                409 => anyhow!("Constraint violation: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        Ok(response)
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request_with_headers(method, path, body, None).await
    }

    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body, headers).await?;
        let bytes = response.bytes().await?;
        // Kept as a `serde_json::Error` source so callers can tell a shape
        // mismatch from a store failure.
        let data = serde_json::from_slice::<T>(&bytes).context("Failed to decode database response")?;
        Ok(data)
    }

    /// `GET /rest/v1/{table}` with the given filters.
    pub async fn select<T>(&self, table: &str, query: &RestQuery) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, &query.path_for(table), None).await
    }

    /// Inserts one row or an array of rows and returns the stored representation.
    pub async fn insert<T, B>(&self, table: &str, rows: &B) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(rows)?;
        self.request_with_headers(
            Method::POST,
            &RestQuery::new().path_for(table),
            Some(body),
            Some(Self::return_representation()),
        )
        .await
    }

    /// Patches every row matched by `query` and returns the updated rows.
    pub async fn update<T, B>(&self, table: &str, query: &RestQuery, changes: &B) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(changes)?;
        self.request_with_headers(
            Method::PATCH,
            &query.path_for(table),
            Some(body),
            Some(Self::return_representation()),
        )
        .await
    }

    /// Deletes every row of `table`. Foreign keys declared `ON DELETE
    /// CASCADE` take dependent rows with them.
    pub async fn delete_all(&self, table: &str) -> Result<()> {
        let query = RestQuery::new().not_null("id");
        self.send(Method::DELETE, &query.path_for(table), None, None)
            .await?;
        Ok(())
    }

    fn return_representation() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SupabaseClient {
        SupabaseClient::new(&AppConfig {
            supabase_url: server.uri(),
            supabase_api_key: "test-key".to_string(),
            port: 8080,
            environment: "test".to_string(),
            cors_allowed_origins: vec![],
        })
    }

    #[tokio::test]
    async fn select_sends_auth_headers_and_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/doctors"))
            .and(header("apikey", "test-key"))
            .and(header("authorization", "Bearer test-key"))
            .and(query_param("specialty", "eq.Cardiology"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "d1" }])))
            .expect(1)
            .mount(&server)
            .await;

        let rows: Vec<Value> = client_for(&server)
            .select("doctors", &RestQuery::new().eq("specialty", "Cardiology"))
            .await
            .unwrap();

        assert_eq!(rows, vec![json!({ "id": "d1" })]);
    }

    #[tokio::test]
    async fn insert_asks_for_representation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/services"))
            .and(header("prefer", "return=representation"))
            .and(body_json(json!([{ "name": "Cardiology" }])))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{ "id": "s1", "name": "Cardiology" }])))
            .expect(1)
            .mount(&server)
            .await;

        let rows: Vec<Value> = client_for(&server)
            .insert("services", &json!([{ "name": "Cardiology" }]))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn delete_all_filters_on_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/services"))
            .and(query_param("id", "not.is.null"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete_all("services").await.unwrap();
    }

    #[tokio::test]
    async fn undecodable_rows_keep_the_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 42 }])))
            .mount(&server)
            .await;

        #[derive(Debug, serde::Deserialize)]
        struct Row {
            #[allow(dead_code)]
            id: String,
        }

        let err = client_for(&server)
            .select::<Row>("services", &RestQuery::new())
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }

    #[tokio::test]
    async fn error_status_becomes_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result: Result<Vec<Value>> = client_for(&server)
            .select("services", &RestQuery::new())
            .await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("boom"), "unexpected error: {}", err);
    }
}
