use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use tracing::debug;

use crate::backend::TodoBackend;
use crate::error::{TodoError, TodoResult};
use crate::store::{ItemId, ListId, TodoItem, TodoList};

/// Environment variable holding the REST API base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Base URL used when neither an explicit URL nor the environment provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct DescriptionBody<'a> {
    description: &'a str,
}

/// Client for the todo REST API.
///
/// Implements [`TodoBackend`] so the MCP adapter can run in a separate
/// process and reach the store through the REST layer.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. API_BASE_URL environment variable
    /// 3. Default: http://localhost:3000
    pub fn new(api_url: Option<String>) -> Self {
        // reqwest is built without a default crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .or_else(|| env::var(API_BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    /// Create a PUT request builder
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    /// Create a PATCH request builder
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.patch(self.url(path))
    }

    /// Create a DELETE request builder
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// a TodoError::Upstream on non-success status codes, and
    /// TodoError::InvalidResponse when the body is not the expected JSON.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> TodoResult<T> {
        let body = Self::check_status(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Like [`handle_response`](Self::handle_response) for endpoints that
    /// answer without a body.
    pub async fn handle_empty_response(response: Response) -> TodoResult<()> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: Response) -> TodoResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        debug!(status = status.as_u16(), %body, "API request failed");

        Err(TodoError::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

impl TodoBackend for ApiClient {
    async fn list_all(&self) -> TodoResult<Vec<TodoList>> {
        let response = self.get("/todolists").send().await?;
        Self::handle_response(response).await
    }

    async fn get_list(&self, id: ListId) -> TodoResult<TodoList> {
        let response = self.get(&format!("/todolists/{}", id)).send().await?;
        Self::handle_response(response).await
    }

    async fn create_list(&self, name: String) -> TodoResult<TodoList> {
        let response = self
            .post("/todolists")
            .json(&NameBody { name: &name })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn update_list(&self, id: ListId, name: String) -> TodoResult<TodoList> {
        let response = self
            .put(&format!("/todolists/{}", id))
            .json(&NameBody { name: &name })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn delete_list(&self, id: ListId) -> TodoResult<()> {
        let response = self.delete(&format!("/todolists/{}", id)).send().await?;
        Self::handle_empty_response(response).await
    }

    async fn list_items(&self, list_id: ListId) -> TodoResult<Vec<TodoItem>> {
        let response = self
            .get(&format!("/lists/{}/items", list_id))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn create_item(&self, list_id: ListId, description: String) -> TodoResult<TodoItem> {
        let response = self
            .post(&format!("/lists/{}/items", list_id))
            .json(&DescriptionBody {
                description: &description,
            })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn update_item_description(
        &self,
        id: ItemId,
        description: String,
    ) -> TodoResult<TodoItem> {
        let response = self
            .patch(&format!("/items/{}/description", id))
            .json(&DescriptionBody {
                description: &description,
            })
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn toggle_item_done(&self, id: ItemId) -> TodoResult<TodoItem> {
        let response = self
            .patch(&format!("/items/{}/toggle-done", id))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn delete_item(&self, id: ItemId) -> TodoResult<()> {
        let response = self.delete(&format!("/items/{}", id)).send().await?;
        Self::handle_empty_response(response).await
    }
}
