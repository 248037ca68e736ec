//! HTTP client with auth header injection.
//!
//! All backend requests carry an `Authorization` header: `Bearer <token>`
//! when the token store holds a value, else an empty value. The header is
//! always transmitted -- requests without a token are still attempted and
//! rejected server-side, matching the backend's contract.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde::Serialize;

use crate::auth::TokenStore;
use crate::config::Config;

/// HTTP client wrapper for Portfolio API communication.
///
/// Manages the base URL and reads the token store synchronously before each
/// request, so in-flight requests keep the header value they captured even
/// if the bridge changes the token afterwards.
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<TokenStore>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: &str, store: Arc<TokenStore>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Create a client from resolved configuration.
    pub fn from_config(config: &Config, store: Arc<TokenStore>) -> Self {
        Self::new(&config.base_url, store)
    }

    /// The token store backing this client's auth header.
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Current `Authorization` header value: `Bearer <token>` or empty.
    fn authorization(&self) -> String {
        match self.store.get() {
            Some(token) => format!("Bearer {}", token),
            None => String::new(),
        }
    }

    /// Send an authorized GET request to a relative API path.
    pub async fn authenticated_get(&self, path: &str) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .get(&url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await
    }

    /// Send an authorized POST request with a JSON body.
    pub async fn authenticated_post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .post(&url)
            .header(AUTHORIZATION, self.authorization())
            .json(body)
            .send()
            .await
    }

    /// Send an authorized multipart POST request (project creation).
    pub async fn authenticated_multipart_post(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .post(&url)
            .header(AUTHORIZATION, self.authorization())
            .multipart(form)
            .send()
            .await
    }

    /// Send an authorized multipart PUT request (project update).
    pub async fn authenticated_multipart_put(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .put(&url)
            .header(AUTHORIZATION, self.authorization())
            .multipart(form)
            .send()
            .await
    }

    /// Send an authorized DELETE request to a relative API path.
    pub async fn authenticated_delete(&self, path: &str) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .delete(&url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await
    }

    /// Send an unauthenticated POST request with a JSON body.
    /// Used for the OAuth code exchange where no bearer token applies.
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        self.client.post(&url).json(body).send().await
    }

    /// PUT raw bytes to an absolute URL (presigned S3 upload target).
    ///
    /// No auth header: the URL itself carries the authorization.
    pub async fn put_bytes(
        &self,
        url: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<Response, reqwest::Error> {
        self.client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
    }
}
