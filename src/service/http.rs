//! HTTP implementation of the service traits.
//!
//! [`ApiClient`] wraps a `reqwest::Client` bound to one base URL and turns
//! every failure into a normalized [`AdminError::Transport`]. The backend
//! reports errors either as a plain string body or as a JSON object with a
//! `message` field; anything else yields the caller's fallback message.

use crate::domain::{AdminError, Escuela, Facultad, Result};
use crate::service::backend::{CatalogService, EntityService};
use crate::service::resource::{ListFilters as _, Resource};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::Instrument;

/// Path of the faculty catalog.
pub const FACULTADES_PATH: &str = "/api/horarios/catalogos/facultades";

/// Path of the school catalog.
pub const ESCUELAS_PATH: &str = "/api/horarios/catalogos/escuelas";

/// Fallback for catalog requests without a readable error body.
pub const CATALOG_FALLBACK_ERROR: &str = "No se pudieron cargar los catalogos.";

/// Extracts the user-facing message from an error response body.
///
/// # Rules
///
/// 1. JSON object with a non-empty string `message` → that message
/// 2. JSON string → the string
/// 3. Non-JSON, non-blank text → the text itself
/// 4. Anything else (blank, other JSON) → `fallback`
///
/// # Example
///
/// ```rust
/// use horarios_admin::service::normalize_error;
///
/// assert_eq!(normalize_error(r#"{"message":"Codigo duplicado"}"#, "x"), "Codigo duplicado");
/// assert_eq!(normalize_error("Espacio no encontrado", "x"), "Espacio no encontrado");
/// assert_eq!(normalize_error(r#"{"status":500}"#, "x"), "x");
/// ```
#[must_use]
pub fn normalize_error(body: &str, fallback: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return fallback.to_string();
    }

    match serde_json::from_str::<JsonValue>(body) {
        Ok(JsonValue::Object(map)) => map
            .get("message")
            .and_then(JsonValue::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map_or_else(|| fallback.to_string(), String::from),
        Ok(JsonValue::String(text)) if !text.trim().is_empty() => text,
        Ok(_) => fallback.to_string(),
        Err(_) => body.to_string(),
    }
}

/// A REST client bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdminError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of `path` on this backend.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and decodes a JSON response body.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, fallback: &str) -> Result<T> {
        let response = Self::send(request, fallback).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::debug!(error = %e, "failed to decode response body");
            AdminError::Transport(fallback.to_string())
        })
    }

    /// Sends a request, mapping non-success statuses to normalized errors.
    async fn send(request: RequestBuilder, fallback: &str) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, timeout = e.is_timeout(), "request failed without response");
            AdminError::Transport(fallback.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = normalize_error(&body, fallback);
        tracing::debug!(status = %status, message = %message, "backend rejected request");
        Err(AdminError::Transport(message))
    }
}

/// HTTP service for one resource.
#[derive(Debug, Clone)]
pub struct HttpService<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpService<R> {
    /// Creates a service for `R` on the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(ApiClient::new(base_url, timeout)?))
    }

    /// Creates a service sharing an existing client.
    #[must_use]
    pub const fn with_client(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> EntityService<R> for HttpService<R> {
    async fn list(&self, filters: Option<&R::Filters>) -> Result<Vec<R::Entity>> {
        let query = filters.map(|f| f.query_pairs()).unwrap_or_default();
        let span = tracing::debug_span!("http_list", resource = R::NAME, filters = query.len());

        let request = self.api.client.get(self.api.url(&R::collection_path())).query(&query);
        let items: Vec<R::Entity> = self
            .api
            .send_json(request, R::FALLBACK_ERROR)
            .instrument(span)
            .await?;

        tracing::debug!(resource = R::NAME, count = items.len(), "listed records");
        Ok(items)
    }

    async fn create(&self, payload: &R::Payload) -> Result<R::Entity> {
        tracing::debug!(resource = R::NAME, "creating record");
        let request = self.api.client.post(self.api.url(&R::collection_path())).json(payload);
        self.api.send_json(request, R::FALLBACK_ERROR).await
    }

    async fn update(&self, id: i64, payload: &R::Payload) -> Result<R::Entity> {
        tracing::debug!(resource = R::NAME, id = id, "updating record");
        let request = self.api.client.put(self.api.url(&R::item_path(id))).json(payload);
        self.api.send_json(request, R::FALLBACK_ERROR).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!(resource = R::NAME, id = id, "deleting record");
        let request = self.api.client.delete(self.api.url(&R::item_path(id)));
        ApiClient::send(request, R::FALLBACK_ERROR).await?;
        Ok(())
    }
}

/// HTTP catalog service.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    api: ApiClient,
}

impl HttpCatalogService {
    /// Creates a catalog service on the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn facultades(&self) -> Result<Vec<Facultad>> {
        let request = self.api.client.get(self.api.url(FACULTADES_PATH));
        self.api.send_json(request, CATALOG_FALLBACK_ERROR).await
    }

    async fn escuelas(&self) -> Result<Vec<Escuela>> {
        let request = self.api.client.get(self.api.url(ESCUELAS_PATH));
        self.api.send_json(request, CATALOG_FALLBACK_ERROR).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "No se pudo completar la solicitud.";

    #[test]
    fn message_field_wins() {
        assert_eq!(
            normalize_error(r#"{"message":"El codigo ya existe","status":409}"#, FALLBACK),
            "El codigo ya existe"
        );
    }

    #[test]
    fn blank_message_falls_back() {
        assert_eq!(normalize_error(r#"{"message":"  "}"#, FALLBACK), FALLBACK);
        assert_eq!(normalize_error(r#"{"error":"boom"}"#, FALLBACK), FALLBACK);
        assert_eq!(normalize_error("", FALLBACK), FALLBACK);
        assert_eq!(normalize_error("[1,2]", FALLBACK), FALLBACK);
    }

    #[test]
    fn plain_and_json_strings_pass_through() {
        assert_eq!(normalize_error("Curso no encontrado\n", FALLBACK), "Curso no encontrado");
        assert_eq!(normalize_error(r#""Ciclo invalido""#, FALLBACK), "Ciclo invalido");
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = ApiClient::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.url("/api/cursos"), "http://localhost:8080/api/cursos");
    }
}
