//! Service abstractions.
//!
//! [`EntityService`] is the four-operation contract every REST resource
//! honors; [`CatalogService`] serves the read-only faculty and school lists.
//! Both are object-safe so a page can run against the HTTP backend or the
//! local fixture backend without knowing which.
//!
//! Every failure is a single [`AdminError::Transport`](crate::domain::AdminError)
//! carrying a display-ready message. Nothing here retries.

use crate::domain::{Escuela, Facultad, Result};
use crate::service::resource::Resource;
use async_trait::async_trait;

/// CRUD operations against one REST collection.
///
/// # Examples
///
/// ```no_run
/// use horarios_admin::service::{EntityService, EspaciosResource, HttpService};
/// use std::time::Duration;
///
/// # async fn demo() -> horarios_admin::Result<()> {
/// let service = HttpService::<EspaciosResource>::new("http://localhost:8080", Duration::from_secs(15))?;
/// let espacios = service.list(None).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait EntityService<R: Resource>: Send + Sync {
    /// Lists the collection, optionally narrowed by server-side filters.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails.
    async fn list(&self, filters: Option<&R::Filters>) -> Result<Vec<R::Entity>>;

    /// Creates a record and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the backend rejects the payload.
    async fn create(&self, payload: &R::Payload) -> Result<R::Entity>;

    /// Replaces the record `id` and returns the stored version.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the record is missing or the payload is rejected.
    async fn update(&self, id: i64, payload: &R::Payload) -> Result<R::Entity>;

    /// Deactivates the record `id`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Read-only faculty and school catalogs.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists all faculties.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails.
    async fn facultades(&self) -> Result<Vec<Facultad>>;

    /// Lists all schools.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails.
    async fn escuelas(&self) -> Result<Vec<Escuela>>;
}
