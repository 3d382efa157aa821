//! Client-side collection of one resource.
//!
//! [`EntityStore`] owns the in-memory list a page displays. It mirrors the
//! remote collection through explicit loads and applies the result of every
//! successful mutation locally, so the page never re-fetches after a save.
//!
//! # Lifecycle
//!
//! - **Create**: persisted remotely, then prepended
//! - **Edit**: persisted remotely, then replaced in place by identity
//! - **Delete**: remote call, then the local `estado` flips to inactive
//!
//! Records are never dropped locally. Only a new [`EntityStore::load`] can
//! reflect server-side removal or filtering.

use crate::domain::{Entity, Result};
use crate::service::{EntityService, Resource};
use std::sync::Arc;
use tracing::Instrument;

/// In-memory state of one REST collection.
pub struct EntityStore<R: Resource> {
    service: Arc<dyn EntityService<R>>,
    items: Vec<R::Entity>,
    loading: bool,
    error: Option<String>,
    current_filters: Option<R::Filters>,
}

impl<R: Resource> EntityStore<R> {
    /// Creates an empty store backed by `service`.
    #[must_use]
    pub fn new(service: Arc<dyn EntityService<R>>) -> Self {
        Self {
            service,
            items: Vec::new(),
            loading: false,
            error: None,
            current_filters: None,
        }
    }

    /// Records in display order.
    #[must_use]
    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed load, cleared by the next successful one.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Filters used by the last successful load.
    #[must_use]
    pub const fn current_filters(&self) -> Option<&R::Filters> {
        self.current_filters.as_ref()
    }

    /// Looks up a record by identity.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&R::Entity> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of records with an active `estado`.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    /// Number of records with an inactive `estado`.
    #[must_use]
    pub fn inactive_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    /// Fetches the collection and replaces the local list wholesale.
    ///
    /// On failure the previous list is kept, the message is recorded in
    /// [`error`](Self::error) and the error is returned to the caller as well.
    /// `loading` is reset on both paths.
    ///
    /// # Errors
    ///
    /// Returns the normalized transport error of the failed request.
    pub async fn load(&mut self, filters: Option<R::Filters>) -> Result<()> {
        let span = tracing::debug_span!(
            "store_load",
            resource = R::NAME,
            filtered = filters.is_some()
        );

        self.loading = true;
        let result = self.service.list(filters.as_ref()).instrument(span).await;
        self.loading = false;

        match result {
            Ok(items) => {
                tracing::debug!(resource = R::NAME, count = items.len(), "collection loaded");
                self.items = items;
                self.current_filters = filters;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(resource = R::NAME, error = %e, "collection load failed");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Re-runs the last successful load with the same filters.
    ///
    /// # Errors
    ///
    /// Returns the normalized transport error of the failed request.
    pub async fn reload(&mut self) -> Result<()> {
        let filters = self.current_filters.clone();
        self.load(filters).await
    }

    /// Persists `payload` and applies the stored record locally.
    ///
    /// With `Some(id)` the record is updated and replaces the entry with the
    /// same identity; with `None` it is created and prepended.
    ///
    /// # Errors
    ///
    /// Returns the normalized transport error; the local list is left untouched.
    pub async fn save(&mut self, payload: &R::Payload, id: Option<i64>) -> Result<R::Entity> {
        tracing::debug!(resource = R::NAME, id = ?id, "saving record");

        match id {
            Some(id) => {
                let stored = self.service.update(id, payload).await?;
                for item in self.items.iter_mut().filter(|item| item.id() == id) {
                    *item = stored.clone();
                }
                Ok(stored)
            }
            None => {
                let created = self.service.create(payload).await?;
                self.items.insert(0, created.clone());
                Ok(created)
            }
        }
    }

    /// Deactivates the record `id` remotely, then flips its local flag.
    ///
    /// # Errors
    ///
    /// Returns the normalized transport error; the local list is left untouched.
    pub async fn remove(&mut self, id: i64) -> Result<()> {
        tracing::debug!(resource = R::NAME, id = id, "removing record");

        self.service.delete(id).await?;
        for item in self.items.iter_mut().filter(|item| item.id() == id) {
            item.deactivate();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdminError, Curso, CursoPayload};
    use crate::service::{CursosResource, FixtureService};
    use async_trait::async_trait;

    fn curso(id: i64, nombre: &str) -> Curso {
        Curso {
            id_curso: id,
            nombre: nombre.to_string(),
            facultad: 1,
            escuela: 1,
            ciclo: "3".to_string(),
            estado: true,
            facultad_nombre: None,
            escuela_nombre: None,
        }
    }

    fn payload(nombre: &str) -> CursoPayload {
        CursoPayload {
            nombre: nombre.to_string(),
            facultad: 1,
            escuela: 2,
            ciclo: "5".to_string(),
            estado: true,
        }
    }

    fn store_with(records: Vec<Curso>) -> EntityStore<CursosResource> {
        EntityStore::new(Arc::new(FixtureService::<CursosResource>::in_memory(records)))
    }

    struct FailingService;

    #[async_trait]
    impl EntityService<CursosResource> for FailingService {
        async fn list(&self, _filters: Option<&crate::service::NoFilters>) -> Result<Vec<Curso>> {
            Err(AdminError::Transport("Servicio no disponible".to_string()))
        }

        async fn create(&self, _payload: &CursoPayload) -> Result<Curso> {
            Err(AdminError::Transport("Servicio no disponible".to_string()))
        }

        async fn update(&self, _id: i64, _payload: &CursoPayload) -> Result<Curso> {
            Err(AdminError::Transport("Servicio no disponible".to_string()))
        }

        async fn delete(&self, _id: i64) -> Result<()> {
            Err(AdminError::Transport("Servicio no disponible".to_string()))
        }
    }

    #[tokio::test]
    async fn create_prepends_with_backend_id() {
        let mut store = store_with(vec![curso(1, "Fisica"), curso(2, "Quimica")]);
        store.load(None).await.unwrap();

        let created = store.save(&payload("Algebra"), None).await.unwrap();

        assert_eq!(created.id_curso, 3);
        assert_eq!(store.items()[0], created);
        assert_eq!(store.items().len(), 3);
    }

    #[tokio::test]
    async fn update_replaces_exactly_one_record() {
        let mut store = store_with(vec![curso(1, "Fisica"), curso(2, "Quimica")]);
        store.load(None).await.unwrap();

        let updated = store.save(&payload("Fisica II"), Some(1)).await.unwrap();

        let matching: Vec<_> = store.items().iter().filter(|c| c.id_curso == 1).collect();
        assert_eq!(matching, vec![&updated]);
        assert_eq!(store.items()[1].nombre, "Quimica");
    }

    #[tokio::test]
    async fn remove_keeps_record_as_inactive() {
        let mut store = store_with(vec![curso(1, "Fisica"), curso(2, "Quimica")]);
        store.load(None).await.unwrap();

        store.remove(2).await.unwrap();

        assert_eq!(store.items().len(), 2);
        assert!(!store.find(2).unwrap().estado);
        assert_eq!((store.active_count(), store.inactive_count()), (1, 1));
    }

    #[tokio::test]
    async fn failed_load_records_error_and_keeps_items() {
        let mut store = store_with(vec![curso(1, "Fisica")]);
        store.load(None).await.unwrap();
        let items = store.items().to_vec();

        store.service = Arc::new(FailingService);
        let err = store.load(None).await.unwrap_err();

        assert_eq!(err.to_string(), "Servicio no disponible");
        assert_eq!(store.error(), Some("Servicio no disponible"));
        assert_eq!(store.items(), items.as_slice());
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn failed_save_leaves_list_untouched() {
        let mut store = EntityStore::<CursosResource>::new(Arc::new(FailingService));

        assert!(store.save(&payload("Algebra"), None).await.is_err());
        assert!(store.remove(1).await.is_err());
        assert!(store.items().is_empty());
        assert!(store.error().is_none());
    }
}
