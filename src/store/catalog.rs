//! Faculty and school reference data for one page.

use crate::domain::catalog::escuelas_de_facultad;
use crate::domain::{Escuela, Facultad, Result};
use crate::service::CatalogService;
use futures_util::future::try_join;
use std::sync::Arc;
use tracing::Instrument;

/// Read-only catalogs loaded once per page mount.
///
/// Both lists are fetched concurrently and replaced together. A failed load
/// keeps the previously loaded lists and records the message, the same way
/// [`EntityStore`](super::EntityStore) treats a failed collection load.
pub struct CatalogStore {
    service: Arc<dyn CatalogService>,
    facultades: Vec<Facultad>,
    escuelas: Vec<Escuela>,
    loading: bool,
    error: Option<String>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        Self {
            service,
            facultades: Vec::new(),
            escuelas: Vec::new(),
            loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn facultades(&self) -> &[Facultad] {
        &self.facultades
    }

    #[must_use]
    pub fn escuelas(&self) -> &[Escuela] {
        &self.escuelas
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Schools owned by `facultad_id`, or every school when `None`.
    #[must_use]
    pub fn escuelas_de(&self, facultad_id: Option<i64>) -> Vec<&Escuela> {
        escuelas_de_facultad(&self.escuelas, facultad_id)
    }

    /// Name of a school, if it is in the catalog.
    #[must_use]
    pub fn escuela_nombre(&self, id: i64) -> Option<&str> {
        self.escuelas
            .iter()
            .find(|escuela| escuela.id == id)
            .map(|escuela| escuela.nombre.as_str())
    }

    /// Display label of a faculty, if it is in the catalog.
    #[must_use]
    pub fn facultad_label(&self, id: i64) -> Option<String> {
        self.facultades
            .iter()
            .find(|facultad| facultad.id == id)
            .map(Facultad::label)
    }

    /// Fetches both catalogs concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first transport error; the previous lists are kept.
    pub async fn load(&mut self) -> Result<()> {
        let span = tracing::debug_span!("catalog_load");

        self.loading = true;
        let result = try_join(self.service.facultades(), self.service.escuelas())
            .instrument(span)
            .await;
        self.loading = false;

        match result {
            Ok((facultades, escuelas)) => {
                tracing::debug!(
                    facultades = facultades.len(),
                    escuelas = escuelas.len(),
                    "catalogs loaded"
                );
                self.facultades = facultades;
                self.escuelas = escuelas;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "catalog load failed");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdminError;
    use crate::service::FixtureCatalog;
    use async_trait::async_trait;

    struct BrokenEscuelas;

    #[async_trait]
    impl CatalogService for BrokenEscuelas {
        async fn facultades(&self) -> Result<Vec<Facultad>> {
            Ok(Vec::new())
        }

        async fn escuelas(&self) -> Result<Vec<Escuela>> {
            Err(AdminError::Transport("No se pudieron cargar los catalogos.".to_string()))
        }
    }

    #[tokio::test]
    async fn loads_both_catalogs() {
        let mut store = CatalogStore::new(Arc::new(FixtureCatalog::builtin()));
        store.load().await.unwrap();

        assert_eq!(store.facultades().len(), 6);
        assert!(store.escuelas_de(Some(1)).iter().all(|e| e.facultad_id == 1));
        assert!(store.facultad_label(1).is_some());
    }

    #[tokio::test]
    async fn failure_preserves_previous_lists() {
        let mut store = CatalogStore::new(Arc::new(FixtureCatalog::builtin()));
        store.load().await.unwrap();

        store.service = Arc::new(BrokenEscuelas);
        assert!(store.load().await.is_err());

        assert_eq!(store.facultades().len(), 6);
        assert_eq!(store.escuelas().len(), 10);
        assert_eq!(store.error(), Some("No se pudieron cargar los catalogos."));
    }
}
