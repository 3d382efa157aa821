//! JSON file-backed services.
//!
//! The fixture backend honors the same contract as the REST backend: ids are
//! assigned on create, update replaces by identity, delete flips `estado`.
//! It keeps the whole dataset in memory and persists it with atomic writes
//! (write-to-temp + rename) after every mutation. The binary uses it for
//! offline mode and the test suite uses it as the mock backend.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "next_id": 3,
//!   "records": [ { "id": 1, "nombre": "Lab 101", "...": "..." } ]
//! }
//! ```

use crate::domain::reporte::{escuelas_reporte, facultades_reporte};
use crate::domain::{AdminError, Entity, Escuela, Facultad, Result};
use crate::service::backend::{CatalogService, EntityService};
use crate::service::resource::{ListFilters as _, Resource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// On-disk container for one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "E: Entity"))]
struct FixtureData<E> {
    version: u32,
    next_id: i64,
    #[serde(default)]
    records: Vec<E>,
}

impl<E> Default for FixtureData<E> {
    fn default() -> Self {
        Self {
            version: 1,
            next_id: 1,
            records: Vec::new(),
        }
    }
}

/// Loads a JSON document, or `None` when the file does not exist yet.
fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| AdminError::Storage(format!("failed to parse JSON: {e}")))
}

/// Writes a JSON document atomically.
fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AdminError::Storage(format!("failed to serialize JSON: {e}")))?;

    let tmp_path = path.with_extension("tmp");
    tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
    std::fs::write(&tmp_path, json)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Fixture backend for one resource.
///
/// # Thread Safety
///
/// The dataset sits behind a `Mutex` so the service can be shared as
/// `Arc<dyn EntityService<R>>`; the lock is never held across an await point.
pub struct FixtureService<R: Resource> {
    file_path: Option<PathBuf>,
    data: Mutex<FixtureData<R::Entity>>,
}

impl<R: Resource> FixtureService<R> {
    /// Opens (or creates) the fixture file at `file_path`.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file holds invalid JSON.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, resource = R::NAME, "opening fixture backend");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = load_json(&file_path)?.unwrap_or_default();
        Ok(Self {
            file_path: Some(file_path),
            data: Mutex::new(data),
        })
    }

    /// An in-memory backend seeded with `records`. Nothing is persisted.
    ///
    /// The next id continues after the highest seeded id.
    #[must_use]
    pub fn in_memory(records: Vec<R::Entity>) -> Self {
        let next_id = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            file_path: None,
            data: Mutex::new(FixtureData {
                version: 1,
                next_id,
                records,
            }),
        }
    }

    /// Snapshot of every stored record, including inactive ones.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lock is poisoned.
    pub fn records(&self) -> Result<Vec<R::Entity>> {
        Ok(self.lock()?.records.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, FixtureData<R::Entity>>> {
        self.data
            .lock()
            .map_err(|e| AdminError::Storage(format!("fixture lock poisoned: {e}")))
    }

    /// Writes `next` and only then replaces the in-memory dataset with it.
    fn commit(&self, data: &mut FixtureData<R::Entity>, next: FixtureData<R::Entity>) -> Result<()> {
        if let Some(path) = &self.file_path {
            save_json(path, &next)?;
        }
        *data = next;
        Ok(())
    }

    fn not_found(id: i64) -> AdminError {
        AdminError::Transport(format!("No existe el registro {id} en {}.", R::NAME))
    }
}

#[async_trait]
impl<R: Resource> EntityService<R> for FixtureService<R> {
    async fn list(&self, filters: Option<&R::Filters>) -> Result<Vec<R::Entity>> {
        let data = self.lock()?;
        let items: Vec<R::Entity> = data
            .records
            .iter()
            .filter(|record| filters.map_or(true, |f| f.matches(*record)))
            .cloned()
            .collect();

        tracing::debug!(resource = R::NAME, count = items.len(), "fixture list");
        Ok(items)
    }

    async fn create(&self, payload: &R::Payload) -> Result<R::Entity> {
        let mut data = self.lock()?;
        let mut next = data.clone();
        let id = next.next_id;
        next.next_id += 1;

        let record = R::materialize(id, payload);
        next.records.push(record.clone());
        self.commit(&mut data, next)?;

        tracing::debug!(resource = R::NAME, id = id, "fixture create");
        Ok(record)
    }

    async fn update(&self, id: i64, payload: &R::Payload) -> Result<R::Entity> {
        let mut data = self.lock()?;
        let mut next = data.clone();
        let slot = next
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        *slot = R::materialize(id, payload);
        let record = slot.clone();
        self.commit(&mut data, next)?;

        tracing::debug!(resource = R::NAME, id = id, "fixture update");
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut data = self.lock()?;
        let mut next = data.clone();
        next.records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?
            .deactivate();

        self.commit(&mut data, next)?;

        tracing::debug!(resource = R::NAME, id = id, "fixture delete");
        Ok(())
    }
}

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub facultades: Vec<Facultad>,
    #[serde(default)]
    pub escuelas: Vec<Escuela>,
}

/// Read-only catalog fixture.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    data: CatalogData,
}

impl FixtureCatalog {
    /// Loads catalogs from `path`, falling back to the built-in faculty and
    /// school lists when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file holds invalid JSON.
    pub fn open(path: &Path) -> Result<Self> {
        let data = load_json(path)?.unwrap_or_else(|| {
            tracing::debug!(path = ?path, "catalog fixture missing, using built-in catalogs");
            Self::builtin().data
        });
        Ok(Self { data })
    }

    /// Catalog seeded with the built-in faculty and school lists.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(facultades_reporte(), escuelas_reporte())
    }

    #[must_use]
    pub const fn new(facultades: Vec<Facultad>, escuelas: Vec<Escuela>) -> Self {
        Self {
            data: CatalogData { facultades, escuelas },
        }
    }
}

#[async_trait]
impl CatalogService for FixtureCatalog {
    async fn facultades(&self) -> Result<Vec<Facultad>> {
        Ok(self.data.facultades.clone())
    }

    async fn escuelas(&self) -> Result<Vec<Escuela>> {
        Ok(self.data.escuelas.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CursoPayload, EspacioFilters, EspacioPayload};
    use crate::service::resource::{CursosResource, EspaciosResource};

    fn payload(nombre: &str, tipo: &str) -> EspacioPayload {
        EspacioPayload {
            codigo: None,
            nombre: nombre.to_string(),
            tipo: tipo.to_string(),
            capacidad: 20,
            equipamiento: None,
            escuela_id: 2,
            estado: 1,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("espacios.json");

        let service = FixtureService::<EspaciosResource>::open(path.clone()).unwrap();
        let first = service.create(&payload("Lab 101", "laboratorio")).await.unwrap();
        let second = service.create(&payload("Aula 2", "salon")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let reopened = FixtureService::<EspaciosResource>::open(path).unwrap();
        assert_eq!(reopened.records().unwrap().len(), 2);
        let third = reopened.create(&payload("Aula 3", "salon")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn delete_flags_instead_of_removing() {
        let service = FixtureService::<EspaciosResource>::in_memory(vec![]);
        let created = service.create(&payload("Lab 101", "laboratorio")).await.unwrap();

        service.delete(created.id).await.unwrap();

        let records = service.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].estado, 0);
    }

    #[tokio::test]
    async fn list_applies_filters_locally() {
        let service = FixtureService::<EspaciosResource>::in_memory(vec![]);
        service.create(&payload("Lab 101", "laboratorio")).await.unwrap();
        service.create(&payload("Aula 2", "salon")).await.unwrap();

        let filters = EspacioFilters {
            tipo: Some("salon".to_string()),
            ..EspacioFilters::default()
        };
        let salones = service.list(Some(&filters)).await.unwrap();
        assert_eq!(salones.len(), 1);
        assert_eq!(salones[0].nombre, "Aula 2");
    }

    #[tokio::test]
    async fn update_of_missing_record_is_a_transport_error() {
        let service = FixtureService::<CursosResource>::in_memory(vec![]);
        let payload = CursoPayload {
            nombre: "Calculo".to_string(),
            facultad: 1,
            escuela: 1,
            ciclo: "1".to_string(),
            estado: true,
        };

        let err = service.update(99, &payload).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn failed_write_leaves_dataset_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("espacios.json");
        let service = FixtureService::<EspaciosResource>::open(path.clone()).unwrap();
        let kept = service.create(&payload("Lab 101", "laboratorio")).await.unwrap();

        // A directory at the target path makes the rename fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(service.create(&payload("Aula 2", "salon")).await.is_err());
        assert!(service.update(kept.id, &payload("Lab 999", "laboratorio")).await.is_err());
        assert!(service.delete(kept.id).await.is_err());

        let records = service.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nombre, "Lab 101");
        assert_eq!(records[0].estado, 1);

        std::fs::remove_dir(&path).unwrap();
        let retried = service.create(&payload("Aula 2", "salon")).await.unwrap();
        assert_eq!(retried.id, 2);
        assert_eq!(service.records().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_catalog_file_uses_builtin_lists() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = FixtureCatalog::open(&dir.path().join("catalogos.json")).unwrap();

        assert_eq!(catalog.facultades().await.unwrap().len(), 6);
        assert_eq!(catalog.escuelas().await.unwrap().len(), 10);
    }
}
