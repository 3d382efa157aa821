//! Service layer: REST access to the admin resources.
//!
//! # Organization
//!
//! - [`resource`]: Resource descriptors binding entities to REST paths
//! - [`backend`]: Object-safe service traits
//! - [`http`]: `reqwest` implementation against the live backends
//! - [`fixture`]: JSON file implementation for offline use and tests

pub mod backend;
pub mod fixture;
pub mod http;
pub mod resource;

pub use backend::{CatalogService, EntityService};
pub use fixture::{CatalogData, FixtureCatalog, FixtureService};
pub use http::{normalize_error, ApiClient, HttpCatalogService, HttpService};
pub use resource::{CursosResource, EspaciosResource, ListFilters, NoFilters, Resource};

use crate::domain::Result;
use crate::Config;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// File names used by the offline backend inside its data directory.
pub const OFFLINE_ESPACIOS_FILE: &str = "espacios.json";
pub const OFFLINE_CURSOS_FILE: &str = "cursos.json";
pub const OFFLINE_CATALOGOS_FILE: &str = "catalogos.json";

/// The services one console session talks to.
#[derive(Clone)]
pub struct Services {
    pub espacios: Arc<dyn EntityService<EspaciosResource>>,
    pub cursos: Arc<dyn EntityService<CursosResource>>,
    pub catalogos: Arc<dyn CatalogService>,
}

impl Services {
    /// Services backed by the REST backends named in `config`.
    ///
    /// Spaces live on their own backend; courses and catalogs on the
    /// scheduling backend.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an HTTP client cannot be built.
    pub fn http(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let horarios = ApiClient::new(&config.horarios_base_url, timeout)?;

        Ok(Self {
            espacios: Arc::new(HttpService::<EspaciosResource>::new(&config.espacios_base_url, timeout)?),
            cursos: Arc::new(HttpService::<CursosResource>::with_client(horarios)),
            catalogos: Arc::new(HttpCatalogService::new(&config.horarios_base_url, timeout)?),
        })
    }

    /// Services backed by JSON files in `dir`, created on first write.
    ///
    /// # Errors
    ///
    /// Returns a storage error if an existing file cannot be read or parsed.
    pub fn offline(dir: &Path) -> Result<Self> {
        tracing::debug!(dir = %dir.display(), "using offline backend");
        Ok(Self {
            espacios: Arc::new(FixtureService::<EspaciosResource>::open(dir.join(OFFLINE_ESPACIOS_FILE))?),
            cursos: Arc::new(FixtureService::<CursosResource>::open(dir.join(OFFLINE_CURSOS_FILE))?),
            catalogos: Arc::new(FixtureCatalog::open(&dir.join(OFFLINE_CATALOGOS_FILE))?),
        })
    }
}
