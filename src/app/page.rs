//! State shared by the CRUD pages.

use super::form::FormModal;
use crate::domain::Entity;
use crate::filters::{search, Stats};
use crate::service::{CatalogService, EntityService, Resource};
use crate::store::{CatalogStore, EntityStore};
use crate::validation::{form_from_entity, Validate};
use std::sync::Arc;

/// One collection page: store, catalogs, search box, form modal and the
/// delete confirmation.
///
/// Espacios and Cursos wrap this with their own filter controls.
pub struct CrudPage<R, V>
where
    R: Resource,
    V: Validate<Payload = R::Payload>,
{
    pub(crate) store: EntityStore<R>,
    pub(crate) catalogs: CatalogStore,
    pub(crate) modal: FormModal<V>,
    search: String,
    pending_delete: Option<i64>,
    mounted: bool,
}

impl<R, V> CrudPage<R, V>
where
    R: Resource,
    V: Validate<Payload = R::Payload> + for<'a> From<&'a R::Entity>,
{
    #[must_use]
    pub fn new(service: Arc<dyn EntityService<R>>, catalogs: Arc<dyn CatalogService>) -> Self {
        Self {
            store: EntityStore::new(service),
            catalogs: CatalogStore::new(catalogs),
            modal: FormModal::default(),
            search: String::new(),
            pending_delete: None,
            mounted: false,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &EntityStore<R> {
        &self.store
    }

    #[must_use]
    pub const fn catalogs(&self) -> &CatalogStore {
        &self.catalogs
    }

    #[must_use]
    pub const fn modal(&self) -> &FormModal<V> {
        &self.modal
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: String) {
        self.search = query;
    }

    /// Loaded records whose display name matches the search box.
    #[must_use]
    pub fn searched(&self) -> Vec<&R::Entity> {
        search(self.store.items(), &self.search)
    }

    /// Counters over the whole loaded collection.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::of(self.store.items())
    }

    /// Marks the page mounted, returning `true` the first time.
    pub(crate) fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    pub fn open_create(&mut self) {
        self.pending_delete = None;
        self.modal.open_create();
    }

    /// Opens the edit modal for record `id`. Returns `false` if it is not loaded.
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(entity) = self.store.find(id) else {
            tracing::debug!(resource = R::NAME, id, "edit requested for unknown record");
            return false;
        };
        let values: V = form_from_entity(entity);
        self.pending_delete = None;
        self.modal.open_edit(id, values);
        true
    }

    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: i64) -> Option<&R::Entity> {
        let entity = self.store.find(id)?;
        self.pending_delete = Some(id);
        Some(entity)
    }

    /// Record awaiting delete confirmation.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&R::Entity> {
        self.pending_delete.and_then(|id| self.store.find(id))
    }

    /// Consumes the pending confirmation.
    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }

    /// Display name of a loaded record, for status messages.
    #[must_use]
    pub fn display_name(&self, id: i64) -> String {
        self.store
            .find(id)
            .map_or_else(|| format!("#{id}"), |entity| entity.display_name().to_string())
    }
}
