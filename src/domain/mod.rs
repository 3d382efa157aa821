//! Domain layer: records, payloads and form values for every admin module.
//!
//! The types here are plain data. They know their wire format (serde, camelCase
//! field names as the REST backend expects) and how to answer the few
//! questions the store asks of them through the [`Entity`] trait: identity,
//! display name and the `estado` flag used for soft deletion.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`espacio`]: Academic spaces (rooms, laboratories)
//! - [`curso`]: Courses tied to a faculty, a school and a cycle
//! - [`catalog`]: Read-only faculty and school reference data
//! - [`reporte`]: Report filter criteria and their static catalogs

pub mod catalog;
pub mod curso;
pub mod error;
pub mod espacio;
pub mod reporte;

pub use catalog::{Escuela, Facultad};
pub use curso::{Curso, CursoField, CursoFormValues, CursoPayload};
pub use error::{AdminError, Result};
pub use espacio::{
    Espacio, EspacioField, EspacioFilters, EspacioFormValues, EspacioPayload, EstadoFiltro,
};
pub use reporte::FiltrosReporte;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A record managed by an entity store.
///
/// Identity is assigned by the backend and never changes afterwards. "Deleting"
/// an entity only flips its active flag, so the store needs a way to do that
/// without knowing how each record encodes `estado`.
pub trait Entity: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Backend-assigned identity.
    fn id(&self) -> i64;

    /// Name used for search and for user-facing messages.
    fn display_name(&self) -> &str;

    /// Whether the `estado` flag is set to active.
    fn is_active(&self) -> bool;

    /// Flips the `estado` flag to inactive.
    fn deactivate(&mut self);
}

/// Raw string values of an entity form.
///
/// Forms hold exactly what the user typed; the validators turn them into
/// payloads. The associated `Field` enumerates the inputs so pages and views
/// can address them without stringly-typed lookups.
pub trait FormValues: Clone + Debug + Default + PartialEq {
    /// The inputs of this form.
    type Field: Copy + Debug + PartialEq + Eq + 'static;

    /// Every field in display order.
    fn fields() -> &'static [Self::Field];

    /// Human-readable label of a field.
    fn label(field: Self::Field) -> &'static str;

    /// Parses a field from its command-line key (e.g. `"escuelaId"`).
    fn parse_field(key: &str) -> Option<Self::Field>;

    /// Current raw value of a field.
    fn get(&self, field: Self::Field) -> &str;

    /// Overwrites the raw value of a field.
    fn set(&mut self, field: Self::Field, value: String);
}
