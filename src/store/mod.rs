//! Stores: client-side state mirrored from the services.
//!
//! - [`EntityStore`]: one editable collection (`items`, `loading`, `error`)
//! - [`CatalogStore`]: read-only faculty and school lists

pub mod catalog;
pub mod entity;

pub use catalog::CatalogStore;
pub use entity::EntityStore;
