//! REST resource descriptors.
//!
//! A [`Resource`] ties an entity type to its collection path, its payload and
//! filter types, and the fallback message shown when the backend gives no
//! usable error text. Services and stores are generic over it, so spaces and
//! courses share one client and one store implementation.

use crate::domain::{Curso, CursoPayload, Entity, Espacio, EspacioFilters, EspacioPayload};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Filters accepted by a resource's listing endpoint.
pub trait ListFilters<E>: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Query-string pairs sent with `GET /api/<resource>`.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Local evaluation of the same filters.
    fn matches(&self, entity: &E) -> bool;
}

/// Marker for resources whose listing endpoint takes no filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilters;

impl<E> ListFilters<E> for NoFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn matches(&self, _entity: &E) -> bool {
        true
    }
}

impl ListFilters<Espacio> for EspacioFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Self::query_pairs(self)
    }

    fn matches(&self, entity: &Espacio) -> bool {
        Self::matches(self, entity)
    }
}

/// A REST collection managed through create/update/soft-delete.
pub trait Resource: Send + Sync + 'static {
    type Entity: Entity;
    type Payload: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;
    type Filters: ListFilters<Self::Entity>;

    /// Collection segment under `/api/`.
    const NAME: &'static str;

    /// Message used when a failed request carries no readable error body.
    const FALLBACK_ERROR: &'static str;

    /// Collection path, e.g. `/api/espacios`.
    #[must_use]
    fn collection_path() -> String {
        format!("/api/{}", Self::NAME)
    }

    /// Item path, e.g. `/api/espacios/7`.
    #[must_use]
    fn item_path(id: i64) -> String {
        format!("/api/{}/{id}", Self::NAME)
    }

    /// Builds the record a backend would return after storing `payload` under `id`.
    fn materialize(id: i64, payload: &Self::Payload) -> Self::Entity;
}

/// Academic spaces, served from the spaces backend.
#[derive(Debug, Clone, Copy)]
pub struct EspaciosResource;

impl Resource for EspaciosResource {
    type Entity = Espacio;
    type Payload = EspacioPayload;
    type Filters = EspacioFilters;

    const NAME: &'static str = "espacios";
    const FALLBACK_ERROR: &'static str = "No se pudo completar la solicitud de espacios.";

    fn materialize(id: i64, payload: &EspacioPayload) -> Espacio {
        Espacio {
            id,
            codigo: payload.codigo.clone().unwrap_or_default(),
            nombre: payload.nombre.clone(),
            tipo: payload.tipo.clone(),
            capacidad: payload.capacidad,
            equipamiento: payload.equipamiento.clone(),
            estado: payload.estado,
            escuela_id: payload.escuela_id,
            escuela_nombre: None,
            facultad_id: None,
        }
    }
}

/// Courses, served from the scheduling backend.
#[derive(Debug, Clone, Copy)]
pub struct CursosResource;

impl Resource for CursosResource {
    type Entity = Curso;
    type Payload = CursoPayload;
    type Filters = NoFilters;

    const NAME: &'static str = "cursos";
    const FALLBACK_ERROR: &'static str =
        "No se pudo completar la solicitud en horariocurso-backend.";

    fn materialize(id: i64, payload: &CursoPayload) -> Curso {
        Curso {
            id_curso: id,
            nombre: payload.nombre.clone(),
            facultad: payload.facultad,
            escuela: payload.escuela,
            ciclo: payload.ciclo.clone(),
            estado: payload.estado,
            facultad_nombre: None,
            escuela_nombre: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_rest_conventions() {
        assert_eq!(EspaciosResource::collection_path(), "/api/espacios");
        assert_eq!(CursosResource::item_path(42), "/api/cursos/42");
    }

    #[test]
    fn materialized_course_keeps_payload_fields() {
        let payload = CursoPayload {
            nombre: "Algoritmos".to_string(),
            facultad: 1,
            escuela: 2,
            ciclo: "4".to_string(),
            estado: true,
        };

        let curso = CursosResource::materialize(9, &payload);
        assert_eq!(curso.id(), 9);
        assert_eq!(curso.ciclo, "4");
    }
}
