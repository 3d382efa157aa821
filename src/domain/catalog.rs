//! Faculty and school catalogs.
//!
//! Catalogs are read-only reference data consumed by dependent selects: a
//! school always belongs to exactly one faculty.

use serde::{Deserialize, Serialize};

/// A faculty, the parent of several schools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facultad {
    pub id: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abreviatura: Option<String>,
}

impl Facultad {
    /// Option label: `"ABR - Nombre"` when an abbreviation exists, else the name.
    #[must_use]
    pub fn label(&self) -> String {
        match self.abreviatura.as_deref().filter(|a| !a.is_empty()) {
            Some(abreviatura) => format!("{abreviatura} - {}", self.nombre),
            None => self.nombre.clone(),
        }
    }
}

/// A school within a faculty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Escuela {
    pub id: i64,
    pub nombre: String,
    pub facultad_id: i64,
}

/// Schools selectable under the given faculty.
///
/// With no faculty selected every school is offered.
#[must_use]
pub fn escuelas_de_facultad(escuelas: &[Escuela], facultad_id: Option<i64>) -> Vec<&Escuela> {
    escuelas
        .iter()
        .filter(|escuela| facultad_id.map_or(true, |id| escuela.facultad_id == id))
        .collect()
}

/// Whether `escuela_id` is one of the schools of `facultad_id`.
#[must_use]
pub fn escuela_pertenece(escuelas: &[Escuela], escuela_id: i64, facultad_id: i64) -> bool {
    escuelas
        .iter()
        .any(|escuela| escuela.id == escuela_id && escuela.facultad_id == facultad_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escuelas() -> Vec<Escuela> {
        vec![
            Escuela { id: 1, nombre: "Ing. Civil".to_string(), facultad_id: 1 },
            Escuela { id: 7, nombre: "Derecho".to_string(), facultad_id: 2 },
            Escuela { id: 2, nombre: "Ing. de Sistemas".to_string(), facultad_id: 1 },
        ]
    }

    #[test]
    fn label_prefers_abbreviation() {
        let facultad = Facultad {
            id: 1,
            nombre: "Facultad de Ingenieria".to_string(),
            abreviatura: Some("FAING".to_string()),
        };
        assert_eq!(facultad.label(), "FAING - Facultad de Ingenieria");

        let sin_abreviatura = Facultad { abreviatura: Some(String::new()), ..facultad };
        assert_eq!(sin_abreviatura.label(), "Facultad de Ingenieria");
    }

    #[test]
    fn dependent_options_follow_faculty() {
        let all = escuelas();

        assert_eq!(escuelas_de_facultad(&all, None).len(), 3);
        let ids: Vec<i64> = escuelas_de_facultad(&all, Some(1)).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(escuela_pertenece(&all, 7, 2));
        assert!(!escuela_pertenece(&all, 7, 1));
    }
}
