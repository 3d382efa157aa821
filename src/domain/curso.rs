//! Courses tied to a faculty, a school and a cycle.

use super::{Entity, FormValues};
use serde::{Deserialize, Serialize};

/// A course as returned by the backend.
///
/// `facultad` and `escuela` are catalog ids. `estado` is a boolean on this
/// resource, unlike spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id_curso: i64,
    pub nombre: String,
    pub facultad: i64,
    pub escuela: i64,
    pub ciclo: String,
    pub estado: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facultad_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escuela_nombre: Option<String>,
}

impl Entity for Curso {
    fn id(&self) -> i64 {
        self.id_curso
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn is_active(&self) -> bool {
        self.estado
    }

    fn deactivate(&mut self) {
        self.estado = false;
    }
}

/// Body of `POST /api/cursos` and `PUT /api/cursos/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursoPayload {
    pub nombre: String,
    pub facultad: i64,
    pub escuela: i64,
    pub ciclo: String,
    pub estado: bool,
}

/// Raw values of the course form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursoFormValues {
    pub nombre: String,
    pub facultad: String,
    pub escuela: String,
    pub ciclo: String,
    pub estado: String,
}

impl Default for CursoFormValues {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            facultad: String::new(),
            escuela: String::new(),
            ciclo: String::new(),
            estado: "activo".to_string(),
        }
    }
}

impl From<&Curso> for CursoFormValues {
    fn from(curso: &Curso) -> Self {
        Self {
            nombre: curso.nombre.clone(),
            facultad: curso.facultad.to_string(),
            escuela: curso.escuela.to_string(),
            ciclo: curso.ciclo.clone(),
            estado: if curso.estado { "activo" } else { "inactivo" }.to_string(),
        }
    }
}

/// Inputs of the course form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursoField {
    Nombre,
    Facultad,
    Escuela,
    Ciclo,
    Estado,
}

impl FormValues for CursoFormValues {
    type Field = CursoField;

    fn fields() -> &'static [CursoField] {
        &[
            CursoField::Nombre,
            CursoField::Facultad,
            CursoField::Escuela,
            CursoField::Ciclo,
            CursoField::Estado,
        ]
    }

    fn label(field: CursoField) -> &'static str {
        match field {
            CursoField::Nombre => "Nombre",
            CursoField::Facultad => "Facultad",
            CursoField::Escuela => "Escuela",
            CursoField::Ciclo => "Ciclo",
            CursoField::Estado => "Estado",
        }
    }

    fn parse_field(key: &str) -> Option<CursoField> {
        match key {
            "nombre" => Some(CursoField::Nombre),
            "facultad" => Some(CursoField::Facultad),
            "escuela" => Some(CursoField::Escuela),
            "ciclo" => Some(CursoField::Ciclo),
            "estado" => Some(CursoField::Estado),
            _ => None,
        }
    }

    fn get(&self, field: CursoField) -> &str {
        match field {
            CursoField::Nombre => &self.nombre,
            CursoField::Facultad => &self.facultad,
            CursoField::Escuela => &self.escuela,
            CursoField::Ciclo => &self.ciclo,
            CursoField::Estado => &self.estado,
        }
    }

    fn set(&mut self, field: CursoField, value: String) {
        let slot = match field {
            CursoField::Nombre => &mut self.nombre,
            CursoField::Facultad => &mut self.facultad,
            CursoField::Escuela => &mut self.escuela,
            CursoField::Ciclo => &mut self.ciclo,
            CursoField::Estado => &mut self.estado,
        };
        *slot = value;
    }
}
