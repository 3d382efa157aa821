//! Report filter criteria and the static catalogs offered by the filter modal.
//!
//! The report screen does not load its catalogs from the backend; the lists
//! below are the fixed options of the filter modal.

use super::catalog::{Escuela, Facultad};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Criteria applied to a report. Every criterion is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosReporte {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facultad_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escuela_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_usuario: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semestre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<NaiveDate>,
}

/// A selectable user type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipoUsuario {
    pub id: i64,
    pub nombre: &'static str,
}

/// A selectable academic semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Semestre {
    pub id: &'static str,
    pub nombre: &'static str,
}

const FACULTADES: &[(i64, &str)] = &[
    (1, "Facultad de Ingeniería"),
    (2, "Facultad de Derecho y Ciencias Políticas"),
    (3, "Facultad de Ciencias Empresariales"),
    (4, "Facultad de Educación, Ciencias de la Comunicación"),
    (5, "Facultad de Ciencias De la Salud"),
    (6, "Facultad de Arquitectura y Urbanismo"),
];

const ESCUELAS: &[(i64, i64, &str)] = &[
    (1, 1, "Ing. Civil"),
    (2, 1, "Ing. de Sistemas"),
    (3, 1, "Ing. Electronica"),
    (4, 1, "Ing. Agroindustrial"),
    (5, 1, "Ing. Ambiental"),
    (6, 1, "Ing. Industrial"),
    (7, 2, "Derecho"),
    (8, 3, "Ciencias Contables y Financieras"),
    (9, 3, "Economia y Microfinanzas"),
    (10, 3, "Administracion"),
];

/// User types selectable in the report filters.
pub const TIPOS_USUARIO: &[TipoUsuario] = &[
    TipoUsuario { id: 1, nombre: "Docentes" },
    TipoUsuario { id: 2, nombre: "Estudiantes" },
    TipoUsuario { id: 3, nombre: "Administrativos" },
];

/// Semesters selectable in the report filters.
pub const SEMESTRES: &[Semestre] = &[
    Semestre { id: "marzo-julio", nombre: "Marzo - Julio" },
    Semestre { id: "agosto-diciembre", nombre: "Agosto - Diciembre" },
];

/// Faculties offered by the report filter modal.
#[must_use]
pub fn facultades_reporte() -> Vec<Facultad> {
    FACULTADES
        .iter()
        .map(|&(id, nombre)| Facultad { id, nombre: nombre.to_string(), abreviatura: None })
        .collect()
}

/// Schools offered by the report filter modal.
#[must_use]
pub fn escuelas_reporte() -> Vec<Escuela> {
    ESCUELAS
        .iter()
        .map(|&(id, facultad_id, nombre)| Escuela { id, nombre: nombre.to_string(), facultad_id })
        .collect()
}

/// Parses a date input value (`YYYY-MM-DD`). Blank input clears the date.
///
/// # Errors
///
/// Returns the chrono parse error for non-blank values that are not ISO dates.
pub fn parse_fecha(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_catalogs_are_consistent() {
        let facultades = facultades_reporte();
        for escuela in escuelas_reporte() {
            assert!(facultades.iter().any(|f| f.id == escuela.facultad_id));
        }
    }

    #[test]
    fn dates_parse_as_iso() {
        assert_eq!(parse_fecha("  ").unwrap(), None);
        assert_eq!(
            parse_fecha("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert!(parse_fecha("15/03/2025").is_err());
    }

    #[test]
    fn serializes_only_present_criteria() {
        let filtros = FiltrosReporte {
            facultad_id: Some(1),
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..FiltrosReporte::default()
        };

        let json = serde_json::to_value(&filtros).unwrap();
        assert_eq!(json, serde_json::json!({"facultadId": 1, "fechaInicio": "2025-03-01"}));
    }
}
