//! Report filter modal and the reports page that owns it.
//!
//! The modal edits a local working copy of [`FiltrosReporte`]; nothing leaves
//! it until "aplicar". Its catalogs are the static report lists.

use crate::domain::catalog::{escuela_pertenece, escuelas_de_facultad};
use crate::domain::reporte::{
    escuelas_reporte, facultades_reporte, parse_fecha, SEMESTRES, TIPOS_USUARIO,
};
use crate::domain::{Escuela, Facultad, FiltrosReporte};

fn parse_optional_id(value: &str) -> Result<Option<i64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("Identificador invalido: {value}"))
}

/// Working copy of the report filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporteFiltrosModal {
    open: bool,
    draft: FiltrosReporte,
    facultades: Vec<Facultad>,
    escuelas: Vec<Escuela>,
}

impl Default for ReporteFiltrosModal {
    fn default() -> Self {
        Self {
            open: false,
            draft: FiltrosReporte::default(),
            facultades: facultades_reporte(),
            escuelas: escuelas_reporte(),
        }
    }
}

impl ReporteFiltrosModal {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn draft(&self) -> &FiltrosReporte {
        &self.draft
    }

    #[must_use]
    pub fn facultades(&self) -> &[Facultad] {
        &self.facultades
    }

    /// Opens the modal on a copy of the currently applied filters.
    pub fn open(&mut self, actuales: &FiltrosReporte) {
        self.draft = actuales.clone();
        self.open = true;
    }

    /// Closes without applying.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// The school select is disabled until a faculty is chosen.
    #[must_use]
    pub const fn escuela_habilitada(&self) -> bool {
        self.draft.facultad_id.is_some()
    }

    /// Schools offered under the selected faculty.
    #[must_use]
    pub fn escuelas_disponibles(&self) -> Vec<&Escuela> {
        escuelas_de_facultad(&self.escuelas, self.draft.facultad_id)
    }

    /// Changing the faculty always resets the school.
    pub fn set_facultad(&mut self, facultad_id: Option<i64>) {
        self.draft.facultad_id = facultad_id;
        self.draft.escuela_id = None;
    }

    /// Selects a school of the chosen faculty.
    ///
    /// # Errors
    ///
    /// Rejects the change while no faculty is selected or when the school
    /// belongs to another faculty.
    pub fn set_escuela(&mut self, escuela_id: Option<i64>) -> Result<(), String> {
        let Some(facultad_id) = self.draft.facultad_id else {
            return Err("Selecciona una facultad primero".to_string());
        };
        if let Some(id) = escuela_id {
            if !escuela_pertenece(&self.escuelas, id, facultad_id) {
                return Err(format!("La escuela {id} no pertenece a la facultad seleccionada."));
            }
        }
        self.draft.escuela_id = escuela_id;
        Ok(())
    }

    pub fn set_tipo_usuario(&mut self, tipo_usuario: Option<i64>) {
        self.draft.tipo_usuario = tipo_usuario;
    }

    pub fn set_semestre(&mut self, semestre: Option<String>) {
        self.draft.semestre = semestre;
    }

    /// Sets one criterion from its command key and raw value. Blank clears it.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown keys, ids or dates.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "facultad" | "facultadId" => self.set_facultad(parse_optional_id(value)?),
            "escuela" | "escuelaId" => self.set_escuela(parse_optional_id(value)?)?,
            "usuario" | "tipoUsuario" => {
                let id = parse_optional_id(value)?;
                if id.is_some_and(|id| !TIPOS_USUARIO.iter().any(|t| t.id == id)) {
                    return Err(format!("Tipo de usuario desconocido: {value}"));
                }
                self.set_tipo_usuario(id);
            }
            "semestre" => {
                let value = value.trim();
                if value.is_empty() {
                    self.set_semestre(None);
                } else if SEMESTRES.iter().any(|s| s.id == value) {
                    self.set_semestre(Some(value.to_string()));
                } else {
                    return Err(format!("Semestre desconocido: {value}"));
                }
            }
            "inicio" | "fechaInicio" => {
                self.draft.fecha_inicio =
                    parse_fecha(value).map_err(|_| format!("Fecha invalida: {value}"))?;
            }
            "fin" | "fechaFin" => {
                self.draft.fecha_fin =
                    parse_fecha(value).map_err(|_| format!("Fecha invalida: {value}"))?;
            }
            _ => return Err(format!("Filtro desconocido: {key}")),
        }
        Ok(())
    }

    /// Whether any summarized criterion is set. Gates the summary and "limpiar".
    ///
    /// The end date alone does not count; it is only summarized together with
    /// the start date.
    #[must_use]
    pub const fn tiene_filtros(&self) -> bool {
        self.draft.facultad_id.is_some()
            || self.draft.escuela_id.is_some()
            || self.draft.tipo_usuario.is_some()
            || self.draft.semestre.is_some()
            || self.draft.fecha_inicio.is_some()
    }

    /// Clears the working copy. The modal stays open.
    pub fn limpiar(&mut self) {
        self.draft = FiltrosReporte::default();
    }

    /// Emits the working copy and closes.
    pub fn aplicar(&mut self) -> FiltrosReporte {
        self.open = false;
        tracing::debug!(filtros = ?self.draft, "report filters applied");
        self.draft.clone()
    }

    /// Human-readable labels of the selected criteria.
    #[must_use]
    pub fn resumen(&self) -> Vec<String> {
        resumen(&self.draft, &self.facultades, &self.escuelas)
    }
}

/// Labels of the criteria set in `filtros`.
#[must_use]
pub fn resumen(filtros: &FiltrosReporte, facultades: &[Facultad], escuelas: &[Escuela]) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(id) = filtros.facultad_id {
        let nombre = facultades.iter().find(|f| f.id == id).map_or("", |f| f.nombre.as_str());
        lines.push(format!("Facultad: {nombre}"));
    }
    if let Some(id) = filtros.escuela_id {
        let nombre = escuelas.iter().find(|e| e.id == id).map_or("", |e| e.nombre.as_str());
        lines.push(format!("Escuela: {nombre}"));
    }
    if let Some(id) = filtros.tipo_usuario {
        let nombre = TIPOS_USUARIO.iter().find(|t| t.id == id).map_or("", |t| t.nombre);
        lines.push(format!("Usuario: {nombre}"));
    }
    if let Some(semestre) = &filtros.semestre {
        let nombre = SEMESTRES.iter().find(|s| &s.id == semestre).map_or("", |s| s.nombre);
        lines.push(format!("Semestre: {nombre}"));
    }
    if let (Some(inicio), Some(fin)) = (filtros.fecha_inicio, filtros.fecha_fin) {
        lines.push(format!("Fechas: {inicio} a {fin}"));
    }
    lines
}

/// Reports page: the applied criteria and the modal that edits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportesPage {
    applied: FiltrosReporte,
    pub(crate) modal: ReporteFiltrosModal,
}

impl ReportesPage {
    #[must_use]
    pub const fn applied(&self) -> &FiltrosReporte {
        &self.applied
    }

    #[must_use]
    pub const fn modal(&self) -> &ReporteFiltrosModal {
        &self.modal
    }

    pub fn open_filters(&mut self) {
        self.modal.open(&self.applied);
    }

    pub fn apply_filters(&mut self) {
        self.applied = self.modal.aplicar();
    }

    /// Summary of the applied criteria.
    #[must_use]
    pub fn resumen_aplicado(&self) -> Vec<String> {
        resumen(&self.applied, self.modal.facultades(), &self.modal.escuelas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn opens_on_a_copy_of_current_filters() {
        let actuales = FiltrosReporte {
            facultad_id: Some(1),
            ..FiltrosReporte::default()
        };
        let mut modal = ReporteFiltrosModal::default();
        modal.open(&actuales);
        modal.set_facultad(Some(3));

        assert!(modal.is_open());
        assert_eq!(actuales.facultad_id, Some(1));
        assert_eq!(modal.draft().facultad_id, Some(3));
    }

    #[test]
    fn faculty_change_resets_school() {
        let mut modal = ReporteFiltrosModal::default();
        modal.set_facultad(Some(1));
        modal.set_escuela(Some(2)).unwrap();

        modal.set_facultad(Some(3));

        assert_eq!(modal.draft().escuela_id, None);
        assert!(modal.escuelas_disponibles().iter().all(|e| e.facultad_id == 3));
    }

    #[test]
    fn school_requires_faculty_and_membership() {
        let mut modal = ReporteFiltrosModal::default();
        assert!(!modal.escuela_habilitada());
        assert!(modal.set_escuela(Some(2)).is_err());

        modal.set_facultad(Some(2));
        assert!(modal.set_escuela(Some(2)).is_err());
        assert!(modal.set_escuela(Some(7)).is_ok());
    }

    #[test]
    fn end_date_alone_is_not_a_filter() {
        let mut modal = ReporteFiltrosModal::default();
        modal.set("fin", "2024-07-31").unwrap();
        assert!(!modal.tiene_filtros());

        modal.set("inicio", "2024-03-01").unwrap();
        assert!(modal.tiene_filtros());
    }

    #[test]
    fn summary_uses_catalog_labels() {
        let mut modal = ReporteFiltrosModal::default();
        modal.set("facultad", "1").unwrap();
        modal.set("escuela", "2").unwrap();
        modal.set("usuario", "2").unwrap();
        modal.set("semestre", "marzo-julio").unwrap();
        modal.set("inicio", "2024-03-01").unwrap();
        modal.set("fin", "2024-07-31").unwrap();

        assert_eq!(
            modal.resumen(),
            vec![
                "Facultad: Facultad de Ingeniería",
                "Escuela: Ing. de Sistemas",
                "Usuario: Estudiantes",
                "Semestre: Marzo - Julio",
                "Fechas: 2024-03-01 a 2024-07-31",
            ]
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut modal = ReporteFiltrosModal::default();
        assert!(modal.set("inicio", "01/03/2024").is_err());
        assert!(modal.set("semestre", "verano").is_err());
        assert!(modal.set("usuario", "9").is_err());
        assert!(modal.set("color", "rojo").is_err());
        assert_eq!(modal.draft(), &FiltrosReporte::default());
    }

    #[test]
    fn aplicar_emits_and_closes_limpiar_keeps_open() {
        let mut page = ReportesPage::default();
        page.open_filters();
        page.modal.set("usuario", "1").unwrap();
        page.apply_filters();

        assert!(!page.modal().is_open());
        assert_eq!(page.applied().tipo_usuario, Some(1));
        assert_eq!(page.resumen_aplicado(), vec!["Usuario: Docentes"]);

        page.open_filters();
        page.modal.limpiar();
        assert!(page.modal().is_open());
        assert!(!page.modal().tiene_filtros());
        assert_eq!(page.applied().tipo_usuario, Some(1));
    }

    #[test]
    fn dates_are_parsed_as_iso() {
        let mut modal = ReporteFiltrosModal::default();
        modal.set("inicio", "2024-03-01").unwrap();
        assert_eq!(modal.draft().fecha_inicio, NaiveDate::from_ymd_opt(2024, 3, 1));

        modal.set("inicio", "").unwrap();
        assert!(modal.draft().fecha_inicio.is_none());
    }
}
