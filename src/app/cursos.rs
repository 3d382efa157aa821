//! Courses page.
//!
//! The backend lists every course; faculty and school filters run over the
//! loaded list. The form's school select depends on its faculty select.

use super::page::CrudPage;
use crate::domain::catalog::escuela_pertenece;
use crate::domain::{Curso, CursoField, CursoFormValues, FormValues};
use crate::filters::CursoFilterBar;
use crate::service::{CatalogService, CursosResource, EntityService};
use std::sync::Arc;

fn parse_optional_id(value: &str) -> Result<Option<i64>, String> {
    let value = value.trim();
    if value.is_empty() || value == "todas" {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("Identificador invalido: {value}"))
}

/// State of the courses page.
pub struct CursosPage {
    pub(crate) crud: CrudPage<CursosResource, CursoFormValues>,
    bar: CursoFilterBar,
}

impl CursosPage {
    #[must_use]
    pub fn new(service: Arc<dyn EntityService<CursosResource>>, catalogs: Arc<dyn CatalogService>) -> Self {
        Self {
            crud: CrudPage::new(service, catalogs),
            bar: CursoFilterBar::default(),
        }
    }

    #[must_use]
    pub const fn crud(&self) -> &CrudPage<CursosResource, CursoFormValues> {
        &self.crud
    }

    #[must_use]
    pub const fn filter_bar(&self) -> &CursoFilterBar {
        &self.bar
    }

    pub fn set_search(&mut self, query: &str) {
        self.crud.set_search(query.to_string());
    }

    /// Records shown in the table: search and filter bar combined.
    #[must_use]
    pub fn visible(&self) -> Vec<&Curso> {
        self.crud
            .searched()
            .into_iter()
            .filter(|curso| self.bar.matches(curso))
            .collect()
    }

    /// Updates the filter bar from its command key.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown keys or non-numeric ids.
    pub fn set_filter(&mut self, key: &str, value: &str) -> Result<(), String> {
        let id = parse_optional_id(value)?;
        match key {
            "facultad" => self.bar.set_facultad(id, self.crud.catalogs.escuelas()),
            "escuela" => self.bar.set_escuela(id),
            _ => return Err(format!("Filtro desconocido: {key}")),
        }
        Ok(())
    }

    pub(crate) fn clear_filters(&mut self) {
        self.bar.clear();
    }

    /// Edits one form field from its command key.
    ///
    /// Choosing a faculty that does not own the selected school clears the school.
    /// A school is only accepted once a faculty is chosen, and must belong to
    /// it when the catalog is loaded.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown keys or rejected values.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        if !self.crud.modal.state().is_editable() {
            return Err("No hay un formulario abierto.".to_string());
        }
        let field =
            CursoFormValues::parse_field(key).ok_or_else(|| format!("Campo desconocido: {key}"))?;
        if field == CursoField::Escuela {
            self.check_escuela(value)?;
        }
        if !self.crud.modal.set_field(field, value.to_string()) {
            return Err(format!("Valor no permitido para {}.", CursoFormValues::label(field)));
        }

        if field == CursoField::Facultad {
            self.reset_foreign_escuela();
        }
        Ok(())
    }

    fn check_escuela(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }
        let Ok(facultad) = self.crud.modal.values().facultad.trim().parse::<i64>() else {
            return Err("Selecciona una facultad primero.".to_string());
        };
        let escuelas = self.crud.catalogs.escuelas();
        let pertenece = value
            .parse::<i64>()
            .is_ok_and(|escuela| escuela_pertenece(escuelas, escuela, facultad));
        if !escuelas.is_empty() && !pertenece {
            return Err(format!("La escuela {value} no pertenece a la facultad seleccionada."));
        }
        Ok(())
    }

    fn reset_foreign_escuela(&mut self) {
        let escuelas = self.crud.catalogs.escuelas();
        let values = self.crud.modal.values();
        let Ok(facultad) = values.facultad.trim().parse::<i64>() else {
            self.crud.modal.values_mut().set(CursoField::Escuela, String::new());
            return;
        };
        let Ok(escuela) = values.escuela.trim().parse::<i64>() else {
            return;
        };

        if !escuelas.is_empty() && !escuela_pertenece(escuelas, escuela, facultad) {
            tracing::debug!(escuela, facultad, "clearing school outside selected faculty");
            self.crud.modal.values_mut().set(CursoField::Escuela, String::new());
        }
    }

    /// Faculty column text.
    #[must_use]
    pub fn facultad_label(&self, curso: &Curso) -> String {
        curso
            .facultad_nombre
            .clone()
            .or_else(|| self.crud.catalogs.facultad_label(curso.facultad))
            .unwrap_or_else(|| curso.facultad.to_string())
    }

    /// School column text.
    #[must_use]
    pub fn escuela_label(&self, curso: &Curso) -> String {
        curso
            .escuela_nombre
            .clone()
            .or_else(|| self.crud.catalogs.escuela_nombre(curso.escuela).map(String::from))
            .unwrap_or_else(|| curso.escuela.to_string())
    }
}
