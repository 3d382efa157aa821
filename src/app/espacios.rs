//! Spaces page.
//!
//! Structural filters are applied by the backend: the panel collects them
//! and the page re-fetches with query parameters. Search stays local.

use super::page::CrudPage;
use crate::domain::{Espacio, EspacioFormValues, EspacioField, EstadoFiltro, FormValues};
use crate::filters::{clamp_search, EspacioFilterPanel};
use crate::service::{CatalogService, EntityService, EspaciosResource};
use std::sync::Arc;

/// State of the spaces page.
pub struct EspaciosPage {
    pub(crate) crud: CrudPage<EspaciosResource, EspacioFormValues>,
    panel: EspacioFilterPanel,
    panel_open: bool,
}

impl EspaciosPage {
    #[must_use]
    pub fn new(service: Arc<dyn EntityService<EspaciosResource>>, catalogs: Arc<dyn CatalogService>) -> Self {
        Self {
            crud: CrudPage::new(service, catalogs),
            panel: EspacioFilterPanel::default(),
            panel_open: false,
        }
    }

    #[must_use]
    pub const fn crud(&self) -> &CrudPage<EspaciosResource, EspacioFormValues> {
        &self.crud
    }

    #[must_use]
    pub const fn panel(&self) -> &EspacioFilterPanel {
        &self.panel
    }

    #[must_use]
    pub const fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub(crate) fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Sets the search box, capped at the maximum query length.
    pub fn set_search(&mut self, query: &str) {
        self.crud.set_search(clamp_search(query));
    }

    /// Records shown in the table.
    #[must_use]
    pub fn visible(&self) -> Vec<&Espacio> {
        self.crud.searched()
    }

    /// Whether the apply action is enabled.
    #[must_use]
    pub fn can_apply_filters(&self) -> bool {
        self.panel.has_active_filters() && !self.crud.store.loading() && !self.crud.catalogs.loading()
    }

    /// Updates one panel criterion from its command key.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown keys or values.
    pub fn set_filter(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "estado" => {
                self.panel.estado =
                    EstadoFiltro::parse(value).ok_or_else(|| format!("Estado desconocido: {value}"))?;
            }
            "escuela" | "escuelaId" => self.panel.escuela_id = value.trim().to_string(),
            "tipo" => self.panel.tipo = value.trim().to_string(),
            _ => return Err(format!("Filtro desconocido: {key}")),
        }
        Ok(())
    }

    pub(crate) fn clear_panel(&mut self) {
        self.panel.clear();
    }

    /// Edits one form field from its command key.
    ///
    /// Once the catalog is loaded the school must be one of its entries.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown keys or rejected values.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        if !self.crud.modal.state().is_editable() {
            return Err("No hay un formulario abierto.".to_string());
        }
        let field: EspacioField =
            EspacioFormValues::parse_field(key).ok_or_else(|| format!("Campo desconocido: {key}"))?;
        if field == EspacioField::EscuelaId {
            self.check_escuela(value)?;
        }
        if self.crud.modal.set_field(field, value.to_string()) {
            Ok(())
        } else {
            Err(format!("Valor no permitido para {}.", EspacioFormValues::label(field)))
        }
    }

    fn check_escuela(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        let escuelas = self.crud.catalogs.escuelas();
        if value.is_empty() || escuelas.is_empty() {
            return Ok(());
        }
        let conocida = value
            .parse::<i64>()
            .is_ok_and(|id| escuelas.iter().any(|escuela| escuela.id == id));
        if conocida {
            Ok(())
        } else {
            Err(format!("Escuela desconocida: {value}"))
        }
    }

    /// School column text: the backend-provided name, else the catalog name, else the id.
    #[must_use]
    pub fn escuela_label(&self, espacio: &Espacio) -> String {
        espacio
            .escuela_nombre
            .clone()
            .or_else(|| self.crud.catalogs.escuela_nombre(espacio.escuela_id).map(String::from))
            .unwrap_or_else(|| espacio.escuela_id.to_string())
    }
}
