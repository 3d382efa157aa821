//! Academic spaces: rooms, laboratories and other bookable places.

use super::{Entity, FormValues};
use serde::{Deserialize, Serialize};

/// `estado` value of an active space.
pub const ESTADO_ACTIVO: u8 = 1;

/// `estado` value of an inactive (soft-deleted) space.
pub const ESTADO_INACTIVO: u8 = 0;

/// Space types offered by the form and the filter panel.
pub const TIPOS_ESPACIO: &[(&str, &str)] = &[("laboratorio", "Laboratorio"), ("salon", "Salon")];

/// A space as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Espacio {
    pub id: i64,
    #[serde(default)]
    pub codigo: String,
    pub nombre: String,
    pub tipo: String,
    pub capacidad: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipamiento: Option<String>,
    pub estado: u8,
    pub escuela_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escuela_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facultad_id: Option<i64>,
}

impl Entity for Espacio {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn is_active(&self) -> bool {
        self.estado == ESTADO_ACTIVO
    }

    fn deactivate(&mut self) {
        self.estado = ESTADO_INACTIVO;
    }
}

/// Body of `POST /api/espacios` and `PUT /api/espacios/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspacioPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    pub nombre: String,
    pub tipo: String,
    pub capacidad: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipamiento: Option<String>,
    pub escuela_id: i64,
    pub estado: u8,
}

/// Raw values of the space form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EspacioFormValues {
    pub codigo: String,
    pub nombre: String,
    pub tipo: String,
    pub capacidad: String,
    pub equipamiento: String,
    pub escuela_id: String,
    pub estado: String,
}

impl Default for EspacioFormValues {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            tipo: String::new(),
            capacidad: String::new(),
            equipamiento: String::new(),
            escuela_id: String::new(),
            estado: "1".to_string(),
        }
    }
}

impl From<&Espacio> for EspacioFormValues {
    fn from(espacio: &Espacio) -> Self {
        Self {
            codigo: espacio.codigo.clone(),
            nombre: espacio.nombre.clone(),
            tipo: espacio.tipo.clone(),
            capacidad: espacio.capacidad.to_string(),
            equipamiento: espacio.equipamiento.clone().unwrap_or_default(),
            escuela_id: espacio.escuela_id.to_string(),
            estado: if espacio.is_active() { "1" } else { "0" }.to_string(),
        }
    }
}

/// Inputs of the space form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EspacioField {
    Codigo,
    Nombre,
    Tipo,
    Capacidad,
    Equipamiento,
    EscuelaId,
    Estado,
}

impl FormValues for EspacioFormValues {
    type Field = EspacioField;

    fn fields() -> &'static [EspacioField] {
        &[
            EspacioField::Codigo,
            EspacioField::Nombre,
            EspacioField::Tipo,
            EspacioField::Capacidad,
            EspacioField::Equipamiento,
            EspacioField::EscuelaId,
            EspacioField::Estado,
        ]
    }

    fn label(field: EspacioField) -> &'static str {
        match field {
            EspacioField::Codigo => "Codigo",
            EspacioField::Nombre => "Nombre",
            EspacioField::Tipo => "Tipo",
            EspacioField::Capacidad => "Capacidad",
            EspacioField::Equipamiento => "Equipamiento",
            EspacioField::EscuelaId => "Escuela",
            EspacioField::Estado => "Estado",
        }
    }

    fn parse_field(key: &str) -> Option<EspacioField> {
        match key {
            "codigo" => Some(EspacioField::Codigo),
            "nombre" => Some(EspacioField::Nombre),
            "tipo" => Some(EspacioField::Tipo),
            "capacidad" => Some(EspacioField::Capacidad),
            "equipamiento" => Some(EspacioField::Equipamiento),
            "escuelaId" | "escuela" => Some(EspacioField::EscuelaId),
            "estado" => Some(EspacioField::Estado),
            _ => None,
        }
    }

    fn get(&self, field: EspacioField) -> &str {
        match field {
            EspacioField::Codigo => &self.codigo,
            EspacioField::Nombre => &self.nombre,
            EspacioField::Tipo => &self.tipo,
            EspacioField::Capacidad => &self.capacidad,
            EspacioField::Equipamiento => &self.equipamiento,
            EspacioField::EscuelaId => &self.escuela_id,
            EspacioField::Estado => &self.estado,
        }
    }

    fn set(&mut self, field: EspacioField, value: String) {
        let slot = match field {
            EspacioField::Codigo => &mut self.codigo,
            EspacioField::Nombre => &mut self.nombre,
            EspacioField::Tipo => &mut self.tipo,
            EspacioField::Capacidad => &mut self.capacidad,
            EspacioField::Equipamiento => &mut self.equipamiento,
            EspacioField::EscuelaId => &mut self.escuela_id,
            EspacioField::Estado => &mut self.estado,
        };
        *slot = value;
    }
}

/// Status selector of the space filter panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EstadoFiltro {
    #[default]
    Todos,
    Activos,
    Inactivos,
}

impl EstadoFiltro {
    /// Parses the select value used by the filter panel (`all`, `activos`, `inactivos`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" | "todos" => Some(Self::Todos),
            "activos" => Some(Self::Activos),
            "inactivos" => Some(Self::Inactivos),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todos => "Todos",
            Self::Activos => "Activos",
            Self::Inactivos => "Inactivos",
        }
    }
}

/// Server-side filters for `GET /api/espacios`.
///
/// Absent fields are not sent; an empty filter set lists every space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EspacioFilters {
    pub estado: Option<u8>,
    pub escuela_id: Option<i64>,
    pub tipo: Option<String>,
}

impl EspacioFilters {
    /// Query-string pairs for the listing request.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(estado) = self.estado {
            pairs.push(("estado", estado.to_string()));
        }
        if let Some(escuela_id) = self.escuela_id {
            pairs.push(("escuelaId", escuela_id.to_string()));
        }
        if let Some(tipo) = &self.tipo {
            pairs.push(("tipo", tipo.clone()));
        }
        pairs
    }

    /// Whether a space satisfies these filters.
    ///
    /// Used by backends that evaluate the filters locally.
    #[must_use]
    pub fn matches(&self, espacio: &Espacio) -> bool {
        self.estado.map_or(true, |estado| espacio.estado == estado)
            && self.escuela_id.map_or(true, |id| espacio.escuela_id == id)
            && self.tipo.as_ref().map_or(true, |tipo| &espacio.tipo == tipo)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estado.is_none() && self.escuela_id.is_none() && self.tipo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab() -> Espacio {
        Espacio {
            id: 7,
            codigo: "LAB-101".to_string(),
            nombre: "Lab 101".to_string(),
            tipo: "laboratorio".to_string(),
            capacidad: 30,
            equipamiento: None,
            estado: ESTADO_ACTIVO,
            escuela_id: 2,
            escuela_nombre: Some("Ing. de Sistemas".to_string()),
            facultad_id: Some(1),
        }
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{"id":3,"codigo":"A-1","nombre":"Aula 1","tipo":"salon","capacidad":40,"estado":1,"escuelaId":5}"#;
        let espacio: Espacio = serde_json::from_str(json).unwrap();

        assert_eq!(espacio.escuela_id, 5);
        assert!(espacio.is_active());
        assert!(espacio.facultad_id.is_none());
    }

    #[test]
    fn deactivate_flips_estado_only() {
        let mut espacio = lab();
        espacio.deactivate();

        assert_eq!(espacio.estado, ESTADO_INACTIVO);
        assert_eq!(espacio.nombre, "Lab 101");
    }

    #[test]
    fn form_values_round_trip_from_record() {
        let values = EspacioFormValues::from(&lab());

        assert_eq!(values.capacidad, "30");
        assert_eq!(values.escuela_id, "2");
        assert_eq!(values.estado, "1");
        assert_eq!(values.get(EspacioField::Codigo), "LAB-101");
    }

    #[test]
    fn filters_skip_absent_fields_in_query() {
        let filters = EspacioFilters {
            estado: Some(0),
            escuela_id: None,
            tipo: Some("salon".to_string()),
        };

        assert_eq!(
            filters.query_pairs(),
            vec![("estado", "0".to_string()), ("tipo", "salon".to_string())]
        );
        assert!(!filters.matches(&lab()));
        assert!(EspacioFilters::default().matches(&lab()));
    }
}
