//! Space form rules.

use super::{check_length, is_numeric, parse_id, Validate};
use crate::domain::espacio::{ESTADO_ACTIVO, ESTADO_INACTIVO};
use crate::domain::{EspacioFormValues, EspacioPayload};

const CODIGO_MAX: usize = 20;
const EQUIPAMIENTO_MAX: usize = 255;

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl Validate for EspacioFormValues {
    type Payload = EspacioPayload;

    fn validate(&self) -> Result<EspacioPayload, Vec<String>> {
        let mut errors = Vec::new();

        let codigo = optional(&self.codigo);
        if codigo.as_ref().is_some_and(|c| c.chars().count() > CODIGO_MAX) {
            errors.push("El codigo no debe superar 20 caracteres.".to_string());
        }

        let nombre = self.nombre.trim();
        check_length(
            &mut errors,
            nombre,
            3,
            100,
            "El nombre es obligatorio.",
            "El nombre debe tener entre 3 y 100 caracteres.",
        );

        let tipo = self.tipo.trim();
        if tipo.is_empty() {
            errors.push("El tipo es obligatorio.".to_string());
        }

        let capacidad_raw = self.capacidad.trim();
        let mut capacidad = 0;
        if capacidad_raw.is_empty() {
            errors.push("La capacidad es obligatoria.".to_string());
        } else if !is_numeric(capacidad_raw) {
            errors.push("La capacidad debe ser numerica.".to_string());
        } else {
            match capacidad_raw.parse::<u32>() {
                Ok(0) => errors.push("La capacidad debe ser mayor a 0.".to_string()),
                Ok(value) => capacidad = value,
                Err(_) => errors.push("La capacidad excede el maximo permitido.".to_string()),
            }
        }

        let equipamiento = optional(&self.equipamiento);
        if equipamiento.as_ref().is_some_and(|e| e.chars().count() > EQUIPAMIENTO_MAX) {
            errors.push("El equipamiento no debe superar 255 caracteres.".to_string());
        }

        let escuela_id = parse_id(
            &mut errors,
            self.escuela_id.trim(),
            "Selecciona una escuela.",
            "La escuela es obligatoria y debe ser numerica.",
        );

        let estado = match self.estado.trim() {
            "1" => ESTADO_ACTIVO,
            "0" => ESTADO_INACTIVO,
            _ => {
                errors.push("El estado debe ser 1 (activo) o 0 (inactivo).".to_string());
                ESTADO_INACTIVO
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EspacioPayload {
            codigo,
            nombre: nombre.to_string(),
            tipo: tipo.to_string(),
            capacidad,
            equipamiento,
            escuela_id,
            estado,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{empty_form, form_from_entity};
    use crate::domain::Espacio;

    fn lab_101() -> EspacioFormValues {
        EspacioFormValues {
            nombre: "Lab 101".to_string(),
            tipo: "laboratorio".to_string(),
            capacidad: "30".to_string(),
            escuela_id: "2".to_string(),
            estado: "1".to_string(),
            ..EspacioFormValues::default()
        }
    }

    #[test]
    fn lab_101_produces_typed_payload() {
        let payload = lab_101().validate().unwrap();

        assert_eq!(
            payload,
            EspacioPayload {
                codigo: None,
                nombre: "Lab 101".to_string(),
                tipo: "laboratorio".to_string(),
                capacidad: 30,
                equipamiento: None,
                escuela_id: 2,
                estado: 1,
            }
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "nombre": "Lab 101",
                "tipo": "laboratorio",
                "capacidad": 30,
                "escuelaId": 2,
                "estado": 1
            })
        );
    }

    #[test]
    fn strings_are_trimmed() {
        let form = EspacioFormValues {
            codigo: " LAB-101 ".to_string(),
            nombre: "  Lab 101  ".to_string(),
            equipamiento: "   ".to_string(),
            ..lab_101()
        };

        let payload = form.validate().unwrap();
        assert_eq!(payload.codigo.as_deref(), Some("LAB-101"));
        assert_eq!(payload.nombre, "Lab 101");
        assert!(payload.equipamiento.is_none());
    }

    #[test]
    fn empty_form_names_missing_fields() {
        let errors = empty_form::<EspacioFormValues>().validate().unwrap_err();

        assert!(errors.contains(&"El nombre es obligatorio.".to_string()));
        assert!(errors.contains(&"El tipo es obligatorio.".to_string()));
        assert!(errors.contains(&"La capacidad es obligatoria.".to_string()));
        assert!(errors.contains(&"Selecciona una escuela.".to_string()));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn capacity_must_be_positive_digits() {
        for (raw, message) in [
            ("0", "La capacidad debe ser mayor a 0."),
            ("-3", "La capacidad debe ser numerica."),
            ("3.5", "La capacidad debe ser numerica."),
            ("99999999999", "La capacidad excede el maximo permitido."),
        ] {
            let form = EspacioFormValues {
                capacidad: raw.to_string(),
                ..lab_101()
            };
            assert_eq!(form.validate().unwrap_err(), vec![message], "capacidad {raw}");
        }
    }

    #[test]
    fn unknown_estado_is_rejected() {
        let form = EspacioFormValues {
            estado: "activo".to_string(),
            ..lab_101()
        };
        assert_eq!(form.validate().unwrap_err().len(), 1);
    }

    #[test]
    fn edit_form_validates_back_to_same_payload() {
        let espacio = Espacio {
            id: 4,
            codigo: "A-204".to_string(),
            nombre: "Aula 204".to_string(),
            tipo: "salon".to_string(),
            capacidad: 45,
            equipamiento: Some("Proyector".to_string()),
            estado: 0,
            escuela_id: 7,
            escuela_nombre: None,
            facultad_id: None,
        };

        let form: EspacioFormValues = form_from_entity(&espacio);
        let payload = form.validate().unwrap();

        assert_eq!(payload.codigo.as_deref(), Some("A-204"));
        assert_eq!(payload.equipamiento.as_deref(), Some("Proyector"));
        assert_eq!((payload.capacidad, payload.escuela_id, payload.estado), (45, 7, 0));
    }
}
