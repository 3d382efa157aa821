//! Course form rules.

use super::{check_length, is_numeric, parse_id, Validate};
use crate::domain::{CursoField, CursoFormValues, CursoPayload};

/// Longest value the name input accepts while typing.
pub const NOMBRE_INPUT_MAX: usize = 30;

/// Whether `value` is an acceptable content of the cycle input.
///
/// Empty is allowed so the field can be cleared; otherwise the value must be
/// one digit 1–9 optionally followed by 0–2, and lie in 1–12.
///
/// ```rust
/// use horarios_admin::validation::accepts_ciclo;
///
/// assert!(accepts_ciclo("12"));
/// assert!(!accepts_ciclo("13"));
/// assert!(!accepts_ciclo("05"));
/// ```
#[must_use]
pub fn accepts_ciclo(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shape_ok = match bytes {
        [] => return true,
        [first] => (b'1'..=b'9').contains(first),
        [first, second] => (b'1'..=b'9').contains(first) && (b'0'..=b'2').contains(second),
        _ => false,
    };
    shape_ok && value.parse::<u8>().is_ok_and(|n| (1..=12).contains(&n))
}

impl Validate for CursoFormValues {
    type Payload = CursoPayload;

    fn validate(&self) -> Result<CursoPayload, Vec<String>> {
        let mut errors = Vec::new();

        let nombre = self.nombre.trim();
        check_length(
            &mut errors,
            nombre,
            3,
            100,
            "El nombre es obligatorio.",
            "El nombre debe tener entre 3 y 100 caracteres.",
        );

        let facultad = parse_id(
            &mut errors,
            self.facultad.trim(),
            "Selecciona una facultad.",
            "La facultad es obligatoria y debe ser numerica.",
        );
        let escuela = parse_id(
            &mut errors,
            self.escuela.trim(),
            "Selecciona una escuela.",
            "La escuela es obligatoria y debe ser numerica.",
        );

        let ciclo = self.ciclo.trim();
        if ciclo.is_empty() {
            errors.push("El ciclo es obligatorio.".to_string());
        } else if ciclo.chars().count() > 2 {
            errors.push("El ciclo no debe superar 2 caracteres.".to_string());
        } else if !is_numeric(ciclo) || !ciclo.parse::<u8>().is_ok_and(|n| (1..=12).contains(&n)) {
            errors.push("El ciclo debe ser un numero entre 1 y 12.".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CursoPayload {
            nombre: nombre.to_string(),
            facultad,
            escuela,
            ciclo: ciclo.to_string(),
            estado: self.estado == "activo",
        })
    }

    fn accepts(field: CursoField, value: &str) -> bool {
        match field {
            CursoField::Nombre => value.chars().count() <= NOMBRE_INPUT_MAX,
            CursoField::Ciclo => accepts_ciclo(value),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CursoFormValues {
        CursoFormValues {
            nombre: "  Programacion I ".to_string(),
            facultad: "1".to_string(),
            escuela: "3".to_string(),
            ciclo: "2".to_string(),
            estado: "activo".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_trimmed_payload() {
        let payload = valid().validate().unwrap();

        assert_eq!(payload.nombre, "Programacion I");
        assert_eq!((payload.facultad, payload.escuela), (1, 3));
        assert_eq!(payload.ciclo, "2");
        assert!(payload.estado);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = CursoFormValues::default().validate().unwrap_err();

        assert_eq!(
            errors,
            vec![
                "El nombre es obligatorio.",
                "Selecciona una facultad.",
                "Selecciona una escuela.",
                "El ciclo es obligatorio.",
            ]
        );
    }

    #[test]
    fn non_numeric_ids_and_long_cycle_are_rejected() {
        let form = CursoFormValues {
            facultad: "uno".to_string(),
            escuela: "2a".to_string(),
            ciclo: "100".to_string(),
            ..valid()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&"La facultad es obligatoria y debe ser numerica.".to_string()));
        assert!(errors.contains(&"El ciclo no debe superar 2 caracteres.".to_string()));
    }

    #[test]
    fn cycle_out_of_range_is_rejected_on_submit() {
        let form = CursoFormValues {
            ciclo: "0".to_string(),
            ..valid()
        };
        assert_eq!(form.validate().unwrap_err(), vec!["El ciclo debe ser un numero entre 1 y 12."]);
    }

    #[test]
    fn inactive_select_maps_to_false() {
        let form = CursoFormValues {
            estado: "inactivo".to_string(),
            ..valid()
        };
        assert!(!form.validate().unwrap().estado);
    }

    #[test]
    fn cycle_keystroke_filter() {
        for accepted in ["", "1", "9", "10", "11", "12"] {
            assert!(accepts_ciclo(accepted), "{accepted} should be accepted");
        }
        for rejected in ["0", "13", "19", "01", "123", "a", "1a", " 1"] {
            assert!(!accepts_ciclo(rejected), "{rejected} should be rejected");
        }
    }

    #[test]
    fn name_input_is_capped() {
        assert!(CursoFormValues::accepts(CursoField::Nombre, &"a".repeat(30)));
        assert!(!CursoFormValues::accepts(CursoField::Nombre, &"a".repeat(31)));
        assert!(CursoFormValues::accepts(CursoField::Escuela, "anything"));
    }
}
