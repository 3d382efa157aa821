//! Form validation.
//!
//! Validators are pure and synchronous: they take the raw strings of a form
//! and return either the typed payload the service expects or every message
//! that blocks submission. Numeric fields are checked non-empty and all-digit
//! before they are parsed; text fields are trimmed and length-checked.
//!
//! Forms can also reject individual edits before they reach the values
//! ([`Validate::accepts`]), which is how the course cycle input refuses
//! anything outside 1–12.

pub mod curso;
pub mod espacio;

use crate::domain::FormValues;

pub use curso::accepts_ciclo;

/// A form that can be turned into a service payload.
pub trait Validate: FormValues {
    /// Typed body sent to the backend.
    type Payload;

    /// Validates every field and builds the payload.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of messages in field order.
    fn validate(&self) -> Result<Self::Payload, Vec<String>>;

    /// Whether an edit that sets `field` to `value` is accepted at all.
    fn accepts(_field: Self::Field, _value: &str) -> bool {
        true
    }
}

/// Blank form for the create modal.
#[must_use]
pub fn empty_form<V: Validate>() -> V {
    V::default()
}

/// Form pre-populated from a stored record for the edit modal.
#[must_use]
pub fn form_from_entity<E, V>(entity: &E) -> V
where
    V: Validate + for<'a> From<&'a E>,
{
    V::from(entity)
}

/// Non-empty and ASCII digits only.
pub(crate) fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Checks a required text field whose trimmed length must lie in `min..=max`.
pub(crate) fn check_length(
    errors: &mut Vec<String>,
    value: &str,
    min: usize,
    max: usize,
    missing: &str,
    out_of_range: &str,
) {
    let len = value.chars().count();
    if len == 0 {
        errors.push(missing.to_string());
    } else if len < min || len > max {
        errors.push(out_of_range.to_string());
    }
}

/// Parses a required numeric id, pushing `missing` or `invalid` on failure.
pub(crate) fn parse_id(errors: &mut Vec<String>, value: &str, missing: &str, invalid: &str) -> i64 {
    if value.is_empty() {
        errors.push(missing.to_string());
        return 0;
    }
    match value.parse::<i64>() {
        Ok(id) if is_numeric(value) => id,
        _ => {
            errors.push(invalid.to_string());
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_means_digits_only() {
        assert!(is_numeric("042"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("1.5"));
        assert!(!is_numeric(" 1"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        check_length(&mut errors, "Año", 3, 100, "missing", "range");
        assert!(errors.is_empty());

        check_length(&mut errors, "ab", 3, 100, "missing", "range");
        check_length(&mut errors, "", 3, 100, "missing", "range");
        assert_eq!(errors, vec!["range", "missing"]);
    }

    #[test]
    fn overflowing_id_is_invalid() {
        let mut errors = Vec::new();
        parse_id(&mut errors, "99999999999999999999", "missing", "invalid");
        assert_eq!(errors, vec!["invalid"]);
    }
}
