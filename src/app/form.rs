//! Generic create/edit form modal.

use super::modes::ModalState;
use crate::validation::Validate;

/// A form modal driven by the [`ModalState`] machine.
///
/// The modal holds the raw values the user typed and the inline messages of
/// the last failed submission. It never talks to a service: [`submit`]
/// hands the validated payload to the caller, who reports back through
/// [`resolve_success`] or [`resolve_failure`].
///
/// [`submit`]: FormModal::submit
/// [`resolve_success`]: FormModal::resolve_success
/// [`resolve_failure`]: FormModal::resolve_failure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModal<V: Validate> {
    state: ModalState,
    values: V,
    errors: Vec<String>,
}

impl<V: Validate> FormModal<V> {
    #[must_use]
    pub const fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub const fn values(&self) -> &V {
        &self.values
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// `Closed → Create` with an empty form.
    pub fn open_create(&mut self) {
        self.state = ModalState::Create;
        self.values = V::default();
        self.errors.clear();
    }

    /// `Closed → Edit` with a form pre-populated from record `id`.
    pub fn open_edit(&mut self, id: i64, values: V) {
        self.state = ModalState::Edit { id };
        self.values = values;
        self.errors.clear();
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.errors.clear();
    }

    /// Applies an edit to one field.
    ///
    /// Returns `false` when the modal is not editable or the field's input
    /// filter rejects the new value; the previous value is kept in that case.
    pub fn set_field(&mut self, field: V::Field, value: String) -> bool {
        if !self.state.is_editable() || !V::accepts(field, &value) {
            tracing::trace!(field = ?field, "field edit rejected");
            return false;
        }
        self.values.set(field, value);
        true
    }

    /// Mutable access for dependent-field adjustments made by the page.
    pub(crate) fn values_mut(&mut self) -> &mut V {
        &mut self.values
    }

    /// Validates the form.
    ///
    /// On success the modal moves to `Submitting` and the payload is returned
    /// together with the identity to update (`None` to create). On failure the
    /// messages are kept inline and the modal stays where it was.
    pub fn submit(&mut self) -> Option<(V::Payload, Option<i64>)> {
        if !self.state.is_editable() {
            return None;
        }

        match self.values.validate() {
            Ok(payload) => {
                let id = self.state.editing_id();
                self.state = ModalState::Submitting { id };
                self.errors.clear();
                Some((payload, id))
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "form validation failed");
                self.errors = errors;
                None
            }
        }
    }

    /// `Submitting → Closed`.
    pub fn resolve_success(&mut self) {
        if matches!(self.state, ModalState::Submitting { .. }) {
            self.close();
        }
    }

    /// `Submitting → Create/Edit` with `message` as the only inline error.
    pub fn resolve_failure(&mut self, message: String) {
        if let ModalState::Submitting { id } = self.state {
            self.state = ModalState::reopened(id);
            self.errors = vec![message];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CursoField, CursoFormValues};

    fn filled() -> FormModal<CursoFormValues> {
        let mut modal = FormModal::<CursoFormValues>::default();
        modal.open_create();
        for (field, value) in [
            (CursoField::Nombre, "Redes"),
            (CursoField::Facultad, "1"),
            (CursoField::Escuela, "2"),
            (CursoField::Ciclo, "7"),
        ] {
            assert!(modal.set_field(field, value.to_string()));
        }
        modal
    }

    #[test]
    fn closed_modal_ignores_edits() {
        let mut modal = FormModal::<CursoFormValues>::default();
        assert!(!modal.set_field(CursoField::Nombre, "x".to_string()));
        assert!(modal.submit().is_none());
    }

    #[test]
    fn invalid_submit_stays_with_errors() {
        let mut modal = FormModal::<CursoFormValues>::default();
        modal.open_create();

        assert!(modal.submit().is_none());
        assert_eq!(modal.state(), ModalState::Create);
        assert!(!modal.errors().is_empty());
    }

    #[test]
    fn rejected_keystroke_keeps_previous_value() {
        let mut modal = filled();
        assert!(!modal.set_field(CursoField::Ciclo, "13".to_string()));
        assert_eq!(modal.values().ciclo, "7");
    }

    #[test]
    fn successful_cycle_closes() {
        let mut modal = filled();
        let (payload, id) = modal.submit().unwrap();

        assert_eq!(payload.ciclo, "7");
        assert!(id.is_none());
        assert_eq!(modal.state(), ModalState::Submitting { id: None });

        modal.resolve_success();
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn server_failure_returns_to_edit_with_single_error() {
        let mut modal = FormModal::<CursoFormValues>::default();
        modal.open_edit(5, filled().values().clone());
        modal.submit().unwrap();

        modal.resolve_failure("El curso ya existe".to_string());

        assert_eq!(modal.state(), ModalState::Edit { id: 5 });
        assert_eq!(modal.errors(), ["El curso ya existe".to_string()]);
    }
}
