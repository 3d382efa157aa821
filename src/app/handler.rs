//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the console (parsed commands) or from the runtime
//!    (completed backend work)
//! 2. [`handle_event`] pattern-matches the event against the current page
//! 3. State mutations happen synchronously through the page types
//! 4. Backend work is returned as [`Action`]s for the runtime to execute
//!
//! The handler never awaits, so every transition is testable without a
//! runtime.
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::app::{handle_event, Action, AppState, Event, Page};
//! use horarios_admin::service::{
//!     CursosResource, EspaciosResource, FixtureCatalog, FixtureService, Services,
//! };
//! use std::sync::Arc;
//!
//! let services = Services {
//!     espacios: Arc::new(FixtureService::<EspaciosResource>::in_memory(vec![])),
//!     cursos: Arc::new(FixtureService::<CursosResource>::in_memory(vec![])),
//!     catalogos: Arc::new(FixtureCatalog::builtin()),
//! };
//! let mut state = AppState::new(&services);
//! let (_, actions) = handle_event(&mut state, &Event::ShowPage(Page::Cursos));
//! assert!(actions.contains(&Action::LoadCatalogs(Page::Cursos)));
//! ```

use super::actions::{Action, LoadReason, Outcome};
use super::modes::{Page, StatusMessage};
use super::state::AppState;

/// Events triggered by user commands or completed backend work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Navigates to a page, mounting it the first time.
    ShowPage(Page),
    /// Ends the session.
    Quit,
    /// Re-fetches the current page's collection.
    Reload,
    /// Replaces the search box contents.
    Search(String),

    /// Opens the create form.
    OpenCreate,
    /// Opens the edit form for a loaded record.
    OpenEdit(i64),
    /// Edits one field of the open form (or report criterion).
    SetField { key: String, value: String },
    /// Validates and submits the open form.
    Submit,
    /// Closes the open modal without saving.
    CloseModal,

    /// Asks for confirmation before deleting a record.
    RequestDelete(i64),
    ConfirmDelete,
    CancelDelete,

    /// Shows or hides the filter panel (opens the report modal on Reportes).
    ToggleFilters,
    /// Sets one filter criterion.
    SetFilter { key: String, value: String },
    ApplyFilters,
    ClearFilters,

    /// Hides the status banner.
    DismissStatus,

    /// Backend work finished.
    Completed(Outcome),
}

impl Event {
    /// Whether the event comes from the user, as opposed to the runtime.
    #[must_use]
    pub const fn is_user_event(&self) -> bool {
        !matches!(self, Self::Completed(_))
    }
}

/// Processes one event and returns whether to re-render plus the actions to
/// execute, in order.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    tracing::debug!(event = ?event, page = state.page.name(), "handling event");

    if event.is_user_event() {
        state.status = None;
    }

    match event {
        Event::ShowPage(page) => handle_show_page(state, *page),
        Event::Quit => {
            state.running = false;
            (false, vec![])
        }
        Event::Reload => handle_reload(state),
        Event::Search(query) => {
            match state.page {
                Page::Espacios => state.espacios.set_search(query),
                Page::Cursos => state.cursos.set_search(query),
                Page::Reportes => return (false, vec![]),
            }
            (true, vec![])
        }
        Event::OpenCreate => {
            match state.page {
                Page::Espacios => state.espacios.crud.open_create(),
                Page::Cursos => state.cursos.crud.open_create(),
                Page::Reportes => return (false, vec![]),
            }
            (true, vec![])
        }
        Event::OpenEdit(id) => {
            let found = match state.page {
                Page::Espacios => state.espacios.crud.open_edit(*id),
                Page::Cursos => state.cursos.crud.open_edit(*id),
                Page::Reportes => return (false, vec![]),
            };
            if !found {
                state.status = Some(StatusMessage::error(format!("No se encontro el registro {id}.")));
            }
            (true, vec![])
        }
        Event::SetField { key, value } => {
            let result = match state.page {
                Page::Espacios => state.espacios.set_field(key, value),
                Page::Cursos => state.cursos.set_field(key, value),
                Page::Reportes if state.reportes.modal.is_open() => state.reportes.modal.set(key, value),
                Page::Reportes => Err("No hay un formulario abierto.".to_string()),
            };
            report(state, result);
            (true, vec![])
        }
        Event::Submit => handle_submit(state),
        Event::CloseModal => {
            match state.page {
                Page::Espacios => state.espacios.crud.modal.close(),
                Page::Cursos => state.cursos.crud.modal.close(),
                Page::Reportes => state.reportes.modal.close(),
            }
            (true, vec![])
        }
        Event::RequestDelete(id) => {
            let found = match state.page {
                Page::Espacios => state.espacios.crud.request_delete(*id).is_some(),
                Page::Cursos => state.cursos.crud.request_delete(*id).is_some(),
                Page::Reportes => return (false, vec![]),
            };
            if !found {
                state.status = Some(StatusMessage::error(format!("No se encontro el registro {id}.")));
            }
            (true, vec![])
        }
        Event::ConfirmDelete => {
            let action = match state.page {
                Page::Espacios => state.espacios.crud.take_pending_delete().map(Action::DeleteEspacio),
                Page::Cursos => state.cursos.crud.take_pending_delete().map(Action::DeleteCurso),
                Page::Reportes => None,
            };
            (true, action.into_iter().collect())
        }
        Event::CancelDelete => {
            match state.page {
                Page::Espacios => state.espacios.crud.take_pending_delete(),
                Page::Cursos => state.cursos.crud.take_pending_delete(),
                Page::Reportes => None,
            };
            (true, vec![])
        }
        Event::ToggleFilters => {
            match state.page {
                Page::Espacios => state.espacios.toggle_panel(),
                Page::Cursos => return (false, vec![]),
                Page::Reportes => state.reportes.open_filters(),
            }
            (true, vec![])
        }
        Event::SetFilter { key, value } => {
            let result = match state.page {
                Page::Espacios => state.espacios.set_filter(key, value),
                Page::Cursos => state.cursos.set_filter(key, value),
                Page::Reportes if state.reportes.modal.is_open() => state.reportes.modal.set(key, value),
                Page::Reportes => Err("Abre los filtros del reporte primero.".to_string()),
            };
            report(state, result);
            (true, vec![])
        }
        Event::ApplyFilters => handle_apply_filters(state),
        Event::ClearFilters => handle_clear_filters(state),
        Event::DismissStatus => (true, vec![]),
        Event::Completed(outcome) => {
            handle_outcome(state, outcome);
            (true, vec![])
        }
    }
}

fn report(state: &mut AppState, result: Result<(), String>) {
    if let Err(message) = result {
        state.status = Some(StatusMessage::error(message));
    }
}

fn handle_show_page(state: &mut AppState, page: Page) -> (bool, Vec<Action>) {
    state.page = page;
    let first_mount = match page {
        Page::Espacios => state.espacios.crud.mount(),
        Page::Cursos => state.cursos.crud.mount(),
        Page::Reportes => false,
    };
    if !first_mount {
        return (true, vec![]);
    }

    tracing::debug!(page = page.name(), "mounting page");
    let load = match page {
        Page::Espacios => Action::LoadEspacios {
            filters: None,
            reason: LoadReason::Mount,
        },
        _ => Action::LoadCursos {
            reason: LoadReason::Mount,
        },
    };
    (true, vec![Action::LoadCatalogs(page), load])
}

fn handle_reload(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.page {
        // Unapplied panel edits do not take part in a reload.
        Page::Espacios => {
            let filters = state.espacios.crud.store.current_filters().cloned();
            (
                true,
                vec![Action::LoadEspacios {
                    filters,
                    reason: LoadReason::Reload,
                }],
            )
        }
        Page::Cursos => (
            true,
            vec![Action::LoadCursos {
                reason: LoadReason::Reload,
            }],
        ),
        Page::Reportes => (false, vec![]),
    }
}

fn handle_submit(state: &mut AppState) -> (bool, Vec<Action>) {
    let action = match state.page {
        Page::Espacios => state
            .espacios
            .crud
            .modal
            .submit()
            .map(|(payload, id)| Action::SaveEspacio { payload, id }),
        Page::Cursos => state
            .cursos
            .crud
            .modal
            .submit()
            .map(|(payload, id)| Action::SaveCurso { payload, id }),
        Page::Reportes => {
            if state.reportes.modal.is_open() {
                state.reportes.apply_filters();
            }
            None
        }
    };
    (true, action.into_iter().collect())
}

fn handle_apply_filters(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.page {
        Page::Espacios => {
            if !state.espacios.can_apply_filters() {
                state.status = Some(StatusMessage::error("Selecciona al menos un filtro."));
                return (true, vec![]);
            }
            (
                true,
                vec![Action::LoadEspacios {
                    filters: Some(state.espacios.panel().to_filters()),
                    reason: LoadReason::ApplyFilters,
                }],
            )
        }
        // The course filter bar applies as it changes.
        Page::Cursos => (false, vec![]),
        Page::Reportes => {
            if state.reportes.modal.is_open() {
                state.reportes.apply_filters();
            }
            (true, vec![])
        }
    }
}

fn handle_clear_filters(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.page {
        Page::Espacios => {
            state.espacios.clear_panel();
            (
                true,
                vec![Action::LoadEspacios {
                    filters: None,
                    reason: LoadReason::ClearFilters,
                }],
            )
        }
        Page::Cursos => {
            state.cursos.clear_filters();
            (true, vec![])
        }
        Page::Reportes => {
            if state.reportes.modal.is_open() {
                state.reportes.modal.limpiar();
            }
            (true, vec![])
        }
    }
}

const fn entity_label(page: Page) -> &'static str {
    match page {
        Page::Cursos => "Curso",
        _ => "Espacio",
    }
}

fn handle_outcome(state: &mut AppState, outcome: &Outcome) {
    match outcome {
        Outcome::Loaded { page, reason, result } => match result {
            Ok(count) => {
                tracing::debug!(page = page.name(), reason = ?reason, count, "collection loaded");
                if *page == Page::Espacios && *reason == LoadReason::ApplyFilters {
                    state.espacios.close_panel();
                }
            }
            Err(message) => match reason {
                LoadReason::Mount => {}
                LoadReason::Reload | LoadReason::ApplyFilters => {
                    state.status = Some(StatusMessage::error(message.clone()));
                }
                LoadReason::ClearFilters => {
                    tracing::warn!(page = page.name(), error = %message, "reload after clearing filters failed");
                }
            },
        },
        Outcome::CatalogsLoaded { page, result } => {
            if let Err(message) = result {
                tracing::warn!(page = page.name(), error = %message, "catalog load failed");
            }
        }
        Outcome::Saved { page, created, result } => match result {
            Ok(nombre) => {
                match page {
                    Page::Espacios => state.espacios.crud.modal.resolve_success(),
                    Page::Cursos => state.cursos.crud.modal.resolve_success(),
                    Page::Reportes => {}
                }
                let verbo = if *created { "registrado" } else { "actualizado" };
                tracing::info!(page = page.name(), nombre = %nombre, created, "record saved");
                state.status = Some(StatusMessage::success(format!(
                    "{} {verbo} correctamente.",
                    entity_label(*page)
                )));
            }
            Err(message) => {
                match page {
                    Page::Espacios => state.espacios.crud.modal.resolve_failure(message.clone()),
                    Page::Cursos => state.cursos.crud.modal.resolve_failure(message.clone()),
                    Page::Reportes => {}
                }
                state.status = Some(StatusMessage::error(message.clone()));
            }
        },
        Outcome::Deleted { page, result } => match result {
            Ok(nombre) => {
                tracing::info!(page = page.name(), nombre = %nombre, "record deactivated");
                state.status = Some(StatusMessage::success(format!(
                    "{} eliminado correctamente.",
                    entity_label(*page)
                )));
            }
            Err(message) => state.status = Some(StatusMessage::error(message.clone())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{ModalState, StatusKind};
    use crate::domain::{Curso, Espacio};
    use crate::service::{CursosResource, EspaciosResource, FixtureCatalog, FixtureService, Services};
    use std::sync::Arc;

    fn state() -> AppState {
        let services = Services {
            espacios: Arc::new(FixtureService::<EspaciosResource>::in_memory(Vec::<Espacio>::new())),
            cursos: Arc::new(FixtureService::<CursosResource>::in_memory(Vec::<Curso>::new())),
            catalogos: Arc::new(FixtureCatalog::builtin()),
        };
        AppState::new(&services)
    }

    fn set(key: &str, value: &str) -> Event {
        Event::SetField {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn first_visit_mounts_once() {
        let mut state = state();

        let (_, actions) = handle_event(&mut state, &Event::ShowPage(Page::Espacios));
        assert_eq!(
            actions,
            vec![
                Action::LoadCatalogs(Page::Espacios),
                Action::LoadEspacios {
                    filters: None,
                    reason: LoadReason::Mount
                },
            ]
        );

        let (render, actions) = handle_event(&mut state, &Event::ShowPage(Page::Espacios));
        assert!(render);
        assert!(actions.is_empty());
    }

    #[test]
    fn reportes_never_loads() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ShowPage(Page::Reportes));
        assert!(actions.is_empty());
        assert_eq!(state.page, Page::Reportes);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Quit);
        assert!(!render);
        assert!(!state.running);
    }

    #[test]
    fn invalid_submit_emits_nothing() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenCreate);

        let (_, actions) = handle_event(&mut state, &Event::Submit);

        assert!(actions.is_empty());
        assert_eq!(state.espacios.crud().modal().state(), ModalState::Create);
        assert!(!state.espacios.crud().modal().errors().is_empty());
    }

    #[test]
    fn valid_submit_emits_save() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenCreate);
        for (key, value) in [
            ("nombre", "Lab 101"),
            ("tipo", "laboratorio"),
            ("capacidad", "30"),
            ("escuelaId", "2"),
            ("estado", "1"),
        ] {
            handle_event(&mut state, &set(key, value));
        }

        let (_, actions) = handle_event(&mut state, &Event::Submit);

        assert!(matches!(
            actions.as_slice(),
            [Action::SaveEspacio { payload, id: None }] if payload.capacidad == 30 && payload.escuela_id == 2
        ));
        assert_eq!(state.espacios.crud().modal().state(), ModalState::Submitting { id: None });
    }

    #[test]
    fn set_field_without_form_raises_banner() {
        let mut state = state();
        handle_event(&mut state, &set("nombre", "Lab"));
        assert_eq!(state.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn save_failure_reopens_form_with_message() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenCreate);
        state.espacios.crud.modal.values_mut().nombre = "Lab 101".to_string();
        state.espacios.crud.modal.values_mut().tipo = "aula".to_string();
        state.espacios.crud.modal.values_mut().capacidad = "10".to_string();
        state.espacios.crud.modal.values_mut().escuela_id = "1".to_string();
        state.espacios.crud.modal.values_mut().estado = "1".to_string();
        handle_event(&mut state, &Event::Submit);

        handle_event(
            &mut state,
            &Event::Completed(Outcome::Saved {
                page: Page::Espacios,
                created: true,
                result: Err("El codigo ya existe".to_string()),
            }),
        );

        let modal = state.espacios.crud().modal();
        assert_eq!(modal.state(), ModalState::Create);
        assert_eq!(modal.errors(), ["El codigo ya existe".to_string()]);
        assert_eq!(state.status.as_ref().map(|s| s.text.as_str()), Some("El codigo ya existe"));
    }

    #[test]
    fn save_success_closes_with_banner() {
        let mut state = state();
        state.page = Page::Cursos;
        handle_event(&mut state, &Event::OpenCreate);
        for (key, value) in [("nombre", "Redes"), ("facultad", "1"), ("escuela", "2"), ("ciclo", "7")] {
            handle_event(&mut state, &set(key, value));
        }
        handle_event(&mut state, &Event::Submit);

        handle_event(
            &mut state,
            &Event::Completed(Outcome::Saved {
                page: Page::Cursos,
                created: true,
                result: Ok("Redes".to_string()),
            }),
        );

        assert_eq!(state.cursos.crud().modal().state(), ModalState::Closed);
        assert_eq!(
            state.status,
            Some(StatusMessage::success("Curso registrado correctamente."))
        );
    }

    #[test]
    fn apply_requires_an_active_filter() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleFilters);

        let (_, actions) = handle_event(&mut state, &Event::ApplyFilters);
        assert!(actions.is_empty());
        assert!(state.status.is_some());

        handle_event(
            &mut state,
            &Event::SetFilter {
                key: "estado".to_string(),
                value: "activos".to_string(),
            },
        );
        let (_, actions) = handle_event(&mut state, &Event::ApplyFilters);
        assert!(matches!(
            actions.as_slice(),
            [Action::LoadEspacios { filters: Some(f), reason: LoadReason::ApplyFilters }] if f.estado == Some(1)
        ));
    }

    #[test]
    fn applied_filters_close_the_panel_on_success_only() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleFilters);

        let failed = Outcome::Loaded {
            page: Page::Espacios,
            reason: LoadReason::ApplyFilters,
            result: Err("Servicio no disponible".to_string()),
        };
        handle_event(&mut state, &Event::Completed(failed));
        assert!(state.espacios.panel_open());
        assert!(state.status.is_some());

        let ok = Outcome::Loaded {
            page: Page::Espacios,
            reason: LoadReason::ApplyFilters,
            result: Ok(3),
        };
        handle_event(&mut state, &Event::Completed(ok));
        assert!(!state.espacios.panel_open());
    }

    #[test]
    fn mount_failure_stays_out_of_the_banner() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::Completed(Outcome::Loaded {
                page: Page::Espacios,
                reason: LoadReason::Mount,
                result: Err("Servicio no disponible".to_string()),
            }),
        );
        assert!(state.status.is_none());
    }

    #[test]
    fn clear_filters_reloads_unfiltered() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::SetFilter {
                key: "tipo".to_string(),
                value: "aula".to_string(),
            },
        );

        let (_, actions) = handle_event(&mut state, &Event::ClearFilters);

        assert_eq!(state.espacios.panel().tipo, "");
        assert_eq!(
            actions,
            vec![Action::LoadEspacios {
                filters: None,
                reason: LoadReason::ClearFilters
            }]
        );
    }

    #[test]
    fn report_modal_flow() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowPage(Page::Reportes));

        handle_event(&mut state, &set("usuario", "1"));
        assert!(state.status.is_some(), "criteria need the modal open");

        handle_event(&mut state, &Event::ToggleFilters);
        handle_event(&mut state, &set("usuario", "1"));
        handle_event(&mut state, &Event::ApplyFilters);

        assert!(!state.reportes.modal().is_open());
        assert_eq!(state.reportes.applied().tipo_usuario, Some(1));
    }

    #[test]
    fn user_events_clear_the_banner() {
        let mut state = state();
        state.status = Some(StatusMessage::success("Espacio eliminado correctamente."));

        handle_event(&mut state, &Event::Search("lab".to_string()));

        assert!(state.status.is_none());
    }
}
