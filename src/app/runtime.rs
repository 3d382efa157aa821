//! Executes handler actions against the stores.
//!
//! [`dispatch`] drives one user event to completion: it runs the handler,
//! awaits every returned [`Action`] in order and feeds each [`Outcome`] back
//! through the handler. Actions are awaited one at a time on the caller's
//! task, so a page never sees two overlapping mutations.

use super::actions::{Action, Outcome};
use super::handler::{handle_event, Event};
use super::modes::Page;
use super::state::AppState;
use tracing::Instrument;

/// Runs one action and reports its outcome as an event.
pub async fn execute(state: &mut AppState, action: Action) -> Event {
    let span = tracing::debug_span!("execute", action = ?action);

    let outcome = async {
        match action {
            Action::LoadEspacios { filters, reason } => {
                let store = &mut state.espacios.crud.store;
                let result = store.load(filters).await.map(|()| store.items().len());
                Outcome::Loaded {
                    page: Page::Espacios,
                    reason,
                    result: result.map_err(|e| e.to_string()),
                }
            }
            Action::LoadCursos { reason } => {
                let store = &mut state.cursos.crud.store;
                let result = store.load(None).await.map(|()| store.items().len());
                Outcome::Loaded {
                    page: Page::Cursos,
                    reason,
                    result: result.map_err(|e| e.to_string()),
                }
            }
            Action::LoadCatalogs(page) => {
                let catalogs = match page {
                    Page::Cursos => &mut state.cursos.crud.catalogs,
                    _ => &mut state.espacios.crud.catalogs,
                };
                Outcome::CatalogsLoaded {
                    page,
                    result: catalogs.load().await.map_err(|e| e.to_string()),
                }
            }
            Action::SaveEspacio { payload, id } => {
                let result = state.espacios.crud.store.save(&payload, id).await;
                Outcome::Saved {
                    page: Page::Espacios,
                    created: id.is_none(),
                    result: result.map(|espacio| espacio.nombre).map_err(|e| e.to_string()),
                }
            }
            Action::SaveCurso { payload, id } => {
                let result = state.cursos.crud.store.save(&payload, id).await;
                Outcome::Saved {
                    page: Page::Cursos,
                    created: id.is_none(),
                    result: result.map(|curso| curso.nombre).map_err(|e| e.to_string()),
                }
            }
            Action::DeleteEspacio(id) => {
                let nombre = state.espacios.crud.display_name(id);
                let result = state.espacios.crud.store.remove(id).await;
                Outcome::Deleted {
                    page: Page::Espacios,
                    result: result.map(|()| nombre).map_err(|e| e.to_string()),
                }
            }
            Action::DeleteCurso(id) => {
                let nombre = state.cursos.crud.display_name(id);
                let result = state.cursos.crud.store.remove(id).await;
                Outcome::Deleted {
                    page: Page::Cursos,
                    result: result.map(|()| nombre).map_err(|e| e.to_string()),
                }
            }
        }
    }
    .instrument(span)
    .await;

    Event::Completed(outcome)
}

/// Handles `event` and every action it causes. Returns whether to re-render.
pub async fn dispatch(state: &mut AppState, event: Event) -> bool {
    let (mut render, actions) = handle_event(state, &event);

    for action in actions {
        let completed = execute(state, action).await;
        let (again, follow_up) = handle_event(state, &completed);
        render |= again;
        // Outcomes never request further work.
        debug_assert!(follow_up.is_empty());
    }
    render
}
