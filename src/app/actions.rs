//! Side effects requested by the event handler.
//!
//! The handler never awaits. When an event needs the backend it returns an
//! [`Action`]; the runtime executes it against the page's store and feeds the
//! [`Outcome`] back as [`Event::Completed`](super::Event::Completed).
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::app::{Action, LoadReason};
//!
//! let action = Action::LoadEspacios { filters: None, reason: LoadReason::Reload };
//! assert!(matches!(action, Action::LoadEspacios { .. }));
//! ```

use super::modes::Page;
use crate::domain::{CursoPayload, EspacioFilters, EspacioPayload};

/// Why a collection is being fetched. Decides how the outcome is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadReason {
    /// First display of the page. Failures stay in the store error only.
    Mount,
    /// Explicit "actualizar". Failures raise the banner.
    Reload,
    /// "Aplicar filtros". Success closes the panel; failures raise the banner.
    ApplyFilters,
    /// "Limpiar filtros". Failures are only logged.
    ClearFilters,
}

/// Backend work to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetches the space list with server-side filters.
    LoadEspacios {
        filters: Option<EspacioFilters>,
        reason: LoadReason,
    },

    /// Fetches the full course list.
    LoadCursos {
        reason: LoadReason,
    },

    /// Fetches the faculty and school catalogs of a page.
    LoadCatalogs(Page),

    /// Creates (`id: None`) or updates a space.
    SaveEspacio {
        payload: EspacioPayload,
        id: Option<i64>,
    },

    /// Creates (`id: None`) or updates a course.
    SaveCurso {
        payload: CursoPayload,
        id: Option<i64>,
    },

    /// Deactivates a space.
    DeleteEspacio(i64),

    /// Deactivates a course.
    DeleteCurso(i64),
}

/// Result of an executed [`Action`]. Errors carry the display-ready message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded {
        page: Page,
        reason: LoadReason,
        result: Result<usize, String>,
    },
    CatalogsLoaded {
        page: Page,
        result: Result<(), String>,
    },
    Saved {
        page: Page,
        created: bool,
        result: Result<String, String>,
    },
    Deleted {
        page: Page,
        result: Result<String, String>,
    },
}
