//! Page and modal state types.
//!
//! The console shows one [`Page`] at a time. Each CRUD page owns a form modal
//! whose lifecycle is the [`ModalState`] machine:
//!
//! ```text
//! Closed ──open_create──► Create ─┐
//!   ▲    ──open_edit────► Edit ───┤ submit (valid)
//!   │                             ▼
//!   └──────── success ───── Submitting
//!                                 │ failure
//!             Create/Edit ◄───────┘ (inline error)
//! ```
//!
//! Only explicit user actions move the machine; a validation failure keeps it
//! in `Create`/`Edit` with the messages shown inline.
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::app::modes::{ModalState, Page};
//!
//! assert!(!ModalState::Closed.is_open());
//! assert_eq!(ModalState::Edit { id: 3 }.editing_id(), Some(3));
//! assert_eq!(Page::parse("cursos"), Some(Page::Cursos));
//! ```

/// Admin screen currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    /// Rooms and laboratories.
    #[default]
    Espacios,
    /// Courses.
    Cursos,
    /// Report filter criteria.
    Reportes,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Self; 3] = [Self::Espacios, Self::Cursos, Self::Reportes];

    /// Parses a page from its command name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "espacios" => Some(Self::Espacios),
            "cursos" => Some(Self::Cursos),
            "reportes" => Some(Self::Reportes),
            _ => None,
        }
    }

    /// Command name of the page.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Espacios => "espacios",
            Self::Cursos => "cursos",
            Self::Reportes => "reportes",
        }
    }

    /// Title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Espacios => "Gestion de Espacios",
            Self::Cursos => "Gestion de Cursos",
            Self::Reportes => "Reportes",
        }
    }
}

/// Lifecycle of a create/edit form modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No modal shown.
    #[default]
    Closed,

    /// Empty form for a new record.
    Create,

    /// Form pre-populated from record `id`.
    Edit {
        id: i64,
    },

    /// A validated payload is being persisted. `id` is `None` for creation.
    Submitting {
        id: Option<i64>,
    },
}

impl ModalState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether field edits and submission are accepted.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Create | Self::Edit { .. })
    }

    /// Identity of the record being edited, if any.
    #[must_use]
    pub const fn editing_id(self) -> Option<i64> {
        match self {
            Self::Edit { id } | Self::Submitting { id: Some(id) } => Some(id),
            _ => None,
        }
    }

    /// The editable state a failed submission returns to.
    #[must_use]
    pub const fn reopened(id: Option<i64>) -> Self {
        match id {
            Some(id) => Self::Edit { id },
            None => Self::Create,
        }
    }
}

/// Tone of the transient status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Transient status banner shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}
