//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state by
//! `AppState::compute_viewmodel()`. They hold display-ready strings, column
//! widths and highlight ranges, and no business logic.
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "Gestion de Espacios".to_string(),
//!         subtitle: "Administra los ambientes academicos.".to_string(),
//!     },
//!     footer: FooterInfo { keybindings: "quit: salir".to_string() },
//!     ..UIViewModel::default()
//! };
//! assert!(vm.table.is_none());
//! ```

use crate::app::modes::StatusKind;

/// Complete UI view model for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Total / active / inactive counters.
    pub stats: Option<StatsInfo>,

    pub search_bar: Option<SearchBarInfo>,

    /// Filter controls (collapsible panel or always-visible bar).
    pub filter_panel: Option<FilterPanelInfo>,

    /// Status banner and load errors, in display order.
    pub banners: Vec<BannerInfo>,

    pub table: Option<TableInfo>,

    /// Shown instead of table rows when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Open create/edit form or report filter modal.
    pub modal: Option<ModalInfo>,

    /// Pending delete confirmation question.
    pub confirm: Option<String>,

    /// Criteria summary (reports page).
    pub summary: Option<SummaryInfo>,

    pub footer: FooterInfo,
}

/// Page title block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Counters above the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsInfo {
    pub total: usize,
    pub activos: usize,
    pub inactivos: usize,
    /// Rows left after search and filters.
    pub visibles: usize,
}

/// Search input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}

/// One labelled control of a filter panel or form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInfo {
    /// Command key used to set the control.
    pub key: String,
    pub label: String,
    /// Current value in display form (option label, not id).
    pub value: String,
    /// Allowed choices, as `key=label` hints. Empty for free text.
    pub options: Vec<String>,
    /// Greyed out with an explanation.
    pub disabled: Option<String>,
}

/// Filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanelInfo {
    pub fields: Vec<FieldInfo>,
    pub hint: String,
    /// Whether "aplicar" is enabled.
    pub can_apply: bool,
}

/// A status or error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub kind: StatusKind,
    pub text: String,
}

/// One table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub title: String,
    pub width: usize,
}

/// One table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    /// Cell texts, already truncated to their column width.
    pub cells: Vec<String>,
    /// Byte ranges of search matches within the name cell.
    pub highlight_ranges: Vec<(usize, usize)>,
    pub is_active: bool,
}

/// Table contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableInfo {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<TableRow>,
    /// Index of the cell that carries search highlights.
    pub name_column: usize,
    /// Index of the status cell (colored by activity).
    pub status_column: Option<usize>,
}

/// Empty table message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// A modal dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalInfo {
    pub title: String,
    pub subtitle: String,
    /// Inline validation or server messages.
    pub errors: Vec<String>,
    pub fields: Vec<FieldInfo>,
    /// Live summary shown inside the modal.
    pub summary: Vec<String>,
    pub submit_label: String,
    pub submitting: bool,
}

/// A titled list of criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryInfo {
    pub title: String,
    pub lines: Vec<String>,
}

/// Footer hints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
