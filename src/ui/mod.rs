//! Terminal presentation layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Immutable, display-ready snapshots of a page
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable section renderers
//! - [`helpers`]: Width, truncation and highlight utilities
//! - [`theme`]: Color palettes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BannerInfo, ColumnInfo, EmptyState, FieldInfo, FilterPanelInfo, FooterInfo, HeaderInfo,
    ModalInfo, SearchBarInfo, StatsInfo, SummaryInfo, TableInfo, TableRow, UIViewModel,
};
