//! Application layer coordinating pages, events, and actions.
//!
//! This layer sits between the console loop (main.rs) and the store and
//! service layers. It implements the event-driven flow behind every page:
//!
//! ```text
//! Command → Event → handle_event → State Mutations → Actions → Stores
//!                        ↑                                       ↓
//!                        └──────────── Event::Completed ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Backend work emitted by the handler and its outcomes
//! - [`command`]: Console command parsing
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Page, modal and status types
//! - [`form`]: Generic create/edit form modal
//! - [`page`]: State shared by the CRUD pages
//! - [`espacios`], [`cursos`], [`reportes`]: The three admin pages
//! - [`runtime`]: Async execution of actions
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod command;
pub mod cursos;
pub mod espacios;
pub mod form;
pub mod handler;
pub mod modes;
pub mod page;
pub mod reportes;
pub mod runtime;
pub mod state;

pub use actions::{Action, LoadReason, Outcome};
pub use command::parse_command;
pub use cursos::CursosPage;
pub use espacios::EspaciosPage;
pub use form::FormModal;
pub use handler::{handle_event, Event};
pub use modes::{ModalState, Page, StatusKind, StatusMessage};
pub use page::CrudPage;
pub use reportes::{ReporteFiltrosModal, ReportesPage};
pub use runtime::{dispatch, execute};
pub use state::AppState;
