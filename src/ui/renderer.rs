//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from state, then let
//! the components write it as ANSI text. The output is returned as a string
//! so the console decides where it goes and tests can inspect it.
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::ui::{render_viewmodel, Theme, UIViewModel};
//!
//! let out = render_viewmodel(&UIViewModel::default(), &Theme::default(), 80);
//! assert!(out.ends_with('\n'));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current page of `state` for a terminal `cols` wide.
#[must_use]
pub fn render(state: &AppState, theme: &Theme, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(cols);
    render_viewmodel(&viewmodel, theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_page(&mut out, vm, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::StatusKind;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::viewmodel::{
        BannerInfo, ColumnInfo, EmptyState, FieldInfo, FooterInfo, HeaderInfo, ModalInfo, TableInfo,
        TableRow,
    };

    fn table() -> TableInfo {
        TableInfo {
            columns: vec![
                ColumnInfo {
                    title: "ID".to_string(),
                    width: 4,
                },
                ColumnInfo {
                    title: "Nombre".to_string(),
                    width: 12,
                },
                ColumnInfo {
                    title: "Estado".to_string(),
                    width: 8,
                },
            ],
            rows: vec![TableRow {
                cells: vec!["1".to_string(), "Aula Magna".to_string(), "Activo".to_string()],
                highlight_ranges: vec![(0, 4)],
                is_active: true,
            }],
            name_column: 1,
            status_column: Some(2),
        }
    }

    #[test]
    fn table_rows_are_aligned() {
        let vm = UIViewModel {
            header: HeaderInfo {
                title: "Gestion de Espacios".to_string(),
                subtitle: String::new(),
            },
            table: Some(table()),
            ..UIViewModel::default()
        };

        let text = strip_ansi(&render_viewmodel(&vm, &Theme::default(), 40));

        assert!(text.contains("ID    NOMBRE        ESTADO"));
        assert!(text.contains("1     Aula Magna    Activo"));
    }

    #[test]
    fn empty_state_replaces_rows() {
        let vm = UIViewModel {
            table: Some(table()),
            empty_state: Some(EmptyState {
                message: "No hay cursos para mostrar.".to_string(),
                subtitle: String::new(),
            }),
            ..UIViewModel::default()
        };

        let text = strip_ansi(&render_viewmodel(&vm, &Theme::default(), 40));

        assert!(text.contains("No hay cursos para mostrar."));
        assert!(!text.contains("Aula Magna"));
    }

    #[test]
    fn modal_lists_errors_and_fields() {
        let vm = UIViewModel {
            modal: Some(ModalInfo {
                title: "Registrar Curso".to_string(),
                errors: vec!["El nombre es obligatorio.".to_string()],
                fields: vec![FieldInfo {
                    key: "escuela".to_string(),
                    label: "Escuela".to_string(),
                    disabled: Some("Selecciona una facultad primero".to_string()),
                    ..FieldInfo::default()
                }],
                submit_label: "Registrar".to_string(),
                ..ModalInfo::default()
            }),
            banners: vec![BannerInfo {
                kind: StatusKind::Error,
                text: "Servicio no disponible".to_string(),
            }],
            footer: FooterInfo {
                keybindings: "guardar | cancelar".to_string(),
            },
            ..UIViewModel::default()
        };

        let text = strip_ansi(&render_viewmodel(&vm, &Theme::default(), 60));

        assert!(text.contains("Registrar Curso"));
        assert!(text.contains("• El nombre es obligatorio."));
        assert!(text.contains("(Selecciona una facultad primero)"));
        assert!(text.contains("✘ Servicio no disponible"));
        assert!(text.contains("[Registrar]"));
        assert!(text.trim_end().ends_with("guardar | cancelar"));
    }
}
