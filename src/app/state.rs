//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the console: the page on
//! screen, the three pages with their stores and modals, and the transient
//! status banner. The event handler mutates it; the renderer only ever sees
//! the [`UIViewModel`] computed from it.
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::app::AppState;
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
//! let state = AppState::new(&services);
//! let vm = state.compute_viewmodel(100);
//! assert_eq!(vm.header.title, "Gestion de Espacios");
//! ```

use super::cursos::CursosPage;
use super::espacios::EspaciosPage;
use super::form::FormModal;
use super::modes::{ModalState, Page, StatusKind, StatusMessage};
use super::reportes::ReportesPage;
use crate::domain::catalog::Escuela;
use crate::domain::reporte::{SEMESTRES, TIPOS_USUARIO};
use crate::domain::{CursoField, EspacioField, FormValues};
use crate::filters::{match_ranges, Stats, SEARCH_MAX_CHARS};
use crate::service::Services;
use crate::ui::helpers::truncate;
use crate::ui::viewmodel::{
    BannerInfo, ColumnInfo, EmptyState, FieldInfo, FilterPanelInfo, FooterInfo, HeaderInfo,
    ModalInfo, SearchBarInfo, StatsInfo, SummaryInfo, TableInfo, TableRow, UIViewModel,
};
use crate::validation::Validate;

const GAP: usize = 2;

const FOOTER_ESPACIOS: &str = "buscar <texto> | nuevo | editar <id> | eliminar <id> | filtros | recargar | cursos | reportes | salir";
const FOOTER_CURSOS: &str = "buscar <texto> | filtro <facultad|escuela> <id> | limpiar | nuevo | editar <id> | eliminar <id> | recargar | espacios | reportes | salir";
const FOOTER_REPORTES: &str = "filtros | espacios | cursos | salir";
const FOOTER_FORM: &str = "set <campo> <valor> | guardar | cancelar";
const FOOTER_REPORT_MODAL: &str = "set <criterio> <valor> | aplicar | limpiar | cancelar";
const FOOTER_PANEL: &str = "filtro <estado|escuela|tipo> <valor> | aplicar | limpiar | filtros";
const FOOTER_CONFIRM: &str = "si | no";

/// Central application state container.
pub struct AppState {
    /// Page on screen.
    pub page: Page,
    pub espacios: EspaciosPage,
    pub cursos: CursosPage,
    pub reportes: ReportesPage,

    /// Transient banner of the last operation. Cleared by the next user event.
    pub status: Option<StatusMessage>,

    /// Set to `false` by the quit event.
    pub running: bool,
}

impl AppState {
    /// Creates the state with every page unmounted and empty.
    #[must_use]
    pub fn new(services: &Services) -> Self {
        Self {
            page: Page::default(),
            espacios: EspaciosPage::new(services.espacios.clone(), services.catalogos.clone()),
            cursos: CursosPage::new(services.cursos.clone(), services.catalogos.clone()),
            reportes: ReportesPage::default(),
            status: None,
            running: true,
        }
    }

    /// Computes the view model of the current page for a terminal `cols` wide.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let mut vm = match self.page {
            Page::Espacios => self.espacios_viewmodel(cols),
            Page::Cursos => self.cursos_viewmodel(cols),
            Page::Reportes => self.reportes_viewmodel(),
        };

        if let Some(status) = &self.status {
            vm.banners.insert(
                0,
                BannerInfo {
                    kind: status.kind,
                    text: status.text.clone(),
                },
            );
        }
        vm
    }

    fn espacios_viewmodel(&self, cols: usize) -> UIViewModel {
        let page = &self.espacios;
        let crud = page.crud();
        let visible = page.visible();

        let widths = split_widths(cols, &[4, 10, 0, 12, 5, 0, 8], &[3, 2]);
        let columns = ["ID", "Codigo", "Nombre", "Tipo", "Cap.", "Escuela", "Estado"]
            .iter()
            .zip(&widths)
            .map(|(title, width)| ColumnInfo {
                title: (*title).to_string(),
                width: *width,
            })
            .collect();

        let rows = visible
            .iter()
            .map(|espacio| {
                let nombre = truncate(&espacio.nombre, widths[2]);
                TableRow {
                    highlight_ranges: match_ranges(&nombre, crud.search()),
                    cells: vec![
                        truncate(&espacio.id.to_string(), widths[0]),
                        truncate(&espacio.codigo, widths[1]),
                        nombre,
                        truncate(&espacio.tipo, widths[3]),
                        truncate(&espacio.capacidad.to_string(), widths[4]),
                        truncate(&page.escuela_label(espacio), widths[5]),
                        estado_label(espacio.estado == 1).to_string(),
                    ],
                    is_active: espacio.estado == 1,
                }
            })
            .collect();

        let filter_panel = page.panel_open().then(|| {
            let panel = page.panel();
            let escuela_value = panel
                .escuela_id
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|id| crud.catalogs().escuela_nombre(id))
                .map_or_else(|| panel.escuela_id.clone(), String::from);
            FilterPanelInfo {
                fields: vec![
                    FieldInfo {
                        key: "estado".to_string(),
                        label: "Estado".to_string(),
                        value: panel.estado.label().to_string(),
                        options: vec!["all=Todos".into(), "activos=Activos".into(), "inactivos=Inactivos".into()],
                        disabled: None,
                    },
                    FieldInfo {
                        key: "escuela".to_string(),
                        label: "Escuela".to_string(),
                        value: escuela_value,
                        options: escuela_options(crud.catalogs().escuelas().iter()),
                        disabled: None,
                    },
                    FieldInfo {
                        key: "tipo".to_string(),
                        label: "Tipo".to_string(),
                        value: panel.tipo.clone(),
                        options: Vec::new(),
                        disabled: None,
                    },
                ],
                hint: "Los filtros se aplican en el servidor.".to_string(),
                can_apply: page.can_apply_filters(),
            }
        });

        let modal = crud.modal().state().is_open().then(|| {
            let mut info = form_modal_info(crud.modal(), "Espacio", |field, value| match field {
                EspacioField::EscuelaId => FieldChoice {
                    value: catalog_value(value, |id| crud.catalogs().escuela_nombre(id).map(String::from)),
                    options: escuela_options(crud.catalogs().escuelas().iter()),
                    disabled: None,
                },
                EspacioField::Estado => FieldChoice {
                    value: match value {
                        "1" => "Activo".to_string(),
                        "0" => "Inactivo".to_string(),
                        other => other.to_string(),
                    },
                    options: vec!["1=Activo".into(), "0=Inactivo".into()],
                    disabled: None,
                },
                _ => FieldChoice::text(value),
            });
            info.subtitle = "Completa los datos del espacio.".to_string();
            info
        });

        let confirm = crud.pending_delete().map(|espacio| {
            format!("¿Deseas eliminar el espacio {} ({})?", espacio.nombre, espacio.codigo)
        });

        let mut banners = Vec::new();
        push_error(&mut banners, crud.store().error());
        push_error(&mut banners, crud.catalogs().error());

        let loading = crud.store().loading() || crud.catalogs().loading();
        let stats = stats_info(crud.stats(), visible.len());

        UIViewModel {
            header: HeaderInfo {
                title: Page::Espacios.title().to_string(),
                subtitle: format!("{} espacios registrados", stats.total),
            },
            stats: Some(stats),
            search_bar: Some(SearchBarInfo {
                query: crud.search().to_string(),
                placeholder: format!("Buscar por nombre (max. {SEARCH_MAX_CHARS} caracteres)"),
            }),
            filter_panel,
            banners,
            empty_state: visible.is_empty().then(|| empty_state(loading, "espacios", !crud.search().is_empty())),
            table: Some(TableInfo {
                columns,
                rows,
                name_column: 2,
                status_column: Some(6),
            }),
            footer: FooterInfo {
                keybindings: footer(
                    crud.modal().state(),
                    confirm.is_some(),
                    page.panel_open().then_some(FOOTER_PANEL),
                    FOOTER_ESPACIOS,
                ),
            },
            modal,
            confirm,
            summary: None,
        }
    }

    fn cursos_viewmodel(&self, cols: usize) -> UIViewModel {
        let page = &self.cursos;
        let crud = page.crud();
        let catalogs = crud.catalogs();
        let visible = page.visible();

        let widths = split_widths(cols, &[4, 0, 0, 0, 5, 8], &[4, 3, 3]);
        let columns = ["ID", "Nombre", "Facultad", "Escuela", "Ciclo", "Estado"]
            .iter()
            .zip(&widths)
            .map(|(title, width)| ColumnInfo {
                title: (*title).to_string(),
                width: *width,
            })
            .collect();

        let rows = visible
            .iter()
            .map(|curso| {
                let nombre = truncate(&curso.nombre, widths[1]);
                TableRow {
                    highlight_ranges: match_ranges(&nombre, crud.search()),
                    cells: vec![
                        truncate(&curso.id_curso.to_string(), widths[0]),
                        nombre,
                        truncate(&page.facultad_label(curso), widths[2]),
                        truncate(&page.escuela_label(curso), widths[3]),
                        truncate(&curso.ciclo, widths[4]),
                        estado_label(curso.estado).to_string(),
                    ],
                    is_active: curso.estado,
                }
            })
            .collect();

        let bar = page.filter_bar();
        let filter_panel = Some(FilterPanelInfo {
            fields: vec![
                FieldInfo {
                    key: "facultad".to_string(),
                    label: "Facultad".to_string(),
                    value: bar
                        .facultad()
                        .and_then(|id| catalogs.facultad_label(id))
                        .unwrap_or_else(|| "Todas".to_string()),
                    options: catalogs
                        .facultades()
                        .iter()
                        .map(|f| format!("{}={}", f.id, f.label()))
                        .collect(),
                    disabled: None,
                },
                FieldInfo {
                    key: "escuela".to_string(),
                    label: "Escuela".to_string(),
                    value: bar
                        .escuela()
                        .and_then(|id| catalogs.escuela_nombre(id))
                        .unwrap_or("Todas")
                        .to_string(),
                    options: escuela_options(catalogs.escuelas_de(bar.facultad()).into_iter()),
                    disabled: None,
                },
            ],
            hint: String::new(),
            can_apply: bar.has_active_filters(),
        });

        let modal = crud.modal().state().is_open().then(|| {
            let values = crud.modal().values();
            let facultad = values.facultad.trim().parse::<i64>().ok();
            let mut info = form_modal_info(crud.modal(), "Curso", |field, value| match field {
                CursoField::Facultad => FieldChoice {
                    value: catalog_value(value, |id| catalogs.facultad_label(id)),
                    options: catalogs
                        .facultades()
                        .iter()
                        .map(|f| format!("{}={}", f.id, f.label()))
                        .collect(),
                    disabled: None,
                },
                CursoField::Escuela => FieldChoice {
                    value: catalog_value(value, |id| catalogs.escuela_nombre(id).map(String::from)),
                    options: escuela_options(catalogs.escuelas_de(facultad).into_iter()),
                    disabled: facultad.is_none().then(|| "Selecciona una facultad primero".to_string()),
                },
                CursoField::Estado => FieldChoice {
                    value: value.to_string(),
                    options: vec!["activo=Activo".into(), "inactivo=Inactivo".into()],
                    disabled: None,
                },
                _ => FieldChoice::text(value),
            });
            info.subtitle = "Completa los datos del curso.".to_string();
            info
        });

        let confirm = crud
            .pending_delete()
            .map(|curso| format!("¿Deseas eliminar el curso {}?", curso.nombre));

        let mut banners = Vec::new();
        push_error(&mut banners, crud.store().error());
        push_error(&mut banners, catalogs.error());

        let loading = crud.store().loading();
        let stats = stats_info(crud.stats(), visible.len());

        UIViewModel {
            header: HeaderInfo {
                title: Page::Cursos.title().to_string(),
                subtitle: format!("{} de {} cursos", stats.visibles, stats.total),
            },
            stats: Some(stats),
            search_bar: Some(SearchBarInfo {
                query: crud.search().to_string(),
                placeholder: "Buscar curso por nombre".to_string(),
            }),
            filter_panel,
            banners,
            empty_state: visible.is_empty().then(|| empty_state(loading, "cursos", !crud.search().is_empty())),
            table: Some(TableInfo {
                columns,
                rows,
                name_column: 1,
                status_column: Some(5),
            }),
            footer: FooterInfo {
                keybindings: footer(crud.modal().state(), confirm.is_some(), None, FOOTER_CURSOS),
            },
            modal,
            confirm,
            summary: None,
        }
    }

    fn reportes_viewmodel(&self) -> UIViewModel {
        let page = &self.reportes;
        let modal = page.modal();

        let lines = page.resumen_aplicado();
        let summary = SummaryInfo {
            title: "Filtros aplicados".to_string(),
            lines: if lines.is_empty() {
                vec!["Sin filtros aplicados.".to_string()]
            } else {
                lines
            },
        };

        let modal_info = modal.is_open().then(|| {
            let draft = modal.draft();
            let facultad = draft
                .facultad_id
                .and_then(|id| modal.facultades().iter().find(|f| f.id == id))
                .map_or_else(String::new, |f| f.nombre.clone());
            let escuela = draft
                .escuela_id
                .and_then(|id| modal.escuelas_disponibles().into_iter().find(|e| e.id == id))
                .map_or_else(String::new, |e| e.nombre.clone());
            let usuario = draft
                .tipo_usuario
                .and_then(|id| TIPOS_USUARIO.iter().find(|t| t.id == id))
                .map_or("", |t| t.nombre);
            let semestre = draft
                .semestre
                .as_deref()
                .and_then(|id| SEMESTRES.iter().find(|s| s.id == id))
                .map_or("", |s| s.nombre);

            ModalInfo {
                title: "Filtros del reporte".to_string(),
                subtitle: "Selecciona los criterios del reporte.".to_string(),
                errors: Vec::new(),
                fields: vec![
                    FieldInfo {
                        key: "facultad".to_string(),
                        label: "Facultad".to_string(),
                        value: facultad,
                        options: modal
                            .facultades()
                            .iter()
                            .map(|f| format!("{}={}", f.id, f.nombre))
                            .collect(),
                        disabled: None,
                    },
                    FieldInfo {
                        key: "escuela".to_string(),
                        label: "Escuela".to_string(),
                        value: escuela,
                        options: escuela_options(modal.escuelas_disponibles().into_iter()),
                        disabled: (!modal.escuela_habilitada())
                            .then(|| "Selecciona una facultad primero".to_string()),
                    },
                    FieldInfo {
                        key: "usuario".to_string(),
                        label: "Tipo de usuario".to_string(),
                        value: usuario.to_string(),
                        options: TIPOS_USUARIO.iter().map(|t| format!("{}={}", t.id, t.nombre)).collect(),
                        disabled: None,
                    },
                    FieldInfo {
                        key: "semestre".to_string(),
                        label: "Semestre".to_string(),
                        value: semestre.to_string(),
                        options: SEMESTRES.iter().map(|s| format!("{}={}", s.id, s.nombre)).collect(),
                        disabled: None,
                    },
                    FieldInfo {
                        key: "inicio".to_string(),
                        label: "Fecha inicio".to_string(),
                        value: draft.fecha_inicio.map(|d| d.to_string()).unwrap_or_default(),
                        options: vec!["AAAA-MM-DD".to_string()],
                        disabled: None,
                    },
                    FieldInfo {
                        key: "fin".to_string(),
                        label: "Fecha fin".to_string(),
                        value: draft.fecha_fin.map(|d| d.to_string()).unwrap_or_default(),
                        options: vec!["AAAA-MM-DD".to_string()],
                        disabled: None,
                    },
                ],
                summary: if modal.tiene_filtros() { modal.resumen() } else { Vec::new() },
                submit_label: "Aplicar".to_string(),
                submitting: false,
            }
        });

        UIViewModel {
            header: HeaderInfo {
                title: Page::Reportes.title().to_string(),
                subtitle: "Criterios para generar reportes de uso.".to_string(),
            },
            summary: Some(summary),
            footer: FooterInfo {
                keybindings: if modal.is_open() { FOOTER_REPORT_MODAL } else { FOOTER_REPORTES }.to_string(),
            },
            modal: modal_info,
            ..UIViewModel::default()
        }
    }
}

/// Display value and choices of one form input.
struct FieldChoice {
    value: String,
    options: Vec<String>,
    disabled: Option<String>,
}

impl FieldChoice {
    fn text(value: &str) -> Self {
        Self {
            value: value.to_string(),
            options: Vec::new(),
            disabled: None,
        }
    }
}

fn form_modal_info<V, F>(modal: &FormModal<V>, entity: &str, choice: F) -> ModalInfo
where
    V: Validate,
    F: Fn(V::Field, &str) -> FieldChoice,
{
    let state = modal.state();
    let (title, submit_label) = match state {
        ModalState::Edit { .. } | ModalState::Submitting { id: Some(_) } => (format!("Editar {entity}"), "Actualizar"),
        _ => (format!("Registrar {entity}"), "Registrar"),
    };

    let fields = V::fields()
        .iter()
        .map(|&field| {
            let FieldChoice { value, options, disabled } = choice(field, modal.values().get(field));
            FieldInfo {
                key: field_key::<V>(field),
                label: V::label(field).to_string(),
                value,
                options,
                disabled,
            }
        })
        .collect();

    ModalInfo {
        title,
        subtitle: String::new(),
        errors: modal.errors().to_vec(),
        fields,
        summary: Vec::new(),
        submit_label: submit_label.to_string(),
        submitting: matches!(state, ModalState::Submitting { .. }),
    }
}

/// Command key of a form field: the lowercase label, which every form parses.
fn field_key<V: FormValues>(field: V::Field) -> String {
    V::label(field).to_lowercase()
}

fn catalog_value(raw: &str, lookup: impl Fn(i64) -> Option<String>) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(lookup)
        .unwrap_or_else(|| raw.to_string())
}

fn escuela_options<'a>(escuelas: impl Iterator<Item = &'a Escuela>) -> Vec<String> {
    escuelas.map(|e| format!("{}={}", e.id, e.nombre)).collect()
}

const fn estado_label(activo: bool) -> &'static str {
    if activo {
        "Activo"
    } else {
        "Inactivo"
    }
}

const fn stats_info(stats: Stats, visibles: usize) -> StatsInfo {
    StatsInfo {
        total: stats.total,
        activos: stats.activos,
        inactivos: stats.inactivos,
        visibles,
    }
}

fn push_error(banners: &mut Vec<BannerInfo>, error: Option<&str>) {
    if let Some(text) = error {
        banners.push(BannerInfo {
            kind: StatusKind::Error,
            text: text.to_string(),
        });
    }
}

fn empty_state(loading: bool, entity: &str, searching: bool) -> EmptyState {
    if loading {
        return EmptyState {
            message: format!("Cargando {entity}..."),
            subtitle: String::new(),
        };
    }
    EmptyState {
        message: format!("No hay {entity} para mostrar."),
        subtitle: if searching {
            "Prueba con otro termino de busqueda.".to_string()
        } else {
            "Usa 'nuevo' para registrar uno.".to_string()
        },
    }
}

fn footer(state: ModalState, confirming: bool, panel: Option<&str>, default: &str) -> String {
    if confirming {
        FOOTER_CONFIRM
    } else if state.is_open() {
        FOOTER_FORM
    } else if let Some(panel) = panel {
        panel
    } else {
        default
    }
    .to_string()
}

/// Column widths for a terminal `cols` wide.
///
/// `fixed` holds one entry per column; zero marks a flexible column. The space
/// left after fixed columns and gaps is shared by the flexible columns in
/// proportion to `weights`, never below eight characters each.
fn split_widths(cols: usize, fixed: &[usize], weights: &[usize]) -> Vec<usize> {
    const MIN_FLEX: usize = 8;

    let used: usize = fixed.iter().sum::<usize>() + GAP * fixed.len().saturating_sub(1);
    let remaining = cols.saturating_sub(used);
    let total_weight: usize = weights.iter().sum::<usize>().max(1);

    let mut flex = weights.iter();
    fixed
        .iter()
        .map(|&width| {
            if width > 0 {
                return width;
            }
            let weight = flex.next().copied().unwrap_or(1);
            (remaining * weight / total_weight).max(MIN_FLEX)
        })
        .collect()
}
