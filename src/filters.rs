//! Search, filter panels and derived counters.
//!
//! Search is always local: a case-insensitive substring match over an
//! entity's display name, independent of whatever the server filtered.
//! Structural filters differ per page. Spaces re-fetch with query parameters
//! ([`EspacioFilterPanel::to_filters`]); courses filter the loaded list
//! in memory ([`CursoFilterBar::matches`]).

use crate::domain::catalog::escuela_pertenece;
use crate::domain::{Curso, Entity, Escuela, EspacioFilters, EstadoFiltro};

/// Longest search query the spaces page accepts.
pub const SEARCH_MAX_CHARS: usize = 50;

/// Truncates a search input to [`SEARCH_MAX_CHARS`] characters.
#[must_use]
pub fn clamp_search(input: &str) -> String {
    input.chars().take(SEARCH_MAX_CHARS).collect()
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte ranges `(start, end)` of every non-overlapping case-insensitive
/// occurrence of `query` in `text`.
///
/// The query is trimmed first; a blank query yields no ranges.
///
/// ```rust
/// use horarios_admin::filters::match_ranges;
///
/// assert_eq!(match_ranges("Lab 101 - lab B", "LAB"), vec![(0, 3), (10, 13)]);
/// assert!(match_ranges("Aula", "  ").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut next_allowed = 0;
    for (start, _) in text.char_indices() {
        if start < next_allowed {
            continue;
        }

        let mut end = start;
        let mut candidate = text[start..].chars();
        let matched = needle.iter().all(|&n| {
            candidate.next().is_some_and(|c| {
                end += c.len_utf8();
                chars_eq_ignore_case(c, n)
            })
        });

        if matched {
            ranges.push((start, end));
            next_allowed = end;
        }
    }
    ranges
}

/// Whether `text` contains `query`, ignoring case. A blank query matches everything.
#[must_use]
pub fn matches_search(text: &str, query: &str) -> bool {
    query.trim().is_empty() || !match_ranges(text, query).is_empty()
}

/// Entities whose display name contains `query`.
#[must_use]
pub fn search<'a, E: Entity>(items: &'a [E], query: &str) -> Vec<&'a E> {
    items
        .iter()
        .filter(|item| matches_search(item.display_name(), query))
        .collect()
}

/// Totals shown above each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub activos: usize,
    pub inactivos: usize,
}

impl Stats {
    /// Counts a loaded collection (not the searched view).
    #[must_use]
    pub fn of<E: Entity>(items: &[E]) -> Self {
        let activos = items.iter().filter(|item| item.is_active()).count();
        Self {
            total: items.len(),
            activos,
            inactivos: items.len() - activos,
        }
    }
}

/// Working values of the spaces filter panel.
///
/// The panel holds raw selections; nothing is sent until it is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EspacioFilterPanel {
    pub estado: EstadoFiltro,
    pub escuela_id: String,
    pub tipo: String,
}

impl EspacioFilterPanel {
    /// Whether any criterion differs from "everything". Gates the apply action.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.estado != EstadoFiltro::Todos
            || !self.escuela_id.trim().is_empty()
            || !self.tipo.trim().is_empty()
    }

    /// Query filters for the next load.
    ///
    /// A school id that is not a number is dropped rather than sent.
    #[must_use]
    pub fn to_filters(&self) -> EspacioFilters {
        let estado = match self.estado {
            EstadoFiltro::Todos => None,
            EstadoFiltro::Activos => Some(crate::domain::espacio::ESTADO_ACTIVO),
            EstadoFiltro::Inactivos => Some(crate::domain::espacio::ESTADO_INACTIVO),
        };
        let tipo = self.tipo.trim();

        EspacioFilters {
            estado,
            escuela_id: self.escuela_id.trim().parse().ok(),
            tipo: (!tipo.is_empty()).then(|| tipo.to_string()),
        }
    }

    /// Back to "everything".
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Client-side faculty and school filter of the courses table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursoFilterBar {
    facultad: Option<i64>,
    escuela: Option<i64>,
}

impl CursoFilterBar {
    #[must_use]
    pub const fn facultad(&self) -> Option<i64> {
        self.facultad
    }

    #[must_use]
    pub const fn escuela(&self) -> Option<i64> {
        self.escuela
    }

    /// Selects a faculty. A selected school that does not belong to it is
    /// cleared; without a loaded catalog the school is kept.
    pub fn set_facultad(&mut self, facultad: Option<i64>, escuelas: &[Escuela]) {
        self.facultad = facultad;
        if let (Some(facultad_id), Some(escuela_id)) = (facultad, self.escuela) {
            if !escuelas.is_empty() && !escuela_pertenece(escuelas, escuela_id, facultad_id) {
                tracing::debug!(escuela_id, facultad_id, "clearing school outside faculty");
                self.escuela = None;
            }
        }
    }

    pub fn set_escuela(&mut self, escuela: Option<i64>) {
        self.escuela = escuela;
    }

    #[must_use]
    pub const fn has_active_filters(&self) -> bool {
        self.facultad.is_some() || self.escuela.is_some()
    }

    #[must_use]
    pub fn matches(&self, curso: &Curso) -> bool {
        self.facultad.map_or(true, |id| curso.facultad == id)
            && self.escuela.map_or(true, |id| curso.escuela == id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escuela(id: i64, facultad_id: i64) -> Escuela {
        Escuela {
            id,
            nombre: format!("Escuela {id}"),
            facultad_id,
        }
    }

    #[test]
    fn search_ignores_case_and_surrounding_space() {
        assert!(matches_search("Laboratorio de Redes", "  REDES "));
        assert!(matches_search("Aula", ""));
        assert!(!matches_search("Aula", "lab"));
    }

    #[test]
    fn ranges_handle_multibyte_text() {
        let text = "Diseño y DISEÑO";
        let ranges = match_ranges(text, "diseño");
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].0..ranges[0].1], "Diseño");
        assert_eq!(&text[ranges[1].0..ranges[1].1], "DISEÑO");
    }

    #[test]
    fn ranges_do_not_overlap() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn search_input_is_capped() {
        let long = "x".repeat(80);
        assert_eq!(clamp_search(&long).chars().count(), SEARCH_MAX_CHARS);
    }

    #[test]
    fn panel_builds_query_filters() {
        let panel = EspacioFilterPanel {
            estado: EstadoFiltro::Inactivos,
            escuela_id: " 4 ".to_string(),
            tipo: String::new(),
        };

        assert!(panel.has_active_filters());
        assert_eq!(
            panel.to_filters(),
            EspacioFilters {
                estado: Some(0),
                escuela_id: Some(4),
                tipo: None,
            }
        );
        assert!(!EspacioFilterPanel::default().has_active_filters());
    }

    #[test]
    fn faculty_change_clears_foreign_school() {
        let escuelas = vec![escuela(1, 1), escuela(2, 1), escuela(3, 2)];
        let mut bar = CursoFilterBar::default();

        bar.set_escuela(Some(2));
        bar.set_facultad(Some(1), &escuelas);
        assert_eq!(bar.escuela(), Some(2));

        bar.set_facultad(Some(2), &escuelas);
        assert_eq!(bar.escuela(), None);
        assert_eq!(bar.facultad(), Some(2));
    }

    #[test]
    fn faculty_change_keeps_school_without_catalog() {
        let mut bar = CursoFilterBar::default();

        bar.set_escuela(Some(7));
        bar.set_facultad(Some(1), &[]);

        assert_eq!(bar.escuela(), Some(7));
        assert_eq!(bar.facultad(), Some(1));
    }
}
