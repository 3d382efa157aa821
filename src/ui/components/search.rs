//! Search bar component: a framed one-line input.

use crate::ui::helpers::{pad, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;
use std::fmt::Write as _;

const SEARCH_BOX_MARGIN: usize = 2;

pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let _ = writeln!(out, "{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let (text, color) = if search.query.is_empty() {
        (format!(" Buscar: {}", search.placeholder), Theme::fg(&theme.colors.text_dim))
    } else {
        (format!(" Buscar: {}", search.query), Theme::fg(&theme.colors.text_normal))
    };
    let text = pad(&truncate(&text, inner_width), inner_width);
    let _ = writeln!(out, "{margin}{border}│{color}{text}{border}│{}", Theme::reset());

    let _ = writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}
