//! Labelled inputs shared by filter panels and modals.

use crate::ui::helpers::{pad, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldInfo, FilterPanelInfo};
use std::fmt::Write as _;

const LABEL_WIDTH: usize = 16;
const MAX_OPTIONS_SHOWN: usize = 8;

/// One input line, plus a dim line listing its choices.
pub fn render_field(out: &mut String, field: &FieldInfo, theme: &Theme, indent: &str, cols: usize) {
    let label = pad(&format!("{}:", field.label), LABEL_WIDTH);

    if let Some(reason) = &field.disabled {
        let _ = writeln!(
            out,
            "{indent}{}{label}({reason}){}",
            Theme::fg(&theme.colors.inactive_fg),
            Theme::reset()
        );
        return;
    }

    let value = if field.value.is_empty() { "-" } else { field.value.as_str() };
    let _ = writeln!(
        out,
        "{indent}{}{label}{}{value}{} {}[{}]{}",
        Theme::fg(&theme.colors.label_fg),
        Theme::fg(&theme.colors.text_normal),
        Theme::reset(),
        Theme::fg(&theme.colors.text_dim),
        field.key,
        Theme::reset()
    );

    if !field.options.is_empty() {
        let hidden = field.options.len().saturating_sub(MAX_OPTIONS_SHOWN);
        let more = format!("+{hidden}");
        let mut shown: Vec<&str> = field.options.iter().take(MAX_OPTIONS_SHOWN).map(String::as_str).collect();
        if hidden > 0 {
            shown.push(&more);
        }
        let line = truncate(&shown.join(", "), cols.saturating_sub(indent.len() + LABEL_WIDTH));
        let _ = writeln!(
            out,
            "{indent}{}{}{line}{}",
            " ".repeat(LABEL_WIDTH),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
    }
}

/// Filter panel: every criterion and whether "aplicar" is enabled.
pub fn render_filter_panel(out: &mut String, panel: &FilterPanelInfo, theme: &Theme, cols: usize) {
    let _ = writeln!(out, "{}{}Filtros{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    for field in &panel.fields {
        render_field(out, field, theme, "  ", cols);
    }
    if !panel.hint.is_empty() {
        let _ = writeln!(out, "  {}{}{}", Theme::fg(&theme.colors.text_dim), panel.hint, Theme::reset());
    }
    let state = if panel.can_apply { &theme.colors.active_fg } else { &theme.colors.inactive_fg };
    let _ = writeln!(out, "  {}[aplicar]{}", Theme::fg(state), Theme::reset());
}
