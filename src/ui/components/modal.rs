//! Modal component: a framed dialog with inline errors, inputs and summary.

use super::fields::render_field;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ModalInfo, SummaryInfo};
use std::fmt::Write as _;

const MODAL_MARGIN: usize = 2;

pub fn render_modal(out: &mut String, modal: &ModalInfo, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(MODAL_MARGIN * 2).max(20);
    let border = Theme::fg(&theme.colors.modal_border);
    let margin = " ".repeat(MODAL_MARGIN);
    let indent = format!("{margin}│ ");

    let title = format!(" {} ", modal.title);
    let rule = width.saturating_sub(title.chars().count() + 3);
    let _ = writeln!(
        out,
        "{margin}{border}┌─{}{title}{border}{}┐{}",
        Theme::bold(),
        "─".repeat(rule),
        Theme::reset()
    );
    if !modal.subtitle.is_empty() {
        let _ = writeln!(out, "{border}{indent}{}{}{}", Theme::fg(&theme.colors.text_dim), modal.subtitle, Theme::reset());
    }

    for error in &modal.errors {
        let _ = writeln!(out, "{border}{indent}{}• {error}{}", Theme::fg(&theme.colors.error_fg), Theme::reset());
    }

    for field in &modal.fields {
        out.push_str(&border);
        render_field(out, field, theme, &indent, width);
    }

    if !modal.summary.is_empty() {
        let _ = writeln!(out, "{border}{indent}{}Resumen:{}", Theme::fg(&theme.colors.label_fg), Theme::reset());
        for line in &modal.summary {
            let _ = writeln!(out, "{border}{indent}  {}{line}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        }
    }

    let action = if modal.submitting {
        format!("{}Guardando...{}", Theme::fg(&theme.colors.text_dim), Theme::reset())
    } else {
        format!("{}[{}]{}", Theme::fg(&theme.colors.active_fg), modal.submit_label, Theme::reset())
    };
    let _ = writeln!(out, "{border}{indent}{action}");
    let _ = writeln!(out, "{margin}{border}└{}┘{}", "─".repeat(width.saturating_sub(2)), Theme::reset());
}

/// A titled criteria list.
pub fn render_summary(out: &mut String, summary: &SummaryInfo, theme: &Theme) {
    let _ = writeln!(
        out,
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.label_fg),
        summary.title,
        Theme::reset()
    );
    for line in &summary.lines {
        let _ = writeln!(out, "  {}{line}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
    }
}
