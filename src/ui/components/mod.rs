//! Composable UI component renderers.
//!
//! Each component appends complete lines to an output buffer. The console is
//! line-oriented, so components render top to bottom in a fixed order and
//! never position the cursor.
//!
//! # Components
//!
//! - [`header`]: Page title, subtitle and counters
//! - [`banner`]: Status banners and the delete confirmation
//! - [`search`]: Search input box
//! - [`fields`]: Filter panel and labelled inputs
//! - [`table`]: Record table with highlights
//! - [`empty`]: Empty state message
//! - [`modal`]: Form and report modals, criteria summary
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! header · stats · ─── · banners · search · filters · table | empty
//!        · summary · modal · confirmation · ─── · footer
//! ```

mod banner;
mod empty;
mod fields;
mod footer;
mod header;
mod modal;
mod search;
mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::fmt::Write as _;

fn render_border(out: &mut String, color: &str, cols: usize) {
    let _ = writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
}

/// Renders every section of `vm` in layout order.
pub fn render_page(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    header::render_header(out, &vm.header, theme, cols);
    if let Some(stats) = &vm.stats {
        header::render_stats(out, stats, theme);
    }
    render_border(out, &theme.colors.border, cols);

    banner::render_banners(out, &vm.banners, theme);

    if let Some(search) = &vm.search_bar {
        search::render_search_bar(out, search, theme, cols);
    }
    if let Some(panel) = &vm.filter_panel {
        fields::render_filter_panel(out, panel, theme, cols);
    }

    if let Some(table) = &vm.table {
        table::render_table_headers(out, table, theme);
        match &vm.empty_state {
            Some(empty) => empty::render_empty_state(out, empty, theme, cols),
            None => table::render_table_rows(out, table, theme),
        }
    } else if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(out, empty, theme, cols);
    }

    if let Some(summary) = &vm.summary {
        modal::render_summary(out, summary, theme);
    }
    if let Some(dialog) = &vm.modal {
        modal::render_modal(out, dialog, theme, cols);
    }
    if let Some(question) = &vm.confirm {
        banner::render_confirm(out, question, theme);
    }

    render_border(out, &theme.colors.border, cols);
    footer::render_footer(out, &vm.footer, theme, cols);
}
