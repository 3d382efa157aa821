//! Table component: column headers and one line per record.
//!
//! Cells arrive already truncated; this module pads them to their column
//! width, highlights search matches in the name column and colors the status
//! column by activity.

use crate::ui::helpers::{self, pad};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TableInfo, TableRow};

const GAP: &str = "  ";

pub fn render_table_headers(out: &mut String, table: &TableInfo, theme: &Theme) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    let titles: Vec<String> = table
        .columns
        .iter()
        .map(|column| pad(&column.title.to_uppercase(), column.width))
        .collect();
    out.push_str(titles.join(GAP).trim_end());
    out.push_str(Theme::reset());
    out.push('\n');
}

pub fn render_table_rows(out: &mut String, table: &TableInfo, theme: &Theme) {
    for row in &table.rows {
        render_table_row(out, table, row, theme);
    }
}

fn render_table_row(out: &mut String, table: &TableInfo, row: &TableRow, theme: &Theme) {
    let base = if row.is_active {
        Theme::fg(&theme.colors.text_normal)
    } else {
        Theme::fg(&theme.colors.inactive_fg)
    };
    out.push_str(&base);

    for (index, (cell, column)) in row.cells.iter().zip(&table.columns).enumerate() {
        if index > 0 {
            out.push_str(GAP);
        }
        let padding = column.width.saturating_sub(cell.chars().count());

        if index == table.name_column && !row.highlight_ranges.is_empty() {
            helpers::render_highlighted_text(out, cell, &row.highlight_ranges, theme, &base);
        } else if Some(index) == table.status_column {
            let color = if row.is_active {
                &theme.colors.active_fg
            } else {
                &theme.colors.inactive_fg
            };
            out.push_str(&Theme::fg(color));
            out.push_str(cell);
            out.push_str(&base);
        } else {
            out.push_str(cell);
        }

        if index + 1 < row.cells.len() {
            out.push_str(&" ".repeat(padding));
        }
    }

    out.push_str(Theme::reset());
    out.push('\n');
}
