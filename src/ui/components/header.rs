//! Header component: centered page title and a dim subtitle.

use crate::ui::helpers::pad;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, StatsInfo};
use std::fmt::Write as _;

fn centered(text: &str, cols: usize) -> String {
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;
    pad(&format!("{}{text}", " ".repeat(padding)), cols)
}

pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&centered(&header.title, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    if !header.subtitle.is_empty() {
        let _ = writeln!(
            out,
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            centered(&header.subtitle, cols).trim_end(),
            Theme::reset()
        );
    }
}

/// Counters line: `Total 12  Activos 10  Inactivos 2  Mostrando 4`.
pub fn render_stats(out: &mut String, stats: &StatsInfo, theme: &Theme) {
    let label = Theme::fg(&theme.colors.text_dim);
    let _ = writeln!(
        out,
        "{label}Total{r} {}  {label}Activos{r} {}{}{r}  {label}Inactivos{r} {}{}{r}  {label}Mostrando{r} {}",
        stats.total,
        Theme::fg(&theme.colors.active_fg),
        stats.activos,
        Theme::fg(&theme.colors.inactive_fg),
        stats.inactivos,
        stats.visibles,
        r = Theme::reset(),
    );
}
