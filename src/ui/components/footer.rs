//! Footer component: centered command hints.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::fmt::Write as _;

pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text = truncate(&footer.keybindings, cols);
    let padding = cols.saturating_sub(help_text.chars().count()) / 2;

    let _ = writeln!(
        out,
        "{}{}{help_text}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(padding),
        Theme::reset()
    );
}
