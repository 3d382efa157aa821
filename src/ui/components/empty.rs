//! Empty state component: centered message under the table header.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::fmt::Write as _;

pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_padding = cols.saturating_sub(empty.message.chars().count()) / 2;
    let _ = writeln!(
        out,
        "\n{}{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        " ".repeat(msg_padding),
        empty.message,
        Theme::reset()
    );

    if !empty.subtitle.is_empty() {
        let sub_padding = cols.saturating_sub(empty.subtitle.chars().count()) / 2;
        let _ = writeln!(
            out,
            "{}{}{}{}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            " ".repeat(sub_padding),
            empty.subtitle,
            Theme::reset()
        );
    }
    out.push('\n');
}
