//! Status and error banners.

use crate::app::modes::StatusKind;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;
use std::fmt::Write as _;

pub fn render_banners(out: &mut String, banners: &[BannerInfo], theme: &Theme) {
    for banner in banners {
        let (marker, color) = match banner.kind {
            StatusKind::Success => ("✔", &theme.colors.success_fg),
            StatusKind::Error => ("✘", &theme.colors.error_fg),
        };
        let _ = writeln!(out, "{}{marker} {}{}", Theme::fg(color), banner.text, Theme::reset());
    }
}

/// Delete confirmation question.
pub fn render_confirm(out: &mut String, question: &str, theme: &Theme) {
    let _ = writeln!(
        out,
        "{}{}{question}{} {}[si/no]{}",
        Theme::bold(),
        Theme::fg(&theme.colors.error_fg),
        Theme::reset(),
        Theme::fg(&theme.colors.text_dim),
        Theme::reset()
    );
}
