//! Shared rendering utilities.
//!
//! Widths are counted in characters, not bytes, so accented names line up.
//! Highlight ranges are byte ranges produced by
//! [`match_ranges`](crate::filters::match_ranges) and always fall on
//! character boundaries.
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::ui::helpers::{pad, truncate};
//!
//! assert_eq!(truncate("Laboratorio de Redes", 8), "Laborat…");
//! assert_eq!(pad("Aula", 6), "Aula  ");
//! ```

use crate::ui::theme::Theme;
use std::fmt::Write as _;

/// Shortens `text` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Right-pads `text` with spaces to `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Writes `text` with the byte `ranges` highlighted, then restores `base`.
///
/// Ranges must be sorted, non-overlapping and on character boundaries;
/// anything out of bounds is skipped.
pub fn render_highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme, base: &str) {
    let mut cursor = 0;
    for &(start, end) in ranges {
        let (Some(before), Some(matched)) = (text.get(cursor..start), text.get(start..end)) else {
            continue;
        };
        out.push_str(before);
        let _ = write!(
            out,
            "{}{}{matched}{}{base}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
        );
        cursor = end;
    }
    out.push_str(text.get(cursor..).unwrap_or_default());
}

/// Removes ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end at the first letter.
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Educación", 9), "Educación");
        assert_eq!(truncate("Educación", 5), "Educ…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn highlight_wraps_matches() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Aula Magna", &[(5, 10)], &theme, "");

        assert!(out.starts_with("Aula "));
        assert!(out.contains(&format!("{}Magna", Theme::bg(&theme.colors.match_highlight_bg))));
        assert_eq!(strip_ansi(&out), "Aula Magna");
    }

    #[test]
    fn out_of_bounds_ranges_are_skipped() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Aula", &[(2, 40)], &theme, "");
        assert_eq!(out, "Aula");
    }
}
