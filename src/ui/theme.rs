//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML color palettes. Two are built in; custom ones are loaded
//! from a file named in the configuration.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! success_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! active_fg = "#a6e3a1"
//! inactive_fg = "#7f849c"
//! label_fg = "#89dceb"
//! modal_border = "#b4befe"
//! ```
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! let styled = format!("{}Activo{}", Theme::fg(&theme.colors.active_fg), Theme::reset());
//! assert!(styled.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (e.g. `"#cdd6f4"`) of every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page title.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Subtitles, hints, footer.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Success banner.
    pub success_fg: String,
    /// Error banner and inline form errors.
    pub error_fg: String,

    /// "Activo" status cell.
    pub active_fg: String,
    /// "Inactivo" status cell and disabled inputs.
    pub inactive_fg: String,

    /// Field labels of forms and filter panels.
    pub label_fg: String,
    pub modal_border: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const BUILTIN: [&'static str; 2] = ["catppuccin-mocha", "catppuccin-latte"];

    /// Loads a built-in theme by name. `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Theme`] if the file cannot be read or does not
    /// describe a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| AdminError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents).map_err(|e| AdminError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: a custom file wins over a built-in name.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Theme`] for unreadable files and unknown names.
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(file) = file {
            return Self::from_file(file);
        }
        match name {
            Some(name) => Self::from_name(name).ok_or_else(|| {
                AdminError::Theme(format!(
                    "unknown theme '{name}' (built-in: {})",
                    Self::BUILTIN.join(", ")
                ))
            }),
            None => Ok(Self::default()),
        }
    }

    /// `(r, g, b)` of a hex color; white when malformed.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn builtins_parse() {
        for name in Theme::BUILTIN {
            assert_eq!(Theme::from_name(name).map(|t| t.name), Some(name.to_string()));
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#a6e3a1"), "\u{1b}[38;2;166;227;161m");
        assert_eq!(Theme::bg("nope"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn custom_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../../themes/catppuccin-latte.toml").replace("catppuccin-latte", "aula");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::resolve(Some("catppuccin-mocha"), Some(file.path())).unwrap();
        assert_eq!(theme.name, "aula");
    }

    #[test]
    fn incomplete_palette_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"x\"\n[colors]\nheader_fg = \"#000000\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(AdminError::Theme(_))));
        assert!(matches!(Theme::resolve(Some("neon"), None), Err(AdminError::Theme(_))));
    }
}
