//! Filesystem locations of configuration, data and logs.
//!
//! Locations follow the XDG base directory variables, falling back to
//! `~/.config` and `~/.local/share` under `$HOME`.

use std::path::PathBuf;

/// Application directory name under the config and data roots.
pub const APP_DIR: &str = "horarios-admin";

fn home_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from)
}

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .unwrap_or_else(|| fallback.iter().fold(home_dir(), |path, part| path.join(part)))
}

/// `$XDG_CONFIG_HOME/horarios-admin` or `~/.config/horarios-admin`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR)
}

/// Default configuration file.
#[must_use]
pub fn get_config_file() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// `$XDG_DATA_HOME/horarios-admin` or `~/.local/share/horarios-admin`.
///
/// Holds the log file and the default offline dataset.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"]).join(APP_DIR)
}

/// Expands a leading `~` to the home directory.
///
/// # Example
///
/// ```rust
/// use horarios_admin::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/horarios.toml"), "/etc/horarios.toml");
/// assert!(!expand_tilde("~/temas/aula.toml").starts_with('~'));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home_dir().to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("temas/~/x"), "temas/~/x");
        assert!(expand_tilde("~").len() > 1 || expand_tilde("~") == ".");
    }

    #[test]
    fn dirs_end_with_app_name() {
        assert!(get_config_dir().ends_with(APP_DIR));
        assert!(get_data_dir().ends_with(APP_DIR));
        assert!(get_config_file().ends_with("horarios-admin/config.toml"));
    }
}
