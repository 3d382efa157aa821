//! Horarios Admin: a terminal console for the administrative screens of an
//! academic scheduling system.
//!
//! The console manages:
//! - Academic spaces (rooms, laboratories) with server-side filters
//! - Courses tied to a faculty, a school and a cycle, with client-side filters
//! - Report filter criteria with dependent faculty/school selects
//!
//! Records are listed, searched, created, edited and soft-deleted through a
//! REST backend, or through a JSON file backend when working offline.

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Console loop (main.rs)                             │  ← stdin commands
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Events → Actions
//! │  - Pages, form modals, report filters               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Validation    │
//! │ (ui/)         │   │ (store/)      │   │ (validation/) │
//! │ - Components  │   │ - Collections │   │ - Form rules  │
//! │ - Theming     │   │ - Catalogs    │   │ - Keystrokes  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Service Layer (service/)                           │  ← REST / fixtures
//! └─────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Filters, Infrastructure, Observability     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Pages, event handler and action runtime
//! - [`domain`]: Records, payloads, form values and errors
//! - [`filters`]: Search, counters and filter panels
//! - [`infrastructure`]: Configuration and data paths
//! - [`observability`]: Rotating file logging
//! - [`service`]: REST and fixture backends
//! - [`store`]: Entity and catalog stores
//! - [`ui`]: View models, components and themes
//! - [`validation`]: Form validators
//!
//! # Configuration
//!
//! Lowest to highest precedence:
//!
//! 1. Defaults ([`Config::default`])
//! 2. `~/.config/horarios-admin/config.toml` (or `--config <path>`)
//! 3. `HORARIOS_ADMIN_<KEY>` environment variables
//! 4. `--set key=value` arguments
//!
//! ```toml
//! espacios_base_url = "https://espacios.example.edu"
//! horarios_base_url = "https://horarios.example.edu"
//! timeout_secs = 15
//! theme = "catppuccin-latte"
//! trace_level = "horarios_admin=debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use horarios_admin::Config;
//! use std::collections::BTreeMap;
//!
//! let overrides = BTreeMap::from([("timeout_secs".to_string(), "5".to_string())]);
//! let config = Config::from_map(&overrides)?;
//! assert_eq!(config.timeout_secs, 5);
//! # Ok::<(), horarios_admin::AdminError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod filters;
pub mod infrastructure;
pub mod observability;
pub mod service;
pub mod store;
pub mod ui;
pub mod validation;

pub use app::{dispatch, handle_event, parse_command, Action, AppState, Event, Page};
pub use domain::{AdminError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Prefix of the environment variables read as configuration overrides.
pub const ENV_PREFIX: &str = "HORARIOS_ADMIN_";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the spaces backend (`/api/espacios`).
    pub espacios_base_url: String,

    /// Base URL of the scheduling backend (`/api/cursos`, catalogs).
    pub horarios_base_url: String,

    /// Per-request timeout.
    pub timeout_secs: u64,

    /// Built-in theme name.
    pub theme_name: Option<String>,

    /// Custom theme file. Wins over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            espacios_base_url: "http://localhost:8080".to_string(),
            horarios_base_url: "http://localhost:8081".to_string(),
            timeout_secs: 15,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// Configuration file contents. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    espacios_base_url: Option<String>,
    horarios_base_url: Option<String>,
    timeout_secs: Option<u64>,
    theme: Option<String>,
    theme_file: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Defaults overridden by `map`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Config`] for unknown keys or invalid values.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();
        config.apply_map(map)?;
        Ok(config)
    }

    /// Overrides fields from key/value pairs.
    ///
    /// Keys: `espacios_base_url`, `horarios_base_url`, `timeout_secs`,
    /// `theme`, `theme_file`, `trace_level`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Config`] for unknown keys or invalid values.
    pub fn apply_map(&mut self, map: &BTreeMap<String, String>) -> Result<()> {
        for (key, value) in map {
            let value = value.trim();
            match key.as_str() {
                "espacios_base_url" => self.espacios_base_url = value.to_string(),
                "horarios_base_url" => self.horarios_base_url = value.to_string(),
                "timeout_secs" => {
                    self.timeout_secs = value
                        .parse()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| AdminError::Config(format!("timeout_secs must be a positive integer, got '{value}'")))?;
                }
                "theme" => self.theme_name = Some(value.to_string()),
                "theme_file" => self.theme_file = Some(value.to_string()),
                "trace_level" => self.trace_level = Some(value.to_string()),
                other => return Err(AdminError::Config(format!("unknown configuration key '{other}'"))),
            }
        }
        Ok(())
    }

    /// Defaults overridden by the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read and
    /// [`AdminError::Config`] if it is not valid configuration TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| AdminError::Config(format!("{}: {e}", path.display())))?;

        let mut config = Self::default();
        if let Some(url) = file.espacios_base_url {
            config.espacios_base_url = url;
        }
        if let Some(url) = file.horarios_base_url {
            config.horarios_base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            if secs == 0 {
                return Err(AdminError::Config(format!(
                    "{}: timeout_secs must be a positive integer",
                    path.display()
                )));
            }
            config.timeout_secs = secs;
        }
        config.theme_name = file.theme;
        config.theme_file = file.theme_file;
        config.trace_level = file.trace_level;
        Ok(config)
    }

    /// Resolves the full configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or an override
    /// is invalid.
    pub fn load(path: Option<&Path>, overrides: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = infrastructure::get_config_file();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_map(overrides)?;
        tracing::debug!(config = ?config, "configuration resolved");
        Ok(config)
    }

    /// Overrides taken from `HORARIOS_ADMIN_<KEY>` variables, keys lowercased.
    #[must_use]
    pub fn env_overrides<I>(vars: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        vars.into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_lowercase(), value))
            })
            .collect()
    }

    /// Custom theme path with `~` expanded.
    #[must_use]
    pub fn theme_path(&self) -> Option<PathBuf> {
        self.theme_file
            .as_deref()
            .map(|file| PathBuf::from(infrastructure::expand_tilde(file)))
    }
}

/// Resolves the configured theme, falling back to the default on errors.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    let path = config.theme_path();
    Theme::resolve(config.theme_name.as_deref(), path.as_deref()).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to load theme, using default");
        Theme::default()
    })
}
