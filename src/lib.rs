//! Bookrack: a Zellij plugin for browsing a personal book catalog.
//!
//! Bookrack renders a reading library served as static JSON (a status map,
//! an ordered index, and one file per book) as a navigable card grid inside
//! a Zellij pane, with per-status filtering, aggregate counters, and a
//! detail overlay per book.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and action dispatch               │
//! │  - Filtering, selection, stats                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                         │
//! ┌───────────────────┐   ┌───────────────────┐
//! │ UI Layer (ui/)    │   │ Loader (loader/)  │
//! │ - Rendering       │   │ - Fetch fan-out   │
//! │ - Theming         │   │ - Model assembly  │
//! │ - Components      │   │ - URL building    │
//! └───────────────────┘   └───────────────────┘
//!         │                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Book/status models and errors (domain/)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/bookrack.wasm" {
//!         base_url "http://127.0.0.1:8000/"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Load Flow
//!
//! 1. On permission grant, the status map and library index are fetched
//!    concurrently via `web_request`.
//! 2. When the index arrives, one request per book is issued in a single
//!    batch; responses join asynchronously through `WebRequestResult`
//!    events.
//! 3. A failing book is dropped with a warning; a failing status map or
//!    index aborts the load with a generic error screen.
//! 4. Once everything resolves the merged model is installed, stats are
//!    computed, and the grid becomes interactive (j/k, 1-4, Enter, Esc).

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod loader;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppEvent, AppState, LoadPhase, ModalState, StatusFilter};
pub use domain::{BookRecord, BookrackError, LibraryModel, Result, StatusRecord};
pub use loader::{BaseUrl, LoadTracker, ResourceKind};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default catalog origin when `base_url` is not configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the catalog's static JSON is served from.
    ///
    /// Resources are resolved as `data/status.json`, `data/library.json`
    /// and `data/books/<id>.json` under this base.
    pub base_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over
    /// `theme_name`; a leading `~` resolves against the `/host` mount.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookrack::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("base_url".to_string(), "http://books.local".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.base_url, "http://books.local");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let base_url = config
            .get("base_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default) and returns an `AppState` in the loading phase; the caller is
/// responsible for issuing the initial fetches once web access is granted.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookrack plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_when_map_is_empty() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("base_url".to_string(), "   ".to_string());
        let config = Config::from_zellij(&map);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn initialize_resolves_builtin_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");

        // Unknown names fall back rather than failing initialization.
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_loads_theme_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let toml = include_str!("../themes/catppuccin-frappe.toml")
            .replace("catppuccin-frappe", "my-custom");
        std::fs::write(&path, toml).unwrap();

        let config = Config {
            theme_file: Some(path.to_str().unwrap().to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "my-custom");
    }
}
