//! Islandora Objects: HTML rendering for collections of repository objects.
//!
//! This crate renders a sequence of object records, already prepared by the
//! surrounding content system, as an HTML fragment:
//! - **Grid**: thumbnails with captions
//! - **List**: images with bold links and an optional `DC` description
//!
//! Record markup (thumbnails, titles, images, links, descriptions) is trusted
//! and interpolated verbatim.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← JSON in, HTML out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - View model computation + validation              │
//! │  - Grid / list components                           │
//! │  - Class vocabulary                                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Object records, descriptive metadata             │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Object records and errors
//! - [`ui`]: View models, renderer and layout components
//! - [`observability`]: `tracing-subscriber` setup
//!
//! # Configuration
//!
//! A host passes string options, e.g. from its own settings store:
//!
//! ```text
//! mode         = "list"
//! classes_file = "/etc/islandora/classes.toml"
//! trace_level  = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use islandora_objects::{initialize, render_with_classes, Config, ObjectRecord};
//!
//! let mut options = BTreeMap::new();
//! options.insert("mode".to_string(), "list".to_string());
//!
//! let config = Config::from_map(&options);
//! let classes = initialize(&config);
//!
//! let records = vec![ObjectRecord::list("foo", "<img/>", "Title")];
//! let html = render_with_classes(config.mode, &records, &classes)?;
//! assert!(html.starts_with("<div class=\"islandora-objects-list\">"));
//! # Ok::<(), islandora_objects::IslandoraError>(())
//! ```

pub mod domain;
pub mod ui;

pub mod observability;

pub use domain::{
    load_records, parse_records, Description, DescriptiveMetadata, IslandoraError, ObjectRecord,
    Result,
};
pub use ui::{render, render_with_classes, Classes, DisplayMode};

use std::collections::BTreeMap;

/// Rendering configuration parsed from string options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Layout to render. Default: grid.
    pub mode: DisplayMode,

    /// Path to a TOML class vocabulary. See [`ui::classes`] for format.
    pub classes_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `mode`: `"grid"` / `"list"` (case-insensitive), grid on anything else
    /// - `classes_file`: String → `Option<String>` (empty values ignored)
    /// - `trace_level`: String → `Option<String>` (empty values ignored)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use islandora_objects::{Config, DisplayMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("mode".to_string(), "List".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.mode, DisplayMode::List);
    /// assert!(config.classes_file.is_none());
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let mode = config
            .get("mode")
            .map(|s| {
                s.parse::<DisplayMode>().unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "falling back to grid mode");
                    DisplayMode::Grid
                })
            })
            .unwrap_or_default();

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            mode,
            classes_file: non_empty("classes_file"),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// Resolves the class vocabulary for a configuration.
///
/// Loads `classes_file` when set. A file that cannot be loaded is logged and
/// the default vocabulary is used instead.
///
/// # Example
///
/// ```rust
/// use islandora_objects::{initialize, Classes, Config};
///
/// let classes = initialize(&Config::default());
/// assert_eq!(classes, Classes::default());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> Classes {
    tracing::debug!(mode = %config.mode, "initializing renderer");

    load_classes(config).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to load classes from file, using default");
        Classes::default()
    })
}

/// Loads the class vocabulary for a configuration without falling back.
///
/// Returns the defaults when no `classes_file` is set.
///
/// # Errors
///
/// Returns [`IslandoraError::Classes`] if `classes_file` is set but cannot be
/// read or parsed.
pub fn load_classes(config: &Config) -> Result<Classes> {
    match &config.classes_file {
        Some(classes_file) => Classes::from_file(classes_file),
        None => Ok(Classes::default()),
    }
}
