//! HTML rendering layer.
//!
//! This module turns object records into an HTML fragment in one of two
//! layouts. It has no I/O and keeps no state: every call is a single pass over
//! its input.
//!
//! # Architecture
//!
//! ```text
//! &[ObjectRecord] → compute_viewmodel → ObjectsViewModel → render_viewmodel → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display mode and validated, display-ready items
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Grid and list layout renderers, backed by askama templates
//! - [`classes`]: CSS class vocabulary with TOML overrides
//!
//! # Example
//!
//! ```rust
//! use islandora_objects::ui::{render, DisplayMode};
//! use islandora_objects::ObjectRecord;
//!
//! let records = vec![ObjectRecord::grid("book", "<img/>", "A Book")];
//! let html = render(DisplayMode::Grid, &records)?;
//! assert!(html.starts_with("<div class=\"islandora-objects-grid clearfix\">"));
//! # Ok::<(), islandora_objects::IslandoraError>(())
//! ```

pub mod viewmodel;
pub mod renderer;
pub mod components;
pub mod classes;

pub use viewmodel::{compute_viewmodel, DisplayMode, GridItem, ListItem, ObjectsViewModel};
pub use renderer::{render, render_viewmodel, render_with_classes};
pub use classes::Classes;
