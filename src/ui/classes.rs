//! CSS class vocabulary used in rendered markup.
//!
//! Every fixed class name the renderer writes comes from a [`Classes`] value.
//! The defaults reproduce the Islandora object templates. A site can override
//! any subset of them with a TOML file.
//!
//! # TOML Format
//!
//! ```toml
//! grid_container = "islandora-objects-grid"
//! list_container = "islandora-objects-list"
//! object = "islandora-object"
//! list_item = "islandora-object-list-item"
//! clearfix = "clearfix"
//! first = "first"
//! ```
//!
//! Keys left out of the file keep their default value.
//!
//! # Example
//!
//! ```rust
//! use islandora_objects::Classes;
//!
//! let classes = Classes::default();
//! assert_eq!(classes.thumb(), "islandora-object-thumb");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{IslandoraError, Result};

/// Class applied to the outer container in grid mode.
pub const DEFAULT_GRID_CONTAINER: &str = "islandora-objects-grid";

/// Class applied to the outer container in list mode.
pub const DEFAULT_LIST_CONTAINER: &str = "islandora-objects-list";

/// Base class for a single object.
pub const DEFAULT_OBJECT: &str = "islandora-object";

/// Class for the wrapper around each list entry.
pub const DEFAULT_LIST_ITEM: &str = "islandora-object-list-item";

/// Float-clearing utility class.
pub const DEFAULT_CLEARFIX: &str = "clearfix";

/// Positional marker for the first list entry.
pub const DEFAULT_FIRST: &str = "first";

/// Class names written into rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Classes {
    /// Grid container class, followed by `clearfix`.
    pub grid_container: String,
    /// List container class.
    pub list_container: String,
    /// Object base class. Also the stem of the thumb and caption classes.
    pub object: String,
    /// List entry wrapper class, followed by `clearfix`.
    pub list_item: String,
    /// Float-clearing class added to the grid container and each list entry.
    pub clearfix: String,
    /// Appended to the first list entry's description class with no separator.
    pub first: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            grid_container: DEFAULT_GRID_CONTAINER.to_string(),
            list_container: DEFAULT_LIST_CONTAINER.to_string(),
            object: DEFAULT_OBJECT.to_string(),
            list_item: DEFAULT_LIST_ITEM.to_string(),
            clearfix: DEFAULT_CLEARFIX.to_string(),
            first: DEFAULT_FIRST.to_string(),
        }
    }
}

impl Classes {
    /// Loads a class vocabulary from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`IslandoraError::Classes`] if the file cannot be read or the
    /// TOML content cannot be parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use islandora_objects::Classes;
    ///
    /// let classes = Classes::from_file("/etc/islandora/classes.toml")?;
    /// # Ok::<(), islandora_objects::IslandoraError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IslandoraError::Classes(format!("Failed to read classes file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Parses a class vocabulary from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`IslandoraError::Classes`] on invalid TOML or type mismatches.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| IslandoraError::Classes(format!("Failed to parse classes TOML: {e}")))
    }

    /// Class of the thumbnail term in grid mode (`{object}-thumb`).
    #[must_use]
    pub fn thumb(&self) -> String {
        format!("{}-thumb", self.object)
    }

    /// Class of the caption description in grid mode (`{object}-caption`).
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{}-caption", self.object)
    }
}
