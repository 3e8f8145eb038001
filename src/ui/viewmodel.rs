//! View model types representing renderable object collections.
//!
//! This module turns input [`ObjectRecord`]s into display-ready items for one
//! [`DisplayMode`]. All validation happens here: a computed view model always
//! has every field its mode needs, so rendering it cannot fail.
//!
//! # Architecture
//!
//! ```text
//! &[ObjectRecord] + DisplayMode → compute_viewmodel → ObjectsViewModel → render
//! ```
//!
//! # Example
//!
//! ```rust
//! use islandora_objects::ui::{compute_viewmodel, DisplayMode, ObjectsViewModel};
//! use islandora_objects::ObjectRecord;
//!
//! let records = vec![ObjectRecord::list("foo", "<img/>", "Title")];
//! let vm = compute_viewmodel(DisplayMode::List, &records)?;
//! match vm {
//!     ObjectsViewModel::List(items) => assert!(items[0].is_first),
//!     ObjectsViewModel::Grid(_) => unreachable!(),
//! }
//! # Ok::<(), islandora_objects::IslandoraError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Description, IslandoraError, ObjectRecord, Result};

/// Layout used to render a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Thumbnails with captions.
    #[default]
    Grid,
    /// Images with links and an optional description.
    List,
}

impl DisplayMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = IslandoraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(IslandoraError::UnknownMode(s.to_string())),
        }
    }
}

/// Display-ready collection for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectsViewModel<'a> {
    Grid(Vec<GridItem<'a>>),
    List(Vec<ListItem<'a>>),
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem<'a> {
    pub class: &'a str,
    pub thumb: &'a str,
    pub title: &'a str,
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub class: &'a str,
    pub image: &'a str,
    pub link: &'a str,

    /// Whether this row is at position 0 of the input sequence.
    pub is_first: bool,

    /// Present only when the record has a `DC` description with a value.
    pub description: Option<Description<'a>>,
}

/// Computes the view model for `objects` in the given mode.
///
/// Records keep their input order.
///
/// # Errors
///
/// Returns [`IslandoraError::MissingField`] for the first record lacking a
/// field the mode requires (`class`, plus `thumb`/`title` for grid or
/// `image`/`link` for list).
pub fn compute_viewmodel(mode: DisplayMode, objects: &[ObjectRecord]) -> Result<ObjectsViewModel<'_>> {
    match mode {
        DisplayMode::Grid => objects
            .iter()
            .enumerate()
            .map(|(index, record)| grid_item(index, record))
            .collect::<Result<Vec<_>>>()
            .map(ObjectsViewModel::Grid),
        DisplayMode::List => objects
            .iter()
            .enumerate()
            .map(|(index, record)| list_item(index, record))
            .collect::<Result<Vec<_>>>()
            .map(ObjectsViewModel::List),
    }
}

fn grid_item(index: usize, record: &ObjectRecord) -> Result<GridItem<'_>> {
    Ok(GridItem {
        class: required(index, "class", record.class.as_deref())?,
        thumb: required(index, "thumb", record.thumb.as_deref())?,
        title: required(index, "title", record.title.as_deref())?,
    })
}

fn list_item(index: usize, record: &ObjectRecord) -> Result<ListItem<'_>> {
    Ok(ListItem {
        class: required(index, "class", record.class.as_deref())?,
        image: required(index, "image", record.image.as_deref())?,
        link: required(index, "link", record.link.as_deref())?,
        is_first: index == 0,
        description: record.description(),
    })
}

fn required<'a>(index: usize, field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| {
        tracing::warn!(index, field, "record missing required field");
        IslandoraError::MissingField { index, field }
    })
}
