//! Domain layer for object rendering.
//!
//! This module contains the input record types and error definitions,
//! independent of how records are turned into markup.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`object`]: Object record model and descriptive metadata lookup
//!
//! # Examples
//!
//! ```
//! use islandora_objects::domain::{ObjectRecord, Result};
//!
//! fn prepare() -> Result<Vec<ObjectRecord>> {
//!     Ok(vec![ObjectRecord::grid("book", "<img/>", "A Book")])
//! }
//! ```

pub mod error;
pub mod object;

pub use error::{IslandoraError, Result};
pub use object::{load_records, parse_records, Description, DescriptiveMetadata, ObjectRecord};
