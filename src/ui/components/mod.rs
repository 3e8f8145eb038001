//! Layout renderers, one per display mode.
//!
//! Each component fills an askama template from `templates/` and reads its
//! class names from a [`Classes`](crate::ui::Classes) vocabulary. Templates
//! are compiled with escaping off, since record markup is trusted.
//!
//! # Components
//!
//! - [`grid`]: thumbnails with captions
//! - [`list`]: images, links and optional descriptions

mod grid;
mod list;

pub use grid::render_grid;
pub use list::render_list;
