//! Grid layout renderer.
//!
//! Renders each object as a thumbnail term followed by a caption, through the
//! `objects_grid.html` template.

use askama::Template;

use crate::domain::Result;
use crate::ui::classes::Classes;
use crate::ui::viewmodel::GridItem;

/// Template context for the grid layout.
///
/// # Layout
///
/// ```text
/// <div class="{grid_container} {clearfix}">
///   <dl class="{object} {item.class}">
///     <dt class="{object}-thumb">{thumb}</dt>
///     <dd class="{object}-caption">{title}</dd>
///   </dl>
///   ...
/// </div>
/// ```
///
/// The output carries no whitespace between elements.
#[derive(Template)]
#[template(path = "objects_grid.html", escape = "none")]
struct GridTemplate<'a> {
    items: &'a [GridItem<'a>],
    classes: &'a Classes,
}

/// Renders all grid items inside the grid container.
///
/// # Errors
///
/// Returns [`IslandoraError::Template`](crate::IslandoraError::Template) if
/// the template fails to render.
pub fn render_grid(items: &[GridItem<'_>], classes: &Classes) -> Result<String> {
    Ok(GridTemplate { items, classes }.render()?)
}
