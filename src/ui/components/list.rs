//! List layout renderer.
//!
//! Renders each object as a row with its image, a bold link and, when the
//! record carries one, a description. Markup comes from the
//! `objects_list.html` template.

use askama::Template;

use crate::domain::Result;
use crate::ui::classes::Classes;
use crate::ui::viewmodel::ListItem;

/// Template context for the list layout.
///
/// # Layout
///
/// ```text
/// <div class="{list_container}">
///   <div class="{list_item} {clearfix}">
///     <dl class="{item.class}">
///       <dt>{image}</dt>
///       <dd class="{object} {item.class}{first}"><strong>{link}</strong></dd>
///       <dd class="{description.class}">{description.value}</dd>   (optional)
///     </dl>
///   </div>
///   ...
/// </div>
/// ```
///
/// `{first}` is only written for the row at position 0 and is appended to the
/// record class without a separator, so a `foo` record yields `foofirst`.
#[derive(Template)]
#[template(path = "objects_list.html", escape = "none")]
struct ListTemplate<'a> {
    items: &'a [ListItem<'a>],
    classes: &'a Classes,
}

/// Renders all list items inside the list container.
///
/// # Errors
///
/// Returns [`IslandoraError::Template`](crate::IslandoraError::Template) if
/// the template fails to render.
pub fn render_list(items: &[ListItem<'_>], classes: &Classes) -> Result<String> {
    Ok(ListTemplate { items, classes }.render()?)
}
