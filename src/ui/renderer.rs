//! Top-level rendering coordinator.
//!
//! This module provides the rendering entry points. A call validates the
//! records into a view model, then hands it to the component for its mode.
//!
//! # Architecture
//!
//! 1. **View Model Computation**: `&[ObjectRecord]` → [`ObjectsViewModel`]
//! 2. **Component Rendering**: grid or list component writes the fragment
//!
//! Rendering keeps no state between calls. The same mode, records and classes
//! always produce byte-identical output.
//!
//! # Example
//!
//! ```rust
//! use islandora_objects::ui::{render, DisplayMode};
//!
//! let html = render(DisplayMode::List, &[])?;
//! assert_eq!(html, "<div class=\"islandora-objects-list\"></div>");
//! # Ok::<(), islandora_objects::IslandoraError>(())
//! ```

use crate::domain::{ObjectRecord, Result};
use crate::ui::classes::Classes;
use crate::ui::components;
use crate::ui::viewmodel::{compute_viewmodel, DisplayMode, ObjectsViewModel};

/// Renders `objects` with the default class vocabulary.
///
/// # Errors
///
/// Returns [`IslandoraError::MissingField`](crate::IslandoraError::MissingField)
/// if any record lacks a field `mode` requires. Nothing is rendered in that case.
///
/// # Example
///
/// ```rust
/// use islandora_objects::ui::{render, DisplayMode};
/// use islandora_objects::ObjectRecord;
///
/// let records = vec![ObjectRecord::list("foo", "<img/>", "Title")];
/// let html = render(DisplayMode::List, &records)?;
/// assert!(html.contains("<dd class=\"islandora-object foofirst\"><strong>Title</strong></dd>"));
/// # Ok::<(), islandora_objects::IslandoraError>(())
/// ```
pub fn render(mode: DisplayMode, objects: &[ObjectRecord]) -> Result<String> {
    render_with_classes(mode, objects, &Classes::default())
}

/// Renders `objects` with an explicit class vocabulary.
///
/// # Errors
///
/// Same as [`render`].
pub fn render_with_classes(mode: DisplayMode, objects: &[ObjectRecord], classes: &Classes) -> Result<String> {
    tracing::debug!(%mode, count = objects.len(), "rendering objects");

    let viewmodel = compute_viewmodel(mode, objects)?;

    render_viewmodel(&viewmodel, classes)
}

/// Renders a computed view model with its mode-specific layout.
///
/// # Errors
///
/// Returns [`IslandoraError::Template`](crate::IslandoraError::Template) if
/// the layout template fails to render.
pub fn render_viewmodel(vm: &ObjectsViewModel<'_>, classes: &Classes) -> Result<String> {
    match vm {
        ObjectsViewModel::Grid(items) => components::render_grid(items, classes),
        ObjectsViewModel::List(items) => components::render_list(items, classes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IslandoraError;

    #[test]
    fn test_empty_grid() {
        assert_eq!(
            render(DisplayMode::Grid, &[]).unwrap(),
            "<div class=\"islandora-objects-grid clearfix\"></div>"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            render(DisplayMode::List, &[]).unwrap(),
            "<div class=\"islandora-objects-list\"></div>"
        );
    }

    #[test]
    fn test_list_single_record_without_metadata() {
        let records = vec![ObjectRecord::list("foo", "<img/>", "Title")];
        let html = render(DisplayMode::List, &records).unwrap();
        assert!(html.contains(
            "<dl class=\"foo\"><dt><img/></dt><dd class=\"islandora-object foofirst\"><strong>Title</strong></dd></dl>"
        ));
    }

    #[test]
    fn test_grid_preserves_count_and_order() {
        let records: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|name| ObjectRecord::grid(*name, format!("<img src=\"{name}\"/>"), *name))
            .collect();
        let html = render(DisplayMode::Grid, &records).unwrap();

        assert_eq!(html.matches("<dl ").count(), 3);
        let a = html.find("islandora-object a\"").unwrap();
        let b = html.find("islandora-object b\"").unwrap();
        let c = html.find("islandora-object c\"").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_list_marks_only_first() {
        let records: Vec<_> = (0..3)
            .map(|i| ObjectRecord::list(format!("r{i}"), "<img/>", "t"))
            .collect();
        let html = render(DisplayMode::List, &records).unwrap();

        assert_eq!(html.matches("first\"").count(), 1);
        assert!(html.contains("islandora-object r0first\""));
        assert!(html.contains("islandora-object r1\""));
        assert!(html.contains("islandora-object r2\""));
    }

    #[test]
    fn test_description_emitted_only_when_present() {
        let records = vec![
            ObjectRecord::list("a", "<img/>", "A").with_description("dc-description", "About A"),
            ObjectRecord::list("b", "<img/>", "B"),
        ];
        let html = render(DisplayMode::List, &records).unwrap();

        assert_eq!(html.matches("<dd class=\"dc-description\">About A</dd>").count(), 1);
        assert_eq!(html.matches("<dd ").count(), 3);
    }

    #[test]
    fn test_render_is_idempotent() {
        let records = vec![
            ObjectRecord::list("a", "<img/>", "A").with_description("d", "v"),
            ObjectRecord::list("b", "<img/>", "B"),
        ];
        let first = render(DisplayMode::List, &records).unwrap();
        let second = render(DisplayMode::List, &records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_field_aborts_whole_render() {
        let records = vec![
            ObjectRecord::list("a", "<img/>", "A"),
            ObjectRecord { link: None, ..ObjectRecord::list("b", "<img/>", "B") },
        ];
        let err = render(DisplayMode::List, &records).unwrap_err();
        assert!(matches!(err, IslandoraError::MissingField { index: 1, field: "link" }));
    }

    #[test]
    fn test_custom_classes() {
        let classes = Classes {
            grid_container: "gallery".into(),
            object: "item".into(),
            clearfix: "cf".into(),
            ..Classes::default()
        };
        let records = vec![ObjectRecord::grid("x", "T", "C")];
        let html = render_with_classes(DisplayMode::Grid, &records, &classes).unwrap();
        assert_eq!(
            html,
            "<div class=\"gallery cf\"><dl class=\"item x\"><dt class=\"item-thumb\">T</dt>\
             <dd class=\"item-caption\">C</dd></dl></div>"
        );
    }

    #[test]
    fn test_description_found_past_valueless_field_and_plain_entries() {
        let records = crate::domain::parse_records(
            r#"[{
                "class": "foo",
                "image": "<img/>",
                "link": "Title",
                "DC": {
                    "dc:title": "Plain title",
                    "dc:description": { "class": "x" },
                    "description": { "class": "d", "value": "About" }
                }
            }]"#,
        )
        .unwrap();
        let html = render(DisplayMode::List, &records).unwrap();
        assert!(html.contains("<strong>Title</strong></dd><dd class=\"d\">About</dd></dl>"));
        assert!(!html.contains("class=\"x\""));
    }

    #[test]
    fn test_render_viewmodel_matches_render() {
        let records = vec![ObjectRecord::grid("a", "<img/>", "A")];
        let vm = compute_viewmodel(DisplayMode::Grid, &records).unwrap();
        assert_eq!(
            render_viewmodel(&vm, &Classes::default()).unwrap(),
            render(DisplayMode::Grid, &records).unwrap()
        );
    }
}
