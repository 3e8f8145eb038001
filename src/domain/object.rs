//! Object record domain model.
//!
//! An [`ObjectRecord`] is one display unit prepared by the surrounding content
//! system: every markup field already holds sanitized HTML. Records are plain
//! input data. Which fields are required depends on the display mode, so all
//! of them are optional here and checked when the view model is computed.
//!
//! Descriptive metadata is kept as untyped JSON. Only the `DC` description is
//! ever read, so other entries may have any shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::domain::error::Result;

/// Metadata scheme holding the description field.
pub const DC_SCHEME: &str = "DC";

/// Field name the description is stored under within [`DC_SCHEME`].
pub const DESCRIPTION_FIELD: &str = "dc:description";

/// Unprefixed field name tried after [`DESCRIPTION_FIELD`].
pub const DESCRIPTION_FIELD_SHORT: &str = "description";

/// A single object to render.
///
/// # Fields
///
/// - `class`: CSS class name(s) for the record's container (both modes)
/// - `thumb`, `title`: thumbnail and caption markup (grid mode)
/// - `image`, `link`: image and title link markup (list mode)
/// - `descriptive_metadata`: optional scheme → field mapping (list mode)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        alias = "descriptiveMetadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub descriptive_metadata: Option<DescriptiveMetadata>,
    /// The `DC` scheme supplied at the top level of the record.
    #[serde(default, rename = "DC", skip_serializing_if = "Option::is_none")]
    pub dc: Option<Value>,
}

/// Descriptive metadata keyed by scheme, then by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptiveMetadata(pub Value);

/// A description field that carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description<'a> {
    /// CSS class for the element. Empty when the field has none.
    pub class: &'a str,
    /// Pre-rendered markup.
    pub value: &'a str,
}

impl ObjectRecord {
    /// Creates a record carrying the fields grid mode requires.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandora_objects::ObjectRecord;
    ///
    /// let record = ObjectRecord::grid("book", "<img src=\"t.jpg\"/>", "A Book");
    /// assert_eq!(record.thumb.as_deref(), Some("<img src=\"t.jpg\"/>"));
    /// assert!(record.image.is_none());
    /// ```
    #[must_use]
    pub fn grid(
        class: impl Into<String>,
        thumb: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            class: Some(class.into()),
            thumb: Some(thumb.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a record carrying the fields list mode requires.
    #[must_use]
    pub fn list(
        class: impl Into<String>,
        image: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            class: Some(class.into()),
            image: Some(image.into()),
            link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Attaches a `DC` description field to the record.
    ///
    /// Any non-object metadata or `DC` entry in the way is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandora_objects::ObjectRecord;
    ///
    /// let record = ObjectRecord::list("foo", "<img/>", "Title")
    ///     .with_description("dc-description", "About this object");
    /// let description = record.description().unwrap();
    /// assert_eq!(description.class, "dc-description");
    /// ```
    #[must_use]
    pub fn with_description(mut self, class: impl Into<String>, value: impl Into<String>) -> Self {
        let field = json!({ "class": class.into(), "value": value.into() });

        let mut schemes = match self.descriptive_metadata.take() {
            Some(DescriptiveMetadata(Value::Object(map))) => map,
            _ => Map::new(),
        };
        let mut fields = match schemes.remove(DC_SCHEME) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        fields.insert(DESCRIPTION_FIELD.to_string(), field);
        schemes.insert(DC_SCHEME.to_string(), Value::Object(fields));

        self.descriptive_metadata = Some(DescriptiveMetadata(Value::Object(schemes)));
        self
    }

    /// Returns the `DC` description when one carries a value.
    ///
    /// Looks in `descriptive_metadata` first, then in a top-level `DC` map.
    /// Within a scheme, `dc:description` is tried before `description`, and a
    /// field without a string `value` is skipped.
    #[must_use]
    pub fn description(&self) -> Option<Description<'_>> {
        let from_metadata = self
            .descriptive_metadata
            .as_ref()
            .and_then(|metadata| metadata.0.get(DC_SCHEME));

        [from_metadata, self.dc.as_ref()]
            .into_iter()
            .flatten()
            .find_map(description_in)
    }
}

fn description_in(scheme: &Value) -> Option<Description<'_>> {
    [DESCRIPTION_FIELD, DESCRIPTION_FIELD_SHORT]
        .into_iter()
        .find_map(|key| {
            let field = scheme.get(key)?;
            let value = field.get("value")?.as_str()?;
            let class = field.get("class").and_then(Value::as_str).unwrap_or_default();
            Some(Description { class, value })
        })
}

/// Decodes a JSON array of records.
///
/// # Errors
///
/// Returns [`IslandoraError::Json`](crate::IslandoraError::Json) if the text
/// is not an array of record objects.
pub fn parse_records(json: &str) -> Result<Vec<ObjectRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and decodes a JSON array of records from a file.
///
/// # Errors
///
/// Returns [`IslandoraError::Io`](crate::IslandoraError::Io) if the file
/// cannot be read, or [`IslandoraError::Json`](crate::IslandoraError::Json)
/// if its content does not decode.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<ObjectRecord>> {
    let contents = fs::read_to_string(path)?;
    parse_records(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ObjectRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_description_absent_without_metadata() {
        let record = ObjectRecord::list("foo", "<img/>", "Title");
        assert!(record.description().is_none());
    }

    #[test]
    fn test_description_requires_value() {
        let record = record(
            r#"{
                "class": "foo",
                "descriptive_metadata": {
                    "DC": { "dc:description": { "class": "dc-description" } }
                }
            }"#,
        );
        assert!(record.description().is_none());
    }

    #[test]
    fn test_null_value_counts_as_absent() {
        let record = record(r#"{ "DC": { "dc:description": { "class": "d", "value": null } } }"#);
        assert!(record.description().is_none());
    }

    #[test]
    fn test_description_from_top_level_dc_key() {
        let record = record(
            r#"{
                "class": "foo",
                "image": "<img/>",
                "link": "Title",
                "DC": { "dc:description": { "class": "desc", "value": "<p>Hi</p>" } }
            }"#,
        );
        assert_eq!(
            record.description(),
            Some(Description { class: "desc", value: "<p>Hi</p>" })
        );
    }

    #[test]
    fn test_description_accepts_short_name_and_camel_case_alias() {
        let record = record(
            r#"{
                "descriptiveMetadata": {
                    "DC": { "description": { "class": "d", "value": "v" } }
                }
            }"#,
        );
        assert_eq!(record.description().unwrap().value, "v");
    }

    #[test]
    fn test_prefixed_description_wins() {
        let record = record(
            r#"{ "DC": {
                "description": { "class": "short", "value": "s" },
                "dc:description": { "class": "long", "value": "l" }
            } }"#,
        );
        assert_eq!(record.description().unwrap().class, "long");
    }

    #[test]
    fn test_valueless_prefixed_field_falls_through_to_short_name() {
        let record = record(
            r#"{ "DC": {
                "dc:description": { "class": "x" },
                "description": { "class": "d", "value": "About" }
            } }"#,
        );
        assert_eq!(
            record.description(),
            Some(Description { class: "d", value: "About" })
        );
    }

    #[test]
    fn test_missing_description_class_is_empty() {
        let record = record(r#"{ "DC": { "dc:description": { "value": "v" } } }"#);
        assert_eq!(record.description().unwrap().class, "");
    }

    #[test]
    fn test_unrelated_metadata_shapes_are_tolerated() {
        let records = parse_records(
            r#"[{
                "class": "foo",
                "DC": {
                    "dc:title": "Plain title",
                    "dc:subject": ["maps", "surveys"],
                    "dc:description": { "class": "d", "value": "About" }
                },
                "descriptive_metadata": { "MODS": "<mods/>", "DC": 7 }
            }]"#,
        )
        .unwrap();
        assert_eq!(
            records[0].description(),
            Some(Description { class: "d", value: "About" })
        );
    }

    #[test]
    fn test_other_schemes_are_ignored() {
        let record = record(
            r#"{
                "descriptive_metadata": {
                    "MODS": { "dc:description": { "class": "d", "value": "v" } }
                }
            }"#,
        );
        assert!(record.description().is_none());
    }

    #[test]
    fn test_with_description_replaces_non_object_metadata() {
        let record = ObjectRecord {
            descriptive_metadata: Some(DescriptiveMetadata(Value::String("junk".into()))),
            ..ObjectRecord::list("a", "i", "l")
        }
        .with_description("d", "v");
        assert_eq!(record.description(), Some(Description { class: "d", value: "v" }));
    }

    #[test]
    fn test_parse_records_keeps_order() {
        let records = parse_records(r#"[{"class": "a"}, {"class": "b", "thumb": "t"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].class.as_deref(), Some("a"));
        assert_eq!(records[1].thumb.as_deref(), Some("t"));
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        let err = parse_records(r#"{"class": "a"}"#).unwrap_err();
        assert!(matches!(err, crate::IslandoraError::Json(_)));
    }

    #[test]
    fn test_load_records_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(dir.path().join("objects.json")).unwrap_err();
        assert!(matches!(err, crate::IslandoraError::Io(_)));
    }

    #[test]
    fn test_builders_leave_other_mode_fields_empty() {
        let grid = ObjectRecord::grid("a", "t", "c");
        assert!(grid.image.is_none() && grid.link.is_none());

        let list = ObjectRecord::list("a", "i", "l");
        assert!(list.thumb.is_none() && list.title.is_none());
    }
}
