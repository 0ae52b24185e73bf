//! Core data models for festival-labels
//!
//! The raw types mirror the festival-centric payload returned by the remote
//! source. The output types describe the label-centric structure that is
//! persisted to the cache artifact and served to callers; their JSON field
//! names are part of the cache file format.

pub mod festivals;

pub use festivals::{FestivalClient, FestivalSource, FetchError, DEFAULT_SOURCE_URL};

use serde::{Deserialize, Deserializer, Serialize};

/// A festival as returned by the remote source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFestival {
    /// Festival name; absent or null in the payload becomes empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Bands performing at the festival, in source order
    #[serde(default, deserialize_with = "null_as_default")]
    pub bands: Vec<RawBand>,
}

/// A band entry inside a raw festival
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBand {
    /// Band name; absent or null in the payload becomes empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Record label, if the source supplied one
    #[serde(
        rename = "recordLabel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub record_label: Option<String>,
}

/// A festival name attached to a band in the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalRef {
    pub name: String,
}

/// A band within a label group, with every festival it was seen at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedBand {
    pub name: String,
    pub festivals: Vec<FestivalRef>,
}

/// All bands attributed to one record label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLabel {
    pub label: String,
    pub bands: Vec<ProcessedBand>,
}

/// Label used for bands with a missing or empty record label
pub const UNKNOWN_LABEL: &str = "Unknown";

impl RawFestival {
    /// Creates a festival with the given name and bands
    pub fn new(name: impl Into<String>, bands: Vec<RawBand>) -> Self {
        Self {
            name: name.into(),
            bands,
        }
    }
}

impl RawBand {
    /// Creates a band signed to `label`
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_label: Some(label.into()),
        }
    }

    /// Creates a band with no record label
    pub fn unsigned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_label: None,
        }
    }

    /// The label this band is grouped under
    ///
    /// Empty and missing labels both resolve to [`UNKNOWN_LABEL`].
    pub fn label_name(&self) -> &str {
        match self.record_label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => UNKNOWN_LABEL,
        }
    }
}

impl FestivalRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Treats an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_festival_parses_source_payload() {
        let json = r#"[
            {
                "name": "LOL-palooza",
                "bands": [
                    { "name": "Winter Primates", "recordLabel": "" },
                    { "name": "Frank Jupiter", "recordLabel": "Pacific Records" },
                    { "name": "Jill Black" }
                ]
            }
        ]"#;

        let festivals: Vec<RawFestival> = serde_json::from_str(json).expect("Should parse");

        assert_eq!(festivals.len(), 1);
        assert_eq!(festivals[0].name, "LOL-palooza");
        assert_eq!(festivals[0].bands.len(), 3);
        assert_eq!(festivals[0].bands[0].record_label.as_deref(), Some(""));
        assert_eq!(
            festivals[0].bands[1].record_label.as_deref(),
            Some("Pacific Records")
        );
        assert!(festivals[0].bands[2].record_label.is_none());
    }

    #[test]
    fn test_raw_festival_missing_name_and_bands_default_to_empty() {
        let festivals: Vec<RawFestival> =
            serde_json::from_str(r#"[{ "bands": [{ "name": "Squint-281" }] }, {}]"#)
                .expect("Should parse");

        assert_eq!(festivals[0].name, "");
        assert_eq!(festivals[0].bands[0].name, "Squint-281");
        assert_eq!(festivals[1], RawFestival::default());
    }

    #[test]
    fn test_raw_festival_null_fields_default_to_empty() {
        let festivals: Vec<RawFestival> = serde_json::from_str(
            r#"[{ "name": null, "bands": [{ "name": "Manish Ditch", "recordLabel": null }] }, { "bands": null }]"#,
        )
        .expect("Should parse");

        assert_eq!(festivals[0].name, "");
        assert!(festivals[0].bands[0].record_label.is_none());
        assert!(festivals[1].bands.is_empty());
    }

    #[test]
    fn test_band_without_name_parses_as_empty_name() {
        let festivals: Vec<RawFestival> = serde_json::from_str(
            r#"[{ "name": "Trainerella", "bands": [{ "recordLabel": "Anti Records" }, { "name": null }, { "name": "YOUKRANE" }] }]"#,
        )
        .expect("Should parse");

        assert_eq!(festivals[0].bands.len(), 3);
        assert_eq!(festivals[0].bands[0].name, "");
        assert_eq!(festivals[0].bands[1].name, "");
        assert_eq!(festivals[0].bands[2].name, "YOUKRANE");
    }

    #[test]
    fn test_label_name_resolution() {
        assert_eq!(RawBand::new("Band", "Label").label_name(), "Label");
        assert_eq!(RawBand::new("Band", "").label_name(), UNKNOWN_LABEL);
        assert_eq!(RawBand::unsigned("Band").label_name(), UNKNOWN_LABEL);
    }

    #[test]
    fn test_record_label_uses_cache_field_names() {
        let label = RecordLabel {
            label: "Outerscope".to_string(),
            bands: vec![ProcessedBand {
                name: "Squint-281".to_string(),
                festivals: vec![FestivalRef::new("Small Night In")],
            }],
        };

        let value = serde_json::to_value(&label).expect("Should serialize");

        assert_eq!(
            value,
            serde_json::json!({
                "label": "Outerscope",
                "bands": [
                    { "name": "Squint-281", "festivals": [{ "name": "Small Night In" }] }
                ]
            })
        );
    }
}
