use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything the gallery does not know how to show.
    #[default]
    #[serde(other)]
    Other,
}

/// One day of the APOD archive as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: MediaType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Reads `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A validated, ordered pair of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The two date inputs handled by the picker.
///
/// Values are kept as raw strings so that unparseable input survives until
/// validation reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInputs {
    pub start: String,
    pub end: String,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

#[derive(Tabled)]
pub struct GalleryTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub date: String,
    pub title: String,
    pub media: String,
}
