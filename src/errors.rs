//! Error taxonomy of the gallery and the inline notices they turn into.
//!
//! None of these errors leave the controller: each one is converted into a
//! [`Notice`] that replaces the gallery content.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// One of the inputs is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// The start date lies after the end date.
    RangeOrderError { start: String, end: String },
    /// The API answered with something other than a sequence of entries.
    ApiError(String),
    /// Transport failure or a body that is not JSON.
    NetworkError(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::InvalidDate(value) => write!(f, "Invalid date: {:?}", value),
            GalleryError::RangeOrderError { start, end } => {
                write!(f, "Start date {} is after end date {}", start, end)
            }
            GalleryError::ApiError(msg) => write!(f, "APOD API error: {}", msg),
            GalleryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<reqwest::Error> for GalleryError {
    fn from(err: reqwest::Error) -> Self {
        GalleryError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::NetworkError(err.to_string())
    }
}

/// Message shown in place of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidDate,
    RangeOrder,
    NoResults,
    LoadFailed,
    NothingToShow,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::InvalidDate => "Please select both a valid start and end date.",
            Notice::RangeOrder => "Start date must be before end date.",
            Notice::NoResults => "No images found for this range. Try a different date range!",
            Notice::LoadFailed => "Error loading images. Please try again later.",
            Notice::NothingToShow => "No images or videos found for this range.",
        }
    }

    /// Whether the notice reports a failure rather than an empty result.
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::NothingToShow)
    }
}

impl From<&GalleryError> for Notice {
    fn from(err: &GalleryError) -> Self {
        match err {
            GalleryError::InvalidDate(_) => Notice::InvalidDate,
            GalleryError::RangeOrderError { .. } => Notice::RangeOrder,
            GalleryError::ApiError(_) => Notice::NoResults,
            GalleryError::NetworkError(_) => Notice::LoadFailed,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
