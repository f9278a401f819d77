//! # NASA Integration Module
//!
//! This module is the integration layer between the gallery and NASA's public
//! APIs. Only one endpoint is consumed: the Astronomy Picture of the Day
//! archive, queried for a date range.
//!
//! ## Architecture
//!
//! ```text
//! Gallery Controller (ui)
//!          ↓
//! EntrySource trait
//!          ↓
//! ApodClient (reqwest, JSON)
//!          ↓
//! https://api.nasa.gov/planetary/apod
//! ```
//!
//! ## Request
//!
//! `GET <endpoint>?api_key=<key>&start_date=<YYYY-MM-DD>&end_date=<YYYY-MM-DD>`
//!
//! ## Response Classification
//!
//! The HTTP status is not inspected. The API reports failures in the body, and
//! those bodies are classified the same way as any other unexpected payload:
//!
//! - **Transport failure** or a body that is not JSON: [`GalleryError::NetworkError`]
//! - **JSON that is not an array** or an object with an `error` member:
//!   [`GalleryError::ApiError`]
//! - **Array of entries**: returned unsorted, exactly as received; items that
//!   do not decode as an entry are dropped
//!
//! No timeout and no retry are applied; a failed fetch needs a new user action.
//!
//! [`GalleryError::NetworkError`]: crate::errors::GalleryError::NetworkError
//! [`GalleryError::ApiError`]: crate::errors::GalleryError::ApiError

pub mod apod;

pub use apod::ApodClient;
pub use apod::EntrySource;
pub use apod::decode_entries;
