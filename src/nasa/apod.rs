use std::future::Future;

use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    errors::GalleryError,
    types::{DateRange, MediaEntry},
    utils,
};

/// Anything the gallery controller can pull a date range of entries from.
pub trait EntrySource {
    fn fetch(
        &self,
        range: &DateRange,
    ) -> impl Future<Output = Result<Vec<MediaEntry>, GalleryError>>;
}

/// Client for the APOD endpoint.
pub struct ApodClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(api_url: String, api_key: String) -> Result<Self, GalleryError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Builds a client from `APOD_API_URL` / `APOD_API_KEY`.
    pub fn from_env() -> Result<Self, GalleryError> {
        Self::new(config::apod_api_url(), config::apod_api_key())
    }

    /// Retrieves all entries between `range.start` and `range.end` inclusive.
    ///
    /// Issues a single request and awaits it. The entries come back in the
    /// order the API sent them.
    ///
    /// # Errors
    ///
    /// - [`GalleryError::NetworkError`] when the request fails or the body is not JSON
    /// - [`GalleryError::ApiError`] when the body is JSON but not a list
    ///
    /// # Example
    ///
    /// ```
    /// let client = ApodClient::from_env()?;
    /// let range = DateRange { start, end };
    /// let entries = client.fetch_range(&range).await?;
    /// println!("Found {} entries", entries.len());
    /// ```
    pub async fn fetch_range(&self, range: &DateRange) -> Result<Vec<MediaEntry>, GalleryError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("api_key", self.api_key.clone()),
                ("start_date", utils::format_date(range.start)),
                ("end_date", utils::format_date(range.end)),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        decode_entries(&body)
    }
}

impl EntrySource for ApodClient {
    fn fetch(
        &self,
        range: &DateRange,
    ) -> impl Future<Output = Result<Vec<MediaEntry>, GalleryError>> {
        self.fetch_range(range)
    }
}

/// Classifies a response body.
///
/// A body that is not JSON is a [`GalleryError::NetworkError`]; JSON that is
/// not a list, or that carries an `error` member, is a
/// [`GalleryError::ApiError`]. Items of the list that do not decode as an
/// entry are skipped, the rest are returned in order.
pub fn decode_entries(body: &str) -> Result<Vec<MediaEntry>, GalleryError> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(err) = value.get("error") {
        return Err(GalleryError::ApiError(err.to_string()));
    }

    let items = match value {
        Value::Array(items) => items,
        other => {
            let detail = other
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("response is not a list of entries");
            return Err(GalleryError::ApiError(detail.to_string()));
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<MediaEntry>(item).ok())
        .collect())
}
