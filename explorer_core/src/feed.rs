use std::future::Future;

use serde_json::Value;
use thiserror::Error;

use crate::record::MediaRecord;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch data")]
    Status { status: u16 },
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    pub body: String,
}

impl FeedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can issue a single GET for the feed document.
pub trait FeedSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FeedResponse, FetchError>>;
}

/// Parses the feed body. A top-level value that isn't an array is an empty
/// feed rather than an error.
pub fn parse_feed(body: &str) -> Result<Vec<MediaRecord>, FetchError> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(items) = value else {
        log::warn!("Feed is not a JSON array, treating it as empty");
        return Ok(Vec::new());
    };

    Ok(items.into_iter().map(MediaRecord::from_value).collect())
}

pub async fn fetch_feed<S: FeedSource>(source: &S, url: &str) -> Result<Vec<MediaRecord>, FetchError> {
    log::info!("Fetching feed from {url}");

    let response = source.fetch(url).await?;
    if !response.is_success() {
        log::error!("Feed request failed with status {}", response.status);
        return Err(FetchError::Status { status: response.status });
    }

    let records = parse_feed(&response.body)?;
    log::debug!("Feed returned {} records", records.len());

    Ok(records)
}
