use explorer_core::{FeedResponse, FeedSource, FetchError};
use gloo_net::http::Request;

/// Fetches the feed through the browser's `fetch`.
pub struct GlooFeedSource;

impl FeedSource for GlooFeedSource {
    async fn fetch(&self, url: &str) -> Result<FeedResponse, FetchError> {
        let response = Request::get(url).send().await.map_err(network_error)?;

        let status = response.status();
        if !response.ok() {
            return Ok(FeedResponse { status, body: String::new() });
        }

        let body = response.text().await.map_err(network_error)?;
        Ok(FeedResponse { status, body })
    }
}

fn network_error(err: gloo_net::Error) -> FetchError {
    FetchError::Network(err.to_string())
}
