//! HTTP implementation of the [`Fetch`] collaborator.

use crate::error::FetchError;
use crate::pipeline::Fetch;
use std::time::Duration;

const USER_AGENT: &str = concat!("cinerank/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP fetcher backed by a shared [`reqwest::blocking::Client`].
///
/// Non-success HTTP statuses become [`FetchError`]s carrying the status
/// code; transport failures carry no status. There is no retry or backoff;
/// a failed fetch simply costs the run that source's records.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the crate's user agent and a request timeout.
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| fetch_error(url, &err))?;
        response.text().map_err(|err| fetch_error(url, &err))
    }
}

fn fetch_error(url: &str, err: &reqwest::Error) -> FetchError {
    FetchError {
        url: url.to_string(),
        status: err.status().map(|status| status.as_u16()),
        message: err.to_string(),
    }
}
