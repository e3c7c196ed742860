// src/fetch/client.rs

//! HTTP client wrapper for index downloads
//!
//! A thin layer over reqwest's blocking client. Requests carry no custom
//! headers or auth and are never retried; timeouts are whatever the
//! transport defaults to.

use reqwest::blocking::{Client, Response};

use crate::error::{Error, Result};

/// Blocking HTTP client shared across download workers
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Issue a GET and return the response once headers are in
    ///
    /// Connection failures and non-success HTTP statuses both map to
    /// [`Error::DownloadError`]; the body has not been consumed yet.
    pub fn get(&self, uri: &str) -> Result<Response> {
        let response = self
            .client
            .get(uri)
            .send()
            .map_err(|e| Error::DownloadError(format!("Failed to fetch {uri}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} from {}",
                response.status(),
                uri
            )));
        }

        Ok(response)
    }
}
