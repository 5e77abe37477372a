/*
[INPUT]:  HTTP configuration (base URLs, timeouts, access token)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{Result, StocktwitsError};

/// Base URLs for the Stocktwits API
const API_BASE_URL: &str = "https://api.stocktwits.com/api/2/";
const SYNC_BASE_URL: &str = "https://api.stocktwits.com/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Stocktwits API
///
/// Holds the immutable base URLs and the caller-supplied access token.
/// Construction performs no network activity; every endpoint method issues
/// exactly one outbound request and performs no retries.
#[derive(Debug, Clone)]
pub struct StocktwitsClient {
    http_client: Client,
    api_base_url: Url,
    sync_base_url: Url,
    access_token: String,
}

impl StocktwitsClient {
    /// Create a new client with default configuration
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), access_token)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config_and_base_urls(config, access_token, API_BASE_URL, SYNC_BASE_URL)
    }

    /// Create a new client against explicit base URLs (mock servers in tests)
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        access_token: impl Into<String>,
        api_base_url: &str,
        sync_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_base_url: Url::parse(api_base_url)?,
            sync_base_url: Url::parse(sync_base_url)?,
            access_token: access_token.into(),
        })
    }

    /// Build full URL for an API endpoint (`{base}{path}.json`)
    fn api_url(&self, path: &str) -> Result<Url> {
        Ok(self.api_base_url.join(&format!("{path}.json"))?)
    }

    /// GET an authenticated endpoint; parameters travel as the query string
    pub(crate) async fn get_json(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Envelope> {
        let url = self.api_url(path)?;
        debug!(%url, "stocktwits GET");
        let response = self
            .http_client
            .get(url)
            .query(&self.with_token(params))
            .send()
            .await?;
        Self::decode_envelope(response).await
    }

    /// POST an authenticated endpoint; parameters travel as form fields
    pub(crate) async fn post_json(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Envelope> {
        let url = self.api_url(path)?;
        debug!(%url, "stocktwits POST");
        let response = self
            .http_client
            .post(url)
            .form(&self.with_token(params))
            .send()
            .await?;
        Self::decode_envelope(response).await
    }

    /// Fetch an unauthenticated CSV resource and write its bytes verbatim
    pub(crate) async fn download_csv(&self, path: &str, dest: &Path) -> Result<()> {
        let url = self.sync_base_url.join(path)?;
        debug!(%url, dest = %dest.display(), "stocktwits CSV download");
        let response = self.http_client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        tokio::fs::write(dest, &bytes).await?;
        Ok(())
    }

    fn with_token<'a>(&self, params: &[(&'a str, String)]) -> Vec<(&'a str, String)> {
        let mut merged = params.to_vec();
        merged.push(("access_token", self.access_token.clone()));
        merged
    }

    /// Parse the response body and enforce the `response.status == 200`
    /// envelope invariant. Failures keep the final URL and the raw body.
    async fn decode_envelope(response: Response) -> Result<Envelope> {
        let url = response.url().to_string();
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body).map_err(|source| StocktwitsError::Decode {
            url: url.clone(),
            body,
            source,
        })?;

        let status = value
            .pointer("/response/status")
            .and_then(Value::as_i64)
            .ok_or_else(|| StocktwitsError::MissingField {
                url: url.clone(),
                field: "/response/status",
            })?;
        if status != 200 {
            warn!(%url, status, "stocktwits envelope reported failure");
            return Err(StocktwitsError::Api {
                url,
                status,
                body: value,
            });
        }

        Ok(Envelope { url, value })
    }
}

/// A validated 200 envelope plus the URL it came from, ready for the calling
/// endpoint method to project its payload field out of.
#[derive(Debug)]
pub(crate) struct Envelope {
    url: String,
    value: Value,
}

impl Envelope {
    /// Extract and deserialize the payload at a JSON pointer
    /// (e.g. `/messages`, `/watchlist/symbols`).
    pub(crate) fn payload<T: DeserializeOwned>(&self, pointer: &'static str) -> Result<T> {
        let fragment = self
            .value
            .pointer(pointer)
            .ok_or_else(|| StocktwitsError::MissingField {
                url: self.url.clone(),
                field: pointer,
            })?;
        serde_json::from_value(fragment.clone()).map_err(|source| StocktwitsError::Decode {
            url: self.url.clone(),
            body: fragment.to_string(),
            source,
        })
    }
}
