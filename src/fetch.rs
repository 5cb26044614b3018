//! Document retrieval over HTTP(S).
//!
//! Features:
//! - TLS 1.3 via rustls
//! - Brotli, Gzip, Deflate compression (auto-negotiated)
//! - Bounded redirects and connect/total timeouts from [`Config`]
//!
//! The body is returned as raw bytes; decoding is left to
//! [`crate::table::extract_first_table_bytes`].

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::Config;
use crate::error::{GridError, Result};

/// HTTP client for published documents.
pub struct DocumentFetcher {
    client: Client,
}

impl DocumentFetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    /// Create a fetcher from explicit settings.
    pub fn with_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            // Let the server negotiate HTTP/2 or HTTP/1.1
            .http2_adaptive_window(true)
            .tcp_nodelay(true)
            .use_rustls_tls()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .user_agent(config.user_agent.as_str())
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the body bytes of a 2xx response.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let url = parse_url(url)?;
        debug!("Fetching document");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        info!(
            status = %status,
            version = ?response.version(),
            content_type = ?response.headers().get(reqwest::header::CONTENT_TYPE),
            "Response received"
        );

        if !status.is_success() {
            return Err(GridError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Body read");
        Ok(body.to_vec())
    }

    /// Get the underlying reqwest client
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Parse `raw` and require an `http` or `https` scheme.
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| GridError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GridError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}
