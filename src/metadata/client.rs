use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::errors::Error;

/// Something that can answer metadata reads, keyed by attribute path.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, Error>;
}

/// `HttpMetadataClient` reads attributes from an instance metadata service over HTTP.
#[derive(Debug)]
pub struct HttpMetadataClient {
    /// Base URL without trailing slash
    ///
    /// e.g: http://169.254.169.254/latest/meta-data
    base_url: String,

    /// The internal HTTP client, carries the per-read timeout
    http_client: reqwest::Client,
}

impl HttpMetadataClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Build the full URL of an attribute
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataClient {
    #[instrument(skip(self))]
    async fn fetch(&self, path: &str) -> Result<String, Error> {
        let response = self.http_client.get(self.endpoint(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::AttributeUnavailable(
                path.to_string(),
                format!("status {status}"),
            ));
        }
        let body = response.text().await?;
        debug!(bytes = body.len(), "read attribute");
        Ok(body)
    }
}
