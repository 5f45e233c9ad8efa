use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::errors::EpgError;

use super::DocumentSource;

/// Downloads a guide over HTTP(S) with one GET request
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// Document URL
    url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, EpgError> {
        info!("Downloading guide from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| EpgError::Fetch(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EpgError::Fetch(format!(
                "{} responded with {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| EpgError::Fetch(format!("failed to read body from {}: {}", self.url, e)))?;
        debug!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
