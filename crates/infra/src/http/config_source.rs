//! Configuration server client
//!
//! Issues `GET <serverUrl>/configuration?applicationId=<id>` and hands the
//! raw status and body to the core loader, which owns the failure policy.

use async_trait::async_trait;
use clientconfig_core::{ConfigSource, SourceResponse};
use clientconfig_domain::constants::{APPLICATION_ID_PARAM, CONFIGURATION_PATH};
use clientconfig_domain::{ClientConfigError, ConfigOptions, Result};
use reqwest::{Method, StatusCode};
use url::Url;

use super::HttpClient;
use crate::errors::InfraError;

/// [`ConfigSource`] backed by an HTTP configuration server.
#[derive(Clone, Debug)]
pub struct HttpConfigSource {
    client: HttpClient,
}

impl HttpConfigSource {
    /// Create a source with a default HTTP client.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self { client: HttpClient::new()? })
    }

    pub const fn with_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the request URL for `options`.
    ///
    /// The configuration path is appended to any path already present on the
    /// server URL, so `http://host/api` resolves to `http://host/api/configuration`.
    ///
    /// # Errors
    /// Returns `ClientConfigError::Network` if the server URL does not parse
    /// or cannot carry a path.
    pub fn configuration_url(options: &ConfigOptions) -> Result<Url> {
        let mut url = Url::parse(options.server_url()).map_err(InfraError::from)?;

        url.path_segments_mut()
            .map_err(|()| {
                ClientConfigError::Network(format!(
                    "config server URL cannot be a base: {}",
                    options.server_url()
                ))
            })?
            .pop_if_empty()
            .push(CONFIGURATION_PATH);

        url.query_pairs_mut().append_pair(APPLICATION_ID_PARAM, options.application_id());

        Ok(url)
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    async fn fetch(&self, options: &ConfigOptions) -> Result<SourceResponse> {
        let url = Self::configuration_url(options)?;
        tracing::debug!(url = %url, "Fetching configuration");

        let mut request = self.client.request(Method::GET, url);
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }

        let response = self.client.send(request).await?;
        let status = response.status();

        // The body of a rejected request is never used.
        if status != StatusCode::OK {
            return Ok(SourceResponse { status: status.as_u16(), body: String::new() });
        }

        let body = response.text().await.map_err(InfraError::from)?;
        Ok(SourceResponse { status: status.as_u16(), body })
    }
}
