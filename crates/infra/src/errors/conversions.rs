//! Conversions from external infrastructure errors into domain errors.

use clientconfig_domain::ClientConfigError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClientConfigError);

impl From<InfraError> for ClientConfigError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClientConfigError> for InfraError {
    fn from(value: ClientConfigError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoClientConfigError {
    fn into_client_config(self) -> ClientConfigError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClientConfigError */
/* -------------------------------------------------------------------------- */

impl IntoClientConfigError for HttpError {
    fn into_client_config(self) -> ClientConfigError {
        if self.is_timeout() {
            return ClientConfigError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ClientConfigError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return ClientConfigError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return ClientConfigError::Parse(format!("failed to read HTTP body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            return ClientConfigError::Network(format!(
                "HTTP {} {}",
                code,
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        ClientConfigError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_client_config())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → ClientConfigError */
/* -------------------------------------------------------------------------- */

impl IntoClientConfigError for UrlError {
    fn into_client_config(self) -> ClientConfigError {
        ClientConfigError::Network(format!("invalid config server URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        Self(value.into_client_config())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
