//! HTTP transport for the remote catalogue API.
//!
//! [`Transport`] is the seam between the query layer and the network. The
//! production implementation, [`HttpTransport`], sends blocking `reqwest`
//! requests with the `X-Api-Key` header attached.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::{self, TcgConfig};
use crate::error::{Result, TcgError};

/// Performs a GET against a resource path and returns the decoded JSON body.
///
/// Implementations must turn non-success statuses into
/// [`TcgError::Status`] rather than returning the error body as a value.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value>;
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport for `endpoint`, authenticating with `api_key`.
    ///
    /// When `timeout` is `None` the HTTP client default applies.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a transport from a loaded [`TcgConfig`].
    ///
    /// `timeout` overrides `config.timeout_secs` when set.
    pub fn from_config(config: &TcgConfig, timeout: Option<Duration>) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            timeout.or(config.timeout_secs.map(Duration::from_secs)),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let url = format!("{}{}", self.endpoint, path);

        let mut request = self.client.get(&url).query(params);
        if !self.api_key.is_empty() {
            request = request.header(config::API_KEY_HEADER, &self.api_key);
        }

        let resp = request.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(path, status, resp.text().unwrap_or_default()));
        }

        Ok(resp.json()?)
    }
}

fn status_error(path: &str, status: StatusCode, body: String) -> TcgError {
    TcgError::Status {
        endpoint: path.to_string(),
        status: status.as_u16(),
        body,
    }
}
