//! Request execution with loading-flag bookkeeping and failure logging.
//!
//! Every SDK call goes through [`Connection::get`], which raises the loading
//! flag for the duration of the transport call, decodes the payload, and
//! reports any failure to the `tracing` log sink before returning it.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, TcgError};
use crate::state::{RequestId, ServiceState};
use crate::transport::Transport;

/// Owns the transport and the shared [`ServiceState`].
pub struct Connection {
    transport: Box<dyn Transport>,
    state: ServiceState,
}

impl Connection {
    pub fn new(transport: Box<dyn Transport>, state: ServiceState) -> Self {
        Self { transport, state }
    }

    /// The state handle observed by the presentation layer.
    pub fn state(&self) -> &ServiceState {
        &self.state
    }

    /// GET `path` and decode the body into `T`.
    ///
    /// Transport errors, non-success statuses, and payloads that do not
    /// decode as `T` are all logged and returned as errors.
    pub fn get<T: DeserializeOwned>(&self, path: &str, params: &[(String, String)]) -> Result<T> {
        let value = self.get_value(path, params)?;
        serde_json::from_value(value).map_err(|e| {
            tracing::error!(endpoint = path, error = %e, "malformed response payload");
            e.into()
        })
    }

    /// GET `path` and return the raw JSON body.
    pub fn get_value(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let (request, result) = self.send(path, params);
        result.inspect_err(|e| {
            tracing::error!(endpoint = path, %request, error = %e, "request failed");
        })
    }

    /// GET a single resource, mapping a 404 to `Ok(None)`.
    ///
    /// A 404 is logged at debug; every other failure is logged as an error.
    pub fn get_optional(&self, path: &str) -> Result<Option<Value>> {
        let (request, result) = self.send(path, &[]);
        match result {
            Ok(value) => Ok(Some(value)),
            Err(TcgError::Status { status: 404, .. }) => {
                tracing::debug!(endpoint = path, %request, "resource not found");
                Ok(None)
            }
            Err(e) => {
                tracing::error!(endpoint = path, %request, error = %e, "request failed");
                Err(e)
            }
        }
    }

    /// Run the transport call with the loading flag raised.
    fn send(&self, path: &str, params: &[(String, String)]) -> (RequestId, Result<Value>) {
        let guard = self.state.begin();
        let request = guard.id();
        tracing::debug!(endpoint = path, %request, ?params, "sending request");

        let result = self.transport.get(path, params);
        drop(guard);

        if !self.state.is_latest(request) {
            tracing::debug!(endpoint = path, %request, "response superseded by a newer request");
        }

        (request, result)
    }
}
