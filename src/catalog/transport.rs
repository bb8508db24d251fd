// HTTP transport seam for catalog reads
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Body(String),
}

/// A generic fetch-with-status-code operation. The catalog client only
/// ever issues JSON GETs, so the seam is a single method.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}

/// Default transport backed by ureq. Timeouts are the transport's own;
/// the catalog layer adds none.
pub struct HttpTransport;

impl Transport for HttpTransport {
    fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let response = ureq::get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => TransportError::Status(code),
                other => TransportError::Request(other.to_string()),
            })?;

        response
            .into_json::<Value>()
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
