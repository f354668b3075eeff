//! Blocking HTTP transport backed by `ureq`.

use std::io::Read;
use std::time::Duration;

use tracing::debug;

use super::{Request, Response, Transport};
use crate::core::constants;
use crate::error::TransportError;

/// HTTP/HTTPS transport with a fixed per-request timeout.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut call = self.agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let result = match &request.body {
            Some(body) => {
                let bytes = serde_json::to_vec(body).map_err(|e| TransportError::Request {
                    url: request.url.clone(),
                    reason: e.to_string(),
                })?;
                call.set("Content-Type", "application/json")
                    .send_bytes(&bytes)
            }
            None => call.call(),
        };

        // ureq reports 4xx/5xx as errors; they are ordinary responses here.
        let response = match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(TransportError::Request {
                    url: request.url.clone(),
                    reason: transport.to_string(),
                })
            }
        };

        let status = response.status();
        let body = read_body(
            response.into_reader(),
            &request.url,
            constants::MAX_RESPONSE_BYTES,
        )?;

        debug!(status, bytes = body.len(), "response received");
        Ok(Response { status, body })
    }
}

/// Read a response body, failing rather than truncating past `limit` bytes.
fn read_body(reader: impl Read, url: &str, limit: u64) -> Result<Vec<u8>, TransportError> {
    let mut body = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|source| TransportError::Body {
            url: url.to_string(),
            source,
        })?;

    if body.len() as u64 > limit {
        return Err(TransportError::TooLarge {
            url: url.to_string(),
            limit,
        });
    }
    Ok(body)
}
