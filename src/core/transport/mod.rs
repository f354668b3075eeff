//! HTTP transport abstraction.
//!
//! The authenticator, reader and writer never talk to the network directly.
//! They build a [`Request`] and hand it to a [`Transport`] passed in by the
//! caller, which makes them testable against in-memory servers.
//!
//! ## Adding a New Transport
//!
//! 1. Implement the `Transport` trait
//! 2. Return every HTTP status as a `Response`; reserve `TransportError` for
//!    failures where no response was received

mod http;

pub use http::HttpTransport;

use std::borrow::Cow;

use serde_json::Value;

use crate::error::TransportError;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single outgoing request.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Look up a header value by name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a received response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for any status in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Sends requests and returns responses.
///
/// Implementations must not treat non-2xx statuses as errors; status
/// handling belongs to the caller.
pub trait Transport {
    /// Send a request and wait for the full response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request could not be delivered or the
    /// response body could not be read.
    fn send(&self, request: &Request) -> Result<Response, TransportError>;
}
