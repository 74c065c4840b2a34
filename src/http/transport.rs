//! HTTP transport capability.
//!
//! # Responsibilities
//! - Execute one `{verb, url, body?}` call
//! - Report status, reason phrase and body text, or the lower-level failure
//!
//! # Design Decisions
//! - The full URL is part of every call; the transport holds no base URL, so a
//!   single transport is safe to share across services and tasks
//! - Failures are reported in the outcome, not as `Err`, mirroring what the
//!   executor has to classify
//! - Timeouts and connection pooling belong to the transport, not the executor

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::config::schema::TransportConfig;
use crate::error::BoxError;
use crate::routing::descriptor::HttpVerb;

/// One outgoing HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCall {
    pub verb: HttpVerb,
    /// Base URL joined with the resolved path.
    pub url: String,
    /// JSON body, for verbs that carry one.
    pub body: Option<String>,
}

/// Result of one executed call.
#[derive(Debug)]
pub struct HttpOutcome {
    /// Status code; `0` when the server never answered.
    pub status: u16,
    /// Reason phrase for the status.
    pub status_description: String,
    /// Raw body text.
    pub content: String,
    /// Lower-level failure reported by the transport.
    pub transport_error: Option<BoxError>,
}

impl HttpOutcome {
    /// A response with a status and body.
    pub fn new(status: u16, status_description: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            status,
            status_description: status_description.into(),
            content: content.into(),
            transport_error: None,
        }
    }

    /// A `200 OK` response.
    pub fn ok(content: impl Into<String>) -> Self {
        Self::new(200, "OK", content)
    }

    /// A call that failed below HTTP.
    pub fn failed(error: impl Into<BoxError>) -> Self {
        Self {
            status: 0,
            status_description: String::new(),
            content: String::new(),
            transport_error: Some(error.into()),
        }
    }
}

/// Executes HTTP calls.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, call: HttpCall) -> HttpOutcome;
}

/// Transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from configuration.
    pub fn new(config: &TransportConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

fn method(verb: HttpVerb) -> reqwest::Method {
    match verb {
        HttpVerb::Get => reqwest::Method::GET,
        HttpVerb::Post => reqwest::Method::POST,
        HttpVerb::Put => reqwest::Method::PUT,
        HttpVerb::Delete => reqwest::Method::DELETE,
        HttpVerb::Patch => reqwest::Method::PATCH,
        HttpVerb::Head => reqwest::Method::HEAD,
        HttpVerb::Options => reqwest::Method::OPTIONS,
    }
}

/// Canonical reason phrase, or the numeric code when the status has none.
fn status_description(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => status.as_str().to_string(),
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, call: HttpCall) -> HttpOutcome {
        let mut request = self
            .client
            .request(method(call.verb), call.url.as_str())
            .header(ACCEPT, "application/json");

        if let Some(body) = call.body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return HttpOutcome::failed(e),
        };

        let status = response.status();
        let description = status_description(status);

        match response.text().await {
            Ok(content) => HttpOutcome::new(status.as_u16(), description, content),
            Err(e) => HttpOutcome::failed(e),
        }
    }
}
