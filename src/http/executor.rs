//! Verb-level REST execution.
//!
//! # Responsibilities
//! - Check call parameters (base URL, template, request, response type)
//! - Resolve the path template against the request
//! - Serialize the request as the body for POST/PUT
//! - Execute through the transport and validate the outcome
//! - Decode the body according to the declared response type
//!
//! # Design Decisions
//! - Works on `serde_json::Value` so the trait stays object-safe
//! - The base URL is passed per call and never stored
//! - Errors are relayed as-is; nothing is retried or logged-and-swallowed

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::schema::ClientConfig;
use crate::error::{ConfigurationError, ProxyError, ProxyResult};
use crate::http::status::{validate, SuccessPolicy};
use crate::http::transport::{HttpCall, ReqwestTransport, Transport};
use crate::routing::descriptor::{HttpVerb, ResponseType};
use crate::routing::template::{self, PlaceholderPolicy};
use crate::serialization::{JsonSerializer, Serializer};

/// One call per HTTP verb.
///
/// `None` for `request` or `response_type` is the "null argument" case and is
/// rejected with [`ProxyError::Argument`].
#[async_trait]
pub trait RestExecutor: Send + Sync {
    async fn get(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>>;

    async fn post(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>>;

    async fn put(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>>;

    async fn delete(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
    ) -> ProxyResult<()>;
}

/// [`RestExecutor`] over a [`Transport`] and a [`Serializer`].
#[derive(Clone)]
pub struct RestProxy {
    transport: Arc<dyn Transport>,
    serializer: Arc<dyn Serializer>,
    success: SuccessPolicy,
    placeholders: PlaceholderPolicy,
}

impl RestProxy {
    pub fn new(transport: Arc<dyn Transport>, serializer: Arc<dyn Serializer>) -> Self {
        Self {
            transport,
            serializer,
            success: SuccessPolicy::default(),
            placeholders: PlaceholderPolicy::default(),
        }
    }

    /// Build a reqwest-backed executor with JSON bodies and the configured policies.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let transport = ReqwestTransport::new(&config.transport)?;
        Ok(Self::new(Arc::new(transport), Arc::new(JsonSerializer))
            .with_success_policy(config.policy.success)
            .with_placeholder_policy(config.policy.unresolved_placeholder))
    }

    pub fn with_success_policy(mut self, policy: SuccessPolicy) -> Self {
        self.success = policy;
        self
    }

    pub fn with_placeholder_policy(mut self, policy: PlaceholderPolicy) -> Self {
        self.placeholders = policy;
        self
    }

    async fn execute(
        &self,
        verb: HttpVerb,
        base_url: &str,
        resource_url: &str,
        request: &Value,
        response_type: ResponseType,
    ) -> ProxyResult<Option<Value>> {
        let path = template::resolve(resource_url, request, self.placeholders)?;
        let url = join_url(base_url, &path)?;

        let body = if verb.has_body() {
            Some(self.serializer.serialize(request)?)
        } else {
            None
        };

        tracing::debug!(verb = %verb, url = %url, "Executing request");

        let outcome = self.transport.execute(HttpCall { verb, url, body }).await;
        let status = outcome.status;
        let content = validate(outcome, self.success).inspect_err(|e| {
            tracing::warn!(verb = %verb, status, error = %e, "Request failed");
        })?;

        tracing::debug!(verb = %verb, status, "Request succeeded");

        match response_type {
            ResponseType::Unit => Ok(None),
            ResponseType::Json(_) => Ok(Some(self.serializer.deserialize(&response_type, &content)?)),
        }
    }
}

impl std::fmt::Debug for RestProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestProxy")
            .field("success", &self.success)
            .field("placeholders", &self.placeholders)
            .finish()
    }
}

#[async_trait]
impl RestExecutor for RestProxy {
    async fn get(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>> {
        let (request, response_type) = check_args(base_url, resource_url, request, response_type)?;
        self.execute(HttpVerb::Get, base_url, resource_url, request, response_type)
            .await
    }

    async fn post(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>> {
        let (request, response_type) = check_args(base_url, resource_url, request, response_type)?;
        self.execute(HttpVerb::Post, base_url, resource_url, request, response_type)
            .await
    }

    async fn put(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>> {
        let (request, response_type) = check_args(base_url, resource_url, request, response_type)?;
        self.execute(HttpVerb::Put, base_url, resource_url, request, response_type)
            .await
    }

    async fn delete(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
    ) -> ProxyResult<()> {
        let request = check_request(base_url, resource_url, request)?;
        self.execute(HttpVerb::Delete, base_url, resource_url, request, ResponseType::Unit)
            .await
            .map(|_| ())
    }
}

fn check_request<'a>(
    base_url: &str,
    resource_url: &str,
    request: Option<&'a Value>,
) -> ProxyResult<&'a Value> {
    if base_url.trim().is_empty() {
        return Err(ProxyError::Argument("baseUrl"));
    }
    if resource_url.trim().is_empty() {
        return Err(ProxyError::Argument("resourceUrl"));
    }
    match request {
        None | Some(Value::Null) => Err(ProxyError::Argument("request")),
        Some(request) => Ok(request),
    }
}

fn check_args<'a>(
    base_url: &str,
    resource_url: &str,
    request: Option<&'a Value>,
    response_type: Option<ResponseType>,
) -> ProxyResult<(&'a Value, ResponseType)> {
    let request = check_request(base_url, resource_url, request)?;
    let response_type = response_type.ok_or(ProxyError::Argument("responseType"))?;
    Ok((request, response_type))
}

/// Join a base URL and a resolved path without re-encoding the path.
fn join_url(base_url: &str, path: &str) -> Result<String, ConfigurationError> {
    url::Url::parse(base_url).map_err(|source| ConfigurationError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        Ok(format!("{base}{path}"))
    } else {
        Ok(format!("{base}/{path}"))
    }
}
