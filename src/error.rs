//! Error taxonomy for the dispatch pipeline.
//!
//! # Classes
//! - `ConfigurationError`: malformed routing metadata or an unresolvable base URL
//! - `Argument`: a required executor parameter was missing or blank
//! - `HttpError`: the call failed at the transport or returned a non-success status
//! - `VerbOutOfRange`: a verb reached the dispatcher that it cannot map (internal bug)
//! - `InvalidOperation`: a proxy was requested for something that is not an interface
//!
//! Nothing here is retried or recovered locally; every error is relayed to the
//! caller of the proxy method.

use thiserror::Error;

use crate::routing::template::TemplateError;
use crate::serialization::SerializationError;

/// Standard boxed error used for opaque transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid or missing routing configuration. Fatal to the call.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The interface declares zero or more than one service route.
    #[error("The interface {interface} has invalid usage of ServiceRoute ({count} declared)")]
    InvalidServiceRoute { interface: String, count: usize },

    /// The method declares zero or more than one method route.
    #[error("The method {method} has invalid usage of MethodRoute ({count} declared)")]
    InvalidMethodRoute { method: String, count: usize },

    /// The invoked method is not part of the interface's route table.
    #[error("The method {method} is not declared on interface {interface}")]
    UnknownMethod { interface: String, method: String },

    /// More than one request argument was supplied.
    #[error("The method {method} was invoked with {count} arguments; at most one request argument is supported")]
    UnsupportedArity { method: String, count: usize },

    /// The settings store has no usable value for the key.
    #[error("No entry found for setting {setting}")]
    MissingSetting { setting: String },

    /// The resolved base URL is not an absolute URL.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failure of one executed HTTP call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The transport reported a lower-level failure (refused, timeout, ...).
    #[error("Server returned error: {message}")]
    Transport {
        message: String,
        #[source]
        source: BoxError,
    },

    /// The server answered with a status the success policy rejects.
    #[error("Server returned error: {description}")]
    Status { status: u16, description: String },
}

impl HttpError {
    /// Status code of the response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Transport { .. } => None,
            HttpError::Status { status, .. } => Some(*status),
        }
    }
}

/// Top-level error returned by every proxy call.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A required parameter was null or blank; carries the parameter name.
    #[error("Value cannot be null or blank. Parameter name: {0}")]
    Argument(&'static str),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The route carries a verb the dispatcher has no executor call for.
    #[error("Specified argument was out of the range of valid values: verb {0}")]
    VerbOutOfRange(String),

    /// A proxy was requested for a type that is not an interface.
    #[error("An interface must be provided to create a proxy ('{0}' is not an interface)")]
    InvalidOperation(String),
}

impl ProxyError {
    /// Parameter name carried by an `Argument` error.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            ProxyError::Argument(name) => Some(name),
            _ => None,
        }
    }
}

/// Result type for proxy operations.
pub type ProxyResult<T> = Result<T, ProxyError>;
