//! Declarative REST clients.
//!
//! A client interface is declared once with [`rest_service!`]: a service
//! route naming its base URL and, per method, an HTTP verb and a URL template
//! whose `{Name}` placeholders are filled from the request's fields. Calls on
//! the generated client are dispatched to a [`RestExecutor`] which builds the
//! URL, sends the request and decodes the JSON response.
//!
//! ```text
//! rest_service! ─▶ routing (route tables, descriptors, templates)
//!                     │
//! ProxyFactory ─▶ client ─▶ proxy::Dispatcher ─▶ http::RestProxy ─▶ reqwest
//!                                │                     │
//!                     config (base URLs)     serialization (JSON)
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod proxy;
pub mod routing;
pub mod serialization;

#[cfg(test)]
mod testing;

#[doc(hidden)]
pub use async_trait;

pub use config::{ClientConfig, ConfigSettings, SettingsProvider};
pub use error::{ConfigurationError, HttpError, ProxyError, ProxyResult};
pub use http::{RestExecutor, RestProxy, SuccessPolicy};
pub use proxy::{Dispatcher, Invocation, ProxyFactory};
pub use routing::{HttpVerb, PlaceholderPolicy, RestContract};
