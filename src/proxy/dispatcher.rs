//! Method-call dispatch.
//!
//! # Responsibilities
//! - Resolve the service and method descriptors for an invocation
//! - Resolve the effective base URL (literal or through settings)
//! - Pick the single request argument
//! - Map the route's verb onto the matching executor call
//!
//! # Design Decisions
//! - No state survives a call apart from the descriptor cache
//! - Every failure is returned to the caller unchanged

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::settings::SettingsProvider;
use crate::error::{ConfigurationError, ProxyError, ProxyResult};
use crate::http::executor::RestExecutor;
use crate::routing::contract::ServiceContract;
use crate::routing::descriptor::{HttpVerb, ServiceRoute};
use crate::routing::resolver::RouteResolver;
use crate::serialization;

/// One call made on a client interface.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Route table of the declaring interface.
    pub contract: &'static ServiceContract,
    /// Name of the invoked method.
    pub method: &'static str,
    /// Positional arguments in value form; zero or one is supported.
    pub arguments: Vec<Value>,
}

impl Invocation {
    pub fn new(contract: &'static ServiceContract, method: &'static str, arguments: Vec<Value>) -> Self {
        Self {
            contract,
            method,
            arguments,
        }
    }
}

/// Turns invocations into executor calls.
#[derive(Clone)]
pub struct Dispatcher {
    executor: Arc<dyn RestExecutor>,
    settings: Arc<dyn SettingsProvider>,
    resolver: Arc<RouteResolver>,
}

impl Dispatcher {
    pub fn new(executor: Arc<dyn RestExecutor>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self {
            executor,
            settings,
            resolver: Arc::new(RouteResolver::new()),
        }
    }

    /// Dispatch one invocation, returning the executor's result.
    ///
    /// `None` means the method produces no value.
    pub async fn on_invoke(&self, invocation: Invocation) -> ProxyResult<Option<Value>> {
        let contract = invocation.contract;
        let service = self.resolver.resolve_service(contract)?;

        let method = contract
            .method(invocation.method)
            .ok_or_else(|| ConfigurationError::UnknownMethod {
                interface: contract.name.to_string(),
                method: invocation.method.to_string(),
            })?;
        let route = self.resolver.resolve_method(contract, method)?;

        let base_url = match service.route {
            ServiceRoute::Setting(key) => self.settings.get_base_url(key)?,
            ServiceRoute::BaseUrl(url) => url.to_string(),
        };

        let request = single_request(method.name, invocation.arguments)?;
        let response_type = Some(route.response_type);

        match route.verb {
            HttpVerb::Get => {
                self.executor
                    .get(&base_url, route.template, Some(&request), response_type)
                    .await
            }
            HttpVerb::Post => {
                self.executor
                    .post(&base_url, route.template, Some(&request), response_type)
                    .await
            }
            HttpVerb::Put => {
                self.executor
                    .put(&base_url, route.template, Some(&request), response_type)
                    .await
            }
            HttpVerb::Delete => {
                self.executor
                    .delete(&base_url, route.template, Some(&request))
                    .await?;
                Ok(None)
            }
            other => Err(ProxyError::VerbOutOfRange(other.to_string())),
        }
    }

    /// Dispatch and decode the result into the method's return type.
    pub async fn invoke<T: DeserializeOwned>(&self, invocation: Invocation) -> ProxyResult<T> {
        let value = self.on_invoke(invocation).await?;
        Ok(serialization::from_value(value)?)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("cached_methods", &self.resolver.cached_methods())
            .finish()
    }
}

/// Zero arguments dispatch an empty object; more than one is unsupported.
fn single_request(method: &str, arguments: Vec<Value>) -> Result<Value, ConfigurationError> {
    let count = arguments.len();
    let mut arguments = arguments.into_iter();
    match (arguments.next(), count) {
        (None, _) => Ok(Value::Object(Map::new())),
        (Some(request), 1) => Ok(request),
        _ => Err(ConfigurationError::UnsupportedArity {
            method: method.to_string(),
            count,
        }),
    }
}
