//! Route metadata resolution.
//!
//! # Responsibilities
//! - Reduce an interface's declared service routes to one descriptor
//! - Reduce a method's declared method routes to one descriptor
//! - Reject zero or multiple records, naming the interface or method
//!
//! # Design Decisions
//! - Resolution is pure; results are cached for the process lifetime since
//!   route tables are static
//! - Cache entries are keyed by the address of the interface's route table, not
//!   its name: two interfaces may share a name across modules
//! - Only successful resolutions are cached, so a broken declaration fails on
//!   every call

use dashmap::DashMap;

use crate::error::ConfigurationError;
use crate::routing::contract::{MethodContract, ServiceContract};
use crate::routing::descriptor::{MethodRouteDescriptor, ServiceRouteDescriptor};

/// Resolve the single service route of an interface.
pub fn resolve_service(
    contract: &ServiceContract,
) -> Result<ServiceRouteDescriptor, ConfigurationError> {
    match contract.routes {
        [route] => Ok(ServiceRouteDescriptor {
            interface: contract.name,
            route: *route,
        }),
        routes => Err(ConfigurationError::InvalidServiceRoute {
            interface: contract.name.to_string(),
            count: routes.len(),
        }),
    }
}

/// Resolve the single method route of a method.
pub fn resolve_method(method: &MethodContract) -> Result<MethodRouteDescriptor, ConfigurationError> {
    match method.routes {
        [route] => Ok(MethodRouteDescriptor {
            method: method.name,
            verb: route.verb,
            template: route.template,
            response_type: method.returns,
        }),
        routes => Err(ConfigurationError::InvalidMethodRoute {
            method: method.name.to_string(),
            count: routes.len(),
        }),
    }
}

/// Identity of a route table.
fn contract_key(contract: &ServiceContract) -> usize {
    std::ptr::from_ref(contract) as usize
}

/// Caching front for [`resolve_service`] and [`resolve_method`].
#[derive(Debug, Default)]
pub struct RouteResolver {
    services: DashMap<usize, ServiceRouteDescriptor>,
    methods: DashMap<(usize, &'static str), MethodRouteDescriptor>,
}

impl RouteResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve_service(
        &self,
        contract: &ServiceContract,
    ) -> Result<ServiceRouteDescriptor, ConfigurationError> {
        let key = contract_key(contract);
        if let Some(cached) = self.services.get(&key) {
            return Ok(cached.clone());
        }

        let descriptor = resolve_service(contract)?;
        tracing::debug!(
            interface = contract.name,
            route = ?descriptor.route,
            "Service route resolved"
        );
        self.services.insert(key, descriptor.clone());
        Ok(descriptor)
    }

    pub fn resolve_method(
        &self,
        contract: &ServiceContract,
        method: &MethodContract,
    ) -> Result<MethodRouteDescriptor, ConfigurationError> {
        let key = (contract_key(contract), method.name);
        if let Some(cached) = self.methods.get(&key) {
            return Ok(cached.clone());
        }

        let descriptor = resolve_method(method)?;
        tracing::debug!(
            interface = contract.name,
            method = method.name,
            verb = %descriptor.verb,
            template = descriptor.template,
            "Method route resolved"
        );
        self.methods.insert(key, descriptor.clone());
        Ok(descriptor)
    }

    /// Number of cached method descriptors.
    pub fn cached_methods(&self) -> usize {
        self.methods.len()
    }
}
