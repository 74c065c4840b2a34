//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! rest_service! declaration
//!     → contract.rs (static route table per interface)
//!     → resolver.rs (exactly one record per interface / method)
//!     → descriptor.rs (verb, template, response type)
//!     → template.rs (template + request fields → path)
//! ```
//!
//! # Design Decisions
//! - Route tables are built at compile time, never looked up by reflection
//! - Descriptors are immutable and safe to share across threads
//! - Template resolution never encodes and never fails unless asked to

pub mod contract;
pub mod descriptor;
pub mod resolver;
pub mod template;

pub use contract::{ContractKind, MethodContract, RestContract, ServiceContract};
pub use descriptor::{
    HttpVerb, MethodRoute, MethodRouteDescriptor, ResponseType, ServiceRoute,
    ServiceRouteDescriptor,
};
pub use resolver::RouteResolver;
pub use template::{PlaceholderPolicy, TemplateError, UrlSegment};
