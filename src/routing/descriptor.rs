//! Route descriptors: the static routing records declared on client interfaces.
//!
//! # Design Decisions
//! - Records are plain `const`-constructible data so a whole interface's route
//!   table can live in a `static`/`const` item
//! - Declared records are kept as slices, so "zero or several" stays
//!   representable and is rejected by the resolver rather than by the type system

use std::fmt;

/// HTTP verbs understood by the routing surface.
///
/// Only `Get`, `Post`, `Put` and `Delete` have an executor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Head => "HEAD",
            HttpVerb::Options => "OPTIONS",
        }
    }

    /// Whether the verb carries the request as a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpVerb::Post | HttpVerb::Put | HttpVerb::Patch)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface-level routing record: where the base URL comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceRoute {
    /// Look the base URL up in the settings provider under this key.
    Setting(&'static str),
    /// Use this literal base URL.
    BaseUrl(&'static str),
}

/// Method-level routing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodRoute {
    pub verb: HttpVerb,
    /// Path template with zero or more `{name}` placeholders.
    pub template: &'static str,
}

impl MethodRoute {
    pub const fn new(verb: HttpVerb, template: &'static str) -> Self {
        Self { verb, template }
    }
}

/// Declared return type of a client method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// The method returns nothing; the response body is never read.
    Unit,
    /// The body is decoded as JSON into the named type.
    Json(&'static str),
}

impl ResponseType {
    pub fn is_unit(&self) -> bool {
        matches!(self, ResponseType::Unit)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ResponseType::Unit => "()",
            ResponseType::Json(name) => name,
        }
    }
}

/// Resolved per-interface descriptor (exactly one service route).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRouteDescriptor {
    pub interface: &'static str,
    pub route: ServiceRoute,
}

/// Resolved per-method descriptor (exactly one method route).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRouteDescriptor {
    pub method: &'static str,
    pub verb: HttpVerb,
    pub template: &'static str,
    pub response_type: ResponseType,
}
