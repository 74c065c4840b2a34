//! Static route tables for client interfaces.
//!
//! A [`ServiceContract`] is what `rest_service!` emits for each declared
//! interface: the declared service-route records and, per method, the declared
//! method-route records and return type. It is built at compile time and never
//! mutated.

use crate::routing::descriptor::{MethodRoute, ResponseType, ServiceRoute};

/// Whether a contract describes an interface or a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    Interface,
    Concrete,
}

/// Route table of one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodContract {
    pub name: &'static str,
    /// Declared method-route records; exactly one is valid.
    pub routes: &'static [MethodRoute],
    pub returns: ResponseType,
    /// Number of declared request arguments.
    pub arity: usize,
}

/// Route table of one client interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceContract {
    pub name: &'static str,
    pub kind: ContractKind,
    /// Declared service-route records; exactly one is valid.
    pub routes: &'static [ServiceRoute],
    pub methods: &'static [MethodContract],
}

impl ServiceContract {
    pub fn is_interface(&self) -> bool {
        self.kind == ContractKind::Interface
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&'static MethodContract> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Implemented by every type that carries a route table.
pub trait RestContract {
    fn contract() -> &'static ServiceContract;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::descriptor::HttpVerb;

    const CONTRACT: ServiceContract = ServiceContract {
        name: "Orders",
        kind: ContractKind::Interface,
        routes: &[ServiceRoute::Setting("OrdersEndpoint")],
        methods: &[MethodContract {
            name: "get_order",
            routes: &[MethodRoute::new(HttpVerb::Get, "/orders/{id}")],
            returns: ResponseType::Json("Order"),
            arity: 1,
        }],
    };

    #[test]
    fn test_method_lookup() {
        assert!(CONTRACT.is_interface());
        let method = CONTRACT.method("get_order").unwrap();
        assert_eq!(method.routes[0].template, "/orders/{id}");
        assert!(CONTRACT.method("missing").is_none());
    }
}
