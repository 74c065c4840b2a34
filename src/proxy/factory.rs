//! Client construction.

use std::sync::Arc;

use crate::error::{ProxyError, ProxyResult};
use crate::http::executor::RestExecutor;
use crate::routing::contract::{RestContract, ServiceContract};

type Builder<P> = dyn Fn(Arc<dyn RestExecutor>) -> P + Send + Sync;

/// Produces clients for one interface, all sharing one executor.
pub struct ProxyFactory<P> {
    contract: &'static ServiceContract,
    executor: Arc<dyn RestExecutor>,
    builder: Box<Builder<P>>,
}

impl<P> ProxyFactory<P> {
    /// Fails with [`ProxyError::InvalidOperation`] unless `contract`
    /// describes an interface.
    pub fn new<F>(
        contract: &'static ServiceContract,
        executor: Arc<dyn RestExecutor>,
        builder: F,
    ) -> ProxyResult<Self>
    where
        F: Fn(Arc<dyn RestExecutor>) -> P + Send + Sync + 'static,
    {
        if !contract.is_interface() {
            return Err(ProxyError::InvalidOperation(contract.name.to_string()));
        }

        Ok(Self {
            contract,
            executor,
            builder: Box::new(builder),
        })
    }

    /// Factory for a client type generated by `rest_service!`.
    pub fn for_client<F>(executor: Arc<dyn RestExecutor>, builder: F) -> ProxyResult<Self>
    where
        P: RestContract,
        F: Fn(Arc<dyn RestExecutor>) -> P + Send + Sync + 'static,
    {
        Self::new(P::contract(), executor, builder)
    }

    /// A fresh client on every call.
    pub fn create_proxy(&self) -> P {
        tracing::debug!(interface = self.contract.name, "creating client");
        (self.builder)(self.executor.clone())
    }

    pub fn contract(&self) -> &'static ServiceContract {
        self.contract
    }
}

impl<P> std::fmt::Debug for ProxyFactory<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyFactory")
            .field("interface", &self.contract.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::contract::ContractKind;
    use crate::testing::RecordingExecutor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static INTERFACE: ServiceContract = ServiceContract {
        name: "PortOrderService",
        kind: ContractKind::Interface,
        routes: &[],
        methods: &[],
    };

    static CONCRETE: ServiceContract = ServiceContract {
        name: "PortOrderRepository",
        kind: ContractKind::Concrete,
        routes: &[],
        methods: &[],
    };

    struct Client {
        executor: Arc<dyn RestExecutor>,
    }

    impl RestContract for Client {
        fn contract() -> &'static ServiceContract {
            &INTERFACE
        }
    }

    fn executor() -> Arc<dyn RestExecutor> {
        RecordingExecutor::answering(None)
    }

    #[test]
    fn test_concrete_contract_is_rejected() {
        let err = ProxyFactory::new(&CONCRETE, executor(), |executor| Client { executor }).unwrap_err();
        assert!(matches!(err, ProxyError::InvalidOperation(ref name) if name == "PortOrderRepository"));
    }

    #[test]
    fn test_fresh_client_per_call_sharing_executor() {
        let executor = executor();
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();
        let factory = ProxyFactory::new(&INTERFACE, executor.clone(), move |executor| {
            counter.fetch_add(1, Ordering::SeqCst);
            Client { executor }
        })
        .unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 0);

        let first = factory.create_proxy();
        let second = factory.create_proxy();
        assert_eq!(built.load(Ordering::SeqCst), 2);
        assert!(Arc::ptr_eq(&first.executor, &executor));
        assert!(Arc::ptr_eq(&second.executor, &executor));
    }

    #[test]
    fn test_for_client_uses_generated_contract() {
        let factory = ProxyFactory::<Client>::for_client(executor(), |executor| Client { executor }).unwrap();
        assert_eq!(factory.contract().name, "PortOrderService");
    }
}
