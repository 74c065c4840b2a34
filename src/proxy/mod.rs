//! Client generation subsystem.
//!
//! # Data Flow
//! ```text
//! rest_service! declaration
//!     → macros.rs (trait, client struct, static route table)
//!     → factory.rs (interface check, one client per create_proxy)
//!     → client method call
//!     → dispatcher.rs (descriptors, base URL, request, verb)
//!     → RestExecutor
//! ```

pub mod dispatcher;
pub mod factory;
mod macros;

pub use dispatcher::{Dispatcher, Invocation};
pub use factory::ProxyFactory;
