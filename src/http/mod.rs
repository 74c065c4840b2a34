//! HTTP execution subsystem.
//!
//! # Data Flow
//! ```text
//! (verb, base URL, template, request, response type)
//!     → executor.rs (argument checks, template resolution, body encoding)
//!     → transport.rs (one HTTP call, reqwest)
//!     → status.rs (transport failure? success status?)
//!     → executor.rs (body decoding)
//! ```

pub mod executor;
pub mod status;
pub mod transport;

pub use executor::{RestExecutor, RestProxy};
pub use status::SuccessPolicy;
pub use transport::{HttpCall, HttpOutcome, ReqwestTransport, Transport};
