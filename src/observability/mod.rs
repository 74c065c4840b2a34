//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! resolver, dispatcher, executor
//!     → tracing events (debug: resolution, calls; warn: HTTP failures)
//!     → logging.rs subscriber (pretty or JSON, stdout)
//! ```
//!
//! # Design Decisions
//! - Request and response bodies are never logged
//! - The library only emits events; binaries install the subscriber

pub mod logging;

pub use logging::init_logging;
