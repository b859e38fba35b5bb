//! Observability: tracing initialization.

pub mod logging;

pub use logging::{init_logging, verbosity_to_directive};
