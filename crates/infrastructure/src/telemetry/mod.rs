//! Logging setup
//!
//! Installs the global `tracing` subscriber for the binary.

mod logging;

pub use logging::{TelemetryError, init_logging, log_filter_from_verbosity};
