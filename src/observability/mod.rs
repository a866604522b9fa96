//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Verbosity derived from the merged configuration, `RUST_LOG` overrides
//! - Fixed single-line event format shared by all modules

pub mod logging;

pub use logging::LoggingConfig;
