//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! merged Configuration + webapp router
//!     → server.rs (Axum setup, middleware, shared state)
//!     → axum::serve on the bound listener
//!     → runs until interrupt (graceful shutdown)
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
