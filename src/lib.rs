//! Jino dashboard web server library.
//!
//! # Architecture Overview
//!
//! ```text
//! CLI arguments ──┐
//!                 ├─▶ config (merged key/value map, defaults at read time)
//! INI file ───────┘        │
//!                          ▼
//!                  http::HttpServer ◀── webapp (dashboard routes)
//!                          │
//!                          ▼
//!                  axum serve loop (until interrupt)
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod webapp;

// Cross-cutting concerns
pub mod observability;

pub use config::settings::Configuration;
pub use http::HttpServer;
