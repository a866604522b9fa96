//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI arguments (clap)
//!     → cli.rs (typed Args, explicit field listing)
//!     → settings.rs (Configuration map, keys upper-cased)
//!     → loader.rs (optional INI file merged on top, keys as authored)
//!     → Configuration (immutable thereafter, defaults at read time)
//! ```
//!
//! # Design Decisions
//! - Config is assembled once at startup and never mutated afterwards
//! - CLI fields land under upper-cased keys; file options keep their authored
//!   case, so the two sources are effectively separate namespaces
//! - Typed accessors read the upper-case keys only and carry the defaults

pub mod cli;
pub mod loader;
pub mod settings;

pub use cli::Args;
pub use loader::{load, resolve_config_file, ConfigError, DEFAULT_CONFIG_FILE};
pub use settings::{ConfigValue, Configuration};
