//! Command-line arguments.

use clap::Parser;

/// Arguments accepted by the jino server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "jino")]
#[command(about = "Jino dashboard web server", long_about = None)]
pub struct Args {
    /// Path to an override configuration file (empty = use the default path).
    #[arg(long, default_value = "")]
    pub config_file: String,

    /// Enable debug logging and framework debug mode.
    #[arg(long)]
    pub jino_debug: bool,

    /// Listen address.
    #[arg(long)]
    pub bind_host: Option<String>,

    /// Listen port.
    #[arg(long)]
    pub port: Option<u16>,
}
