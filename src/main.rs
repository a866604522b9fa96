use clap::Parser;
use tokio::net::TcpListener;

use jino::config::{loader, Args};
use jino::observability::LoggingConfig;
use jino::{webapp, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration must be fully assembled before the application exists.
    let config = loader::load(&args)?;
    LoggingConfig::from_settings(&config).init();

    tracing::info!(
        bind_host = %config.bind_host(),
        port = config.port(),
        debug = config.debug(),
        "Configuration loaded"
    );

    let server = HttpServer::new(config, webapp::router());
    let listener = TcpListener::bind(server.bind_addr()).await?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
