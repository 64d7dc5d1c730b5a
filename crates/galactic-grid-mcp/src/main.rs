use anyhow::Result;
use tracing::info;

use galactic_grid_lib::SpaceApiConfig;
use galactic_grid_mcp::GalacticGridServer;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging must go to stderr; stdout carries the MCP protocol stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("galactic_grid_mcp=info".parse()?)
                .add_directive("galactic_grid_lib=info".parse()?),
        )
        .init();

    let config = SpaceApiConfig::from_env();
    info!("configuration loaded");

    let server = GalacticGridServer::from_config(&config)?;
    server.serve_stdio().await
}
