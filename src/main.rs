//! fitcalc
//!
//! An MCP server for gym body-metrics and nutrition calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitcalc::build_info;
use fitcalc::config::Config;
use fitcalc::mcp::FitcalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    // Print startup banner to stderr
    build_info::print_startup_banner(&config);
    eprintln!("Starting MCP server on stdio...");

    let service = FitcalcService::new(config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
