mod application;
mod cli;
mod domain;
mod errors;
mod handlers;
mod models;
mod service;
mod utils;

use cli::Cli;
use handlers::run;
use utils::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments (--help/--version exit here)
    let _cli = Cli::parse_args();

    // Initialize logging based on environment
    logging::init_logging()?;

    // Run the MCP server over stdio
    if let Err(e) = run().await {
        tracing::error!("Failed to run MCP server: {}", e);
        return Err(e);
    }

    Ok(())
}
