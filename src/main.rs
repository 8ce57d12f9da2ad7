//! The Conversion Kitchen
//!
//! An MCP server for kitchen measurement conversion and recipe scaling.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use conversion_kitchen::catalog::{Catalog, CATALOG_PATH_ENV};
use conversion_kitchen::mcp::KitchenService;
use conversion_kitchen::tools::status::VERSION;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so it does not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("conversion_kitchen=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    eprintln!("===============================================");
    eprintln!("  The Conversion Kitchen v{}", VERSION);
    eprintln!("===============================================");
    eprintln!("Starting MCP server on stdio...");

    let catalog = Catalog::from_env()?;
    let catalog_source = std::env::var(CATALOG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| "builtin".to_string());
    tracing::info!(
        "Catalog ready from {}: {} templates, {} weighed ingredients",
        catalog_source,
        catalog.templates().len(),
        catalog.ingredient_weights().len()
    );

    let service = KitchenService::new(catalog, catalog_source);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
