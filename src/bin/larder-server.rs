// ABOUTME: Main server binary for the Larder meal-planning backend
// ABOUTME: Loads configuration, initializes storage, and serves the REST API
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Larder Server Binary
//!
//! Starts the Larder HTTP API with the configured storage backend. Mock mode
//! (`MOCK_MODE=true`) serves from a seeded in-memory backend so the web
//! client can be developed without a database or recipe generator.

use anyhow::Result;
use clap::Parser;
use larder_server::{config::environment::ServerConfig, logging, server::LarderServer};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "larder-server")]
#[command(about = "Larder - meal planning and grocery list backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Larder Server");
    info!("{}", config.summary());

    let server = LarderServer::new(config.clone()).await?;

    display_available_endpoints(&config);
    info!("Ready to serve meal plans and shopping lists!");

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("   Health Check:      GET  http://{host}:{port}/api/health");
    info!("Pantry:");
    info!("   List Items:        GET  http://{host}:{port}/api/pantry");
    info!("   Add Item:          POST http://{host}:{port}/api/pantry");
    info!("   Delete Item:       DELETE http://{host}:{port}/api/pantry/{{item_id}}");
    info!("Stores:");
    info!("   List Stores:       GET  http://{host}:{port}/api/stores");
    info!("   Add Store:         POST http://{host}:{port}/api/stores");
    info!("   Delete Store:      DELETE http://{host}:{port}/api/stores/{{store_id}}");
    info!("Favorites:");
    info!("   List Favorites:    GET  http://{host}:{port}/api/favorites");
    info!("   Add Favorite:      POST http://{host}:{port}/api/favorites");
    info!("   Delete Favorite:   DELETE http://{host}:{port}/api/favorites/{{recipe_id}}");
    info!("Meal Plans:");
    info!("   Generate Plan:     POST http://{host}:{port}/api/mealplan/generate");
    info!("   Generate One:      POST http://{host}:{port}/api/mealplan/generate-one");
    info!("Shopping List:");
    info!("   Generate List:     POST http://{host}:{port}/api/shoppinglist/generate");
    info!("=== End of Endpoint List ===");
}
