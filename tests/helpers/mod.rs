// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builds test routers and provides HTTP request utilities

pub mod axum_test;

use larder_server::config::environment::{DatabaseConfig, DatabaseUrl, ServerConfig};
use larder_server::server::LarderServer;

/// Build a full application router backed by seeded in-memory storage
#[allow(dead_code)]
pub async fn mock_app() -> axum::Router {
    let config = ServerConfig {
        mock_mode: true,
        ..ServerConfig::default()
    };
    let server = LarderServer::new(config)
        .await
        .expect("failed to build mock server");
    server.router()
}

/// Build a full application router backed by a SQLite file in `dir`
#[allow(dead_code)]
pub async fn sqlite_app(dir: &tempfile::TempDir) -> axum::Router {
    let url = format!("sqlite:{}/larder_test.db", dir.path().display());
    let config = ServerConfig {
        database: DatabaseConfig {
            url: DatabaseUrl::parse_url(&url),
            auto_migrate: true,
        },
        ..ServerConfig::default()
    };
    let server = LarderServer::new(config)
        .await
        .expect("failed to build sqlite server");
    server.router()
}
