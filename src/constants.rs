// ABOUTME: System-wide constants and configuration values for the Larder API
// ABOUTME: Contains service identity, environment defaults, and categorization keyword tables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

use std::env;

/// Service identity constants
pub mod service {
    use std::env;

    /// Service name used in structured logs
    pub const NAME: &str = "larder-server";

    /// Get server name from environment or default
    #[must_use]
    pub fn server_name() -> String {
        env::var("SERVICE_NAME").unwrap_or_else(|_| NAME.into())
    }
}

/// Network and transport defaults
pub mod defaults {
    /// Default HTTP API port
    pub const HTTP_PORT: u16 = 5001;

    /// Default bind host
    pub const HOST: &str = "127.0.0.1";

    /// Maximum accepted JSON request body size in bytes (2 MB)
    pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

    /// Default database location when `DATABASE_URL` is unset
    pub const DATABASE_URL: &str = "sqlite:./data/larder.db";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// HTTP port override
    pub const PORT: &str = "PORT";

    /// Database connection string (sqlite path or `sqlite::memory:`)
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// Mock mode toggle ("true" enables the in-memory backend with seed data)
    pub const MOCK_MODE: &str = "MOCK_MODE";

    /// Comma-separated list of allowed CORS origins, or "*"
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Log level (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Shopping category names as they appear in API responses
pub mod categories {
    pub const PRODUCE: &str = "Produce";
    pub const MEAT: &str = "Meat";
    pub const PANTRY: &str = "Pantry";
    pub const MISCELLANEOUS: &str = "Miscellaneous";
}

/// Keyword tables for shopping-list categorization.
///
/// Matching is substring-based against the already lower-cased item line, and
/// the tables are consulted in precedence order (meat, produce, pantry). An
/// item matching none of them falls through to Miscellaneous.
pub mod keywords {
    /// Keywords assigning an item to the Meat category
    pub const MEAT: &[&str] = &["chicken", "beef", "shrimp"];

    /// Keywords assigning an item to the Produce category
    pub const PRODUCE: &[&str] = &["onion", "garlic", "lettuce", "spinach"];

    /// Keywords assigning an item to the Pantry category
    pub const PANTRY: &[&str] = &["oil", "flour", "salt", "canned"];
}

/// Check whether mock mode is enabled via the environment
#[must_use]
pub fn mock_mode_enabled() -> bool {
    env::var(env_config::MOCK_MODE)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
