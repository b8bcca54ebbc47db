// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Handles environment-driven configuration for ports, storage, CORS, and mock mode
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Configuration management for the Larder server

/// Environment-based runtime configuration
pub mod environment;
