// ABOUTME: HTTP middleware for the Larder server
// ABOUTME: Cross-cutting request handling layered onto the router

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

pub mod cors;

pub use cors::setup_cors;
