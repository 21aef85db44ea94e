//! HTTP API: request context extraction, identity middleware, and routing.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
