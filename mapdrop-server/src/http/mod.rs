//! HTTP layer: server setup, error mapping, route handlers

pub mod error;
pub mod routes;
pub mod server;
