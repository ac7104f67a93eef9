//! Shared service infrastructure: tracing, health endpoints, request-id
//! middleware, identity extraction, and serde helpers.

pub mod health;
pub mod identity;
pub mod middleware;
pub mod serde;
pub mod tracing;
