//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `memory` - In-process repositories
//! - `postgres` - PostgreSQL repositories via sqlx

pub mod http;
pub mod memory;
pub mod postgres;
