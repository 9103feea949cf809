//! Formation Sessions - training session catalog backend
//!
//! REST service for creating, reading, updating and deleting training
//! sessions. A session cannot be deleted while inscriptions reference it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
