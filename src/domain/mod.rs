//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `session` - Training session records and partial-update rules
//! - `inscription` - Enrollments referencing a session

pub mod foundation;
pub mod inscription;
pub mod session;
