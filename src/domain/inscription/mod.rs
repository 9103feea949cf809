//! Inscription domain module.
//!
//! An inscription enrolls a participant in a training session. The catalog
//! only relies on the `session_id` foreign key to guard session deletion.

mod aggregate;

pub use aggregate::Inscription;
