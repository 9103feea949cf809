//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers (list, get) only read; command handlers (create, update,
//! delete) write through the repository ports.

pub mod handlers;

pub use handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
    UpdateSessionCommand, UpdateSessionHandler,
};
