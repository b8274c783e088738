//! # daylog-database
//!
//! Record store for Daylog: the [`UserStore`] and [`LogStore`] traits,
//! their PostgreSQL repositories, an in-memory implementation with the
//! same constraints, and the [`Database`] handle that picks one from
//! configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Database;
pub use store::{LogStore, UserStore};
