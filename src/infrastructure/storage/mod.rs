//! Storage infrastructure - storage implementations

mod factory;
mod in_memory;
mod postgres;

pub use factory::{StorageConfig, StorageFactory, StorageType, INQUIRIES_TABLE, PROJECTS_TABLE};
pub use in_memory::InMemoryStorage;
pub use postgres::{connect_pool, PostgresConfig, PostgresStorage};
