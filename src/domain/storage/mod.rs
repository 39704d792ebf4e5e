//! Storage domain - generic document storage abstraction

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::Storage;

#[cfg(test)]
pub(crate) use entity::fixtures;
#[cfg(test)]
pub use repository::mock;
