//! Storage entity traits

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be used as storage keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for backends that index by string
    fn as_str(&self) -> &str;
}

/// Trait for documents kept in a [`Storage`](super::Storage) collection
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    type Key: StorageKey;

    fn key(&self) -> &Self::Key;
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde::{Deserialize, Serialize};

    use super::{StorageEntity, StorageKey};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NoteKey(pub String);

    impl StorageKey for NoteKey {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    /// Minimal document used by the storage backend tests
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Note {
        pub key: NoteKey,
        pub body: String,
    }

    impl Note {
        pub fn new(key: &str, body: &str) -> Self {
            Self {
                key: NoteKey(key.to_string()),
                body: body.to_string(),
            }
        }
    }

    impl StorageEntity for Note {
        type Key = NoteKey;

        fn key(&self) -> &Self::Key {
            &self.key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{Note, NoteKey};
    use super::*;

    #[test]
    fn test_storage_key_as_str() {
        let key = NoteKey("note-1".to_string());
        assert_eq!(key.as_str(), "note-1");
    }

    #[test]
    fn test_storage_entity_key() {
        let note = Note::new("note-2", "hello");
        assert_eq!(note.key().as_str(), "note-2");
    }
}
