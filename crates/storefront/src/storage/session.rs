//! Session-backed storage for the HTTP service.
//!
//! Each browser session plays the role of the shopper's local storage. The
//! session API is async while [`LocalStorage`] is not, so a request loads a
//! snapshot of the storage keys up front, runs the synchronous cart store
//! against it, and writes the changed keys back before responding.

use std::collections::BTreeSet;

use tower_sessions::Session;

use super::{CART_KEY, CURRENCY_KEY, LocalStorage, MemoryStorage, StorageError};

/// Keys mirrored between the session and the snapshot.
const SESSION_KEYS: [&str; 2] = [CART_KEY, CURRENCY_KEY];

/// A per-request snapshot of the session's storage keys.
#[derive(Debug, Default)]
pub struct SessionStorage {
    items: MemoryStorage,
    dirty: BTreeSet<String>,
}

impl SessionStorage {
    /// Snapshot the storage keys held by `session`.
    ///
    /// Values that are not strings are skipped, which the cart store then
    /// treats like absent keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        let mut items = MemoryStorage::new();
        for key in SESSION_KEYS {
            match session.get::<String>(key).await {
                Ok(Some(value)) => items.insert(key, value),
                Ok(None) => {}
                Err(tower_sessions::session::Error::SerdeJson(e)) => {
                    tracing::warn!(key, error = %e, "Discarding non-string session value");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self {
            items,
            dirty: BTreeSet::new(),
        })
    }

    /// Write every key changed since [`load`](Self::load) back to `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn flush(self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        for key in &self.dirty {
            match self.items.get(key) {
                Some(value) => session.insert(key, value).await?,
                None => {
                    session.remove::<String>(key).await?;
                }
            }
        }
        Ok(())
    }

    /// Whether any key changed since the snapshot was taken.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}

impl LocalStorage for SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.items.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.dirty.insert(key.to_owned());
        self.items.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.dirty.insert(key.to_owned());
        self.items.remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_round_trips_through_session() {
        let session = session();

        let mut storage = SessionStorage::load(&session).await.unwrap();
        assert!(!storage.is_dirty());
        storage.set_item(CURRENCY_KEY, "GBP").unwrap();
        assert!(storage.is_dirty());
        storage.flush(&session).await.unwrap();

        let reloaded = SessionStorage::load(&session).await.unwrap();
        assert_eq!(
            reloaded.get_item(CURRENCY_KEY).unwrap().as_deref(),
            Some("GBP")
        );
    }

    #[tokio::test]
    async fn test_removal_is_flushed() {
        let session = session();
        session.insert(CART_KEY, "[]").await.unwrap();

        let mut storage = SessionStorage::load(&session).await.unwrap();
        storage.remove_item(CART_KEY).unwrap();
        storage.flush(&session).await.unwrap();

        assert_eq!(session.get::<String>(CART_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_string_value_is_skipped() {
        let session = session();
        session.insert(CURRENCY_KEY, 42).await.unwrap();

        let storage = SessionStorage::load(&session).await.unwrap();
        assert_eq!(storage.get_item(CURRENCY_KEY).unwrap(), None);
    }
}
