//! Local store - whole-collection read/write over a storage backend.
//!
//! Every mutation in FloraLab is read-whole, modify in memory, write-whole.
//! There is deliberately no field-level update primitive; the store's only
//! job is durable, synchronous snapshots of named collections.

use crate::backend::StorageBackend;
use crate::error::{Error, Result};
use crate::settings::Settings;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage keys for the collections this core owns.
pub mod collections {
    pub const SHIPMENTS: &str = "shipments";
    pub const ORDERS: &str = "orders";
    pub const EXPENSES: &str = "expenses";
    pub const SETTINGS: &str = "settings";
}

/// Keyed collection store over persistent key-value storage.
///
/// Reads never fail: an absent or corrupt collection recovers to empty
/// with a diagnostic. Writes surface [`Error::Storage`] when the medium
/// rejects them; they are not retried.
pub struct LocalStore {
    backend: Box<dyn StorageBackend>,
}

impl LocalStore {
    /// Create a store over the given backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Read the full persisted array for a collection.
    ///
    /// Absent data and parse failures both yield an empty collection; a
    /// parse failure is logged but never surfaced to the caller.
    pub fn read_collection<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let Some(raw) = self.backend.load(name) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    collection = name,
                    error = %e,
                    "corrupt collection data, recovering to empty"
                );
                Vec::new()
            }
        }
    }

    /// Serialize and persist the full collection, replacing any prior value.
    pub fn write_collection<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records).map_err(|e| Error::Serialize {
            collection: name.to_string(),
            reason: e.to_string(),
        })?;

        self.backend.save(name, &raw).map_err(|e| Error::Storage {
            collection: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Read the global settings record, falling back to defaults.
    pub fn read_settings(&self) -> Settings {
        let Some(raw) = self.backend.load(collections::SETTINGS) else {
            return Settings::default();
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "corrupt settings data, recovering to defaults");
                Settings::default()
            }
        }
    }

    /// Persist the global settings record.
    pub fn write_settings(&self, settings: &Settings) -> Result<()> {
        let raw = serde_json::to_string(settings).map_err(|e| Error::Serialize {
            collection: collections::SETTINGS.to_string(),
            reason: e.to_string(),
        })?;

        self.backend
            .save(collections::SETTINGS, &raw)
            .map_err(|e| Error::Storage {
                collection: collections::SETTINGS.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::record::Expense;
    use std::io;

    /// Backend that accepts reads but rejects every write, simulating a
    /// full medium.
    struct FullMediumBackend {
        inner: MemoryBackend,
    }

    impl StorageBackend for FullMediumBackend {
        fn load(&self, key: &str) -> Option<String> {
            self.inner.load(key)
        }

        fn save(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::other("quota exceeded"))
        }
    }

    fn test_expenses() -> Vec<Expense> {
        vec![
            Expense::shipping("EXP001", 101, 25.0, "2025-01-10"),
            Expense::shipping("EXP002", 102, 18.5, "2025-01-11"),
        ]
    }

    #[test]
    fn write_read_roundtrip_preserves_order_and_fields() {
        let store = LocalStore::new(MemoryBackend::new());
        let expenses = test_expenses();

        store
            .write_collection(collections::EXPENSES, &expenses)
            .unwrap();
        let read: Vec<Expense> = store.read_collection(collections::EXPENSES);

        assert_eq!(read, expenses);
    }

    #[test]
    fn absent_collection_reads_empty() {
        let store = LocalStore::new(MemoryBackend::new());
        let read: Vec<Expense> = store.read_collection(collections::EXPENSES);
        assert!(read.is_empty());
    }

    #[test]
    fn corrupt_collection_recovers_to_empty() {
        let backend = MemoryBackend::new();
        backend
            .save(collections::EXPENSES, "{not json at all")
            .unwrap();

        let store = LocalStore::new(backend);
        let read: Vec<Expense> = store.read_collection(collections::EXPENSES);
        assert!(read.is_empty());
    }

    #[test]
    fn rejected_write_surfaces_storage_error_and_keeps_prior_data() {
        let inner = MemoryBackend::new();
        inner
            .save(
                collections::EXPENSES,
                &serde_json::to_string(&test_expenses()).unwrap(),
            )
            .unwrap();

        let store = LocalStore::new(FullMediumBackend { inner });

        let result = store.write_collection(
            collections::EXPENSES,
            &[Expense::shipping("EXP003", 103, 9.0, "2025-01-12")],
        );
        assert!(matches!(result, Err(Error::Storage { .. })));

        // Prior data must be untouched
        let read: Vec<Expense> = store.read_collection(collections::EXPENSES);
        assert_eq!(read, test_expenses());
    }

    #[test]
    fn settings_default_when_absent_or_corrupt() {
        let store = LocalStore::new(MemoryBackend::new());
        assert_eq!(store.read_settings(), Settings::default());

        let backend = MemoryBackend::new();
        backend.save(collections::SETTINGS, "][").unwrap();
        let store = LocalStore::new(backend);
        assert_eq!(store.read_settings(), Settings::default());
    }

    #[test]
    fn settings_roundtrip() {
        let store = LocalStore::new(MemoryBackend::new());
        let settings = Settings {
            provider_api_key: Some("apik_xyz".into()),
            shipment_refresh_interval: 5,
            enable_shipment_notifications: false,
            default_shipping_rate: 12.0,
        };

        store.write_settings(&settings).unwrap();
        assert_eq!(store.read_settings(), settings);
    }
}
