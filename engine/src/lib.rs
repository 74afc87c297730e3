//! # FloraLab Engine
//!
//! Domain model and local persistence core for the FloraLab tissue-culture
//! dashboard.
//!
//! This crate provides the pieces shared by every FloraLab surface:
//! typed records for orders, shipments, and expenses, the closed status
//! vocabularies, and the [`LocalStore`] abstraction over durable key-value
//! storage.
//!
//! ## Design Principles
//!
//! - **No network**: the engine never talks to the tracking provider;
//!   that lives in the sync crate behind a trait
//! - **Whole-collection persistence**: every mutation is read-whole,
//!   modify in memory, write-whole - there is no partial update primitive
//! - **Reads never fail**: absent or corrupt data recovers to an empty
//!   collection with a diagnostic, never an error
//! - **Closed vocabularies**: provider milestone strings are mapped onto
//!   [`ShipmentStatus`] explicitly; an unrecognized value is reported,
//!   not stored
//!
//! ## Quick Start
//!
//! ```rust
//! use floralab_engine::{
//!     collections, LocalStore, MemoryBackend, Shipment, ShipmentStatus,
//! };
//!
//! let store = LocalStore::new(MemoryBackend::new());
//!
//! let mut shipment = Shipment::new(
//!     "SHIP001",
//!     101,
//!     "1Z999",
//!     "UPS",
//!     25.0,
//!     "2025-01-10T08:00:00Z",
//! );
//! shipment.mark_registered("TR1");
//! assert_eq!(shipment.status, ShipmentStatus::InfoReceived);
//!
//! store
//!     .write_collection(collections::SHIPMENTS, &[shipment])
//!     .unwrap();
//! let shipments: Vec<Shipment> = store.read_collection(collections::SHIPMENTS);
//! assert_eq!(shipments.len(), 1);
//! ```

pub mod backend;
pub mod error;
pub mod record;
pub mod settings;
pub mod shipment;
pub mod status;
pub mod store;

// Re-export main types at crate root
pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::Error;
pub use record::{next_sequence_id, Expense, Order};
pub use settings::Settings;
pub use shipment::{Shipment, TrackingEvent};
pub use status::{OrderStatus, ShipmentStatus};
pub use store::{collections, LocalStore};

/// Type aliases for clarity
pub type RecordId = String;
pub type CollectionName = String;
pub type TrackerId = String;
pub type OrderNumber = u32;
