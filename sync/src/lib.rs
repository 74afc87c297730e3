//! # FloraLab Sync
//!
//! Shipment tracking synchronizer for the FloraLab dashboard.
//!
//! Three pieces collaborate here, all over the engine's [`LocalStore`]:
//!
//! - [`provider::TrackingProvider`] - the external courier-tracking API,
//!   with [`provider::Ship24Client`] as the production implementation
//! - [`synchronizer::Synchronizer`] - owns the shipment lifecycle:
//!   creation, registration, refresh, status-delta detection, and
//!   propagation to the originating order
//! - [`scheduler::Scheduler`] - the only autonomous actor, invoking a
//!   batch refresh at a configurable interval
//!
//! Failure policy: nothing here is fatal. Registration failure degrades
//! to an untracked shipment, refresh failure leaves local state unchanged
//! and surfaces a non-fatal notice, and storage failure is reported
//! without rolling back the in-memory change.
//!
//! [`LocalStore`]: floralab_engine::LocalStore

pub mod config;
pub mod error;
pub mod notify;
pub mod provider;
pub mod scheduler;
pub mod synchronizer;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use notify::{LogNotifier, Notifier};
pub use provider::{ProviderEvent, Ship24Client, TrackerStatus, TrackingProvider};
pub use scheduler::Scheduler;
pub use synchronizer::{NewShipment, RefreshOutcome, RefreshReport, Synchronizer};
