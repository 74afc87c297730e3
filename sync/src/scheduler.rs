//! Periodic auto-refresh of all active shipments.
//!
//! A fresh timer starts at boot and runs for the process lifetime; there
//! is no catch-up for intervals missed while the process was down.

use crate::synchronizer::Synchronizer;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Recurring timer that drives [`Synchronizer::refresh_all`].
pub struct Scheduler {
    synchronizer: Synchronizer,
    every: Duration,
}

impl Scheduler {
    /// Create a scheduler firing at the given interval.
    pub fn new(synchronizer: Synchronizer, every: Duration) -> Self {
        Self { synchronizer, every }
    }

    /// Run the refresh loop forever.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; consume it so the first
        // refresh happens a full interval after boot.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let eligible = self.synchronizer.eligible_count();
            if eligible == 0 {
                tracing::debug!("no active shipments to refresh");
                continue;
            }

            tracing::info!(count = eligible, "auto-refreshing shipments");
            let report = self.synchronizer.refresh_all().await;
            tracing::info!(
                attempted = report.attempted,
                updated = report.updated,
                failed = report.failed,
                "auto-refresh complete"
            );
        }
    }
}
