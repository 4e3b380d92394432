// libs/appointment-cell/src/services/lifecycle.rs
use tracing::warn;

use crate::models::{AppointmentError, AppointmentStatus};

/// Status rules. Every appointment starts as `pending`; afterwards any of
/// the three statuses may be set again, so the only gate is the value itself.
pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    pub fn initial_status(&self) -> AppointmentStatus {
        AppointmentStatus::Pending
    }

    /// Parse a requested status. Runs before any store access.
    pub fn parse_requested_status(&self, requested: &str) -> Result<AppointmentStatus, AppointmentError> {
        requested.parse().inspect_err(|_| {
            warn!("Rejected appointment status value: {:?}", requested);
        })
    }
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}
