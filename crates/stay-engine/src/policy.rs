//! Scheduling policy shared by every decision.

use serde::{Deserialize, Serialize};

use crate::interval::MaintenanceWindow;

/// Hotel-wide scheduling settings.
///
/// Deserialises from JSON such as `{"maintenance_days": 2}`; missing fields
/// take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingPolicy {
    /// Turnover days blocked after every check-out.
    pub maintenance_days: MaintenanceWindow,
}

impl SchedulingPolicy {
    pub fn with_maintenance_days(days: u32) -> Self {
        SchedulingPolicy {
            maintenance_days: MaintenanceWindow::new(days),
        }
    }

    /// Parse a policy from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
