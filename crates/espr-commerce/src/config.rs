//! Storefront settings.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::checkout::{generate_tracking_code, is_well_formed, DEFAULT_LENGTH, DEFAULT_PREFIX};
use crate::ids::OrderId;

/// Default admin session window, in hours.
pub const DEFAULT_SESSION_HOURS: u32 = 24;

/// Core storefront configuration.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorefrontConfig {
    pub tracking: TrackingConfig,
    pub admin: AdminConfig,
}

/// Tracking code format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackingConfig {
    /// Fixed prefix.
    pub prefix: String,
    /// Random characters after the prefix.
    pub length: usize,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            length: DEFAULT_LENGTH,
        }
    }
}

impl TrackingConfig {
    /// Generate a new tracking code in this format.
    pub fn generate(&self) -> OrderId {
        generate_tracking_code(&self.prefix, self.length)
    }

    /// Check that `code` matches this format.
    pub fn is_well_formed(&self, code: &str) -> bool {
        is_well_formed(code, &self.prefix, self.length)
    }

    /// A sample code for format hints, e.g. `ESPR-XXXXXX`.
    pub fn example(&self) -> String {
        format!("{}{}", self.prefix, "X".repeat(self.length))
    }
}

/// Admin session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdminConfig {
    /// How long a login stays valid.
    pub session_hours: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            session_hours: DEFAULT_SESSION_HOURS,
        }
    }
}

impl AdminConfig {
    pub fn session_window(&self) -> Duration {
        Duration::hours(i64::from(self.session_hours))
    }
}
