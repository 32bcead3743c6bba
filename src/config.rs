use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Carehub";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default expiry warning window, in days.
pub const DEFAULT_EXPIRY_WARNING_DAYS: i64 = 90;

/// Default delay before a simulated assistant reply lands.
pub const DEFAULT_ASSISTANT_DELAY: Duration = Duration::from_millis(1000);

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Shared thresholds for derived presentation and stat cards.
///
/// Inventory pages used to inline their own "low stock" and "expiring soon"
/// rules; every section now reads them from one policy value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPolicy {
    /// When true, an item sitting exactly at its minimum counts as low.
    pub low_stock_inclusive: bool,
    /// Items expiring within this many days are flagged.
    pub expiry_warning_days: i64,
    /// Reference date for "today" and expiry arithmetic.
    pub as_of: NaiveDate,
    #[serde(skip, default = "default_assistant_delay")]
    pub assistant_delay: Duration,
}

fn default_assistant_delay() -> Duration {
    DEFAULT_ASSISTANT_DELAY
}

impl Default for DashboardPolicy {
    fn default() -> Self {
        Self {
            low_stock_inclusive: true,
            expiry_warning_days: DEFAULT_EXPIRY_WARNING_DAYS,
            as_of: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            assistant_delay: DEFAULT_ASSISTANT_DELAY,
        }
    }
}

impl DashboardPolicy {
    pub fn is_low_stock(&self, current: u32, minimum: u32) -> bool {
        if self.low_stock_inclusive {
            current <= minimum
        } else {
            current < minimum
        }
    }

    /// Signed day count from `as_of` to `date`; negative once past.
    pub fn days_until(&self, date: NaiveDate) -> i64 {
        (date - self.as_of).num_days()
    }

    /// Not yet expired, but inside the warning window.
    pub fn is_expiring_soon(&self, date: NaiveDate) -> bool {
        let days = self.days_until(date);
        (0..=self.expiry_warning_days).contains(&days)
    }
}
