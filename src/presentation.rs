//! Presentation mapper: categorical values to badge variants.
//!
//! Every field kind has a closed mapping table with an explicit fallback
//! arm: a value outside the table renders as a `Secondary` badge carrying
//! the raw string. Nothing in here can fail.

use serde::{Deserialize, Serialize};

use crate::config::DashboardPolicy;
use crate::models::{FieldKind, Priority, Severity, Status, Urgency};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Visual styling category handed to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Success,
    Warning,
    Destructive,
    Outline,
    Secondary,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
        }
    }
}

/// A rendered badge: display label, variant, and whether it animates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub variant: Variant,
    pub pulsing: bool,
}

impl Badge {
    fn known(raw: &str, variant: Variant) -> Self {
        Self {
            label: display_label(raw),
            variant,
            pulsing: false,
        }
    }

    fn pulsing(raw: &str, variant: Variant) -> Self {
        Self {
            pulsing: true,
            ..Self::known(raw, variant)
        }
    }

    /// Neutral rendering for values outside a mapping table.
    pub fn fallback(raw: &str) -> Self {
        Self {
            label: raw.to_string(),
            variant: Variant::Secondary,
            pulsing: false,
        }
    }
}

/// One badge attached to a presented record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedField {
    pub field: String,
    pub badge: Badge,
}

impl PresentedField {
    pub fn new(field: impl Into<String>, badge: Badge) -> Self {
        Self {
            field: field.into(),
            badge,
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping tables
// ---------------------------------------------------------------------------

/// Maps a raw categorical value to its badge for the given field kind.
/// Total over all strings.
pub fn map_status_to_variant(value: &str, kind: FieldKind) -> Badge {
    match kind {
        FieldKind::Status => Status::from(value).badge(),
        FieldKind::Priority => Priority::from(value).badge(),
        FieldKind::Severity => Severity::from(value).badge(),
        FieldKind::Urgency => Urgency::from(value).badge(),
    }
}

impl Status {
    pub fn badge(&self) -> Badge {
        let variant = match self {
            Self::Completed
            | Self::Paid
            | Self::Dispensed
            | Self::Active
            | Self::InStock
            | Self::Normal
            | Self::Resolved
            | Self::Available => Variant::Success,
            Self::Confirmed | Self::InProgress | Self::Admitted => Variant::Default,
            Self::Pending | Self::Scheduled | Self::OnLeave | Self::Discharged => Variant::Outline,
            Self::Overdue | Self::LowStock | Self::Abnormal | Self::Busy => Variant::Warning,
            Self::Cancelled | Self::NoShow | Self::OutOfStock => Variant::Destructive,
            Self::Critical | Self::Urgent => {
                return Badge::pulsing(self.as_str(), Variant::Destructive)
            }
            Self::Other(raw) => return Badge::fallback(raw),
        };
        Badge::known(self.as_str(), variant)
    }
}

impl Priority {
    pub fn badge(&self) -> Badge {
        match self {
            Self::Low => Badge::known("low", Variant::Outline),
            Self::Medium => Badge::known("medium", Variant::Secondary),
            Self::High => Badge::known("high", Variant::Warning),
            Self::Urgent => Badge::pulsing("urgent", Variant::Destructive),
            Self::Other(raw) => Badge::fallback(raw),
        }
    }
}

impl Severity {
    pub fn badge(&self) -> Badge {
        match self {
            Self::Mild => Badge::known("mild", Variant::Success),
            Self::Moderate => Badge::known("moderate", Variant::Warning),
            Self::Severe => Badge::known("severe", Variant::Destructive),
            Self::Critical => Badge::pulsing("critical", Variant::Destructive),
            Self::Other(raw) => Badge::fallback(raw),
        }
    }
}

impl Urgency {
    pub fn badge(&self) -> Badge {
        match self {
            Self::Routine => Badge::known("routine", Variant::Outline),
            Self::Urgent => Badge::pulsing("urgent", Variant::Destructive),
            Self::Stat => Badge::pulsing("stat", Variant::Destructive),
            Self::Emergency => Badge::pulsing("emergency", Variant::Destructive),
            Self::Other(raw) => Badge::fallback(raw),
        }
    }
}

/// `"in-progress"` → `"In Progress"`.
fn display_label(raw: &str) -> String {
    raw.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Derived presentation
// ---------------------------------------------------------------------------

/// Rounded fill percentage, clamped to 0..=100. A non-positive max is 0.
pub fn progress_percent(value: f64, max: f64) -> u32 {
    if max.is_nan() || max <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value / max) * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Stock level from counts, using the shared low-stock rule.
pub fn stock_level(current: u32, minimum: u32, policy: &DashboardPolicy) -> Status {
    if current == 0 {
        Status::OutOfStock
    } else if policy.is_low_stock(current, minimum) {
        Status::LowStock
    } else {
        Status::InStock
    }
}

pub fn expiry_tone(days_until_expiry: i64, policy: &DashboardPolicy) -> Variant {
    if days_until_expiry < 0 {
        Variant::Destructive
    } else if days_until_expiry <= policy.expiry_warning_days {
        Variant::Warning
    } else {
        Variant::Success
    }
}

pub fn expiry_badge(days_until_expiry: i64, policy: &DashboardPolicy) -> Badge {
    let label = match days_until_expiry {
        d if d < 0 => "Expired".to_string(),
        0 => "Expires today".to_string(),
        1 => "Expires in 1 day".to_string(),
        d => format!("Expires in {d} days"),
    };
    Badge {
        label,
        variant: expiry_tone(days_until_expiry, policy),
        pulsing: days_until_expiry < 0,
    }
}

/// Five-star strip for a 1–5 rating; out-of-range ratings are clamped.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn rating_badge(rating: u8) -> Badge {
    let variant = match rating {
        4.. => Variant::Success,
        3 => Variant::Warning,
        _ => Variant::Destructive,
    };
    Badge {
        label: rating_stars(rating),
        variant,
        pulsing: false,
    }
}
