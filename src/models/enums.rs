use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Macro to generate a strict enum with as_str + std::str::FromStr pattern.
/// Used for shell inputs where an unknown value is a caller mistake.
macro_rules! str_enum {
    ($name:ident, $err:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DashboardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
                match normalized.as_str() {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DashboardError::$err(s.into())),
                }
            }
        }
    };
}

/// Macro to generate a categorical enum over a closed set of literals.
///
/// Parsing never fails: anything outside the set lands in `Other` with the
/// raw string kept, so it can still be echoed back as a label.
macro_rules! categorical_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub const KNOWN: &'static [&'static str] = &[$($s),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $s,)+
                    Self::Other(raw) => raw,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($s => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Role, UnknownRole {
    Admin => "admin",
    Doctor => "doctor",
    Patient => "patient",
    Receptionist => "receptionist",
    Pharmacist => "pharmacist",
    Lab => "lab",
});

str_enum!(Domain, UnknownDomain {
    Doctors => "doctors",
    Patients => "patients",
    Appointments => "appointments",
    Invoices => "invoices",
    Prescriptions => "prescriptions",
    Inventory => "inventory",
    LabTests => "lab_tests",
    Feedback => "feedback",
});

/// Which mapping table a categorical value is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Status,
    Priority,
    Severity,
    Urgency,
}

categorical_enum!(Status {
    Scheduled => "scheduled",
    Confirmed => "confirmed",
    InProgress => "in-progress",
    Completed => "completed",
    Cancelled => "cancelled",
    NoShow => "no-show",
    Pending => "pending",
    Paid => "paid",
    Overdue => "overdue",
    Dispensed => "dispensed",
    Active => "active",
    Admitted => "admitted",
    Discharged => "discharged",
    Critical => "critical",
    Urgent => "urgent",
    Available => "available",
    Busy => "busy",
    OnLeave => "on-leave",
    InStock => "in-stock",
    LowStock => "low-stock",
    OutOfStock => "out-of-stock",
    Normal => "normal",
    Abnormal => "abnormal",
    Resolved => "resolved",
});

categorical_enum!(Priority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

categorical_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
    Critical => "critical",
});

categorical_enum!(Urgency {
    Routine => "routine",
    Urgent => "urgent",
    Stat => "stat",
    Emergency => "emergency",
});
