//! Role navigation: ordered sidebar entries per role.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Route segment every role lands on.
pub const OVERVIEW: &str = "dashboard";

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    pub target: String,
    pub badge_count: Option<u32>,
    pub is_active: bool,
}

/// (label, target, badge)
type NavSpec = (&'static str, &'static str, Option<u32>);

const ADMIN_NAV: &[NavSpec] = &[
    ("Dashboard", OVERVIEW, None),
    ("Doctors", "doctors", None),
    ("Patients", "patients", None),
    ("Billing", "billing", Some(2)),
    ("Inventory", "inventory", Some(5)),
    ("Feedback", "feedback", Some(3)),
    ("Settings", "settings", None),
];

const DOCTOR_NAV: &[NavSpec] = &[
    ("Dashboard", OVERVIEW, None),
    ("Appointments", "appointments", Some(4)),
    ("Patients", "patients", None),
    ("Lab Results", "lab-results", Some(2)),
    ("Prescriptions", "prescriptions", None),
    ("Messages", "messages", Some(5)),
];

const PATIENT_NAV: &[NavSpec] = &[
    ("Dashboard", OVERVIEW, None),
    ("Appointments", "appointments", None),
    ("Prescriptions", "prescriptions", None),
    ("Lab Results", "lab-results", Some(1)),
    ("Billing", "billing", Some(1)),
    ("Messages", "messages", None),
];

const RECEPTIONIST_NAV: &[NavSpec] = &[
    ("Dashboard", OVERVIEW, None),
    ("Appointments", "appointments", Some(6)),
    ("Patients", "patients", None),
    ("Billing", "billing", None),
];

const PHARMACIST_NAV: &[NavSpec] = &[
    ("Dashboard", OVERVIEW, None),
    ("Prescriptions", "prescriptions", Some(3)),
    ("Inventory", "inventory", Some(5)),
];

const LAB_NAV: &[NavSpec] = &[
    ("Dashboard", OVERVIEW, None),
    ("Lab Tests", "lab-tests", Some(3)),
    ("Reports", "reports", None),
];

fn nav_specs(role: Role) -> &'static [NavSpec] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Doctor => DOCTOR_NAV,
        Role::Patient => PATIENT_NAV,
        Role::Receptionist => RECEPTIONIST_NAV,
        Role::Pharmacist => PHARMACIST_NAV,
        Role::Lab => LAB_NAV,
    }
}

/// Builds the role's sidebar with the entry for `view` marked active.
/// An unknown view leaves every entry inactive.
pub fn navigation_for(role: Role, view: &str) -> Vec<NavigationEntry> {
    nav_specs(role)
        .iter()
        .map(|&(label, target, badge_count)| NavigationEntry {
            label: label.to_string(),
            target: target.to_string(),
            badge_count,
            is_active: target == view,
        })
        .collect()
}

/// Whether `view` is one of the role's navigation targets.
pub fn is_known_view(role: Role, view: &str) -> bool {
    nav_specs(role).iter().any(|&(_, target, _)| target == view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_starts_at_overview() {
        for role in Role::ALL {
            let nav = navigation_for(*role, OVERVIEW);
            assert_eq!(nav[0].target, OVERVIEW, "{role}");
            assert!(nav[0].is_active);
        }
    }

    #[test]
    fn exactly_one_entry_active_for_known_view() {
        for role in Role::ALL {
            for entry in nav_specs(*role) {
                let nav = navigation_for(*role, entry.1);
                assert_eq!(nav.iter().filter(|e| e.is_active).count(), 1);
            }
        }
    }

    #[test]
    fn unknown_view_activates_nothing() {
        let nav = navigation_for(Role::Pharmacist, "wards");
        assert!(nav.iter().all(|e| !e.is_active));
        assert!(!is_known_view(Role::Pharmacist, "wards"));
    }

    #[test]
    fn pharmacist_order_and_badges() {
        let nav = navigation_for(Role::Pharmacist, "inventory");
        let labels: Vec<&str> = nav.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Dashboard", "Prescriptions", "Inventory"]);
        assert_eq!(nav[1].badge_count, Some(3));
        assert!(nav[2].is_active);
        assert_eq!(nav[0].badge_count, None);
    }

    #[test]
    fn targets_are_unique_per_role() {
        for role in Role::ALL {
            let mut targets: Vec<&str> = nav_specs(*role).iter().map(|s| s.1).collect();
            let before = targets.len();
            targets.sort_unstable();
            targets.dedup();
            assert_eq!(before, targets.len(), "{role}");
        }
    }

    #[test]
    fn navigation_is_rebuilt_identically() {
        assert_eq!(
            navigation_for(Role::Doctor, "patients"),
            navigation_for(Role::Doctor, "patients")
        );
    }
}
