use tracing::warn;

use crate::models::{Domain, Role};
use crate::navigation::{self, OVERVIEW};

/// Where a section sits in a role's screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    /// Navigation target that shows this section on its own.
    pub view: &'static str,
    pub domain: Domain,
    pub title: &'static str,
    /// Filter applied before the user's own, e.g. reports only list
    /// completed tests.
    pub preset: Option<(&'static str, &'static str)>,
}

const fn section(view: &'static str, domain: Domain, title: &'static str) -> SectionLayout {
    SectionLayout {
        view,
        domain,
        title,
        preset: None,
    }
}

const ADMIN_SECTIONS: &[SectionLayout] = &[
    section("doctors", Domain::Doctors, "Medical Staff"),
    section("patients", Domain::Patients, "Patient Registry"),
    section("billing", Domain::Invoices, "Billing"),
    section("inventory", Domain::Inventory, "Inventory"),
    section("feedback", Domain::Feedback, "Patient Feedback"),
];

const DOCTOR_SECTIONS: &[SectionLayout] = &[
    section("appointments", Domain::Appointments, "Appointments"),
    section("patients", Domain::Patients, "My Patients"),
    section("lab-results", Domain::LabTests, "Lab Results"),
    section("prescriptions", Domain::Prescriptions, "Prescriptions"),
];

const PATIENT_SECTIONS: &[SectionLayout] = &[
    section("appointments", Domain::Appointments, "My Appointments"),
    section("prescriptions", Domain::Prescriptions, "My Prescriptions"),
    section("lab-results", Domain::LabTests, "My Lab Results"),
    section("billing", Domain::Invoices, "My Bills"),
];

const RECEPTIONIST_SECTIONS: &[SectionLayout] = &[
    section("appointments", Domain::Appointments, "Front Desk Schedule"),
    section("patients", Domain::Patients, "Patient Check-in"),
    section("billing", Domain::Invoices, "Billing"),
];

const PHARMACIST_SECTIONS: &[SectionLayout] = &[
    section("prescriptions", Domain::Prescriptions, "Prescription Queue"),
    section("inventory", Domain::Inventory, "Medication Stock"),
];

const LAB_SECTIONS: &[SectionLayout] = &[
    section("lab-tests", Domain::LabTests, "Test Queue"),
    SectionLayout {
        preset: Some(("status", "completed")),
        ..section("reports", Domain::LabTests, "Completed Reports")
    },
];

pub(crate) fn role_sections(role: Role) -> &'static [SectionLayout] {
    match role {
        Role::Admin => ADMIN_SECTIONS,
        Role::Doctor => DOCTOR_SECTIONS,
        Role::Patient => PATIENT_SECTIONS,
        Role::Receptionist => RECEPTIONIST_SECTIONS,
        Role::Pharmacist => PHARMACIST_SECTIONS,
        Role::Lab => LAB_SECTIONS,
    }
}

/// Sections rendered for `view`.
///
/// The overview shows all of the role's sections and a section target
/// shows only its own. A navigation target with no data section
/// (messages, settings) shows none. Anything else falls back to the
/// overview.
pub(crate) fn sections_for_view(role: Role, view: &str) -> Vec<SectionLayout> {
    let all = role_sections(role);
    if view == OVERVIEW {
        return all.to_vec();
    }

    let matching: Vec<SectionLayout> = all.iter().copied().filter(|s| s.view == view).collect();
    if !matching.is_empty() || navigation::is_known_view(role, view) {
        return matching;
    }

    warn!(role = %role, view, "unknown view, showing overview");
    all.to_vec()
}
