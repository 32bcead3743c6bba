//! Dashboard composer: assembles a role's screen from the catalogs.
//!
//! For each section the role shows, the composer applies the section's
//! preset and the caller's filter state, maps every categorical field to
//! a badge, and evaluates the section's stat cards over the full
//! catalog. Output is a single serializable payload; the same inputs
//! always produce the same view model.

mod layout;
mod sections;
mod types;

pub use sections::SectionStats;
pub use types::*;

use tracing::debug;
use uuid::Uuid;

use self::layout::SectionLayout;
use crate::catalog::Catalogs;
use crate::config::DashboardPolicy;
use crate::error::DashboardError;
use crate::filter::{filter_options, filter_records, FilterState};
use crate::models::{
    Appointment, Doctor, Domain, EntityRecord, Feedback, InventoryItem, Invoice, LabTest, Patient,
    Prescription, Role,
};
use crate::navigation::navigation_for;
use crate::presentation::{map_status_to_variant, PresentedField};
use crate::stats::compute_stats;

/// Namespace for row ids, so the same record key always yields the same id.
const ROW_NAMESPACE: Uuid = Uuid::from_bytes([
    0x6b, 0x1e, 0x3c, 0x52, 0x94, 0x0d, 0x4f, 0x7a, 0x8e, 0x21, 0xc4, 0x5f, 0x0a, 0x93, 0xd7, 0x16,
]);

/// Builds the view model for `role` looking at `view`.
pub fn compose_dashboard(
    role: Role,
    view: &str,
    catalogs: &Catalogs,
    filters: &FilterStates,
    policy: &DashboardPolicy,
) -> Result<DashboardViewModel, DashboardError> {
    let sections = layout::sections_for_view(role, view)
        .iter()
        .map(|layout| build_section(layout, catalogs, filters, policy))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(role = %role, view, sections = sections.len(), "composed dashboard");

    Ok(DashboardViewModel {
        role,
        view: view.to_string(),
        navigation: navigation_for(role, view),
        sections,
    })
}

fn build_section(
    layout: &SectionLayout,
    catalogs: &Catalogs,
    filters: &FilterStates,
    policy: &DashboardPolicy,
) -> Result<DashboardSection, DashboardError> {
    match layout.domain {
        Domain::Doctors => section::<Doctor>(layout, catalogs, filters, policy),
        Domain::Patients => section::<Patient>(layout, catalogs, filters, policy),
        Domain::Appointments => section::<Appointment>(layout, catalogs, filters, policy),
        Domain::Invoices => section::<Invoice>(layout, catalogs, filters, policy),
        Domain::Prescriptions => section::<Prescription>(layout, catalogs, filters, policy),
        Domain::Inventory => section::<InventoryItem>(layout, catalogs, filters, policy),
        Domain::LabTests => section::<LabTest>(layout, catalogs, filters, policy),
        Domain::Feedback => section::<Feedback>(layout, catalogs, filters, policy),
    }
}

fn section<T: SectionStats>(
    layout: &SectionLayout,
    catalogs: &Catalogs,
    filters: &FilterStates,
    policy: &DashboardPolicy,
) -> Result<DashboardSection, DashboardError> {
    let catalog = T::catalog(catalogs);

    let scoped = match layout.preset {
        Some((field, value)) => filter_records(catalog, &FilterState::new().with_filter(field, value)),
        None => catalog.to_vec(),
    };

    let visible = match filters.get(&T::DOMAIN) {
        Some(state) => filter_records(&scoped, state),
        None => scoped.clone(),
    };

    let rows = visible
        .iter()
        .map(|record| present_record(record, policy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DashboardSection {
        title: layout.title.to_string(),
        view: layout.view.to_string(),
        domain: T::DOMAIN,
        total: scoped.len(),
        rows,
        stats: compute_stats(catalog, &T::stat_definitions(policy)),
        filter_field: T::PRIMARY_FILTER.to_string(),
        filter_options: filter_options(&scoped, T::PRIMARY_FILTER),
    })
}

/// Turns one record into a table row with its badges.
pub fn present_record<T: EntityRecord>(
    record: &T,
    policy: &DashboardPolicy,
) -> Result<PresentedRecord, DashboardError> {
    let mut badges: Vec<PresentedField> = record
        .categorical_fields()
        .into_iter()
        .map(|c| PresentedField::new(c.field, map_status_to_variant(c.value, c.kind)))
        .collect();
    badges.extend(record.derived_fields(policy));

    Ok(PresentedRecord {
        key: record.key().to_string(),
        row_id: row_id(T::DOMAIN, record.key()),
        title: record.title().to_string(),
        record: serde_json::to_value(record)?,
        badges,
        progress: record.progress(),
    })
}

/// Stable row id for a record key within a domain.
pub fn row_id(domain: Domain, key: &str) -> Uuid {
    Uuid::new_v5(&ROW_NAMESPACE, format!("{domain}:{key}").as_bytes())
}

// ── Tests ──────────────────────────────────────────────────────────────────
