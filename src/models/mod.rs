pub mod enums;
pub mod records;

pub use enums::*;
pub use records::*;

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::config::DashboardPolicy;
use crate::presentation::PresentedField;

/// A categorical attribute as stored on a record, ready for the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoricalField<'a> {
    pub field: &'static str,
    pub kind: FieldKind,
    pub value: &'a str,
}

impl<'a> CategoricalField<'a> {
    pub fn new(field: &'static str, kind: FieldKind, value: &'a str) -> Self {
        Self { field, kind, value }
    }
}

/// Common surface every catalog record exposes to the filter reducer,
/// the stat calculator and the dashboard composer.
pub trait EntityRecord: Serialize + Clone {
    const DOMAIN: Domain;

    /// Field offered as the section's filter dropdown.
    const PRIMARY_FILTER: &'static str = "status";

    fn key(&self) -> &str;

    fn title(&self) -> &str;

    /// Free-text fields searched by the query box, in display order.
    fn searchable_fields(&self) -> Vec<&str>;

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        Vec::new()
    }

    /// Discrete field lookup for selected filters. `None` when the record
    /// has no such field or the field is unset.
    fn field_value(&self, field: &str) -> Option<&str>;

    /// Badges computed from numeric fields rather than stored literals.
    fn derived_fields(&self, _policy: &DashboardPolicy) -> Vec<PresentedField> {
        Vec::new()
    }

    /// Progress bar fill, 0 to 100.
    fn progress(&self) -> Option<u32> {
        None
    }

    /// This record type's slice of a catalog bundle.
    fn catalog(catalogs: &Catalogs) -> &[Self];
}
