use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::filter::{FilterOption, FilterState};
use crate::models::{Domain, Role};
use crate::navigation::NavigationEntry;
use crate::presentation::PresentedField;
use crate::stats::StatSummary;

/// Per-domain filter input. Domains without an entry are unfiltered.
pub type FilterStates = HashMap<Domain, FilterState>;

/// Everything the shell needs to paint one role's screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub role: Role,
    pub view: String,
    pub navigation: Vec<NavigationEntry>,
    pub sections: Vec<DashboardSection>,
}

/// One stat strip plus table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSection {
    pub title: String,
    /// Navigation target this section belongs to.
    pub view: String,
    pub domain: Domain,
    /// Records in scope before the user's filter is applied.
    pub total: usize,
    pub rows: Vec<PresentedRecord>,
    pub stats: Vec<StatSummary>,
    pub filter_field: String,
    pub filter_options: Vec<FilterOption>,
}

/// A record as a table row: raw fields plus mapped badges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedRecord {
    pub key: String,
    pub row_id: Uuid,
    pub title: String,
    pub record: serde_json::Value,
    pub badges: Vec<PresentedField>,
    pub progress: Option<u32>,
}
