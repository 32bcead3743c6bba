//! Search/filter reducer over catalog records.
//!
//! A record survives when the query (if any) is a case-insensitive
//! substring of one of its searchable fields, spaces included, and every selected filter
//! other than `"all"` equals the record's field value exactly. Output
//! keeps catalog order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::EntityRecord;

/// Filter value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// Search text plus selected discrete filters for one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub query: String,
    pub selected_filters: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.selected_filters.insert(field.into(), value.into());
        self
    }

    /// True when the state constrains nothing: empty query, no active filter.
    pub fn is_identity(&self) -> bool {
        self.normalized_query().is_none() && self.active_filters().next().is_none()
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.selected_filters.clear();
    }

    /// Lower-cased query, whitespace kept; `None` only when empty.
    fn normalized_query(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.to_lowercase())
    }

    fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected_filters
            .iter()
            .filter(|(_, value)| value.as_str() != ALL)
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

/// One entry in a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub count: u32,
}

/// Returns the records matching `state`, in catalog order.
///
/// An empty state is the identity: a fresh `Vec` holding every record.
/// A selected field the record does not have never matches.
pub fn filter_records<T: EntityRecord>(records: &[T], state: &FilterState) -> Vec<T> {
    let query = state.normalized_query();
    let filters: Vec<(&str, &str)> = state.active_filters().collect();

    let kept: Vec<T> = records
        .iter()
        .filter(|record| matches_query(*record, query.as_deref()))
        .filter(|record| {
            filters
                .iter()
                .all(|(field, value)| record.field_value(field) == Some(*value))
        })
        .cloned()
        .collect();

    let domain = T::DOMAIN;
    tracing::debug!(
        domain = %domain,
        input = records.len(),
        output = kept.len(),
        "filtered catalog"
    );
    kept
}

fn matches_query<T: EntityRecord>(record: &T, query: Option<&str>) -> bool {
    match query {
        None => true,
        Some(needle) => record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle)),
    }
}

/// Distinct values of `field` in first-appearance order, with counts.
/// Records lacking the field are skipped.
pub fn filter_options<T: EntityRecord>(records: &[T], field: &str) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    for value in records.iter().filter_map(|r| r.field_value(field)) {
        match options.iter_mut().find(|o| o.value == value) {
            Some(option) => option.count += 1,
            None => options.push(FilterOption {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{Appointment, InventoryItem, LabTest, Patient, Status};
    use chrono::NaiveDate;

    fn patient(id: &str, name: &str, status: &str) -> Patient {
        Patient {
            id: id.into(),
            name: name.into(),
            age: 40,
            gender: "Female".into(),
            blood_group: "O+".into(),
            phone: "+1 555 0000".into(),
            condition: "Observation".into(),
            assigned_doctor: "Dr. Emily Chen".into(),
            last_visit: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: Status::from(status),
        }
    }

    fn scenario() -> Vec<Patient> {
        vec![
            patient("1", "James Wilson", "urgent"),
            patient("2", "Sarah Johnson", "completed"),
        ]
    }

    fn keys<T: EntityRecord>(records: &[T]) -> Vec<&str> {
        records.iter().map(|r| r.key()).collect()
    }

    #[test]
    fn identity_filter_returns_everything_in_order() {
        let records = catalog::get_catalog::<Appointment>();
        let out = filter_records(records, &FilterState::new());
        assert_eq!(out, records);
        assert_ne!(out.as_ptr(), records.as_ptr());
    }

    #[test]
    fn all_filters_set_to_all_is_identity() {
        let records = catalog::get_catalog::<Appointment>();
        let state = FilterState::new()
            .with_filter("status", ALL)
            .with_filter("priority", ALL);
        assert!(state.is_identity());
        assert_eq!(filter_records(records, &state), records);
    }

    #[test]
    fn query_is_case_insensitive() {
        let records = scenario();
        for q in ["sarah", "SARAH", "SaRaH", "johnson"] {
            let out = filter_records(&records, &FilterState::new().with_query(q));
            assert_eq!(keys(&out), vec!["2"], "query {q}");
        }
    }

    #[test]
    fn query_is_substring_not_fuzzy() {
        let records = scenario();
        let out = filter_records(&records, &FilterState::new().with_query("srah"));
        assert!(out.is_empty());
    }

    #[test]
    fn only_the_empty_query_is_blank() {
        assert!(FilterState::new().with_query("").is_identity());
        assert!(!FilterState::new().with_query(" ").is_identity());
    }

    #[test]
    fn whitespace_in_the_query_is_matched_literally() {
        let records = catalog::get_catalog::<Appointment>();
        assert!(filter_records(records, &FilterState::new().with_query("son ")).is_empty());
        assert!(filter_records(records, &FilterState::new().with_query("  wilson ")).is_empty());

        let first_name = filter_records(records, &FilterState::new().with_query("JAMES "));
        assert_eq!(keys(&first_name), vec!["APT-001"]);

        let two_words = filter_records(records, &FilterState::new().with_query("emily chen"));
        assert_eq!(keys(&two_words), vec!["APT-001", "APT-005"]);
    }

    #[test]
    fn query_searches_every_designated_field() {
        let records = catalog::get_catalog::<Appointment>();
        let by_doctor = filter_records(records, &FilterState::new().with_query("okafor"));
        assert_eq!(keys(&by_doctor), vec!["APT-007"]);

        let by_department = filter_records(records, &FilterState::new().with_query("dermat"));
        assert_eq!(keys(&by_department), vec!["APT-006", "APT-008"]);
    }

    #[test]
    fn selected_filter_is_exact_and_case_sensitive() {
        let records = catalog::get_catalog::<Appointment>();
        let completed = filter_records(records, &FilterState::new().with_filter("status", "completed"));
        assert_eq!(keys(&completed), vec!["APT-002", "APT-007"]);

        let shouting = filter_records(records, &FilterState::new().with_filter("status", "Completed"));
        assert!(shouting.is_empty());
    }

    #[test]
    fn query_and_filters_combine() {
        let records = catalog::get_catalog::<Appointment>();
        let state = FilterState::new()
            .with_query("sarah")
            .with_filter("status", "cancelled");
        assert_eq!(keys(&filter_records(records, &state)), vec!["APT-008"]);
    }

    #[test]
    fn unknown_filter_key_excludes_everything() {
        let records = catalog::get_catalog::<Appointment>();
        let state = FilterState::new().with_filter("ward", "B2");
        assert!(filter_records(records, &state).is_empty());
    }

    #[test]
    fn unset_optional_field_never_matches() {
        let records = catalog::get_catalog::<LabTest>();
        let normal = filter_records(records, &FilterState::new().with_filter("result_status", "normal"));
        assert_eq!(keys(&normal), vec!["LAB-002"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = catalog::get_catalog::<Appointment>();
        let states = [
            FilterState::new(),
            FilterState::new().with_query("dr."),
            FilterState::new().with_query("emily").with_filter("priority", "urgent"),
            FilterState::new().with_filter("status", "no-show"),
        ];
        for state in &states {
            let once = filter_records(records, state);
            let twice = filter_records(&once, state);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn empty_catalog_filters_to_empty() {
        let records: Vec<InventoryItem> = Vec::new();
        let state = FilterState::new().with_query("saline").with_filter("category", "Supplies");
        assert!(filter_records(&records, &state).is_empty());
        assert!(filter_options(&records, "category").is_empty());
    }

    #[test]
    fn end_to_end_scenario_query() {
        let out = filter_records(&scenario(), &FilterState::new().with_query("sarah"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
    }

    #[test]
    fn filter_options_count_in_first_seen_order() {
        let records = catalog::get_catalog::<InventoryItem>();
        let options = filter_options(records, "category");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["Antibiotics", "Cardiovascular", "Diabetes", "Analgesics", "Respiratory", "Supplies"]
        );
        assert_eq!(options[2].count, 2);
        assert_eq!(options[5].count, 2);
    }

    #[test]
    fn reset_clears_state() {
        let mut state = FilterState::new().with_query("x").with_filter("status", "paid");
        assert!(!state.is_identity());
        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn filter_state_deserializes_partial_json() {
        let state: FilterState = serde_json::from_str(r#"{"query":"wilson"}"#).unwrap();
        assert_eq!(state.query, "wilson");
        assert!(state.selected_filters.is_empty());

        let state: FilterState =
            serde_json::from_str(r#"{"selected_filters":{"status":"paid"}}"#).unwrap();
        assert_eq!(state.selected_filters.get("status").map(String::as_str), Some("paid"));
    }
}
