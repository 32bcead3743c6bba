//! Typed records for every dashboard domain.
//!
//! Each record is a plain value: identifier, display name, free-text
//! fields and categorical fields drawn from the enums in `enums.rs`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Domain, FieldKind, Priority, Severity, Status, Urgency};
use super::{CategoricalField, EntityRecord};
use crate::catalog::Catalogs;
use crate::config::DashboardPolicy;
use crate::presentation::{
    expiry_badge, progress_percent, rating_badge, stock_level, PresentedField,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub experience_years: u32,
    pub patient_count: u32,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_group: String,
    pub phone: String,
    pub condition: String,
    pub assigned_doctor: String,
    pub last_visit: NaiveDate,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub department: String,
    pub visit_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: Status,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub patient_name: String,
    pub service: String,
    pub amount: f64,
    pub issued: NaiveDate,
    pub due: NaiveDate,
    pub payment_method: Option<String>,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub quantity: u32,
    pub issued: NaiveDate,
    pub status: Status,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub unit_price: f64,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    pub id: String,
    pub patient_name: String,
    pub test_name: String,
    pub category: String,
    pub ordered_by: String,
    pub ordered: NaiveDate,
    pub result: Option<String>,
    pub result_status: Option<Status>,
    pub status: Status,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub patient_name: String,
    pub department: String,
    pub category: String,
    pub rating: u8,
    pub comment: String,
    pub submitted: NaiveDate,
    pub severity: Severity,
    pub status: Status,
}

// ═══════════════════════════════════════════
// EntityRecord impls
// ═══════════════════════════════════════════

impl EntityRecord for Doctor {
    const DOMAIN: Domain = Domain::Doctors;

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.specialty.as_str(),
            self.department.as_str(),
            self.email.as_str(),
        ]
    }

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        vec![CategoricalField::new("status", FieldKind::Status, self.status.as_str())]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "specialty" => Some(self.specialty.as_str()),
            "department" => Some(self.department.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.doctors
    }
}

impl EntityRecord for Patient {
    const DOMAIN: Domain = Domain::Patients;

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.id.as_str(),
            self.condition.as_str(),
            self.assigned_doctor.as_str(),
        ]
    }

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        vec![CategoricalField::new("status", FieldKind::Status, self.status.as_str())]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "gender" => Some(self.gender.as_str()),
            "blood_group" => Some(self.blood_group.as_str()),
            "assigned_doctor" => Some(self.assigned_doctor.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.patients
    }
}

impl EntityRecord for Appointment {
    const DOMAIN: Domain = Domain::Appointments;

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.patient_name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.patient_name.as_str(),
            self.doctor_name.as_str(),
            self.department.as_str(),
            self.visit_type.as_str(),
        ]
    }

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        vec![
            CategoricalField::new("status", FieldKind::Status, self.status.as_str()),
            CategoricalField::new("priority", FieldKind::Priority, self.priority.as_str()),
        ]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "doctor_name" => Some(self.doctor_name.as_str()),
            "department" => Some(self.department.as_str()),
            "visit_type" => Some(self.visit_type.as_str()),
            "status" => Some(self.status.as_str()),
            "priority" => Some(self.priority.as_str()),
            _ => None,
        }
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.appointments
    }
}

impl EntityRecord for Invoice {
    const DOMAIN: Domain = Domain::Invoices;

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.patient_name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.patient_name.as_str(), self.service.as_str()]
    }

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        vec![CategoricalField::new("status", FieldKind::Status, self.status.as_str())]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "service" => Some(self.service.as_str()),
            "payment_method" => self.payment_method.as_deref(),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.invoices
    }
}

impl EntityRecord for Prescription {
    const DOMAIN: Domain = Domain::Prescriptions;

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.medication
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.medication.as_str(),
            self.patient_name.as_str(),
            self.doctor_name.as_str(),
            self.id.as_str(),
        ]
    }

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        vec![
            CategoricalField::new("status", FieldKind::Status, self.status.as_str()),
            CategoricalField::new("urgency", FieldKind::Urgency, self.urgency.as_str()),
        ]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "doctor_name" => Some(self.doctor_name.as_str()),
            "status" => Some(self.status.as_str()),
            "urgency" => Some(self.urgency.as_str()),
            _ => None,
        }
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.prescriptions
    }
}

impl EntityRecord for InventoryItem {
    const DOMAIN: Domain = Domain::Inventory;
    const PRIMARY_FILTER: &'static str = "category";

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str(), self.supplier.as_str(), self.id.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "category" => Some(self.category.as_str()),
            "supplier" => Some(self.supplier.as_str()),
            _ => None,
        }
    }

    fn derived_fields(&self, policy: &DashboardPolicy) -> Vec<PresentedField> {
        let level = stock_level(self.current_stock, self.min_stock, policy);
        vec![
            PresentedField::new("stock_level", level.badge()),
            PresentedField::new(
                "expiry",
                expiry_badge(policy.days_until(self.expiry_date), policy),
            ),
        ]
    }

    fn progress(&self) -> Option<u32> {
        Some(progress_percent(
            f64::from(self.current_stock),
            f64::from(self.max_stock),
        ))
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.inventory
    }
}

impl EntityRecord for LabTest {
    const DOMAIN: Domain = Domain::LabTests;

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.test_name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.test_name.as_str(),
            self.patient_name.as_str(),
            self.ordered_by.as_str(),
            self.id.as_str(),
        ]
    }

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        let mut fields = vec![
            CategoricalField::new("status", FieldKind::Status, self.status.as_str()),
            CategoricalField::new("priority", FieldKind::Priority, self.priority.as_str()),
        ];
        if let Some(result_status) = &self.result_status {
            fields.push(CategoricalField::new(
                "result_status",
                FieldKind::Status,
                result_status.as_str(),
            ));
        }
        fields
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "category" => Some(self.category.as_str()),
            "ordered_by" => Some(self.ordered_by.as_str()),
            "status" => Some(self.status.as_str()),
            "priority" => Some(self.priority.as_str()),
            "result_status" => self.result_status.as_ref().map(|s| s.as_str()),
            _ => None,
        }
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.lab_tests
    }
}

impl EntityRecord for Feedback {
    const DOMAIN: Domain = Domain::Feedback;
    const PRIMARY_FILTER: &'static str = "category";

    fn key(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.patient_name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.patient_name.as_str(), self.department.as_str(), self.comment.as_str()]
    }

    fn categorical_fields(&self) -> Vec<CategoricalField<'_>> {
        vec![
            CategoricalField::new("status", FieldKind::Status, self.status.as_str()),
            CategoricalField::new("severity", FieldKind::Severity, self.severity.as_str()),
        ]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(self.id.as_str()),
            "department" => Some(self.department.as_str()),
            "category" => Some(self.category.as_str()),
            "status" => Some(self.status.as_str()),
            "severity" => Some(self.severity.as_str()),
            _ => None,
        }
    }

    fn derived_fields(&self, _policy: &DashboardPolicy) -> Vec<PresentedField> {
        vec![PresentedField::new("rating", rating_badge(self.rating))]
    }

    fn progress(&self) -> Option<u32> {
        Some(progress_percent(f64::from(self.rating), 5.0))
    }

    fn catalog(catalogs: &Catalogs) -> &[Self] {
        &catalogs.feedback
    }
}
