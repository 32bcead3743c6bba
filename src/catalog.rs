//! Entity catalog: the in-memory sample records behind every dashboard.
//!
//! Catalogs are built once and never mutated; repeated lookups hand back
//! the same slice. Tests and callers that need different data build their
//! own `Catalogs` value and pass it to the composer.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::{
    Appointment, Doctor, Domain, EntityRecord, Feedback, InventoryItem, Invoice, LabTest,
    Patient, Prescription, Priority, Severity, Status, Urgency,
};

/// One collection per domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogs {
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub invoices: Vec<Invoice>,
    pub prescriptions: Vec<Prescription>,
    pub inventory: Vec<InventoryItem>,
    pub lab_tests: Vec<LabTest>,
    pub feedback: Vec<Feedback>,
}

impl Catalogs {
    /// Typed slice for a record type.
    pub fn get<T: EntityRecord>(&self) -> &[T] {
        T::catalog(self)
    }

    /// One domain's records as a JSON array, for callers that only hold
    /// a `Domain` value.
    pub fn domain_json(&self, domain: Domain) -> Result<serde_json::Value, DashboardError> {
        let value = match domain {
            Domain::Doctors => serde_json::to_value(&self.doctors)?,
            Domain::Patients => serde_json::to_value(&self.patients)?,
            Domain::Appointments => serde_json::to_value(&self.appointments)?,
            Domain::Invoices => serde_json::to_value(&self.invoices)?,
            Domain::Prescriptions => serde_json::to_value(&self.prescriptions)?,
            Domain::Inventory => serde_json::to_value(&self.inventory)?,
            Domain::LabTests => serde_json::to_value(&self.lab_tests)?,
            Domain::Feedback => serde_json::to_value(&self.feedback)?,
        };
        Ok(value)
    }

    pub fn record_count(&self, domain: Domain) -> usize {
        match domain {
            Domain::Doctors => self.doctors.len(),
            Domain::Patients => self.patients.len(),
            Domain::Appointments => self.appointments.len(),
            Domain::Invoices => self.invoices.len(),
            Domain::Prescriptions => self.prescriptions.len(),
            Domain::Inventory => self.inventory.len(),
            Domain::LabTests => self.lab_tests.len(),
            Domain::Feedback => self.feedback.len(),
        }
    }
}

static SAMPLE: LazyLock<Catalogs> = LazyLock::new(build_sample);

/// The shared sample catalogs.
pub fn sample() -> &'static Catalogs {
    &SAMPLE
}

/// Sample records for one record type.
pub fn get_catalog<T: EntityRecord>() -> &'static [T] {
    sample().get::<T>()
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn build_sample() -> Catalogs {
    Catalogs {
        doctors: sample_doctors(),
        patients: sample_patients(),
        appointments: sample_appointments(),
        invoices: sample_invoices(),
        prescriptions: sample_prescriptions(),
        inventory: sample_inventory(),
        lab_tests: sample_lab_tests(),
        feedback: sample_feedback(),
    }
}

fn doctor(
    id: &str,
    name: &str,
    specialty: &str,
    department: &str,
    experience_years: u32,
    patient_count: u32,
    status: &str,
) -> Doctor {
    let handle = name
        .trim_start_matches("Dr. ")
        .to_lowercase()
        .replace(' ', ".");
    Doctor {
        id: id.into(),
        name: name.into(),
        specialty: specialty.into(),
        department: department.into(),
        email: format!("{handle}@carehub.example"),
        phone: format!("+1 555 01{}", &id[id.len() - 2..]),
        experience_years,
        patient_count,
        status: Status::from(status),
    }
}

#[rustfmt::skip]
fn sample_doctors() -> Vec<Doctor> {
    vec![
        doctor("DOC-001", "Dr. Emily Chen", "Cardiologist", "Cardiology", 12, 148, "available"),
        doctor("DOC-002", "Dr. Michael Brown", "Neurologist", "Neurology", 9, 96, "busy"),
        doctor("DOC-003", "Dr. Priya Patel", "Pediatrician", "Pediatrics", 7, 210, "available"),
        doctor("DOC-004", "Dr. Robert Garcia", "Orthopedic Surgeon", "Orthopedics", 15, 132, "on-leave"),
        doctor("DOC-005", "Dr. Aisha Okafor", "Emergency Physician", "Emergency", 5, 87, "busy"),
        doctor("DOC-006", "Dr. Daniel Kim", "Dermatologist", "Dermatology", 10, 175, "available"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    age: u32,
    gender: &str,
    blood_group: &str,
    condition: &str,
    assigned_doctor: &str,
    last_visit: NaiveDate,
    status: &str,
) -> Patient {
    Patient {
        id: id.into(),
        name: name.into(),
        age,
        gender: gender.into(),
        blood_group: blood_group.into(),
        phone: format!("+1 555 02{}", &id[id.len() - 2..]),
        condition: condition.into(),
        assigned_doctor: assigned_doctor.into(),
        last_visit,
        status: Status::from(status),
    }
}

#[rustfmt::skip]
fn sample_patients() -> Vec<Patient> {
    vec![
        patient("PAT-001", "James Wilson", 58, "Male", "O+", "Hypertension", "Dr. Emily Chen", day(2024, 1, 15), "critical"),
        patient("PAT-002", "Sarah Johnson", 34, "Female", "A+", "Migraine", "Dr. Michael Brown", day(2024, 1, 12), "active"),
        patient("PAT-003", "Liam Thompson", 8, "Male", "B+", "Asthma", "Dr. Priya Patel", day(2024, 1, 10), "discharged"),
        patient("PAT-004", "Maria Rodriguez", 45, "Female", "AB-", "Fractured Tibia", "Dr. Robert Garcia", day(2024, 1, 14), "admitted"),
        patient("PAT-005", "Chen Wei", 67, "Male", "O-", "Type 2 Diabetes", "Dr. Emily Chen", day(2024, 1, 8), "active"),
        patient("PAT-006", "Fatima Hassan", 29, "Female", "A-", "Eczema", "Dr. Daniel Kim", day(2024, 1, 5), "discharged"),
        patient("PAT-007", "Noah Davis", 41, "Male", "B-", "Chest Pain", "Dr. Aisha Okafor", day(2024, 1, 15), "admitted"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    patient_name: &str,
    doctor_name: &str,
    department: &str,
    visit_type: &str,
    date: NaiveDate,
    time: &str,
    status: &str,
    priority: &str,
) -> Appointment {
    Appointment {
        id: id.into(),
        patient_name: patient_name.into(),
        doctor_name: doctor_name.into(),
        department: department.into(),
        visit_type: visit_type.into(),
        date,
        time: time.into(),
        status: Status::from(status),
        priority: Priority::from(priority),
    }
}

#[rustfmt::skip]
fn sample_appointments() -> Vec<Appointment> {
    vec![
        appointment("APT-001", "James Wilson", "Dr. Emily Chen", "Cardiology", "Emergency Consult", day(2024, 1, 15), "09:00", "in-progress", "urgent"),
        appointment("APT-002", "Sarah Johnson", "Dr. Michael Brown", "Neurology", "Follow-up", day(2024, 1, 15), "09:30", "completed", "medium"),
        appointment("APT-003", "Liam Thompson", "Dr. Priya Patel", "Pediatrics", "Check-up", day(2024, 1, 15), "10:15", "confirmed", "low"),
        appointment("APT-004", "Maria Rodriguez", "Dr. Robert Garcia", "Orthopedics", "Post-op Review", day(2024, 1, 15), "11:00", "scheduled", "high"),
        appointment("APT-005", "Chen Wei", "Dr. Emily Chen", "Cardiology", "Consultation", day(2024, 1, 16), "14:00", "scheduled", "medium"),
        appointment("APT-006", "Fatima Hassan", "Dr. Daniel Kim", "Dermatology", "Consultation", day(2024, 1, 12), "15:30", "no-show", "low"),
        appointment("APT-007", "Noah Davis", "Dr. Aisha Okafor", "Emergency", "Triage", day(2024, 1, 15), "08:10", "completed", "urgent"),
        appointment("APT-008", "Sarah Johnson", "Dr. Daniel Kim", "Dermatology", "Consultation", day(2024, 1, 18), "13:00", "cancelled", "low"),
    ]
}

fn invoice(
    id: &str,
    patient_name: &str,
    service: &str,
    amount: f64,
    issued: NaiveDate,
    payment_method: Option<&str>,
    status: &str,
) -> Invoice {
    Invoice {
        id: id.into(),
        patient_name: patient_name.into(),
        service: service.into(),
        amount,
        issued,
        due: issued + chrono::Duration::days(30),
        payment_method: payment_method.map(Into::into),
        status: Status::from(status),
    }
}

#[rustfmt::skip]
fn sample_invoices() -> Vec<Invoice> {
    vec![
        invoice("INV-2024-001", "James Wilson", "Cardiac Catheterization", 4250.0, day(2024, 1, 2), Some("Insurance"), "pending"),
        invoice("INV-2024-002", "Sarah Johnson", "MRI Brain Scan", 1200.0, day(2024, 1, 3), Some("Credit Card"), "paid"),
        invoice("INV-2024-003", "Liam Thompson", "Pediatric Consultation", 180.0, day(2023, 12, 1), None, "overdue"),
        invoice("INV-2024-004", "Maria Rodriguez", "Orthopedic Surgery", 8900.0, day(2024, 1, 10), Some("Insurance"), "pending"),
        invoice("INV-2024-005", "Chen Wei", "Blood Work Panel", 320.0, day(2024, 1, 8), Some("Cash"), "paid"),
        invoice("INV-2024-006", "Fatima Hassan", "Dermatology Consultation", 150.0, day(2023, 11, 20), None, "overdue"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn prescription(
    id: &str,
    patient_name: &str,
    doctor_name: &str,
    medication: &str,
    dosage: &str,
    frequency: &str,
    quantity: u32,
    issued: NaiveDate,
    status: &str,
    urgency: &str,
) -> Prescription {
    Prescription {
        id: id.into(),
        patient_name: patient_name.into(),
        doctor_name: doctor_name.into(),
        medication: medication.into(),
        dosage: dosage.into(),
        frequency: frequency.into(),
        quantity,
        issued,
        status: Status::from(status),
        urgency: Urgency::from(urgency),
    }
}

#[rustfmt::skip]
fn sample_prescriptions() -> Vec<Prescription> {
    vec![
        prescription("RX-001", "James Wilson", "Dr. Emily Chen", "Lisinopril", "10mg", "Once daily", 30, day(2024, 1, 15), "pending", "urgent"),
        prescription("RX-002", "Sarah Johnson", "Dr. Michael Brown", "Sumatriptan", "50mg", "As needed", 9, day(2024, 1, 12), "dispensed", "routine"),
        prescription("RX-003", "Liam Thompson", "Dr. Priya Patel", "Albuterol Inhaler", "90mcg", "Every 4-6 hours", 1, day(2024, 1, 10), "dispensed", "routine"),
        prescription("RX-004", "Maria Rodriguez", "Dr. Robert Garcia", "Oxycodone", "5mg", "Every 6 hours", 20, day(2024, 1, 14), "pending", "stat"),
        prescription("RX-005", "Chen Wei", "Dr. Emily Chen", "Metformin", "500mg", "Twice daily", 60, day(2024, 1, 8), "pending", "routine"),
        prescription("RX-006", "Noah Davis", "Dr. Aisha Okafor", "Aspirin", "325mg", "Once", 1, day(2024, 1, 15), "cancelled", "emergency"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn inventory_item(
    id: &str,
    name: &str,
    category: &str,
    supplier: &str,
    current_stock: u32,
    min_stock: u32,
    max_stock: u32,
    unit_price: f64,
    expiry_date: NaiveDate,
) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        supplier: supplier.into(),
        current_stock,
        min_stock,
        max_stock,
        unit_price,
        expiry_date,
    }
}

#[rustfmt::skip]
fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        inventory_item("MED-001", "Amoxicillin 500mg", "Antibiotics", "PharmaCorp", 25, 100, 500, 0.45, day(2024, 3, 1)),
        inventory_item("MED-002", "Lisinopril 10mg", "Cardiovascular", "MediSupply", 45, 80, 400, 0.30, day(2025, 6, 30)),
        inventory_item("MED-003", "Insulin Glargine", "Diabetes", "BioHealth", 12, 30, 150, 24.50, day(2024, 2, 10)),
        inventory_item("MED-004", "Paracetamol 500mg", "Analgesics", "PharmaCorp", 850, 200, 1000, 0.05, day(2025, 12, 31)),
        inventory_item("MED-005", "Metformin 500mg", "Diabetes", "MediSupply", 320, 150, 600, 0.12, day(2024, 4, 10)),
        inventory_item("MED-006", "Salbutamol Inhaler", "Respiratory", "BioHealth", 0, 20, 100, 8.75, day(2024, 9, 15)),
        inventory_item("SUP-001", "Surgical Gloves (box)", "Supplies", "CareGear", 75, 75, 300, 6.20, day(2026, 1, 1)),
        inventory_item("SUP-002", "Saline 0.9% 1L", "Supplies", "CareGear", 140, 60, 400, 1.80, day(2023, 12, 31)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn lab_test(
    id: &str,
    patient_name: &str,
    test_name: &str,
    category: &str,
    ordered_by: &str,
    ordered: NaiveDate,
    result: Option<(&str, &str)>,
    status: &str,
    priority: &str,
) -> LabTest {
    LabTest {
        id: id.into(),
        patient_name: patient_name.into(),
        test_name: test_name.into(),
        category: category.into(),
        ordered_by: ordered_by.into(),
        ordered,
        result: result.map(|(text, _)| text.into()),
        result_status: result.map(|(_, flag)| Status::from(flag)),
        status: Status::from(status),
        priority: Priority::from(priority),
    }
}

#[rustfmt::skip]
fn sample_lab_tests() -> Vec<LabTest> {
    vec![
        lab_test("LAB-001", "James Wilson", "Troponin I", "Cardiac", "Dr. Emily Chen", day(2024, 1, 15), None, "in-progress", "urgent"),
        lab_test("LAB-002", "Sarah Johnson", "Complete Blood Count", "Hematology", "Dr. Michael Brown", day(2024, 1, 12), Some(("Within reference range", "normal")), "completed", "medium"),
        lab_test("LAB-003", "Chen Wei", "HbA1c", "Chemistry", "Dr. Emily Chen", day(2024, 1, 8), Some(("8.1%", "abnormal")), "completed", "medium"),
        lab_test("LAB-004", "Maria Rodriguez", "Coagulation Panel", "Hematology", "Dr. Robert Garcia", day(2024, 1, 14), None, "pending", "high"),
        lab_test("LAB-005", "Noah Davis", "Potassium", "Chemistry", "Dr. Aisha Okafor", day(2024, 1, 15), Some(("6.8 mmol/L", "critical")), "completed", "urgent"),
        lab_test("LAB-006", "Liam Thompson", "Allergy Panel", "Immunology", "Dr. Priya Patel", day(2024, 1, 10), None, "pending", "low"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn feedback(
    id: &str,
    patient_name: &str,
    department: &str,
    category: &str,
    rating: u8,
    comment: &str,
    submitted: NaiveDate,
    severity: &str,
    status: &str,
) -> Feedback {
    Feedback {
        id: id.into(),
        patient_name: patient_name.into(),
        department: department.into(),
        category: category.into(),
        rating,
        comment: comment.into(),
        submitted,
        severity: Severity::from(severity),
        status: Status::from(status),
    }
}

#[rustfmt::skip]
fn sample_feedback() -> Vec<Feedback> {
    vec![
        feedback("FB-001", "Sarah Johnson", "Neurology", "Compliment", 5, "Dr. Brown explained every step of the treatment clearly.", day(2024, 1, 13), "mild", "resolved"),
        feedback("FB-002", "Liam Thompson", "Pediatrics", "Complaint", 2, "Waited nearly two hours past the appointment time.", day(2024, 1, 11), "moderate", "pending"),
        feedback("FB-003", "Chen Wei", "Billing", "Complaint", 1, "Charged twice for the same blood panel.", day(2024, 1, 9), "severe", "pending"),
        feedback("FB-004", "Maria Rodriguez", "Orthopedics", "Suggestion", 4, "Ward signage could be easier to follow.", day(2024, 1, 14), "mild", "pending"),
        feedback("FB-005", "Fatima Hassan", "Dermatology", "Compliment", 5, "Quick and friendly front desk staff.", day(2024, 1, 6), "mild", "resolved"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_the_same_instance_every_call() {
        assert!(std::ptr::eq(sample(), sample()));
        let first = get_catalog::<Appointment>();
        let second = get_catalog::<Appointment>();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn every_domain_has_sample_records() {
        let catalogs = sample();
        for domain in Domain::ALL {
            assert!(catalogs.record_count(*domain) > 0, "{domain} is empty");
        }
    }

    #[test]
    fn default_catalogs_are_empty() {
        let catalogs = Catalogs::default();
        for domain in Domain::ALL {
            assert_eq!(catalogs.record_count(*domain), 0);
        }
        assert!(catalogs.get::<Doctor>().is_empty());
    }

    #[test]
    fn keys_are_unique_within_each_domain() {
        fn assert_unique<T: EntityRecord>(records: &[T]) {
            let mut keys: Vec<&str> = records.iter().map(|r| r.key()).collect();
            keys.sort_unstable();
            let before = keys.len();
            keys.dedup();
            assert_eq!(before, keys.len(), "duplicate key in {}", T::DOMAIN);
        }
        let c = sample();
        assert_unique(&c.doctors);
        assert_unique(&c.patients);
        assert_unique(&c.appointments);
        assert_unique(&c.invoices);
        assert_unique(&c.prescriptions);
        assert_unique(&c.inventory);
        assert_unique(&c.lab_tests);
        assert_unique(&c.feedback);
    }

    #[test]
    fn sample_categoricals_are_all_known() {
        let c = sample();
        for a in &c.appointments {
            assert!(a.status.is_known() && a.priority.is_known(), "{}", a.id);
        }
        for rx in &c.prescriptions {
            assert!(rx.status.is_known() && rx.urgency.is_known(), "{}", rx.id);
        }
        for fb in &c.feedback {
            assert!(fb.status.is_known() && fb.severity.is_known(), "{}", fb.id);
        }
    }

    #[test]
    fn domain_json_lists_records_in_order() {
        let json = sample().domain_json(Domain::LabTests).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["id"], "LAB-001");
        assert_eq!(rows[1]["result_status"], "normal");
        assert!(rows[0]["result_status"].is_null());
    }

    #[test]
    fn derived_contact_fields() {
        let chen = &sample().doctors[0];
        assert_eq!(chen.email, "emily.chen@carehub.example");
        assert_eq!(chen.phone, "+1 555 0101");
        assert_eq!(sample().invoices[0].due, day(2024, 2, 1));
    }
}
