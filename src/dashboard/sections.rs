//! Stat card definitions per domain.

use crate::config::DashboardPolicy;
use crate::models::{
    Appointment, Doctor, EntityRecord, Feedback, InventoryItem, Invoice, LabTest, Patient,
    Prescription, Priority, Severity, Status, Urgency,
};
use crate::stats::StatDefinition;

/// A record type that knows which stat cards head its section.
pub trait SectionStats: EntityRecord + 'static {
    fn stat_definitions(policy: &DashboardPolicy) -> Vec<StatDefinition<Self>>;
}

impl SectionStats for Doctor {
    fn stat_definitions(_policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        vec![
            StatDefinition::count("Total Doctors", |_: &Doctor| true),
            StatDefinition::count("Available Now", |d: &Doctor| d.status == Status::Available),
            StatDefinition::count("On Leave", |d: &Doctor| d.status == Status::OnLeave),
            StatDefinition::sum("Patients Under Care", |d: &Doctor| f64::from(d.patient_count)),
        ]
    }
}

impl SectionStats for Patient {
    fn stat_definitions(_policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        vec![
            StatDefinition::count("Total Patients", |_: &Patient| true),
            StatDefinition::count("Admitted", |p: &Patient| p.status == Status::Admitted),
            StatDefinition::count("Critical", |p: &Patient| p.status == Status::Critical)
                .with_trend("Needs immediate review"),
            StatDefinition::ratio(
                "Discharge Rate",
                |p: &Patient| p.status == Status::Discharged,
                |_: &Patient| true,
            ),
        ]
    }
}

impl SectionStats for Appointment {
    fn stat_definitions(policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        let today = policy.as_of;
        vec![
            StatDefinition::count("Total Appointments", |_: &Appointment| true),
            StatDefinition::count("Today", move |a: &Appointment| a.date == today),
            StatDefinition::count("Urgent", |a: &Appointment| a.priority == Priority::Urgent),
            StatDefinition::ratio(
                "Completed Today",
                |a: &Appointment| a.status == Status::Completed,
                move |a: &Appointment| a.date == today,
            ),
        ]
    }
}

impl SectionStats for Invoice {
    fn stat_definitions(_policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        vec![
            StatDefinition::sum("Total Billed", |i: &Invoice| i.amount),
            StatDefinition::sum("Collected", |i: &Invoice| {
                if i.status == Status::Paid {
                    i.amount
                } else {
                    0.0
                }
            }),
            StatDefinition::count("Overdue", |i: &Invoice| i.status == Status::Overdue)
                .with_trend("Past due date"),
            StatDefinition::ratio(
                "Collection Rate",
                |i: &Invoice| i.status == Status::Paid,
                |_: &Invoice| true,
            ),
        ]
    }
}

impl SectionStats for Prescription {
    fn stat_definitions(_policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        vec![
            StatDefinition::count("Total Prescriptions", |_: &Prescription| true),
            StatDefinition::count("Pending", |rx: &Prescription| rx.status == Status::Pending),
            StatDefinition::count("Urgent", |rx: &Prescription| {
                matches!(rx.urgency, Urgency::Urgent | Urgency::Stat | Urgency::Emergency)
            }),
            StatDefinition::ratio(
                "Dispensed",
                |rx: &Prescription| rx.status == Status::Dispensed,
                |_: &Prescription| true,
            ),
        ]
    }
}

impl SectionStats for InventoryItem {
    fn stat_definitions(policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        let low = policy.clone();
        let share = policy.clone();
        let expiry = policy.clone();
        vec![
            StatDefinition::count("Total Items", |_: &InventoryItem| true),
            StatDefinition::count("Low Stock", move |i: &InventoryItem| {
                low.is_low_stock(i.current_stock, i.min_stock)
            })
            .with_trend("At or below minimum"),
            StatDefinition::count("Expiring Soon", move |i: &InventoryItem| {
                expiry.is_expiring_soon(i.expiry_date)
            }),
            StatDefinition::sum("Stock Value", |i: &InventoryItem| {
                f64::from(i.current_stock) * i.unit_price
            }),
            StatDefinition::ratio(
                "Low Stock Share",
                move |i: &InventoryItem| share.is_low_stock(i.current_stock, i.min_stock),
                |_: &InventoryItem| true,
            ),
        ]
    }
}

impl SectionStats for LabTest {
    fn stat_definitions(_policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        vec![
            StatDefinition::count("Total Tests", |_: &LabTest| true),
            StatDefinition::count("Pending", |t: &LabTest| t.status == Status::Pending),
            StatDefinition::count("Critical Results", |t: &LabTest| {
                t.result_status.as_ref() == Some(&Status::Critical)
            }),
            StatDefinition::ratio(
                "Completed",
                |t: &LabTest| t.status == Status::Completed,
                |_: &LabTest| true,
            ),
        ]
    }
}

impl SectionStats for Feedback {
    fn stat_definitions(_policy: &DashboardPolicy) -> Vec<StatDefinition<Self>> {
        vec![
            StatDefinition::count("Total Feedback", |_: &Feedback| true),
            StatDefinition::ratio("Satisfaction", |f: &Feedback| f.rating >= 4, |_: &Feedback| true)
                .with_trend("Rated 4 stars or more"),
            StatDefinition::count("Open Complaints", |f: &Feedback| {
                f.category == "Complaint" && f.status == Status::Pending
            }),
            StatDefinition::count("Severe Issues", |f: &Feedback| {
                matches!(f.severity, Severity::Severe | Severity::Critical)
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::stats::{compute_stats, StatValue};

    fn values<T: SectionStats>(policy: &DashboardPolicy) -> Vec<(String, StatValue)> {
        compute_stats(catalog::get_catalog::<T>(), &T::stat_definitions(policy))
            .into_iter()
            .map(|s| (s.label, s.value))
            .collect()
    }

    fn value_of(stats: &[(String, StatValue)], label: &str) -> StatValue {
        stats
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| panic!("no stat {label}"))
    }

    #[test]
    fn inventory_stats_follow_policy() {
        let policy = DashboardPolicy::default();
        let stats = values::<InventoryItem>(&policy);
        assert_eq!(value_of(&stats, "Total Items"), StatValue::Count(8));
        assert_eq!(value_of(&stats, "Low Stock"), StatValue::Count(5));
        assert_eq!(value_of(&stats, "Expiring Soon"), StatValue::Count(3));
        assert_eq!(value_of(&stats, "Low Stock Share"), StatValue::Percent(63));

        let strict = DashboardPolicy {
            low_stock_inclusive: false,
            ..DashboardPolicy::default()
        };
        assert_eq!(value_of(&values::<InventoryItem>(&strict), "Low Stock"), StatValue::Count(4));
    }

    #[test]
    fn appointment_completion_counts_today_only() {
        let stats = values::<Appointment>(&DashboardPolicy::default());
        assert_eq!(value_of(&stats, "Today"), StatValue::Count(5));
        assert_eq!(value_of(&stats, "Urgent"), StatValue::Count(2));
        assert_eq!(value_of(&stats, "Completed Today"), StatValue::Percent(40));
    }

    #[test]
    fn invoice_totals() {
        let stats = values::<Invoice>(&DashboardPolicy::default());
        assert_eq!(value_of(&stats, "Collected"), StatValue::Amount(1520.0));
        assert_eq!(value_of(&stats, "Overdue"), StatValue::Count(2));
        assert_eq!(value_of(&stats, "Collection Rate"), StatValue::Percent(33));
    }

    #[test]
    fn feedback_and_lab_stats() {
        let policy = DashboardPolicy::default();
        let feedback = values::<Feedback>(&policy);
        assert_eq!(value_of(&feedback, "Satisfaction"), StatValue::Percent(60));
        assert_eq!(value_of(&feedback, "Open Complaints"), StatValue::Count(2));
        assert_eq!(value_of(&feedback, "Severe Issues"), StatValue::Count(1));

        let labs = values::<LabTest>(&policy);
        assert_eq!(value_of(&labs, "Critical Results"), StatValue::Count(1));
        assert_eq!(value_of(&labs, "Completed"), StatValue::Percent(50));
    }

    #[test]
    fn prescription_urgency_groups_urgent_stat_emergency() {
        let stats = values::<Prescription>(&DashboardPolicy::default());
        assert_eq!(value_of(&stats, "Urgent"), StatValue::Count(3));
        assert_eq!(value_of(&stats, "Pending"), StatValue::Count(3));
    }
}
