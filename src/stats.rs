//! Aggregate stat calculator for dashboard header cards.

use serde::Serialize;

type Predicate<T> = Box<dyn Fn(&T) -> bool>;
type Accessor<T> = Box<dyn Fn(&T) -> f64>;

/// How a stat card derives its value from a catalog.
pub enum Aggregate<T> {
    /// Number of records satisfying the predicate.
    Count(Predicate<T>),
    /// Sum of a numeric field.
    Sum(Accessor<T>),
    /// Share of denominator records that also satisfy the numerator,
    /// as a rounded percentage. A zero denominator yields 0.
    Ratio {
        numerator: Predicate<T>,
        denominator: Predicate<T>,
    },
}

/// A labelled stat card definition.
pub struct StatDefinition<T> {
    pub label: String,
    pub aggregate: Aggregate<T>,
    pub trend_text: Option<String>,
}

impl<T> StatDefinition<T> {
    pub fn count(label: impl Into<String>, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Self::new(label, Aggregate::Count(Box::new(predicate)))
    }

    pub fn sum(label: impl Into<String>, accessor: impl Fn(&T) -> f64 + 'static) -> Self {
        Self::new(label, Aggregate::Sum(Box::new(accessor)))
    }

    pub fn ratio(
        label: impl Into<String>,
        numerator: impl Fn(&T) -> bool + 'static,
        denominator: impl Fn(&T) -> bool + 'static,
    ) -> Self {
        Self::new(
            label,
            Aggregate::Ratio {
                numerator: Box::new(numerator),
                denominator: Box::new(denominator),
            },
        )
    }

    pub fn with_trend(mut self, text: impl Into<String>) -> Self {
        self.trend_text = Some(text.into());
        self
    }

    fn new(label: impl Into<String>, aggregate: Aggregate<T>) -> Self {
        Self {
            label: label.into(),
            aggregate,
            trend_text: None,
        }
    }

    /// Evaluates this definition over `records`.
    pub fn evaluate(&self, records: &[T]) -> StatValue {
        match &self.aggregate {
            Aggregate::Count(predicate) => {
                StatValue::Count(records.iter().filter(|&r| predicate(r)).count() as u64)
            }
            Aggregate::Sum(accessor) => StatValue::Amount(records.iter().map(|r| accessor(r)).sum()),
            Aggregate::Ratio {
                numerator,
                denominator,
            } => {
                let (hits, total) = records
                    .iter()
                    .filter(|&r| denominator(r))
                    .fold((0u64, 0u64), |(hits, total), r| {
                        (hits + u64::from(numerator(r)), total + 1)
                    });
                StatValue::Percent(percentage(hits, total))
            }
        }
    }
}

/// Rounded percentage; 0 when `total` is 0.
pub fn percentage(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// A stat card value: a number or a preformatted string.
///
/// Serializes as the bare number or string. Output only: `Count` and
/// `Percent` are indistinguishable on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(u64),
    Percent(u32),
    Amount(f64),
    Text(String),
}

/// One rendered stat card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSummary {
    pub label: String,
    pub value: StatValue,
    pub trend_text: Option<String>,
}

/// Evaluates each definition over `records`, in definition order.
pub fn compute_stats<T>(records: &[T], definitions: &[StatDefinition<T>]) -> Vec<StatSummary> {
    definitions
        .iter()
        .map(|definition| StatSummary {
            label: definition.label.clone(),
            value: definition.evaluate(records),
            trend_text: definition.trend_text.clone(),
        })
        .collect()
}
