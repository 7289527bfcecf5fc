use std::collections::BTreeMap;

use super::{field_accessor::FieldAccessor, filter_dimension::FilterDimension, predicate::Predicate};

#[derive(Debug, Clone)]
pub enum Reducer {
    Count,
    /// Sum of a numeric field. Missing or non-numeric values count as 0.
    Sum(FieldAccessor),
}

/// One summary tile computation over a filtered collection.
#[derive(Debug, Clone)]
pub struct AggregationRule {
    pub label: String,
    pub predicate: Predicate,
    pub reducer: Reducer,
}

/// Declarative form of an aggregation rule, as held by a view definition. Its
/// dimensions are compiled into a predicate on every recomputation, since
/// date buckets depend on the current time.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub label: String,
    pub dimensions: Vec<FilterDimension>,
    pub reducer: Reducer,
}

/// Summary tile values, keyed by rule label.
pub type Statistics = BTreeMap<String, f64>;

// --

impl AggregationRule {
    pub fn count(label: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            label: label.into(),
            predicate,
            reducer: Reducer::Count,
        }
    }

    pub fn sum(
        label: impl Into<String>,
        predicate: Predicate,
        accessor: impl Into<FieldAccessor>,
    ) -> Self {
        Self {
            label: label.into(),
            predicate,
            reducer: Reducer::Sum(accessor.into()),
        }
    }
}

impl RuleSpec {
    pub fn count(label: impl Into<String>, dimensions: Vec<FilterDimension>) -> Self {
        Self {
            label: label.into(),
            dimensions,
            reducer: Reducer::Count,
        }
    }

    pub fn sum(
        label: impl Into<String>,
        dimensions: Vec<FilterDimension>,
        accessor: impl Into<FieldAccessor>,
    ) -> Self {
        Self {
            label: label.into(),
            dimensions,
            reducer: Reducer::Sum(accessor.into()),
        }
    }
}
