use std::{borrow::Borrow, collections::BTreeMap};

use crate::entities::{AggregationRule, FieldAccessor, Record, Reducer, Statistics};

/// Label used for records whose grouping field is missing.
pub const UNKNOWN_GROUP: &str = "Unknown";

pub struct DerivedStatistics;

impl DerivedStatistics {
    /// Evaluates every rule independently over `records`. Rules never see each
    /// other's output; a label declared twice keeps the last rule's value.
    pub fn compute<R: Borrow<Record>>(records: &[R], rules: &[AggregationRule]) -> Statistics {
        rules
            .iter()
            .map(|rule| {
                let matching = records
                    .iter()
                    .map(Borrow::<Record>::borrow)
                    .filter(|r| rule.predicate.test(r));
                (rule.label.clone(), Self::reduce(matching, &rule.reducer))
            })
            .collect()
    }

    /// Reduces records per distinct key of `key` (ex. spend per category,
    /// tickets per status). Records without a key fall under
    /// `UNKNOWN_GROUP`.
    pub fn group<R: Borrow<Record>>(
        records: &[R],
        key: &FieldAccessor,
        reducer: &Reducer,
    ) -> BTreeMap<String, f64> {
        records
            .iter()
            .map(Borrow::<Record>::borrow)
            .fold(BTreeMap::<String, Vec<&Record>>::new(), |mut map, record| {
                let group = key
                    .get(record)
                    .key()
                    .unwrap_or_else(|| UNKNOWN_GROUP.to_string());
                map.entry(group).or_default().push(record);
                map
            })
            .into_iter()
            .map(|(group, members)| (group, Self::reduce(members.into_iter(), reducer)))
            .collect()
    }

    fn reduce<'a>(records: impl Iterator<Item = &'a Record>, reducer: &Reducer) -> f64 {
        match reducer {
            Reducer::Count => records.count() as f64,
            Reducer::Sum(accessor) => {
                let mut values: Vec<f64> = records
                    .map(|r| accessor.get(r).as_number().unwrap_or(0.0))
                    .collect();
                // Summed in sorted order so the total doesn't depend on input
                // order, even with floating-point rounding.
                values.sort_by(f64::total_cmp);
                values.into_iter().fold(0.0, |acc, v| acc + v)
            }
        }
    }
}
