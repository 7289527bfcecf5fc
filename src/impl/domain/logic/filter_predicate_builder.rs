use chrono::{DateTime, FixedOffset};

use crate::entities::{
    ClauseTest, CompiledClause, FilterClause, FilterDimension, FilterMode, Predicate, Record,
    Value, ALL_SENTINEL,
};

use super::{date_bucket_resolver::DateBucketResolver, utils::normalize_text};

/// Compiles filter dimensions into a single predicate: the AND of every
/// active dimension, each dimension being the OR of its active clauses.
///
/// Criteria are normalized once here (search text folded, date buckets
/// resolved against `now`) rather than on every record.
pub struct FilterPredicateBuilder {
    now: DateTime<FixedOffset>,
}

impl FilterPredicateBuilder {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    pub fn build(&self, dimensions: &[FilterDimension]) -> Predicate {
        let active: Vec<Predicate> = dimensions
            .iter()
            .filter_map(|d| self.compile_dimension(d))
            .collect();
        match active.len() {
            0 => Predicate::Always,
            1 => active.into_iter().next().unwrap_or(Predicate::Always),
            _ => Predicate::All(active),
        }
    }

    /// `None` when every clause is at its sentinel. A dimension without any
    /// clause is an empty OR and matches nothing.
    fn compile_dimension(&self, dimension: &FilterDimension) -> Option<Predicate> {
        if dimension.clauses.is_empty() {
            return Some(Predicate::Never);
        }
        let mut clauses: Vec<Predicate> = dimension
            .clauses
            .iter()
            .filter_map(|c| self.compile_clause(c))
            .map(Predicate::Clause)
            .collect();
        match clauses.len() {
            0 => None,
            1 => clauses.pop(),
            _ => Some(Predicate::Any(clauses)),
        }
    }

    fn compile_clause(&self, clause: &FilterClause) -> Option<CompiledClause> {
        let test = match &clause.mode {
            FilterMode::All => return None,
            FilterMode::Equals(criterion) if is_sentinel(criterion) => return None,
            FilterMode::Equals(criterion) => ClauseTest::Equals(criterion.clone()),
            FilterMode::IncludesAny(criteria)
                if criteria.is_empty() || criteria.iter().any(|c| is_sentinel(c)) =>
            {
                return None
            }
            FilterMode::IncludesAny(criteria) => ClauseTest::IncludesAny(criteria.clone()),
            FilterMode::NumericEquals(n) => ClauseTest::NumericEquals(*n),
            FilterMode::NumericRange {
                min: None,
                max: None,
            } => return None,
            FilterMode::NumericRange { min, max } => ClauseTest::NumericRange {
                min: *min,
                max: *max,
            },
            FilterMode::TextContains(query) => {
                let folded = normalize_text(query.trim());
                if folded.is_empty() {
                    return None;
                }
                ClauseTest::TextContains(folded)
            }
            FilterMode::DateWithin(bucket) => {
                ClauseTest::Within(DateBucketResolver::resolve(bucket, self.now)?)
            }
        };
        Some(CompiledClause {
            accessor: clause.accessor.clone(),
            test,
            offset: *self.now.offset(),
        })
    }
}

fn is_sentinel(criterion: &str) -> bool {
    criterion.is_empty() || criterion == ALL_SENTINEL
}

impl Predicate {
    pub fn test(&self, record: &Record) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Never => false,
            Predicate::All(ps) => ps.iter().all(|p| p.test(record)),
            Predicate::Any(ps) => ps.iter().any(|p| p.test(record)),
            Predicate::Clause(c) => c.test(record),
            Predicate::Custom(f) => f(record),
        }
    }

    /// Records passing the predicate, in input order.
    pub fn filter<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.test(r)).collect()
    }
}

impl CompiledClause {
    fn test(&self, record: &Record) -> bool {
        let value = self.accessor.get(record);
        value.elements().any(|v| self.test_value(v))
    }

    fn test_value(&self, value: &Value) -> bool {
        match &self.test {
            ClauseTest::Equals(criterion) => value.key().is_some_and(|k| k == *criterion),
            ClauseTest::IncludesAny(criteria) => {
                value.key().is_some_and(|k| criteria.contains(&k))
            }
            ClauseTest::NumericEquals(n) => value.as_number().is_some_and(|v| v == *n),
            ClauseTest::NumericRange { min, max } => value.as_number().is_some_and(|v| {
                min.map_or(true, |min| v >= min) && max.map_or(true, |max| v <= max)
            }),
            ClauseTest::TextContains(folded) => value
                .key()
                .is_some_and(|k| normalize_text(&k).contains(folded.as_str())),
            ClauseTest::Within(interval) => value
                .as_timestamp(&self.offset)
                .is_some_and(|t| interval.contains(&t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::TimeZone as _;

    use super::*;
    use crate::entities::{DateBucket, FieldAccessor};

    fn now() -> DateTime<FixedOffset> {
        // Sunday.
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 10, 18, 0, 0)
            .unwrap()
    }

    fn invoices() -> Vec<Record> {
        vec![
            Record::new("1")
                .with("reference", "INV-2024-001")
                .with("title", "Facture électricité")
                .with("status", "validated")
                .with("price", 150.0)
                .with("createdAt", "2024-03-04T00:00:00Z"),
            Record::new("2")
                .with("reference", "INV-2024-002")
                .with("title", "Fournitures de bureau")
                .with("status", "pending")
                .with("price", 80.0)
                .with("createdAt", "2024-03-03T23:59:00Z"),
            Record::new("3")
                .with("reference", "PO-2023-117")
                .with("title", "Électricité siège")
                .with("status", "validated")
                .with("price", "1 200,00")
                .with("createdAt", "pas de date"),
            Record::new("4")
                .with("reference", "INV-2023-118")
                .with("title", "Carburant")
                .with("status", "paid")
                .with("price", Value::Null),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn no_dimensions_matches_everything() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[]);
        assert_eq!(p.filter(&records).len(), records.len());
    }

    #[test]
    fn sentinels_are_identity() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[
            FilterDimension::new("status", FilterMode::All),
            FilterDimension::new("status", FilterMode::IncludesAny(BTreeSet::new())),
            FilterDimension::new("title", FilterMode::TextContains("   ".into())),
            FilterDimension::new(
                "price",
                FilterMode::NumericRange {
                    min: None,
                    max: None,
                },
            ),
            FilterDimension::new("createdAt", FilterMode::DateWithin(DateBucket::None)),
        ]);
        assert_eq!(ids(&p.filter(&records)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn all_string_is_a_sentinel_in_every_selection_mode() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[
            FilterDimension::new("status", FilterMode::Equals(ALL_SENTINEL.into())),
            FilterDimension::new("status", FilterMode::Equals(String::new())),
            FilterDimension::new(
                "status",
                FilterMode::IncludesAny(BTreeSet::from(["paid".into(), ALL_SENTINEL.into()])),
            ),
        ]);
        assert_eq!(ids(&p.filter(&records)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn search_without_matching_field_kind_matches_nothing() {
        let records = invoices();
        let builder = FilterPredicateBuilder::new(now());

        // Only numeric fields, and the query is not a number.
        let dimension = FilterDimension::search("zzz", &[], &["price"]).unwrap();
        assert!(builder.build(&[dimension]).filter(&records).is_empty());

        let dimension = FilterDimension::search("150", &[], &["price"]).unwrap();
        assert_eq!(ids(&builder.build(&[dimension]).filter(&records)), vec!["1"]);

        assert!(FilterDimension::search("  ", &[], &["price"]).is_none());
    }

    #[test]
    fn search_ignores_accents_and_case() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::search(
            "electricite",
            &["reference", "title"],
            &[],
        )
        .unwrap()]);
        assert_eq!(ids(&p.filter(&records)), vec!["1", "3"]);
    }

    #[test]
    fn search_matches_numeric_fields_exactly() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::search(
            "1200",
            &["reference", "title"],
            &["price"],
        )
        .unwrap()]);
        assert_eq!(ids(&p.filter(&records)), vec!["3"]);
    }

    #[test]
    fn dimensions_are_and_combined() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[
            FilterDimension::new("status", FilterMode::Equals("validated".into())),
            FilterDimension::search("INV-2024", &["reference", "title"], &[]).unwrap(),
        ]);
        // 2 matches the search only, 3 matches the status only.
        assert_eq!(ids(&p.filter(&records)), vec!["1"]);
    }

    #[test]
    fn includes_any_is_or_within_the_dimension() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::new(
            "status",
            FilterMode::IncludesAny(BTreeSet::from(["validated".into(), "paid".into()])),
        )]);
        assert_eq!(ids(&p.filter(&records)), vec!["1", "3", "4"]);
    }

    #[test]
    fn stale_enum_criterion_matches_nothing() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::new(
            "status",
            FilterMode::Equals("archived".into()),
        )]);
        assert!(p.filter(&records).is_empty());
    }

    #[test]
    fn week_bucket_excludes_previous_sunday_and_unparsable_dates() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::new(
            "createdAt",
            FilterMode::DateWithin(DateBucket::ThisWeek),
        )]);
        assert_eq!(ids(&p.filter(&records)), vec!["1"]);
    }

    #[test]
    fn incomplete_custom_range_keeps_everything() {
        let records = vec![
            Record::new("a").with("createdAt", "2024-01-01"),
            Record::new("b").with("createdAt", "2024-06-01"),
        ];
        let to = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
            .unwrap();
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::new(
            "createdAt",
            FilterMode::DateWithin(DateBucket::custom(None, Some(to))),
        )]);
        assert_eq!(ids(&p.filter(&records)), vec!["a", "b"]);
    }

    #[test]
    fn numeric_range_is_inclusive_and_skips_missing_values() {
        let records = invoices();
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::new(
            "price",
            FilterMode::NumericRange {
                min: Some(80.0),
                max: Some(150.0),
            },
        )]);
        assert_eq!(ids(&p.filter(&records)), vec!["1", "2"]);
    }

    #[test]
    fn list_fields_match_on_any_element() {
        let records = vec![
            Record::new("t1").with(
                "validators",
                Value::List(vec![Value::Number(7.0), Value::Number(9.0)]),
            ),
            Record::new("t2").with("validators", Value::List(vec![Value::Number(3.0)])),
        ];
        let p = FilterPredicateBuilder::new(now()).build(&[FilterDimension::new(
            "validators",
            FilterMode::Equals("9".into()),
        )]);
        assert_eq!(ids(&p.filter(&records)), vec!["t1"]);
    }

    #[test]
    fn custom_accessors_and_predicates_compose() {
        let records = invoices();
        let upper_ref = FieldAccessor::custom(|r| {
            r.get("reference")
                .and_then(Value::as_text)
                .map_or(Value::Null, |s| Value::Text(s.split('-').next().unwrap_or("").into()))
        });
        let p = FilterPredicateBuilder::new(now())
            .build(&[FilterDimension::new(upper_ref, FilterMode::Equals("PO".into()))])
            .and(Predicate::custom(|r| r.id.as_str() != "0"));
        assert_eq!(ids(&p.filter(&records)), vec!["3"]);
    }

    #[test]
    fn building_twice_gives_identical_results() {
        let records = invoices();
        let dims = [
            FilterDimension::new("status", FilterMode::Equals("validated".into())),
            FilterDimension::search("électricité", &["title"], &[]).unwrap(),
        ];
        let builder = FilterPredicateBuilder::new(now());
        let first = builder.build(&dims).filter(&records);
        let second = builder.build(&dims).filter(&records);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["1", "3"]);
    }
}
