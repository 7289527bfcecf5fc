use std::{collections::BTreeSet, sync::Arc};

use chrono::FixedOffset;

use super::{date_bucket::DateInterval, field_accessor::FieldAccessor, record::Record};

/// A pure boolean test over a single record.
#[derive(Clone)]
pub enum Predicate {
    Always,
    Never,
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Clause(CompiledClause),
    Custom(Arc<dyn Fn(&Record) -> bool + Send + Sync>),
}

/// A filter clause with its criterion already normalized (text folded, date
/// bucket resolved), ready to be evaluated against many records.
#[derive(Debug, Clone)]
pub struct CompiledClause {
    pub(crate) accessor: FieldAccessor,
    pub(crate) test: ClauseTest,
    /// Offset used to read timestamps that carry none.
    pub(crate) offset: FixedOffset,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ClauseTest {
    Equals(String),
    IncludesAny(BTreeSet<String>),
    NumericEquals(f64),
    NumericRange { min: Option<f64>, max: Option<f64> },
    TextContains(String),
    Within(DateInterval),
}

// --

impl Predicate {
    pub fn custom(f: impl Fn(&Record) -> bool + Send + Sync + 'static) -> Self {
        Predicate::Custom(Arc::new(f))
    }

    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Always, p) | (p, Predicate::Always) => p,
            (Predicate::All(mut ps), p) => {
                ps.push(p);
                Predicate::All(ps)
            }
            (a, b) => Predicate::All(vec![a, b]),
        }
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Always => f.write_str("Always"),
            Predicate::Never => f.write_str("Never"),
            Predicate::All(ps) => f.debug_tuple("All").field(ps).finish(),
            Predicate::Any(ps) => f.debug_tuple("Any").field(ps).finish(),
            Predicate::Clause(c) => f.debug_tuple("Clause").field(c).finish(),
            Predicate::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
