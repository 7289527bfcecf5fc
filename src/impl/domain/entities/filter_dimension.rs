use std::collections::BTreeSet;

use super::{date_bucket::DateBucket, field_accessor::FieldAccessor};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterMode {
    /// Sentinel: the clause contributes `true`.
    All,
    /// Exact match against an enum-like field (status, type, category id).
    Equals(String),
    /// Field value must be one of the given values. An empty set is treated
    /// as the sentinel.
    IncludesAny(BTreeSet<String>),
    /// Exact numeric match, used when a search box also targets numeric ids
    /// or amounts.
    NumericEquals(f64),
    /// Inclusive bounds; no bounds at all is the sentinel.
    NumericRange { min: Option<f64>, max: Option<f64> },
    /// Case- and accent-insensitive substring match. A blank query is the
    /// sentinel.
    TextContains(String),
    DateWithin(DateBucket),
}

#[derive(Debug, Clone)]
pub struct FilterClause {
    pub accessor: FieldAccessor,
    pub mode: FilterMode,
}

/// One independently-toggleable filter axis. Its clauses are OR-combined
/// (ex. a search box matching any of several fields), while separate
/// dimensions are always AND-combined.
#[derive(Debug, Clone)]
pub struct FilterDimension {
    pub clauses: Vec<FilterClause>,
}

// --

impl FilterDimension {
    pub fn new(accessor: impl Into<FieldAccessor>, mode: FilterMode) -> Self {
        Self {
            clauses: vec![FilterClause {
                accessor: accessor.into(),
                mode,
            }],
        }
    }

    pub fn or(mut self, accessor: impl Into<FieldAccessor>, mode: FilterMode) -> Self {
        self.clauses.push(FilterClause {
            accessor: accessor.into(),
            mode,
        });
        self
    }

    /// Free-text search box: the query matches if any text field contains it
    /// or, when the query is a number, any numeric field equals it. A query
    /// that no field can match yields a dimension matching nothing.
    ///
    /// Returns `None` for a blank query (no filter).
    pub fn search<S: AsRef<str>>(
        query: &str,
        text_fields: &[S],
        numeric_fields: &[S],
    ) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }
        let text_clauses = text_fields.iter().map(|f| FilterClause {
            accessor: FieldAccessor::field(f.as_ref()),
            mode: FilterMode::TextContains(query.to_string()),
        });
        let numeric_clauses = crate::domain::logic::utils::parse_number(query)
            .into_iter()
            .flat_map(|n| {
                numeric_fields.iter().map(move |f| FilterClause {
                    accessor: FieldAccessor::field(f.as_ref()),
                    mode: FilterMode::NumericEquals(n),
                })
            });
        Some(Self {
            clauses: text_clauses.chain(numeric_clauses).collect(),
        })
    }
}
