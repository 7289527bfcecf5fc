use std::collections::{BTreeMap, BTreeSet};

use iso_currency::Currency;

use super::{
    aggregation_rule::RuleSpec, auth_context::AccessScope, date_bucket::DateBucket,
    filter_dimension::FilterDimension, list_view::SortSpec,
};

/// How a named dimension maps user input onto record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionSpec {
    /// Single-select dropdown (status, type, category id).
    Enum { field: String },
    /// Multi-select (ex. "validated or paid").
    MultiEnum { field: String },
    /// Search box over several text fields, plus exact match on numeric
    /// fields when the query is a number.
    Search {
        text_fields: Vec<String>,
        numeric_fields: Vec<String>,
    },
    /// Period selector over the view's timestamp field.
    Date { field: String },
    /// Min/max inputs over a numeric field.
    Range { field: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDimension {
    pub name: String,
    pub spec: DimensionSpec,
}

/// Declarative configuration of one list page.
#[derive(Debug, Clone)]
pub struct ViewDefinition {
    pub name: String,
    pub id_field: String,
    pub dimensions: Vec<NamedDimension>,
    pub rules: Vec<RuleSpec>,
    pub default_sort: Option<SortSpec>,
    pub scope: Option<AccessScope>,
    /// Currency of the amounts summed by the view's tiles, if any.
    pub currency: Option<Currency>,
}

/// Current value of one dimension, as produced by the UI controls.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DimensionValue {
    #[default]
    All,
    Equals(String),
    AnyOf(BTreeSet<String>),
    Text(String),
    Date(DateBucket),
    Range { min: Option<f64>, max: Option<f64> },
}

/// Filter values of a view, keyed by dimension name. Dimensions without an
/// entry are at their "all" sentinel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub(crate) values: BTreeMap<String, DimensionValue>,
}

// --

pub const DEFAULT_ID_FIELD: &str = "id";

/// Value sent by select controls for "no filter".
pub const ALL_SENTINEL: &str = "all";

impl ViewDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_field: DEFAULT_ID_FIELD.to_string(),
            dimensions: Vec::new(),
            rules: Vec::new(),
            default_sort: None,
            scope: None,
            currency: None,
        }
    }

    pub fn id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    pub fn dimension(mut self, name: impl Into<String>, spec: DimensionSpec) -> Self {
        self.dimensions.push(NamedDimension {
            name: name.into(),
            spec,
        });
        self
    }

    pub fn enum_filter(self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.dimension(
            name,
            DimensionSpec::Enum {
                field: field.into(),
            },
        )
    }

    pub fn multi_enum_filter(self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.dimension(
            name,
            DimensionSpec::MultiEnum {
                field: field.into(),
            },
        )
    }

    pub fn search(
        self,
        name: impl Into<String>,
        text_fields: &[&str],
        numeric_fields: &[&str],
    ) -> Self {
        self.dimension(
            name,
            DimensionSpec::Search {
                text_fields: text_fields.iter().map(|s| s.to_string()).collect(),
                numeric_fields: numeric_fields.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    pub fn date_filter(self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.dimension(
            name,
            DimensionSpec::Date {
                field: field.into(),
            },
        )
    }

    pub fn range_filter(self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.dimension(
            name,
            DimensionSpec::Range {
                field: field.into(),
            },
        )
    }

    pub fn tile(mut self, rule: RuleSpec) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn default_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    pub fn scope(mut self, scope: AccessScope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn find_dimension(&self, name: &str) -> Option<&NamedDimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }
}

impl DimensionSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            DimensionSpec::Enum { .. } => "enum",
            DimensionSpec::MultiEnum { .. } => "multi-enum",
            DimensionSpec::Search { .. } => "search",
            DimensionSpec::Date { .. } => "date",
            DimensionSpec::Range { .. } => "range",
        }
    }
}

impl DimensionValue {
    /// Value of a single-select control; the "all" sentinel string and the
    /// empty string both mean no filter.
    pub fn selection(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() || value == ALL_SENTINEL {
            DimensionValue::All
        } else {
            DimensionValue::Equals(value)
        }
    }

    /// Value of a multi-select control. Picking the "all" entry, or nothing,
    /// means no filter.
    pub fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() || values.contains(ALL_SENTINEL) {
            DimensionValue::All
        } else {
            DimensionValue::AnyOf(values)
        }
    }

    pub fn text(query: impl Into<String>) -> Self {
        DimensionValue::Text(query.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DimensionValue::All)
    }
}

impl FilterState {
    /// All dimensions of the view at their sentinel.
    pub fn all_for(definition: &ViewDefinition) -> Self {
        Self {
            values: definition
                .dimensions
                .iter()
                .map(|d| (d.name.clone(), DimensionValue::All))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> &DimensionValue {
        static ALL: DimensionValue = DimensionValue::All;
        self.values.get(name).unwrap_or(&ALL)
    }

    pub fn with(mut self, name: impl Into<String>, value: DimensionValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DimensionValue)> {
        self.values.iter()
    }

    pub fn is_all_sentinel(&self) -> bool {
        self.values.values().all(DimensionValue::is_all)
    }
}

impl NamedDimension {
    /// Translates the current value into filter clauses. Returns `None` when
    /// the value is the sentinel or does not fit this dimension.
    pub(crate) fn to_filter(&self, value: &DimensionValue) -> Option<FilterDimension> {
        use super::filter_dimension::FilterMode;

        match (&self.spec, value) {
            (_, DimensionValue::All) => None,
            (DimensionSpec::Enum { field }, DimensionValue::Equals(v)) => Some(
                FilterDimension::new(field.as_str(), FilterMode::Equals(v.clone())),
            ),
            (DimensionSpec::MultiEnum { field }, DimensionValue::AnyOf(vs)) => Some(
                FilterDimension::new(field.as_str(), FilterMode::IncludesAny(vs.clone())),
            ),
            (DimensionSpec::MultiEnum { field }, DimensionValue::Equals(v)) => Some(
                FilterDimension::new(
                    field.as_str(),
                    FilterMode::IncludesAny(BTreeSet::from([v.clone()])),
                ),
            ),
            (
                DimensionSpec::Search {
                    text_fields,
                    numeric_fields,
                },
                DimensionValue::Text(q),
            ) => FilterDimension::search(q, text_fields, numeric_fields),
            (DimensionSpec::Date { field }, DimensionValue::Date(bucket)) => Some(
                FilterDimension::new(field.as_str(), FilterMode::DateWithin(*bucket)),
            ),
            (DimensionSpec::Range { field }, DimensionValue::Range { min, max }) => Some(
                FilterDimension::new(
                    field.as_str(),
                    FilterMode::NumericRange {
                        min: *min,
                        max: *max,
                    },
                ),
            ),
            _ => None,
        }
    }

    pub(crate) fn accepts(&self, value: &DimensionValue) -> bool {
        matches!(
            (&self.spec, value),
            (_, DimensionValue::All)
                | (DimensionSpec::Enum { .. }, DimensionValue::Equals(_))
                | (DimensionSpec::MultiEnum { .. }, DimensionValue::AnyOf(_))
                | (DimensionSpec::MultiEnum { .. }, DimensionValue::Equals(_))
                | (DimensionSpec::Search { .. }, DimensionValue::Text(_))
                | (DimensionSpec::Date { .. }, DimensionValue::Date(_))
                | (DimensionSpec::Range { .. }, DimensionValue::Range { .. })
        )
    }
}
