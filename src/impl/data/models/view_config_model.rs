use std::collections::BTreeSet;

use chrono::FixedOffset;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    entities::{
        AccessScope, DimensionSpec, FilterDimension, FilterMode, Reducer, RuleSpec, SortDirection,
        SortSpec, ViewDefinition, DEFAULT_ID_FIELD,
    },
    errors::{DuplicateDimensionName, InvalidIsoCurrencyCode},
};

use super::date_bucket_model::DateBucketModel;

/// One list page, as declared in a RON views file.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ViewConfigModel {
    name: String,
    #[serde(default)]
    id_field: Option<String>,
    #[serde(default)]
    dimensions: Vec<DimensionModel>,
    #[serde(default)]
    tiles: Vec<TileModel>,
    #[serde(default)]
    default_sort: Option<SortModel>,
    #[serde(default)]
    scope: Option<AccessScope>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct DimensionModel {
    name: String,
    spec: DimensionSpecModel,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum DimensionSpecModel {
    Enum(String),
    MultiEnum(String),
    Search {
        text_fields: Vec<String>,
        #[serde(default)]
        numeric_fields: Vec<String>,
    },
    Date(String),
    Range(String),
}

/// Summary tile. Each entry of `filters` is a separate dimension (all must
/// match).
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct TileModel {
    label: String,
    #[serde(default)]
    filters: Vec<ClauseModel>,
    reducer: ReducerModel,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ClauseModel {
    field: String,
    mode: FilterModeModel,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum FilterModeModel {
    All,
    Equals(String),
    IncludesAny(BTreeSet<String>),
    NumericEquals(f64),
    NumericRange {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    TextContains(String),
    DateWithin(DateBucketModel),
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum ReducerModel {
    Count,
    Sum(String),
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct SortModel {
    field: String,
    direction: SortDirection,
}

impl ViewConfigModel {
    pub(crate) fn at(self, offset: FixedOffset) -> Result<ViewDefinition, ServerError> {
        let mut definition = ViewDefinition::new(&self.name)
            .id_field(self.id_field.unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()));

        for dimension in self.dimensions {
            if definition.find_dimension(&dimension.name).is_some() {
                return Err(DuplicateDimensionName::new(&self.name, &dimension.name));
            }
            definition = definition.dimension(dimension.name, dimension.spec.into());
        }
        for tile in self.tiles {
            let dimensions = tile
                .filters
                .into_iter()
                .map(|c| Ok(FilterDimension::new(c.field, c.mode.at(offset)?)))
                .collect::<Result<Vec<_>, ServerError>>()?;
            definition = definition.tile(RuleSpec {
                label: tile.label,
                dimensions,
                reducer: tile.reducer.into(),
            });
        }
        if let Some(sort) = self.default_sort {
            definition = definition.default_sort(SortSpec {
                field: sort.field,
                direction: sort.direction,
            });
        }
        if let Some(scope) = self.scope {
            definition = definition.scope(scope);
        }
        if let Some(code) = self.currency {
            let currency =
                Currency::from_code(&code).ok_or_else(|| InvalidIsoCurrencyCode::new(&code))?;
            definition = definition.currency(currency);
        }
        Ok(definition)
    }
}

impl From<DimensionSpecModel> for DimensionSpec {
    fn from(model: DimensionSpecModel) -> Self {
        match model {
            DimensionSpecModel::Enum(field) => DimensionSpec::Enum { field },
            DimensionSpecModel::MultiEnum(field) => DimensionSpec::MultiEnum { field },
            DimensionSpecModel::Search {
                text_fields,
                numeric_fields,
            } => DimensionSpec::Search {
                text_fields,
                numeric_fields,
            },
            DimensionSpecModel::Date(field) => DimensionSpec::Date { field },
            DimensionSpecModel::Range(field) => DimensionSpec::Range { field },
        }
    }
}

impl FilterModeModel {
    fn at(self, offset: FixedOffset) -> Result<FilterMode, ServerError> {
        Ok(match self {
            FilterModeModel::All => FilterMode::All,
            FilterModeModel::Equals(v) => FilterMode::Equals(v),
            FilterModeModel::IncludesAny(vs) => FilterMode::IncludesAny(vs),
            FilterModeModel::NumericEquals(n) => FilterMode::NumericEquals(n),
            FilterModeModel::NumericRange { min, max } => FilterMode::NumericRange { min, max },
            FilterModeModel::TextContains(q) => FilterMode::TextContains(q),
            FilterModeModel::DateWithin(bucket) => FilterMode::DateWithin(bucket.at(offset)?),
        })
    }
}

impl From<ReducerModel> for Reducer {
    fn from(model: ReducerModel) -> Self {
        match model {
            ReducerModel::Count => Reducer::Count,
            ReducerModel::Sum(field) => Reducer::Sum(field.into()),
        }
    }
}
