use std::collections::BTreeMap;

use chrono::FixedOffset;
use fractic_server_error::ServerError;

use crate::entities::{DimensionValue, FilterState};

use super::date_bucket_model::DateBucketModel;

/// Saved filter preset, ex.
/// `{"status": Equals("pending"), "period": Date(ThisMonth)}`.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(transparent)]
pub(crate) struct FilterStateModel(BTreeMap<String, DimensionValueModel>);

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum DimensionValueModel {
    All,
    Equals(String),
    AnyOf(Vec<String>),
    Text(String),
    Date(DateBucketModel),
    Range {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
}

impl FilterStateModel {
    pub(crate) fn at(self, offset: FixedOffset) -> Result<FilterState, ServerError> {
        self.0
            .into_iter()
            .try_fold(FilterState::default(), |state, (name, value)| {
                Ok(state.with(name, value.at(offset)?))
            })
    }
}

impl DimensionValueModel {
    fn at(self, offset: FixedOffset) -> Result<DimensionValue, ServerError> {
        Ok(match self {
            DimensionValueModel::All => DimensionValue::All,
            DimensionValueModel::Equals(v) => DimensionValue::selection(v),
            DimensionValueModel::AnyOf(vs) => DimensionValue::any_of(vs),
            DimensionValueModel::Text(q) => DimensionValue::text(q),
            DimensionValueModel::Date(bucket) => DimensionValue::Date(bucket.at(offset)?),
            DimensionValueModel::Range { min, max } => DimensionValue::Range { min, max },
        })
    }
}
