use chrono::FixedOffset;
use fractic_server_error::ServerError;

use crate::entities::DateBucket;

use super::iso_timestamp_model::IsoTimestampModel;

/// Period selector as written in RON (ex. `ThisWeek`,
/// `Custom(from: Some("2024-01-01"), to: None)`). "No period" is expressed by
/// leaving the dimension at `All`.
#[derive(Debug, Clone, serde_derive::Deserialize)]
pub(crate) enum DateBucketModel {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    Custom {
        #[serde(default)]
        from: Option<IsoTimestampModel>,
        #[serde(default)]
        to: Option<IsoTimestampModel>,
    },
}

impl DateBucketModel {
    pub(crate) fn at(self, offset: FixedOffset) -> Result<DateBucket, ServerError> {
        Ok(match self {
            DateBucketModel::Today => DateBucket::Today,
            DateBucketModel::ThisWeek => DateBucket::ThisWeek,
            DateBucketModel::ThisMonth => DateBucket::ThisMonth,
            DateBucketModel::ThisYear => DateBucket::ThisYear,
            DateBucketModel::Custom { from, to } => DateBucket::Custom {
                from: from.map(|t| t.at(offset)).transpose()?,
                to: to.map(|t| t.at(offset)).transpose()?,
            },
        })
    }
}
