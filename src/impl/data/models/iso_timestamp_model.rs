use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidIsoTimestamp;

/// ISO-8601 instant as written in configuration. Without an explicit offset
/// the value is only fixed once the viewer's offset is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IsoTimestampModel {
    Absolute(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl IsoTimestampModel {
    pub(crate) fn at(self, offset: FixedOffset) -> Result<DateTime<FixedOffset>, ServerError> {
        match self {
            IsoTimestampModel::Absolute(t) => Ok(t),
            IsoTimestampModel::Local(naive) => naive
                .and_local_timezone(offset)
                .single()
                .ok_or_else(|| InvalidIsoTimestamp::new(&naive.to_string())),
        }
    }
}

impl FromStr for IsoTimestampModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(t) = DateTime::parse_from_rfc3339(s) {
            return Ok(IsoTimestampModel::Absolute(t));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(IsoTimestampModel::Local(naive));
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| InvalidIsoTimestamp::with_debug(s, &e))?;
        Ok(IsoTimestampModel::Local(date.and_time(chrono::NaiveTime::MIN)))
    }
}

impl<'de> Deserialize<'de> for IsoTimestampModel {
    fn deserialize<D>(deserializer: D) -> Result<IsoTimestampModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IsoTimestampModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}
