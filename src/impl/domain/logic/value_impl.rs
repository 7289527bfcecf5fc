use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::entities::Value;

use super::utils::{local_midnight, normalize_text, parse_number};

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric reading of the value. Numeric text is accepted, since amounts
    /// often arrive as strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => parse_number(s),
            _ => None,
        }
    }

    /// Instant represented by the value. Text without an explicit offset (ex.
    /// "2024-03-04" or "2024-03-04T08:30:00") is read in `offset`; numbers are
    /// taken as epoch milliseconds.
    pub fn as_timestamp(&self, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            Value::Number(n) => DateTime::from_timestamp_millis(*n as i64)
                .map(|t| t.with_timezone(offset)),
            Value::Text(s) => parse_timestamp(s.trim(), offset),
            _ => None,
        }
    }

    /// Canonical string used for equality against UI criteria: category id
    /// `3` and criterion `"3"` are the same key.
    pub fn key(&self) -> Option<String> {
        match self {
            Value::Null | Value::List(_) => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(number_key(*n)),
            Value::Text(s) => Some(s.clone()),
            Value::Timestamp(t) => Some(t.to_rfc3339()),
        }
    }

    /// The value itself, or its elements for a list. Predicates match a list
    /// when any element matches.
    pub(crate) fn elements(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Value::List(vs) => Box::new(vs.iter()),
            v => Box::new(std::iter::once(v)),
        }
    }

    /// Ordering used by table sorting. Numeric text sorts with the numbers
    /// and date text with the timestamps, by instant (`offset` applies to
    /// dates written without one). Other values of different kinds are
    /// ordered by kind, and text compares accent- and case-insensitively.
    pub(crate) fn sort_cmp(&self, other: &Value, offset: &FixedOffset) -> Ordering {
        let rank = self.kind_rank(offset);
        let by_kind = rank.cmp(&other.kind_rank(offset));
        if by_kind.is_ne() {
            return by_kind;
        }
        match rank {
            KindRank::Number => {
                if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
                    return a.total_cmp(&b);
                }
            }
            KindRank::Date => {
                if let (Some(a), Some(b)) = (self.as_timestamp(offset), other.as_timestamp(offset))
                {
                    return a.cmp(&b);
                }
            }
            _ => {}
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => normalize_text(a)
                .cmp(&normalize_text(b))
                .then_with(|| a.cmp(b)),
            (Value::List(a), Value::List(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| x.sort_cmp(y, offset))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            _ => Ordering::Equal,
        }
    }

    fn kind_rank(&self, offset: &FixedOffset) -> KindRank {
        match self {
            Value::Bool(_) => KindRank::Bool,
            Value::Number(_) => KindRank::Number,
            Value::Text(s) if parse_number(s).is_some() => KindRank::Number,
            Value::Timestamp(_) => KindRank::Date,
            Value::Text(s) if parse_timestamp(s.trim(), offset).is_some() => KindRank::Date,
            Value::Text(_) => KindRank::Text,
            Value::List(_) => KindRank::List,
            Value::Null => KindRank::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum KindRank {
    Bool,
    Number,
    Date,
    Text,
    List,
    Null,
}

fn number_key(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn parse_timestamp(s: &str, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t);
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return naive.and_local_timezone(*offset).single();
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| local_midnight(d, offset))
}
