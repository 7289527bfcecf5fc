use std::{borrow::Cow, sync::Arc};

use chrono::FixedOffset;

use super::record::{Record, Value};

static NULL: Value = Value::Null;

/// Extracts a value from a record for predicate evaluation or aggregation.
/// Accessors are stateless and side-effect-free.
#[derive(Clone)]
pub enum FieldAccessor {
    Field(String),
    Custom(Arc<dyn Fn(&Record) -> Value + Send + Sync>),
}

impl FieldAccessor {
    pub fn field(name: impl Into<String>) -> Self {
        FieldAccessor::Field(name.into())
    }

    pub fn custom(f: impl Fn(&Record) -> Value + Send + Sync + 'static) -> Self {
        FieldAccessor::Custom(Arc::new(f))
    }

    /// Calendar month (`YYYY-MM`) of a timestamp field, for grouping
    /// dashboard statistics by month. Records without a readable timestamp
    /// yield `Null`.
    pub fn month_of(field: impl Into<String>, offset: FixedOffset) -> Self {
        let field = field.into();
        Self::custom(move |record| {
            record
                .get(&field)
                .and_then(|v| v.as_timestamp(&offset))
                .map_or(Value::Null, |t| Value::Text(t.format("%Y-%m").to_string()))
        })
    }

    pub fn get<'a>(&self, record: &'a Record) -> Cow<'a, Value> {
        match self {
            FieldAccessor::Field(name) => Cow::Borrowed(record.get(name).unwrap_or(&NULL)),
            FieldAccessor::Custom(f) => Cow::Owned(f(record)),
        }
    }
}

impl std::fmt::Debug for FieldAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldAccessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            FieldAccessor::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for FieldAccessor {
    fn from(name: &str) -> Self {
        FieldAccessor::field(name)
    }
}

impl From<String> for FieldAccessor {
    fn from(name: String) -> Self {
        FieldAccessor::Field(name)
    }
}
