use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) String);

/// A single field value, as delivered by the API.
///
/// Timestamps usually arrive as ISO-8601 text and are only interpreted when a
/// date-constrained view asks for them (see `Value::as_timestamp`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Timestamp(DateTime<FixedOffset>),
    List(Vec<Value>),
}

/// One domain entity instance (invoice, ticket, bank account, ...), opaque to
/// the filtering core apart from its identity. Nested objects are flattened
/// into dotted field names (ex. `supplier.name`).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub fields: BTreeMap<String, Value>,
}

// --

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style setter, mostly useful when records are assembled in code.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

// Easy conversion.

macro_rules! impl_into_value {
    ($typ:ty, $variant:ident) => {
        impl From<$typ> for Value {
            fn from(v: $typ) -> Self {
                Value::$variant(v.into())
            }
        }
    };
}

impl_into_value!(bool, Bool);
impl_into_value!(f64, Number);
impl_into_value!(i32, Number);
impl_into_value!(u32, Number);
impl_into_value!(String, Text);
impl_into_value!(&str, Text);
impl_into_value!(DateTime<FixedOffset>, Timestamp);
impl_into_value!(Vec<Value>, List);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
