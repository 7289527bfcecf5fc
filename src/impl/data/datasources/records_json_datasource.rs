use fractic_server_error::ServerError;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::{
    data::models::json_record_model::JsonRecordModel,
    entities::{Record, RecordId},
    errors::{InvalidJson, InvalidJsonContent},
};

/// Keys under which paginated API responses wrap their records.
const ENVELOPE_KEYS: [&str; 3] = ["data", "items", "results"];

pub(crate) trait RecordsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str, id_field: &str) -> Result<Vec<Record>, ServerError>;
}

pub(crate) struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsJsonDatasource for RecordsJsonDatasourceImpl {
    fn from_string(&self, s: &str, id_field: &str) -> Result<Vec<Record>, ServerError> {
        let root: JsonValue = serde_json::from_str(s).map_err(|e| InvalidJson::with_debug(&e))?;
        let items = match &root {
            JsonValue::Array(items) => items,
            JsonValue::Object(object) => ENVELOPE_KEYS
                .iter()
                .find_map(|k| object.get(*k).and_then(JsonValue::as_array))
                .ok_or_else(|| {
                    InvalidJsonContent::new("expected an array of records or a data envelope")
                })?,
            _ => {
                return Err(InvalidJsonContent::new(
                    "expected an array of records or a data envelope",
                ))
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let object = item.as_object().ok_or_else(|| {
                InvalidJsonContent::new(&format!("record #{} is not an object", i + 1))
            })?;
            let fields = JsonRecordModel::from_object(object).0;
            match fields.get(id_field).and_then(|v| v.key()) {
                Some(id) => records.push(Record {
                    id: RecordId::new(id),
                    fields,
                }),
                None => warn!(index = i, id_field, "skipping JSON record without identity"),
            }
        }
        Ok(records)
    }
}
