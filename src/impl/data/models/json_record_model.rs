use std::collections::BTreeMap;

use serde_json::{Map, Value as JsonValue};

use crate::entities::{Value, DEFAULT_ID_FIELD};

/// Fields of one JSON object, nested objects flattened into dotted keys
/// (`{"supplier": {"name": "X"}}` gives `supplier.name`).
#[derive(Debug, Default)]
pub(crate) struct JsonRecordModel(pub(crate) BTreeMap<String, Value>);

impl JsonRecordModel {
    pub(crate) fn from_object(object: &Map<String, JsonValue>) -> Self {
        let mut model = JsonRecordModel::default();
        model.flatten("", object);
        model
    }

    fn flatten(&mut self, prefix: &str, object: &Map<String, JsonValue>) {
        for (key, value) in object {
            let name = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                JsonValue::Object(inner) => self.flatten(&name, inner),
                other => {
                    self.0.insert(name, to_value(other));
                }
            }
        }
    }
}

fn to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(to_value).collect()),
        // Objects nested in arrays (ex. a ticket's validators) are reduced to
        // their identity.
        JsonValue::Object(object) => object.get(DEFAULT_ID_FIELD).map_or(Value::Null, to_value),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flattens_nested_objects_and_keeps_lists() {
        let object = json!({
            "id": 12,
            "supplier": { "name": "SENELEC", "address": { "city": "Dakar" } },
            "validators": [{ "id": 3, "name": "Awa" }, { "name": "?" }],
            "tags": ["urgent", "energie"],
            "paid": false,
            "note": null
        });
        let model = JsonRecordModel::from_object(object.as_object().unwrap());
        assert_eq!(model.0["id"], Value::Number(12.0));
        assert_eq!(model.0["supplier.name"], Value::Text("SENELEC".into()));
        assert_eq!(model.0["supplier.address.city"], Value::Text("Dakar".into()));
        assert_eq!(
            model.0["validators"],
            Value::List(vec![Value::Number(3.0), Value::Null])
        );
        assert_eq!(
            model.0["tags"],
            Value::List(vec![Value::Text("urgent".into()), Value::Text("energie".into())])
        );
        assert_eq!(model.0["paid"], Value::Bool(false));
        assert_eq!(model.0["note"], Value::Null);
        assert!(!model.0.contains_key("supplier"));
    }
}
