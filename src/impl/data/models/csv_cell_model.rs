use std::sync::LazyLock;

use regex::Regex;

use crate::entities::Value;

// Leading zeros are excluded so account numbers and postal codes stay text.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(0|[1-9]\d*)(\.\d+)?$").expect("hardcoded regex should be valid")
});

/// Typed reading of one CSV cell. Anything that is not clearly a boolean or a
/// plain decimal number is kept as text; dates stay text until a date filter
/// reads them.
#[derive(Debug)]
pub(crate) struct CsvCellModel(pub(crate) Value);

impl CsvCellModel {
    pub(crate) fn infer(raw: &str) -> Self {
        let cell = raw.trim();
        CsvCellModel(match cell {
            "" => Value::Null,
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            n if NUMBER.is_match(n) => n
                .parse::<f64>()
                .map_or_else(|_| Value::Text(n.to_string()), Value::Number),
            text => Value::Text(text.to_string()),
        })
    }
}

impl From<CsvCellModel> for Value {
    fn from(cell: CsvCellModel) -> Self {
        cell.0
    }
}
