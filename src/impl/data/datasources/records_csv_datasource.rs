use std::collections::BTreeMap;

use fractic_server_error::ServerError;
use tracing::warn;

use crate::{
    data::models::csv_cell_model::CsvCellModel,
    entities::{Record, RecordId, Value},
    errors::{InvalidCsv, InvalidCsvContent},
};

pub(crate) trait RecordsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str, id_field: &str) -> Result<Vec<Record>, ServerError>;
}

pub(crate) struct RecordsCsvDatasourceImpl;

impl RecordsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsCsvDatasource for RecordsCsvDatasourceImpl {
    fn from_string(&self, s: &str, id_field: &str) -> Result<Vec<Record>, ServerError> {
        let mut reader = csv::Reader::from_reader(s.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| InvalidCsv::with_debug(&e))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if !headers.iter().any(|h| h == id_field) {
            return Err(InvalidCsvContent::new(&format!(
                "missing identity column '{id_field}'"
            )));
        }

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            let row = row.map_err(|e| InvalidCsv::with_debug(&e))?;
            let fields: BTreeMap<String, Value> = headers
                .iter()
                .zip(row.iter())
                .map(|(h, cell)| (h.clone(), CsvCellModel::infer(cell).into()))
                .collect();
            match fields.get(id_field).and_then(Value::key) {
                Some(id) => records.push(Record {
                    id: RecordId::new(id),
                    fields,
                }),
                // Line 1 is the header.
                None => warn!(line = i + 2, id_field, "skipping CSV row without identity"),
            }
        }
        Ok(records)
    }
}
