use std::path::Path;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{entities::Record, errors::UnknownRecordsFormat};

/// Serialization of a record collection as exported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsFormat {
    /// Array of objects, or an envelope object holding one under `data`,
    /// `items` or `results`.
    Json,
    /// Header row of field names, one record per line.
    Csv,
}

#[async_trait]
pub trait RecordsRepository: Send + Sync {
    fn from_string(
        &self,
        content: &str,
        format: RecordsFormat,
        id_field: &str,
    ) -> Result<Vec<Record>, ServerError>;

    async fn from_file<P>(&self, path: P, id_field: &str) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send;
}

// --

impl RecordsFormat {
    pub fn from_path(path: &Path) -> Result<Self, ServerError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(RecordsFormat::Json),
            Some("csv") => Ok(RecordsFormat::Csv),
            _ => Err(UnknownRecordsFormat::new(&path.display().to_string())),
        }
    }
}
