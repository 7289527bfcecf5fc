use std::path::Path;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::datasources::{
        records_csv_datasource::{RecordsCsvDatasource, RecordsCsvDatasourceImpl},
        records_json_datasource::{RecordsJsonDatasource, RecordsJsonDatasourceImpl},
    },
    domain::repositories::records_repository::{RecordsFormat, RecordsRepository},
    entities::Record,
    errors::ReadError,
};

pub(crate) struct RecordsRepositoryImpl<
    DS1 = RecordsJsonDatasourceImpl, // Default.
    DS2 = RecordsCsvDatasourceImpl,  // Default.
> where
    DS1: RecordsJsonDatasource,
    DS2: RecordsCsvDatasource,
{
    json_datasource: DS1,
    csv_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> RecordsRepository for RecordsRepositoryImpl<DS1, DS2>
where
    DS1: RecordsJsonDatasource,
    DS2: RecordsCsvDatasource,
{
    fn from_string(
        &self,
        content: &str,
        format: RecordsFormat,
        id_field: &str,
    ) -> Result<Vec<Record>, ServerError> {
        match format {
            RecordsFormat::Json => self.json_datasource.from_string(content, id_field),
            RecordsFormat::Csv => self.csv_datasource.from_string(content, id_field),
        }
    }

    async fn from_file<P>(&self, path: P, id_field: &str) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send,
    {
        let path = path.as_ref();
        let format = RecordsFormat::from_path(path)?;
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        let records = self.from_string(&content, format, id_field)?;
        debug!(path = %path.display(), count = records.len(), "records loaded");
        Ok(records)
    }
}

impl RecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            json_datasource: RecordsJsonDatasourceImpl::new(),
            csv_datasource: RecordsCsvDatasourceImpl::new(),
        }
    }
}
