use std::{collections::BTreeSet, path::Path};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use futures::future::try_join_all;
use tracing::warn;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::repositories::records_repository::{RecordsFormat, RecordsRepository},
    entities::Record,
};

#[async_trait]
pub trait LoadRecordsUsecase: Send + Sync {
    async fn from_string(
        &self,
        content: &str,
        format: RecordsFormat,
        id_field: &str,
    ) -> Result<Vec<Record>, ServerError>;

    async fn from_file<P>(&self, path: P, id_field: &str) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send + Sync;

    /// Loads several exports of the same entity concurrently (ex. one file
    /// per month) into a single collection, in file order.
    async fn from_files<P>(&self, paths: &[P], id_field: &str) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send + Sync;
}

pub(crate) struct LoadRecordsUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
}

#[async_trait]
impl<R1> LoadRecordsUsecase for LoadRecordsUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    async fn from_string(
        &self,
        content: &str,
        format: RecordsFormat,
        id_field: &str,
    ) -> Result<Vec<Record>, ServerError> {
        let records = self
            .records_repository
            .from_string(content, format, id_field)?;
        Ok(dedup_by_id(records))
    }

    async fn from_file<P>(&self, path: P, id_field: &str) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send + Sync,
    {
        let records = self.records_repository.from_file(path, id_field).await?;
        Ok(dedup_by_id(records))
    }

    async fn from_files<P>(&self, paths: &[P], id_field: &str) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send + Sync,
    {
        let batches = try_join_all(
            paths
                .iter()
                .map(|p| self.records_repository.from_file(p.as_ref(), id_field)),
        )
        .await?;
        Ok(dedup_by_id(batches.into_iter().flatten().collect()))
    }
}

impl LoadRecordsUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadRecordsUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
        }
    }
}

/// Keeps the first occurrence of every identity.
fn dedup_by_id(records: Vec<Record>) -> Vec<Record> {
    let mut seen = BTreeSet::new();
    records
        .into_iter()
        .filter(|r| {
            let first = seen.insert(r.id.clone());
            if !first {
                warn!(id = %r.id, "dropping record with duplicate identity");
            }
            first
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_identities_keep_the_first_record() {
        let records = LoadRecordsUsecaseImpl::new()
            .from_string(
                r#"[{"id": 1, "v": "a"}, {"id": 2, "v": "b"}, {"id": 1, "v": "c"}]"#,
                RecordsFormat::Json,
                "id",
            )
            .await
            .unwrap();
        let values: Vec<_> = records
            .iter()
            .map(|r| r.get("v").and_then(|v| v.as_text()).unwrap())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn missing_files_are_read_errors() {
        let result = LoadRecordsUsecaseImpl::new()
            .from_file("does/not/exist.json", "id")
            .await;
        assert!(result.is_err());
    }
}
