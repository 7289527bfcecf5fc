use std::path::Path;

use async_trait::async_trait;
use chrono::FixedOffset;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        filter_state_ron_datasource::{FilterStateRonDatasource, FilterStateRonDatasourceImpl},
        view_config_ron_datasource::{ViewConfigRonDatasource, ViewConfigRonDatasourceImpl},
    },
    domain::repositories::view_config_repository::ViewConfigRepository,
    entities::{FilterState, ViewDefinition},
    errors::ReadError,
};

pub(crate) struct ViewConfigRepositoryImpl<
    DS1 = ViewConfigRonDatasourceImpl,   // Default.
    DS2 = FilterStateRonDatasourceImpl, // Default.
> where
    DS1: ViewConfigRonDatasource,
    DS2: FilterStateRonDatasource,
{
    views_datasource: DS1,
    filter_state_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> ViewConfigRepository for ViewConfigRepositoryImpl<DS1, DS2>
where
    DS1: ViewConfigRonDatasource,
    DS2: FilterStateRonDatasource,
{
    fn views_from_string(
        &self,
        ron: &str,
        offset: FixedOffset,
    ) -> Result<Vec<ViewDefinition>, ServerError> {
        self.views_datasource.from_string(ron, offset)
    }

    async fn views_from_file<P>(
        &self,
        path: P,
        offset: FixedOffset,
    ) -> Result<Vec<ViewDefinition>, ServerError>
    where
        P: AsRef<Path> + Send,
    {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.views_datasource.from_string(&content, offset)
    }

    fn filter_state_from_string(
        &self,
        ron: &str,
        offset: FixedOffset,
    ) -> Result<FilterState, ServerError> {
        self.filter_state_datasource.from_string(ron, offset)
    }
}

impl ViewConfigRepositoryImpl {
    pub(crate) fn new() -> Self {
        ViewConfigRepositoryImpl {
            views_datasource: ViewConfigRonDatasourceImpl::new(),
            filter_state_datasource: FilterStateRonDatasourceImpl::new(),
        }
    }
}
