use chrono::FixedOffset;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::view_config_model::ViewConfigModel, entities::ViewDefinition,
    errors::InvalidRon,
};

pub(crate) trait ViewConfigRonDatasource: Send + Sync {
    fn from_string(&self, s: &str, offset: FixedOffset)
        -> Result<Vec<ViewDefinition>, ServerError>;
}

pub(crate) struct ViewConfigRonDatasourceImpl;

impl ViewConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ViewConfigRonDatasource for ViewConfigRonDatasourceImpl {
    fn from_string(
        &self,
        s: &str,
        offset: FixedOffset,
    ) -> Result<Vec<ViewDefinition>, ServerError> {
        let models: Vec<ViewConfigModel> =
            from_str(s).map_err(|e| InvalidRon::with_debug("ViewConfig", &e))?;
        models.into_iter().map(|m| m.at(offset)).collect()
    }
}
