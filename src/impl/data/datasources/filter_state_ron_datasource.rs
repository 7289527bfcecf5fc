use chrono::FixedOffset;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::filter_state_model::FilterStateModel, entities::FilterState,
    errors::InvalidRon,
};

pub(crate) trait FilterStateRonDatasource: Send + Sync {
    fn from_string(&self, s: &str, offset: FixedOffset) -> Result<FilterState, ServerError>;
}

pub(crate) struct FilterStateRonDatasourceImpl;

impl FilterStateRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl FilterStateRonDatasource for FilterStateRonDatasourceImpl {
    fn from_string(&self, s: &str, offset: FixedOffset) -> Result<FilterState, ServerError> {
        let model: FilterStateModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("FilterState", &e))?;
        model.at(offset)
    }
}
