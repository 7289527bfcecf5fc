use std::path::Path;

use async_trait::async_trait;
use chrono::FixedOffset;
use fractic_server_error::ServerError;

use crate::entities::{FilterState, ViewDefinition};

/// Declarative view configuration and saved filter presets, both written in
/// RON. `offset` is used for dates given without one (ex. custom period
/// bounds written as `"2024-01-01"`).
#[async_trait]
pub trait ViewConfigRepository: Send + Sync {
    fn views_from_string(
        &self,
        ron: &str,
        offset: FixedOffset,
    ) -> Result<Vec<ViewDefinition>, ServerError>;

    async fn views_from_file<P>(
        &self,
        path: P,
        offset: FixedOffset,
    ) -> Result<Vec<ViewDefinition>, ServerError>
    where
        P: AsRef<Path> + Send;

    fn filter_state_from_string(
        &self,
        ron: &str,
        offset: FixedOffset,
    ) -> Result<FilterState, ServerError>;
}
