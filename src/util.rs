use std::path::Path;

use fractic_server_error::ServerError;
use futures::future::try_join_all;

use crate::{
    data::repositories::view_config_repository_impl::ViewConfigRepositoryImpl,
    domain::{
        repositories::view_config_repository::ViewConfigRepository as _,
        usecases::load_records_usecase::{LoadRecordsUsecase as _, LoadRecordsUsecaseImpl},
    },
    entities::{
        AuthContext, Clock, FilterState, ListViewOutput, PageRequest, Record, RecordsFormat,
        Statistics, SystemClock, TablePage, ViewDefinition,
    },
    formatting::{Column, SummaryTile},
    presentation::{summary_fmt::SummaryFormatter, table_printer::TablePrinter},
    ListViewController,
};

/// Owned result of loading a collection and deriving one list page from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub view: String,
    /// Visible records, in source order.
    pub rows: Vec<Record>,
    pub statistics: Statistics,
    pub tiles: Vec<SummaryTile>,
}

pub struct ListViewUtil<C: Clock = SystemClock> {
    load_records_usecase: LoadRecordsUsecaseImpl,
    view_config_repository: ViewConfigRepositoryImpl,
    summary_formatter: SummaryFormatter,
    clock: C,
}

impl ListViewUtil<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ListViewUtil<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ListViewUtil<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            load_records_usecase: LoadRecordsUsecaseImpl::new(),
            view_config_repository: ViewConfigRepositoryImpl::new(),
            summary_formatter: SummaryFormatter::new(),
            clock,
        }
    }

    // Loading.
    // ---

    pub async fn records_from_string(
        &self,
        content: &str,
        format: RecordsFormat,
        id_field: &str,
    ) -> Result<Vec<Record>, ServerError> {
        self.load_records_usecase
            .from_string(content, format, id_field)
            .await
    }

    pub async fn records_from_file<P>(
        &self,
        path: P,
        id_field: &str,
    ) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send + Sync,
    {
        self.load_records_usecase.from_file(path, id_field).await
    }

    pub async fn records_from_files<P>(
        &self,
        paths: &[P],
        id_field: &str,
    ) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<Path> + Send + Sync,
    {
        self.load_records_usecase.from_files(paths, id_field).await
    }

    // Configuration.
    // ---

    /// Dates written without an offset are read in the clock's offset.
    pub fn views_from_string(&self, ron: &str) -> Result<Vec<ViewDefinition>, ServerError> {
        self.view_config_repository
            .views_from_string(ron, *self.clock.now().offset())
    }

    pub async fn views_from_file<P>(&self, path: P) -> Result<Vec<ViewDefinition>, ServerError>
    where
        P: AsRef<Path> + Send,
    {
        self.view_config_repository
            .views_from_file(path, *self.clock.now().offset())
            .await
    }

    pub fn filter_state_from_string(&self, ron: &str) -> Result<FilterState, ServerError> {
        self.view_config_repository
            .filter_state_from_string(ron, *self.clock.now().offset())
    }

    // Derivation.
    // ---

    /// Derives the page at the clock's current time.
    pub fn derive<'a>(
        &self,
        controller: &ListViewController,
        records: Option<&'a [Record]>,
        auth: Option<&AuthContext>,
    ) -> ListViewOutput<'a> {
        controller.derive(records, self.clock.now(), auth)
    }

    pub fn summary_tiles(
        &self,
        controller: &ListViewController,
        output: &ListViewOutput,
    ) -> Vec<SummaryTile> {
        self.summary_formatter
            .tiles(controller.definition(), &output.statistics)
    }

    pub fn page<'a>(
        &self,
        controller: &ListViewController,
        output: &ListViewOutput<'a>,
        request: &PageRequest,
    ) -> TablePage<'a> {
        controller.page(output, request)
    }

    /// Plain-text rendering of one table page.
    pub fn print_page(&self, page: &TablePage, columns: Vec<Column>) -> String {
        TablePrinter::new(columns, *self.clock.now().offset()).print(page)
    }

    /// Loads the export at `path` and derives the view from it in one call.
    pub async fn derive_from_file<P>(
        &self,
        controller: &ListViewController,
        path: P,
        auth: Option<&AuthContext>,
    ) -> Result<DerivedView, ServerError>
    where
        P: AsRef<Path> + Send + Sync,
    {
        let records = self
            .load_records_usecase
            .from_file(path, &controller.definition().id_field)
            .await?;
        Ok(self.derived_view(controller, &records, auth))
    }

    /// Loads the exports of several views concurrently (ex. every tile of the
    /// dashboard home page) and derives each view from its own collection.
    /// Results are in input order.
    pub async fn derive_many<P>(
        &self,
        views: &[(&ListViewController, P)],
        auth: Option<&AuthContext>,
    ) -> Result<Vec<DerivedView>, ServerError>
    where
        P: AsRef<Path> + Send + Sync,
    {
        let collections = try_join_all(views.iter().map(|(controller, path)| {
            self.load_records_usecase
                .from_file(path.as_ref(), &controller.definition().id_field)
        }))
        .await?;
        Ok(views
            .iter()
            .zip(collections)
            .map(|((controller, _), records)| self.derived_view(controller, &records, auth))
            .collect())
    }

    fn derived_view(
        &self,
        controller: &ListViewController,
        records: &[Record],
        auth: Option<&AuthContext>,
    ) -> DerivedView {
        let output = self.derive(controller, Some(records), auth);
        DerivedView {
            view: controller.definition().name.clone(),
            tiles: self.summary_tiles(controller, &output),
            rows: output.filtered.into_iter().cloned().collect(),
            statistics: output.statistics,
        }
    }
}
