use chrono::{DateTime, FixedOffset};
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    entities::{
        AggregationRule, AuthContext, DimensionValue, FilterDimension, FilterMode, FilterState,
        ListViewOutput, PageRequest, Predicate, Record, TablePage, ViewDefinition,
    },
    errors::{DuplicateDimensionName, IncompatibleFilterValue, UnknownFilterDimension},
};

use super::{
    derived_statistics::DerivedStatistics, filter_predicate_builder::FilterPredicateBuilder,
    table_paginator::TablePaginator,
};

/// Per-list-page orchestration: owns the filter state of one view and derives
/// the visible rows and summary tiles from a record collection.
///
/// Derivation always starts from the full collection passed in; nothing from
/// a previous derivation is reused.
#[derive(Debug, Clone)]
pub struct ListViewController {
    definition: ViewDefinition,
    state: FilterState,
}

impl ListViewController {
    pub fn new(definition: ViewDefinition) -> Result<Self, ServerError> {
        for (i, d) in definition.dimensions.iter().enumerate() {
            if definition.dimensions[..i].iter().any(|o| o.name == d.name) {
                return Err(DuplicateDimensionName::new(&definition.name, &d.name));
            }
        }
        let state = FilterState::all_for(&definition);
        Ok(Self { definition, state })
    }

    pub fn definition(&self) -> &ViewDefinition {
        &self.definition
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_filter(&mut self, name: &str, value: DimensionValue) -> Result<(), ServerError> {
        self.validate(name, &value)?;
        self.state.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Replaces the whole filter state (ex. a saved preset). Either every
    /// value is accepted or the current state is left untouched. Dimensions
    /// missing from `state` go back to their sentinel.
    pub fn apply_state(&mut self, state: FilterState) -> Result<(), ServerError> {
        for (name, value) in state.iter() {
            self.validate(name, value)?;
        }
        let mut next = FilterState::all_for(&self.definition);
        next.values.extend(state.values);
        self.state = next;
        Ok(())
    }

    /// Returns every dimension to its sentinel in a single assignment.
    pub fn reset_filters(&mut self) {
        self.state = FilterState::all_for(&self.definition);
        debug!(view = %self.definition.name, "filters reset");
    }

    /// Filter dimensions for the current state; sentinel values are omitted.
    pub fn active_dimensions(&self) -> Vec<FilterDimension> {
        self.definition
            .dimensions
            .iter()
            .filter_map(|d| d.to_filter(self.state.get(&d.name)))
            .collect()
    }

    /// Visible rows and statistics for `records` under the current filters.
    ///
    /// `None` means the collection is still loading: the result is empty and
    /// every statistic is zero.
    pub fn derive<'a>(
        &self,
        records: Option<&'a [Record]>,
        now: DateTime<FixedOffset>,
        auth: Option<&AuthContext>,
    ) -> ListViewOutput<'a> {
        let builder = FilterPredicateBuilder::new(now);
        let predicate = self
            .scope_predicate(&builder, auth)
            .and(builder.build(&self.active_dimensions()));

        let filtered: Vec<&'a Record> = records
            .map(|rs| predicate.filter(rs))
            .unwrap_or_default();

        let rules: Vec<AggregationRule> = self
            .definition
            .rules
            .iter()
            .map(|spec| AggregationRule {
                label: spec.label.clone(),
                predicate: builder.build(&spec.dimensions),
                reducer: spec.reducer.clone(),
            })
            .collect();
        let statistics = DerivedStatistics::compute(&filtered, &rules);

        debug!(
            view = %self.definition.name,
            loaded = records.is_some(),
            total = records.map_or(0, <[Record]>::len),
            visible = filtered.len(),
            "list view derived"
        );

        ListViewOutput {
            filtered,
            statistics,
            offset: *now.offset(),
        }
    }

    /// Table page over the derived rows, sorted by the requested column or the
    /// view's default sort.
    pub fn page<'a>(&self, output: &ListViewOutput<'a>, request: &PageRequest) -> TablePage<'a> {
        TablePaginator::page(
            &output.filtered,
            request,
            self.definition.default_sort.as_ref(),
            &output.offset,
        )
    }

    fn scope_predicate(
        &self,
        builder: &FilterPredicateBuilder,
        auth: Option<&AuthContext>,
    ) -> Predicate {
        match (&self.definition.scope, auth) {
            (None, _) => Predicate::Always,
            (Some(_), None) => Predicate::Never,
            (Some(scope), Some(auth)) if scope.bypassed_by(auth) => Predicate::Always,
            (Some(scope), Some(auth)) => builder.build(&[FilterDimension::new(
                scope.field.as_str(),
                FilterMode::Equals(auth.user_id.clone()),
            )]),
        }
    }

    fn validate(&self, name: &str, value: &DimensionValue) -> Result<(), ServerError> {
        let dimension = self
            .definition
            .find_dimension(name)
            .ok_or_else(|| UnknownFilterDimension::new(&self.definition.name, name))?;
        if dimension.accepts(value) {
            Ok(())
        } else {
            Err(IncompatibleFilterValue::new(
                name,
                dimension.spec.kind(),
                &format!("{:?}", value),
            ))
        }
    }
}
