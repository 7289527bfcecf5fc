use crate::entities::{Reducer, Statistics, ViewDefinition};

use super::utils::{format_amount, format_number};

/// One rendered summary tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTile {
    pub label: String,
    pub value: String,
}

pub(crate) struct SummaryFormatter;

impl SummaryFormatter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Tiles in declaration order. Counts are whole numbers; sums are shown
    /// in the view's currency when it has one.
    pub(crate) fn tiles(
        &self,
        definition: &ViewDefinition,
        statistics: &Statistics,
    ) -> Vec<SummaryTile> {
        definition
            .rules
            .iter()
            .map(|rule| {
                let value = statistics.get(&rule.label).copied().unwrap_or(0.0);
                SummaryTile {
                    label: rule.label.clone(),
                    value: match (&rule.reducer, definition.currency) {
                        (Reducer::Count, _) => format_number(value, 0),
                        (Reducer::Sum(_), Some(currency)) => format_amount(value, currency),
                        (Reducer::Sum(_), None) => format_number(value, 2),
                    },
                }
            })
            .collect()
    }
}
