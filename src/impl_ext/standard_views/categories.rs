use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{RuleSpec, SortSpec, ViewDefinition};

/// Expense categories (departments), each with its validator chain.
pub static CATEGORIES: LazyLock<ViewDefinition> = LazyLock::new(|| {
    ViewDefinition::new("categories")
        .search("search", &["name", "description"], &["id"])
        .tile(RuleSpec::count("total", vec![]))
        .tile(RuleSpec::sum("total_budget", vec![], "budget"))
        .default_sort(SortSpec::ascending("name"))
        .currency(Currency::XOF)
});
