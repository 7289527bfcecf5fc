use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{FilterDimension, FilterMode, RuleSpec, SortSpec, ViewDefinition};

use super::statuses::{PENDING, VALIDATED};

pub static PURCHASE_ORDERS: LazyLock<ViewDefinition> = LazyLock::new(|| {
    ViewDefinition::new("purchase_orders")
        .search(
            "search",
            &["reference", "supplier.name", "description"],
            &["id", "totalAmount"],
        )
        .multi_enum_filter("status", "status")
        .enum_filter("supplier", "supplier.id")
        .date_filter("period", "createdAt")
        .tile(RuleSpec::count("total", vec![]))
        .tile(RuleSpec::count(
            "open",
            vec![FilterDimension::new(
                "status",
                FilterMode::IncludesAny([PENDING.to_string(), VALIDATED.to_string()].into()),
            )],
        ))
        .tile(RuleSpec::sum("total_amount", vec![], "totalAmount"))
        .default_sort(SortSpec::descending("createdAt"))
        .currency(Currency::XOF)
});
