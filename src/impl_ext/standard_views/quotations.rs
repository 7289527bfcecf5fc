use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{RuleSpec, SortSpec, ViewDefinition};

use super::statuses::{status_is, ACCEPTED, PENDING};

pub static QUOTATIONS: LazyLock<ViewDefinition> = LazyLock::new(|| {
    ViewDefinition::new("quotations")
        .search(
            "search",
            &["reference", "client.name", "title"],
            &["id", "totalAmount"],
        )
        .enum_filter("status", "status")
        .date_filter("period", "createdAt")
        .tile(RuleSpec::count("total", vec![]))
        .tile(RuleSpec::count("pending", status_is(PENDING)))
        .tile(RuleSpec::sum("accepted_amount", status_is(ACCEPTED), "totalAmount"))
        .default_sort(SortSpec::descending("createdAt"))
        .currency(Currency::XOF)
});
