use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{RuleSpec, SortSpec, ViewDefinition};

use super::statuses::{status_is, PAID, PENDING, VALIDATED};

/// Invoices and payment requests.
pub static INVOICES: LazyLock<ViewDefinition> = LazyLock::new(|| {
    ViewDefinition::new("invoices")
        .search(
            "search",
            &["reference", "title", "supplier.name"],
            &["id", "price"],
        )
        .enum_filter("status", "status")
        .enum_filter("type", "type")
        .date_filter("period", "createdAt")
        .range_filter("amount", "price")
        .tile(RuleSpec::count("total", vec![]))
        .tile(RuleSpec::count("pending", status_is(PENDING)))
        .tile(RuleSpec::sum("pending_amount", status_is(PENDING), "price"))
        .tile(RuleSpec::count("validated", status_is(VALIDATED)))
        .tile(RuleSpec::sum("paid_amount", status_is(PAID), "price"))
        .default_sort(SortSpec::descending("createdAt"))
        .currency(Currency::XOF)
});
