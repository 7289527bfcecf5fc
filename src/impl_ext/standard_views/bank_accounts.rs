use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{FilterDimension, FilterMode, RuleSpec, SortSpec, ViewDefinition};

pub static BANK_ACCOUNTS: LazyLock<ViewDefinition> = LazyLock::new(|| {
    ViewDefinition::new("bank_accounts")
        .search("search", &["name", "bankName", "accountNumber"], &["id"])
        .enum_filter("type", "type")
        .tile(RuleSpec::count("total", vec![]))
        .tile(RuleSpec::sum("total_balance", vec![], "balance"))
        .tile(RuleSpec::count(
            "overdrawn",
            vec![FilterDimension::new(
                "balance",
                FilterMode::NumericRange {
                    min: None,
                    max: Some(-0.01),
                },
            )],
        ))
        .default_sort(SortSpec::ascending("name"))
        .currency(Currency::XOF)
});
