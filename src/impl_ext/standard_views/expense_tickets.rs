use std::sync::LazyLock;

use iso_currency::Currency;

use crate::entities::{AccessScope, RuleSpec, SortSpec, ViewDefinition};

use super::statuses::{status_is, ADMIN_ROLE, PENDING, REJECTED, VALIDATED};

/// Expense tickets. Validators only see the tickets they have to approve.
pub static EXPENSE_TICKETS: LazyLock<ViewDefinition> = LazyLock::new(|| {
    ViewDefinition::new("expense_tickets")
        .search(
            "search",
            &["reference", "title", "description", "category.name"],
            &["id", "amount"],
        )
        .enum_filter("status", "status")
        .enum_filter("category", "category.id")
        .date_filter("period", "createdAt")
        .tile(RuleSpec::count("total", vec![]))
        .tile(RuleSpec::count("pending", status_is(PENDING)))
        .tile(RuleSpec::sum("pending_amount", status_is(PENDING), "amount"))
        .tile(RuleSpec::count("validated", status_is(VALIDATED)))
        .tile(RuleSpec::count("rejected", status_is(REJECTED)))
        .tile(RuleSpec::sum("total_amount", vec![], "amount"))
        .default_sort(SortSpec::descending("createdAt"))
        .scope(AccessScope::new("validators", [ADMIN_ROLE]))
        .currency(Currency::XOF)
});

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone as _};

    use super::*;
    use crate::{
        domain::logic::list_view_controller::ListViewController,
        entities::{AuthContext, DimensionValue, Record, Value},
    };

    fn tickets() -> Vec<Record> {
        vec![
            Record::new("1")
                .with("reference", "TCK-001")
                .with("title", "Carburant mission Thiès")
                .with("status", PENDING)
                .with("amount", 25_000.0)
                .with("category.id", 4)
                .with("validators", vec![Value::from(7), Value::from(9)])
                .with("createdAt", "2024-03-08T09:00:00Z"),
            Record::new("2")
                .with("reference", "TCK-002")
                .with("title", "Péage autoroute")
                .with("status", VALIDATED)
                .with("amount", 3_000.0)
                .with("category.id", 4)
                .with("validators", vec![Value::from(9)])
                .with("createdAt", "2024-02-20T09:00:00Z"),
            Record::new("3")
                .with("reference", "TCK-003")
                .with("title", "Fournitures")
                .with("status", PENDING)
                .with("amount", "12 500")
                .with("category.id", 2)
                .with("validators", vec![Value::from(5)])
                .with("createdAt", "2024-03-01T09:00:00Z"),
        ]
    }

    fn now() -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 10, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn validators_see_their_tickets_only() {
        let controller = ListViewController::new(EXPENSE_TICKETS.clone()).unwrap();
        let records = tickets();

        let validator = AuthContext::new("9", Vec::<String>::new());
        let out = controller.derive(Some(&records), now(), Some(&validator));
        assert_eq!(out.filtered.len(), 2);
        assert_eq!(out.statistics["pending"], 1.0);
        assert_eq!(out.statistics["pending_amount"], 25_000.0);

        let admin = AuthContext::new("1", [ADMIN_ROLE]);
        let out = controller.derive(Some(&records), now(), Some(&admin));
        assert_eq!(out.statistics["total"], 3.0);
        assert_eq!(out.statistics["pending_amount"], 37_500.0);
        assert_eq!(out.statistics["rejected"], 0.0);
    }

    #[test]
    fn category_and_search_combine() {
        let mut controller = ListViewController::new(EXPENSE_TICKETS.clone()).unwrap();
        controller
            .set_filter("category", DimensionValue::selection("4"))
            .unwrap();
        controller
            .set_filter("search", DimensionValue::text("peage"))
            .unwrap();
        let records = tickets();
        let admin = AuthContext::new("1", [ADMIN_ROLE]);
        let out = controller.derive(Some(&records), now(), Some(&admin));
        let ids: Vec<&str> = out.filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}
