use std::sync::LazyLock;

use crate::entities::{RuleSpec, SortSpec, ViewDefinition};

use super::statuses::{status_is, ACTIVE, INACTIVE};

pub static DRIVERS: LazyLock<ViewDefinition> = LazyLock::new(|| {
    ViewDefinition::new("drivers")
        .search(
            "search",
            &["firstName", "lastName", "phone", "licenseNumber"],
            &["id"],
        )
        .enum_filter("status", "status")
        .date_filter("period", "createdAt")
        .tile(RuleSpec::count("total", vec![]))
        .tile(RuleSpec::count("active", status_is(ACTIVE)))
        .tile(RuleSpec::count("inactive", status_is(INACTIVE)))
        .default_sort(SortSpec::ascending("lastName"))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::Record, ListViewController};

    #[test]
    fn tiles_split_drivers_by_status() {
        let records = vec![
            Record::new("1").with("lastName", "Ndiaye").with("status", ACTIVE),
            Record::new("2").with("lastName", "Diallo").with("status", INACTIVE),
            Record::new("3").with("lastName", "Sène").with("status", ACTIVE),
        ];
        let controller = ListViewController::new(DRIVERS.clone()).unwrap();
        let out = controller.derive(
            Some(&records),
            chrono::DateTime::UNIX_EPOCH.fixed_offset(),
            None,
        );
        assert_eq!(out.statistics["total"], 3.0);
        assert_eq!(out.statistics["active"], 2.0);
        assert_eq!(out.statistics["inactive"], 1.0);
    }
}
