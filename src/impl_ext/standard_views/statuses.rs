//! Status values shared by the approval-driven entities, as sent by the API.

use crate::entities::{FilterDimension, FilterMode};

pub const PENDING: &str = "pending";
pub const VALIDATED: &str = "validated";
pub const PAID: &str = "paid";
pub const REJECTED: &str = "rejected";
pub const ACCEPTED: &str = "accepted";
pub const ACTIVE: &str = "active";
pub const INACTIVE: &str = "inactive";

/// Role whose holders see every record of a scoped view.
pub const ADMIN_ROLE: &str = "admin";

/// Single-dimension filter on the `status` field, for summary tiles.
pub(crate) fn status_is(status: &str) -> Vec<FilterDimension> {
    vec![FilterDimension::new(
        "status",
        FilterMode::Equals(status.to_string()),
    )]
}
