// Crate-internal.
// ---

pub(crate) mod standard_views {
    pub(crate) mod bank_accounts;
    pub(crate) mod categories;
    pub(crate) mod drivers;
    pub(crate) mod expense_tickets;
    pub(crate) mod invoices;
    pub(crate) mod purchase_orders;
    pub(crate) mod quotations;
    pub(crate) mod statuses;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_views {
        pub use crate::impl_ext::standard_views::bank_accounts::*;
        pub use crate::impl_ext::standard_views::categories::*;
        pub use crate::impl_ext::standard_views::drivers::*;
        pub use crate::impl_ext::standard_views::expense_tickets::*;
        pub use crate::impl_ext::standard_views::invoices::*;
        pub use crate::impl_ext::standard_views::purchase_orders::*;
        pub use crate::impl_ext::standard_views::quotations::*;
        pub use crate::impl_ext::standard_views::statuses::*;
    }
}
