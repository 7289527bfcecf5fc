//! Filtering, summary statistics and pagination for the list pages of a
//! business dashboard (invoices, expense tickets, purchase orders, ...).
//!
//! A [`ListViewController`] holds the filter state of one page, declared by a
//! [`entities::ViewDefinition`], and derives the visible rows and summary
//! tiles from the full record collection on every call.

mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

mod impl_ext;
pub mod ext {
    pub use super::impl_ext::exports::*;
}

pub mod errors;
pub mod util;
