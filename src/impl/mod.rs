// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod filter_state_ron_datasource;
        pub(crate) mod records_csv_datasource;
        pub(crate) mod records_json_datasource;
        pub(crate) mod view_config_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod csv_cell_model;
        pub(crate) mod date_bucket_model;
        pub(crate) mod filter_state_model;
        pub(crate) mod iso_timestamp_model;
        pub(crate) mod json_record_model;
        pub(crate) mod view_config_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
        pub(crate) mod view_config_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod aggregation_rule;
        pub(crate) mod auth_context;
        pub(crate) mod clock;
        pub(crate) mod date_bucket;
        pub(crate) mod draft;
        pub(crate) mod field_accessor;
        pub(crate) mod filter_dimension;
        pub(crate) mod list_view;
        pub(crate) mod predicate;
        pub(crate) mod record;
        pub(crate) mod validator_chain;
        pub(crate) mod view_definition;
    }
    pub(crate) mod logic {
        pub(crate) mod date_bucket_resolver;
        pub(crate) mod derived_statistics;
        pub(crate) mod filter_predicate_builder;
        pub(crate) mod list_view_controller;
        pub(crate) mod table_paginator;
        pub(crate) mod utils;
        mod value_impl;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
        pub(crate) mod view_config_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_records_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod summary_fmt;
    pub(crate) mod table_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::aggregation_rule::*;
        pub use crate::domain::entities::auth_context::*;
        pub use crate::domain::entities::clock::*;
        pub use crate::domain::entities::date_bucket::*;
        pub use crate::domain::entities::draft::*;
        pub use crate::domain::entities::field_accessor::*;
        pub use crate::domain::entities::filter_dimension::*;
        pub use crate::domain::entities::list_view::*;
        pub use crate::domain::entities::predicate::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::validator_chain::*;
        pub use crate::domain::entities::view_definition::*;
        pub use crate::domain::repositories::records_repository::RecordsFormat;
    }

    pub mod formatting {
        pub use crate::presentation::summary_fmt::SummaryTile;
        pub use crate::presentation::table_printer::Column;
    }

    pub use crate::domain::logic::date_bucket_resolver::DateBucketResolver;
    pub use crate::domain::logic::derived_statistics::{DerivedStatistics, UNKNOWN_GROUP};
    pub use crate::domain::logic::filter_predicate_builder::FilterPredicateBuilder;
    pub use crate::domain::logic::list_view_controller::ListViewController;
    pub use crate::domain::logic::table_paginator::TablePaginator;
}
