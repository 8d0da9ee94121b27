// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod csv_snapshot_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod month_model;
        pub(crate) mod quote_status_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod snapshot_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod account_summary;
        pub(crate) mod budget;
        pub(crate) mod line_item;
        pub(crate) mod procurement;
        pub(crate) mod reconciliation_config;
        pub(crate) mod records;
        pub(crate) mod report;
        pub(crate) mod reporting_context;
        pub(crate) mod snapshot;
        pub(crate) mod sources;
        pub(crate) mod vessel;
    }
    pub(crate) mod logic {
        pub(crate) mod account_catalog;
        pub(crate) mod detail_expander;
        pub(crate) mod period_resolver;
        pub(crate) mod quote_join;
        pub(crate) mod reconciliation_engine;
    }
    pub(crate) mod repositories {
        pub(crate) mod snapshot_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod reconciliation_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod export;
    pub(crate) mod recompute_trigger;
    pub(crate) mod report_projector;
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
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::account_summary::*;
        pub use crate::domain::entities::line_item::*;
        pub use crate::domain::entities::procurement::RequestKind;
        pub use crate::domain::entities::reconciliation_config::*;
        pub use crate::domain::entities::records::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::reporting_context::*;
        pub use crate::domain::entities::sources::*;
        pub use crate::domain::entities::vessel::*;
    }

    pub mod logic {
        pub use crate::domain::logic::account_catalog::{AccountCatalog, CATALOG};
        pub use crate::domain::logic::period_resolver::PeriodResolver;
    }

    pub mod datasources {
        pub use crate::data::datasources::csv_snapshot_datasource::{
            CsvSnapshotDatasource, CsvTables,
        };
    }

    pub mod reports {
        pub use crate::presentation::export::{to_csv, to_json};
        pub use crate::presentation::recompute_trigger::{
            recompute_channel, RecomputeListener, RecomputeTrigger,
        };
        pub use crate::presentation::report_projector::ReportProjector;
    }
}
