//! Cross-domain state report cards.
//!
//! Ranks an Indian state or union territory against every other state on a
//! fixed catalog of economy, budget, fiscal, demographic, education,
//! employment and health metrics, and groups the results into display
//! panels. The engine ([`reports::ReportBuilder`]) is pure and synchronous;
//! the remaining modules are the thin file/CLI layer around it.
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod loader;
pub mod output;
pub mod rank;
pub mod reports;
pub mod states;
pub mod telemetry;
pub mod types;
pub mod util;

pub use catalog::{Domain, MetricDef, Unit, METRIC_DEFS};
pub use extract::{Extraction, Extractor, ExtractorTable};
pub use rank::{compute_rank, Quartile, Standing};
pub use reports::{
    build_report_card, DomainPanel, MetricResult, ReportBuilder, ReportSummary, StateIdentity,
    StateReportCard,
};
pub use types::AllDomainData;
