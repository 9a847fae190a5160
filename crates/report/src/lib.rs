//! # Prakriti Report
//!
//! Attaches static narrative content to a computed dosha classification.
//!
//! ## Architecture
//!
//! ```text
//! ClassificationSnapshot ──> ProfileRecord <── stored record (JSON)
//!                                │
//!                                ├──> body / mind: primary text, modifier line
//!                                ├──> current: canonical imbalance key -> text
//!                                └──> body / mind / current code -> long-form report
//!                                │
//!                  TemplateSource (TemplateStore: builtin or loaded JSON)
//!                                │
//!                                └──> MergedReport (generated text where a key is missing)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use prakriti_report::{merge, ProfileRecord, TemplateStore};
//!
//! let snapshot = prakriti_engine::classify(&[2; 36]).unwrap();
//! let templates = TemplateStore::builtin().unwrap();
//! let report = merge(&ProfileRecord::from(&snapshot), templates);
//! assert_eq!(report.body.primary, "Pitta");
//! ```

mod error;
mod merge;
mod record;
mod store;

pub use error::{ReportError, Result};
pub use merge::{canonical_imbalance_key, merge, CurrentNarrative, FacetNarrative, MergedReport};
pub use record::ProfileRecord;
pub use store::{
    ConstitutionTemplates, CurrentTemplate, Facet, PrimaryTemplate, ReportTemplates,
    TemplateSource, TemplateStats, TemplateStore, TEMPLATE_SCHEMA_VERSION,
};
