//! regdesk-core: regulation tracking state, queries and export.
//!
//! The [`RegulationStore`] owns the regulation list, the activity log and
//! the current multi-selection. Front-ends read its state and route every
//! change through its methods.
//!
//! Everything else in this crate is derived from that state:
//! search and filtering ([`query`]), summary figures ([`stats`]) and the
//! flat CSV projection ([`export`]). The [`onboarding`] and [`config`]
//! modules are the only parts that touch the filesystem.

pub mod activity;
pub mod config;
pub mod error;
pub mod export;
pub mod onboarding;
pub mod query;
pub mod regulation;
pub mod seed;
pub mod stats;
pub mod store;

pub use activity::*;
pub use config::RegdeskConfig;
pub use error::{RegdeskError, Result};
pub use export::{export_csv, export_filename, export_to_path, ExportOptions};
pub use onboarding::{FileFlagStore, FlagStore, MemoryFlagStore, Tour, TourStep};
pub use query::*;
pub use regulation::*;
pub use stats::*;
pub use store::*;
