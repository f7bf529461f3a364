pub mod config;
pub mod core;
pub mod domain;
pub mod ingest;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use core::{
    engine::{RosterEngine, RunOutcome},
    pipeline::StudentPipeline,
    roster::StudentRoster,
};
pub use domain::model::{InvalidRowPolicy, QueryTimings, RosterReport, Student};
pub use utils::error::{Result, RosterError};
