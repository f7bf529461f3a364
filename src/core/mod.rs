pub mod engine;
pub mod pipeline;
pub mod roster;

pub use crate::domain::model::{QueryTimings, RosterReport, Student};
pub use crate::domain::ports::{ConfigProvider, RosterPipeline, Storage};
pub use crate::utils::error::Result;
