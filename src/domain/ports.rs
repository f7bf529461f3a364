use crate::core::roster::StudentRoster;
use crate::domain::model::{InvalidRowPolicy, RosterReport, Student};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// CSV file to ingest. `None` means generate synthetic students.
    fn data_file(&self) -> Option<&str>;
    fn synthetic_count(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn on_invalid_row(&self) -> InvalidRowPolicy;
    fn search_name(&self) -> Option<&str>;
    fn search_score(&self) -> Option<i32>;
    fn top_n(&self) -> usize;
    /// Where to write the JSON report, relative to the storage root.
    fn report_file(&self) -> Option<&str>;
}

#[async_trait]
pub trait RosterPipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Student>>;
    async fn analyze(&self, roster: &mut StudentRoster) -> Result<RosterReport>;
    async fn load(&self, report: &RosterReport) -> Result<Option<String>>;
}
