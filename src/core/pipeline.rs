use crate::core::roster::StudentRoster;
use crate::core::{ConfigProvider, QueryTimings, RosterPipeline, RosterReport, Storage, Student};
use crate::ingest::{parse_students, StudentGenerator};
use crate::utils::error::Result;
use std::time::Instant;

const FALLBACK_SEARCH_NAME: &str = "TestName";
const FALLBACK_SEARCH_SCORE: i32 = 50;

pub struct StudentPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> StudentPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn generate(&self) -> Vec<Student> {
        StudentGenerator::new(self.config.seed()).generate(self.config.synthetic_count())
    }
}

/// Name of the first student in insertion order.
fn default_search_name(roster: &StudentRoster) -> String {
    roster
        .students()
        .first()
        .map(|student| student.name().to_string())
        .unwrap_or_else(|| FALLBACK_SEARCH_NAME.to_string())
}

/// Score of the student in the middle of the roster.
fn default_search_score(roster: &StudentRoster) -> i32 {
    roster
        .students()
        .get(roster.len() / 2)
        .map(Student::score)
        .unwrap_or(FALLBACK_SEARCH_SCORE)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> RosterPipeline for StudentPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Student>> {
        let Some(path) = self.config.data_file() else {
            return Ok(self.generate());
        };

        if !path.ends_with(".csv") {
            tracing::warn!("{} is not a CSV file, generating students instead", path);
            return Ok(self.generate());
        }

        if !self.storage.exists(path).await {
            tracing::warn!("Student file {} not found, generating students instead", path);
            return Ok(self.generate());
        }

        tracing::debug!("Reading student file: {}", path);
        let data = self.storage.read_file(path).await?;
        let students = parse_students(&data, self.config.on_invalid_row())?;
        tracing::info!("Loaded {} students from {}", students.len(), path);

        Ok(students)
    }

    async fn analyze(&self, roster: &mut StudentRoster) -> Result<RosterReport> {
        let search_name = self
            .config
            .search_name()
            .map(str::to_string)
            .unwrap_or_else(|| default_search_name(roster));
        let search_score = self
            .config
            .search_score()
            .unwrap_or_else(|| default_search_score(roster));
        let top_n = self.config.top_n();

        tracing::debug!(
            "Querying roster of {} students: name={:?}, score={}, top={}",
            roster.len(),
            search_name,
            search_score,
            top_n
        );

        let mut timings = QueryTimings::default();

        let start = Instant::now();
        let name_match = roster.linear_search_by_name(&search_name).cloned();
        timings.linear_search_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        roster.sort_by_score();
        timings.sort_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let score_match = roster.binary_search_by_score(search_score).cloned();
        timings.binary_search_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let top_students = roster.top_n(top_n).to_vec();
        timings.top_n_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let average_score = roster.average_score();
        timings.average_secs = start.elapsed().as_secs_f64();

        if name_match.is_none() {
            tracing::debug!("No student found with name: {}", search_name);
        }
        if score_match.is_none() {
            tracing::debug!("No student found with score: {}", search_score);
        }

        Ok(RosterReport {
            student_count: roster.len(),
            search_name,
            name_match,
            search_score,
            score_match,
            top_n,
            top_students,
            average_score,
            timings,
        })
    }

    async fn load(&self, report: &RosterReport) -> Result<Option<String>> {
        let Some(path) = self.config.report_file() else {
            return Ok(None);
        };

        let json = serde_json::to_string_pretty(report)?;
        tracing::debug!("Writing report ({} bytes) to {}", json.len(), path);
        self.storage.write_file(path, json.as_bytes()).await?;

        Ok(Some(path.to_string()))
    }
}
