use crate::core::roster::StudentRoster;
use crate::core::{RosterPipeline, RosterReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Result of one engine run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Roster as left by the queries, i.e. sorted by score.
    pub roster: StudentRoster,
    pub report: RosterReport,
    pub output_path: Option<String>,
}

pub struct RosterEngine<P: RosterPipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: RosterPipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting roster run");
        self.monitor.log_stats("Start");

        tracing::info!("Loading students...");
        let students = self.pipeline.extract().await?;
        let mut roster = StudentRoster::with_capacity(students.len());
        for student in students {
            roster.add(student);
        }
        tracing::info!("Roster holds {} students", roster.len());
        self.monitor.log_stats("Load");

        tracing::info!("Running roster queries...");
        let report = self.pipeline.analyze(&mut roster).await?;
        self.monitor.log_stats("Queries");

        let output_path = self.pipeline.load(&report).await?;
        if let Some(path) = &output_path {
            tracing::info!("Report saved to: {}", path);
        }
        self.monitor.log_final_stats();

        Ok(RunOutcome {
            roster,
            report,
            output_path,
        })
    }
}
