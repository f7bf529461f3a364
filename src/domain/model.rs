use serde::{Deserialize, Serialize};
use std::fmt;

/// A single student record. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: String,
    student_id: i64,
    score: i32,
    attendance: i32,
}

impl Student {
    pub fn new(name: impl Into<String>, student_id: i64, score: i32, attendance: i32) -> Self {
        Self {
            name: name.into(),
            student_id,
            score,
            attendance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn attendance(&self) -> i32 {
        self.attendance
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student(Name: {}, ID: {}, Score: {}, Attendance: {})",
            self.name, self.student_id, self.score, self.attendance
        )
    }
}

/// One row of the student CSV file, as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Student_ID")]
    pub student_id: i64,
    #[serde(rename = "Score")]
    pub score: i32,
    #[serde(rename = "Attendance")]
    pub attendance: i32,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(row.name, row.student_id, row.score, row.attendance)
    }
}

/// What to do with a CSV row that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InvalidRowPolicy {
    #[default]
    Fail,
    Skip,
}

/// Elapsed wall time of each roster query, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryTimings {
    pub linear_search_secs: f64,
    pub sort_secs: f64,
    pub binary_search_secs: f64,
    pub top_n_secs: f64,
    pub average_secs: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub student_count: usize,
    pub search_name: String,
    pub name_match: Option<Student>,
    pub search_score: i32,
    pub score_match: Option<Student>,
    pub top_n: usize,
    pub top_students: Vec<Student>,
    pub average_score: f64,
    pub timings: QueryTimings,
}
