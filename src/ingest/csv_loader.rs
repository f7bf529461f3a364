use crate::domain::model::{InvalidRowPolicy, Student, StudentRow};
use crate::utils::error::{RosterError, Result};

const REQUIRED_COLUMNS: [&str; 4] = ["Name", "Student_ID", "Score", "Attendance"];

/// Parses CSV bytes with a `Name,Student_ID,Score,Attendance` header.
///
/// Fields are trimmed before parsing. Rows that fail to deserialize either
/// abort the load or are logged and dropped, depending on `policy`.
pub fn parse_students(data: &[u8], policy: InvalidRowPolicy) -> Result<Vec<Student>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(RosterError::InvalidRow {
            line: 1,
            message: format!("missing column {}", missing),
        });
    }

    let mut students = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                reject_row(policy, line, e.to_string())?;
                skipped += 1;
                continue;
            }
        };

        match record.deserialize::<StudentRow>(Some(&headers)) {
            Ok(row) => students.push(Student::from(row)),
            Err(e) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                reject_row(policy, line, e.to_string())?;
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} malformed student rows", skipped);
    }
    tracing::debug!("Parsed {} students from CSV", students.len());

    Ok(students)
}

fn reject_row(policy: InvalidRowPolicy, line: u64, message: String) -> Result<()> {
    match policy {
        InvalidRowPolicy::Fail => Err(RosterError::InvalidRow { line, message }),
        InvalidRowPolicy::Skip => {
            tracing::warn!("Skipping row at line {}: {}", line, message);
            Ok(())
        }
    }
}
