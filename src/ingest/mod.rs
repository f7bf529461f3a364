//! Getting students into a roster: CSV files or generated data.

pub mod csv_loader;
pub mod synthetic;

pub use csv_loader::parse_students;
pub use synthetic::{StudentGenerator, DEFAULT_STUDENT_COUNT};
