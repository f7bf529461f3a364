use crate::domain::model::Student;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::ops::RangeInclusive;

pub const DEFAULT_STUDENT_COUNT: usize = 10_000;

const NAME_LENGTH: usize = 6;
const NAME_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_RANGE: RangeInclusive<i64> = 100..=10_000;
const SCORE_RANGE: RangeInclusive<i32> = 0..=100;
const ATTENDANCE_RANGE: RangeInclusive<i32> = 50..=100;

/// Random students for runs without an input file.
pub struct StudentGenerator {
    rng: StdRng,
}

impl StudentGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn next_student(&mut self) -> Student {
        let name: String = (0..NAME_LENGTH)
            .filter_map(|_| NAME_ALPHABET.choose(&mut self.rng))
            .map(|&byte| char::from(byte))
            .collect();

        Student::new(
            name,
            self.rng.gen_range(ID_RANGE),
            self.rng.gen_range(SCORE_RANGE),
            self.rng.gen_range(ATTENDANCE_RANGE),
        )
    }

    pub fn generate(&mut self, count: usize) -> Vec<Student> {
        tracing::info!("Generating {} random students", count);
        (0..count).map(|_| self.next_student()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_fields_within_ranges() {
        let students = StudentGenerator::new(Some(7)).generate(500);
        assert_eq!(students.len(), 500);
        for student in &students {
            assert_eq!(student.name().len(), NAME_LENGTH);
            assert!(student.name().chars().all(|c| c.is_ascii_alphabetic()));
            assert!(ID_RANGE.contains(&student.student_id()));
            assert!(SCORE_RANGE.contains(&student.score()));
            assert!(ATTENDANCE_RANGE.contains(&student.attendance()));
        }
    }

    #[test]
    fn test_seed_makes_generation_deterministic() {
        let first = StudentGenerator::new(Some(42)).generate(20);
        let second = StudentGenerator::new(Some(42)).generate(20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_count_generates_nothing() {
        assert!(StudentGenerator::new(None).generate(0).is_empty());
    }
}
