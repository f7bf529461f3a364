use crate::domain::model::Student;

/// In-memory, ordered collection of students.
///
/// Students are kept in insertion order until one of the score-ordered
/// operations runs. `binary_search_by_score` and `top_n` sort the roster in
/// place before answering, so calling them changes the order observed by
/// later `linear_search_by_name` and `students` calls.
#[derive(Debug, Clone, Default)]
pub struct StudentRoster {
    students: Vec<Student>,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            students: Vec::with_capacity(capacity),
        }
    }

    /// Appends a student. No validation; duplicates are accepted.
    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Current order of the roster.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// First student whose name matches exactly, in current order.
    pub fn linear_search_by_name(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.name() == name)
    }

    /// Stable ascending sort by score. Students with equal scores keep
    /// their relative order.
    pub fn sort_by_score(&mut self) {
        self.students.sort_by_key(Student::score);
    }

    pub fn is_sorted_by_score(&self) -> bool {
        self.students
            .windows(2)
            .all(|pair| pair[0].score() <= pair[1].score())
    }

    /// Sorts the roster, then returns the leftmost student with `score`.
    pub fn binary_search_by_score(&mut self, score: i32) -> Option<&Student> {
        self.sort_by_score();
        let index = self.students.partition_point(|student| student.score() < score);
        self.students
            .get(index)
            .filter(|student| student.score() == score)
    }

    /// Sorts the roster, then returns the `n` highest-scoring students in
    /// ascending score order. Asking for more than `len()` returns everyone.
    pub fn top_n(&mut self, n: usize) -> &[Student] {
        self.sort_by_score();
        let start = self.students.len().saturating_sub(n);
        &self.students[start..]
    }

    /// Mean score, or `0.0` for an empty roster.
    pub fn average_score(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let total: i64 = self
            .students
            .iter()
            .map(|student| i64::from(student.score()))
            .sum();
        total as f64 / self.students.len() as f64
    }
}

impl FromIterator<Student> for StudentRoster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let mut roster = StudentRoster::new();
        roster.extend(iter);
        roster
    }
}

impl Extend<Student> for StudentRoster {
    fn extend<I: IntoIterator<Item = Student>>(&mut self, iter: I) {
        for student in iter {
            self.add(student);
        }
    }
}

impl<'a> IntoIterator for &'a StudentRoster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
