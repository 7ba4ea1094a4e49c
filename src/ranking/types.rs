//! Student records.

use std::fmt;

use crate::error::{RankError, Result};
use crate::sorting::SortKey;

/// Marks in the three assessed subjects.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marks {
    pub daa: f64,
    pub mit: f64,
    pub ohs: f64,
}

impl Marks {
    pub fn new(daa: f64, mit: f64, ohs: f64) -> Self {
        Self { daa, mit, ohs }
    }

    /// Sum of the three subject marks.
    pub fn total(&self) -> f64 {
        self.daa + self.mit + self.ohs
    }

    fn subjects(&self) -> [(&'static str, f64); 3] {
        [("daa", self.daa), ("mit", self.mit), ("ohs", self.ohs)]
    }
}

/// Letter grade derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    #[cfg_attr(feature = "serde", serde(rename = "A+"))]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a percentage to a grade: 90 and above is `A+`, then one grade
    /// per ten points down to `D` at 50. Anything lower is `F`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::B
        } else if percentage >= 60.0 {
            Grade::C
        } else if percentage >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shortest accepted student name, counted in characters after trimming.
pub const MIN_NAME_LEN: usize = 3;

/// A student with derived totals, ranked by `total_marks`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    pub name: String,
    pub roll_number: String,
    pub marks: Marks,
    pub total_marks: f64,
    /// Total marks as a percentage of the maximum obtainable.
    pub percentage: f64,
    pub grade: Grade,
    /// 1-based position after ranking. `None` until ranked.
    pub rank: Option<usize>,
}

impl Student {
    /// Creates a validated student, deriving total, percentage and grade.
    ///
    /// # Errors
    ///
    /// [`RankError::InvalidStudent`] if the roll number is blank, the name is
    /// shorter than [`MIN_NAME_LEN`] characters, or any mark is not a finite value in `0..=max_marks_per_subject`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rank::ranking::{Grade, Marks, Student};
    ///
    /// let s = Student::new("Asha", "R-01", Marks::new(95.0, 88.0, 91.0), 100.0).unwrap();
    /// assert_eq!(s.total_marks, 274.0);
    /// assert_eq!(s.grade, Grade::APlus);
    /// ```
    pub fn new(
        name: impl Into<String>,
        roll_number: impl Into<String>,
        marks: Marks,
        max_marks_per_subject: f64,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        let roll_number = roll_number.into().trim().to_string();

        let invalid = |reason: String| RankError::InvalidStudent {
            roll_number: roll_number.clone(),
            reason,
        };

        if roll_number.is_empty() {
            return Err(invalid("roll number must not be empty".into()));
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(invalid(format!(
                "name must be at least {MIN_NAME_LEN} characters"
            )));
        }
        for (subject, mark) in marks.subjects() {
            if !mark.is_finite() || mark < 0.0 || mark > max_marks_per_subject {
                return Err(invalid(format!(
                    "{subject} mark {mark} outside 0..={max_marks_per_subject}"
                )));
            }
        }

        let total_marks = marks.total();
        let percentage = total_marks / (3.0 * max_marks_per_subject) * 100.0;

        Ok(Self {
            name,
            roll_number,
            marks,
            total_marks,
            percentage,
            grade: Grade::from_percentage(percentage),
            rank: None,
        })
    }
}

impl SortKey for Student {
    fn sort_key(&self) -> f64 {
        self.total_marks
    }
}

/// Ordered collection of students keyed by unique roll number.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a student.
    ///
    /// # Errors
    ///
    /// [`RankError::DuplicateRollNumber`] if the roll number is taken.
    pub fn add(&mut self, student: Student) -> Result<()> {
        if self
            .students
            .iter()
            .any(|s| s.roll_number == student.roll_number)
        {
            return Err(RankError::DuplicateRollNumber(student.roll_number));
        }
        self.students.push(student);
        Ok(())
    }

    /// Removes and returns the student with this roll number, if present.
    pub fn remove(&mut self, roll_number: &str) -> Option<Student> {
        let idx = self
            .students
            .iter()
            .position(|s| s.roll_number == roll_number)?;
        Some(self.students.remove(idx))
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}
