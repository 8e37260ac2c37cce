use crate::error::{Result, RosterError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ID_PREFIX: &str = "STU";

/// Student identifier of the form `STU001`.
///
/// Identifiers are compared exactly; user input goes through
/// [`StudentId::normalize`] first so `stu001` finds `STU001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Trims and upper-cases user input.
    pub fn normalize(input: &str) -> Self {
        Self(input.trim().to_uppercase())
    }

    pub fn from_number(n: u64) -> Self {
        Self(format!("{}{:03}", ID_PREFIX, n))
    }

    /// Numeric suffix, if the identifier has the `STU<digits>` shape.
    pub fn number(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(ID_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn as_str(&self) -> &'static str {
        match self {
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

impl FromStr for Grade {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(RosterError::InvalidGrade(s.trim().to_string())),
        }
    }
}

/// Parses grade input where an empty string means "clear the grade".
///
/// Returns `Ok(None)` for blank input, `Ok(Some(grade))` for a valid letter,
/// and `InvalidGrade` for anything else.
pub fn parse_grade_input(input: &str) -> Result<Option<Grade>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// The updatable fields of a record. ID and enrollment date are not among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Email,
    Phone,
    Course,
    Grade,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Age,
        Field::Email,
        Field::Phone,
        Field::Course,
        Field::Grade,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Course => "Course",
            Field::Grade => "Grade",
        }
    }

    /// Maps the 1-based menu number used by the interactive update flow.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1..=6 => Some(Self::ALL[(choice - 1) as usize]),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated field set for a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub course: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: StudentId,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub grade: Option<Grade>,
    pub enrollment_date: NaiveDate,
}

impl StudentRecord {
    pub fn new(student_id: StudentId, fields: NewStudent, enrollment_date: NaiveDate) -> Self {
        Self {
            student_id,
            name: fields.name,
            age: fields.age,
            email: fields.email,
            phone: fields.phone,
            course: fields.course,
            grade: None,
            enrollment_date,
        }
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Grade letter, or `Not Assigned`.
    pub fn grade_label(&self) -> &'static str {
        self.grade.map(|g| g.as_str()).unwrap_or("Not Assigned")
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Course: {}, Grade: {}",
            self.student_id,
            self.name,
            self.course,
            self.grade_label()
        )
    }
}
