//! Read-only report views.
//!
//! Every function here is a pure function of the record slice it is given.
//! Nothing is cached; callers pass the live collection each time.

use crate::model::{Grade, StudentRecord};
use std::fmt;

pub const NO_GRADE_LABEL: &str = "No Grade";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ByCourse,
    ByGrade,
    Ungraded,
    Statistics,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::ByCourse,
        ReportKind::ByGrade,
        ReportKind::Ungraded,
        ReportKind::Statistics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::ByCourse => "Students by Course",
            ReportKind::ByGrade => "Students by Grade",
            ReportKind::Ungraded => "Students without Grades",
            ReportKind::Statistics => "Overall Statistics",
        }
    }

    /// Maps the 1-based number used by the reports submenu.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1..=4 => Some(Self::ALL[(choice - 1) as usize]),
            _ => None,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A computed report, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    ByCourse(Vec<CourseGroup>),
    ByGrade(Vec<GradeBucket>),
    Ungraded(Vec<StudentRecord>),
    Statistics(Statistics),
}

impl Report {
    pub fn build(kind: ReportKind, records: &[StudentRecord]) -> Self {
        match kind {
            ReportKind::ByCourse => Report::ByCourse(by_course(records)),
            ReportKind::ByGrade => Report::ByGrade(by_grade(records)),
            ReportKind::Ungraded => Report::Ungraded(ungraded(records)),
            ReportKind::Statistics => Report::Statistics(statistics(records)),
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::ByCourse(_) => ReportKind::ByCourse,
            Report::ByGrade(_) => ReportKind::ByGrade,
            Report::Ungraded(_) => ReportKind::Ungraded,
            Report::Statistics(_) => ReportKind::Statistics,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseGroup {
    pub course: String,
    pub students: Vec<StudentRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeBucket {
    /// `None` is the "No Grade" bucket.
    pub grade: Option<Grade>,
    pub students: Vec<StudentRecord>,
}

impl GradeBucket {
    pub fn label(&self) -> &'static str {
        self.grade.map(|g| g.as_str()).unwrap_or(NO_GRADE_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseShare {
    pub course: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub average_age: Option<f64>,
    pub graded: usize,
    pub ungraded: usize,
    pub courses: Vec<CourseShare>,
}

impl Statistics {
    /// Average age to one decimal, e.g. `15.0`.
    pub fn average_age_display(&self) -> Option<String> {
        self.average_age.map(|avg| format!("{:.1}", avg))
    }
}

/// Groups records by course, courses in first-seen order.
pub fn by_course(records: &[StudentRecord]) -> Vec<CourseGroup> {
    let mut groups: Vec<CourseGroup> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|g| g.course == record.course) {
            Some(group) => group.students.push(record.clone()),
            None => groups.push(CourseGroup {
                course: record.course.clone(),
                students: vec![record.clone()],
            }),
        }
    }
    groups
}

/// Always six buckets: A, B, C, D, F, then No Grade. Empty buckets are kept.
pub fn by_grade(records: &[StudentRecord]) -> Vec<GradeBucket> {
    Grade::ALL
        .iter()
        .map(|g| Some(*g))
        .chain(std::iter::once(None))
        .map(|grade| GradeBucket {
            grade,
            students: records
                .iter()
                .filter(|r| r.grade == grade)
                .cloned()
                .collect(),
        })
        .collect()
}

pub fn ungraded(records: &[StudentRecord]) -> Vec<StudentRecord> {
    records.iter().filter(|r| !r.is_graded()).cloned().collect()
}

pub fn statistics(records: &[StudentRecord]) -> Statistics {
    let total = records.len();
    let graded = records.iter().filter(|r| r.is_graded()).count();

    let average_age = (total > 0).then(|| {
        let sum: u64 = records.iter().map(|r| u64::from(r.age)).sum();
        sum as f64 / total as f64
    });

    let courses = by_course(records)
        .into_iter()
        .map(|group| {
            let count = group.students.len();
            CourseShare {
                course: group.course,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            }
        })
        .collect();

    Statistics {
        total,
        average_age,
        graded,
        ungraded: total - graded,
        courses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewStudent, StudentId};
    use chrono::NaiveDate;

    fn record(n: u32, age: u32, course: &str, grade: Option<Grade>) -> StudentRecord {
        let mut r = StudentRecord::new(
            StudentId::from_number(n.into()),
            NewStudent {
                name: format!("Student {}", n),
                age,
                email: format!("s{}@example.com", n),
                phone: "1234567890".into(),
                course: course.into(),
            },
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        r.grade = grade;
        r
    }

    #[test]
    fn groups_by_course_in_first_seen_order() {
        let records = vec![
            record(1, 20, "Math", None),
            record(2, 20, "Art", None),
            record(3, 20, "Math", None),
        ];
        let groups = by_course(&records);

        let courses: Vec<_> = groups.iter().map(|g| g.course.as_str()).collect();
        assert_eq!(courses, vec!["Math", "Art"]);
        assert_eq!(groups[0].students.len(), 2);
        assert_eq!(groups[0].students[1].student_id.as_str(), "STU003");
    }

    #[test]
    fn grade_report_has_six_fixed_buckets() {
        let records = vec![
            record(1, 20, "Math", Some(Grade::B)),
            record(2, 20, "Math", None),
            record(3, 20, "Math", Some(Grade::B)),
        ];
        let buckets = by_grade(&records);

        let labels: Vec<_> = buckets.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D", "F", "No Grade"]);
        assert_eq!(buckets[1].students.len(), 2);
        assert_eq!(buckets[5].students.len(), 1);
        assert!(buckets[0].students.is_empty());
    }

    #[test]
    fn lists_ungraded_records() {
        let records = vec![
            record(1, 20, "Math", Some(Grade::A)),
            record(2, 20, "Math", None),
        ];
        let missing = ungraded(&records);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].student_id.as_str(), "STU002");
    }

    #[test]
    fn average_age_reports_one_decimal() {
        let records = vec![record(1, 10, "Math", None), record(2, 20, "Math", None)];
        let stats = statistics(&records);
        assert_eq!(stats.average_age_display().as_deref(), Some("15.0"));
    }

    #[test]
    fn statistics_count_grades_and_course_shares() {
        let records = vec![
            record(1, 20, "Math", Some(Grade::A)),
            record(2, 21, "Art", None),
            record(3, 22, "Math", None),
        ];
        let stats = statistics(&records);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.graded, 1);
        assert_eq!(stats.ungraded, 2);
        assert_eq!(stats.courses[0].course, "Math");
        assert_eq!(stats.courses[0].count, 2);
        assert_eq!(format!("{:.1}", stats.courses[0].percentage), "66.7");
        assert_eq!(format!("{:.1}", stats.courses[1].percentage), "33.3");
    }

    #[test]
    fn statistics_on_empty_collection() {
        let stats = statistics(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.average_age.is_none());
        assert!(stats.courses.is_empty());
    }

    #[test]
    fn report_kind_from_menu_numbers() {
        assert_eq!(ReportKind::from_choice(2), Some(ReportKind::ByGrade));
        assert_eq!(ReportKind::from_choice(5), None);
    }
}
