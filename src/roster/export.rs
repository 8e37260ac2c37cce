//! Plain-text export of the whole record set.

use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;
const EXPORT_EXT: &str = "txt";
const DEFAULT_PREFIX: &str = "students_export";

/// `students_export_YYYYMMDD_HHMMSS`
pub fn default_export_name(now: NaiveDateTime) -> String {
    format!("{}_{}", DEFAULT_PREFIX, now.format("%Y%m%d_%H%M%S"))
}

/// Resolves the export target. A blank name falls back to the timestamped
/// default; `.txt` is always appended.
pub fn export_path(dir: &Path, name: Option<&str>, now: NaiveDateTime) -> PathBuf {
    let base = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => default_export_name(now),
    };
    dir.join(format!("{}.{}", base, EXPORT_EXT))
}

pub fn render_export(records: &[StudentRecord], now: NaiveDateTime) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        banner.clone(),
        "STUDENT MANAGEMENT SYSTEM - EXPORT".to_string(),
        format!("Export Date: {}", now.format("%Y-%m-%d %H:%M:%S")),
        banner,
        String::new(),
        format!("Total Students: {}", records.len()),
        String::new(),
    ];

    for r in records {
        lines.extend([
            format!("Student ID: {}", r.student_id),
            format!("Name: {}", r.name),
            format!("Age: {}", r.age),
            format!("Email: {}", r.email),
            format!("Phone: {}", r.phone),
            format!("Course: {}", r.course),
            format!("Grade: {}", r.grade_label()),
            format!("Enrollment Date: {}", r.enrollment_date.format("%Y-%m-%d")),
            rule.clone(),
            String::new(),
        ]);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn write_export(path: &Path, records: &[StudentRecord], now: NaiveDateTime) -> Result<()> {
    fs::write(path, render_export(records, now)).map_err(|source| RosterError::Export {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Grade, NewStudent, StudentId};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap()
    }

    fn record(grade: Option<Grade>) -> StudentRecord {
        let mut r = StudentRecord::new(
            StudentId::from_number(1),
            NewStudent {
                name: "Ada".into(),
                age: 20,
                email: "ada@example.com".into(),
                phone: "1234567890".into(),
                course: "Math".into(),
            },
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        r.grade = grade;
        r
    }

    #[test]
    fn default_name_is_timestamped() {
        assert_eq!(default_export_name(now()), "students_export_20240506_070809");
    }

    #[test]
    fn export_path_appends_txt_and_falls_back_on_blank_names() {
        let dir = Path::new("out");
        assert_eq!(
            export_path(dir, Some("class"), now()),
            PathBuf::from("out/class.txt")
        );
        assert_eq!(
            export_path(dir, Some("  "), now()),
            PathBuf::from("out/students_export_20240506_070809.txt")
        );
        assert_eq!(
            export_path(dir, None, now()),
            PathBuf::from("out/students_export_20240506_070809.txt")
        );
    }

    #[test]
    fn renders_banner_and_record_blocks() {
        let text = render_export(&[record(None), record(Some(Grade::A))], now());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "STUDENT MANAGEMENT SYSTEM - EXPORT");
        assert_eq!(lines[2], "Export Date: 2024-05-06 07:08:09");
        assert_eq!(lines[5], "Total Students: 2");
        assert_eq!(lines[7], "Student ID: STU001");
        assert_eq!(lines[13], "Grade: Not Assigned");
        assert_eq!(lines[14], "Enrollment Date: 2024-01-02");
        assert_eq!(lines[15], "-".repeat(40));
        assert!(text.contains("Grade: A\n"));
        assert!(text.ends_with(&format!("{}\n\n", "-".repeat(40))));
    }

    #[test]
    fn empty_export_still_has_header() {
        let text = render_export(&[], now());
        assert!(text.ends_with("Total Students: 0\n\n"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn write_failure_reports_path_and_cause() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");

        let err = write_export(&path, &[], now()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("out.txt"));
        assert!(matches!(err, RosterError::Export { .. }));
    }
}
