//! # Rendering Module
//!
//! Styled terminal output through the `outstanding` crate. Every function returns a
//! `String`; callers decide where it goes (stdout for subcommands, the shell's writer
//! for the interactive menu).
//!
//! Layout stays in Rust: detail lines, bullets and number formatting are computed here
//! and handed to templates as plain strings. Templates select styles from semantic flags.

use super::styles::{names, ROSTER_THEME};
use super::templates::{
    BANNER_TEMPLATE, BULLETS_TEMPLATE, GROUPS_TEMPLATE, MENU_TEMPLATE, MESSAGES_TEMPLATE,
    RECORDS_TEMPLATE, STATISTICS_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use outstanding::{render_with_color, ThemeChoice};
use roster::api::{CmdMessage, MessageLevel};
use roster::model::StudentRecord;
use roster::report::{CourseGroup, GradeBucket, Report, ReportKind, Statistics};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const BANNER_WIDTH: usize = 50;
pub const SEPARATOR_WIDTH: usize = 30;

pub const MENU_TITLE: &str = "STUDENT MANAGEMENT SYSTEM";

const MENU_ITEMS: [(&str, &str); 10] = [
    ("1", "Add New Student"),
    ("2", "View All Students"),
    ("3", "Search Student"),
    ("4", "Update Student Information"),
    ("5", "Delete Student"),
    ("6", "Assign Grade to Student"),
    ("7", "Generate Reports"),
    ("8", "Export Data to File"),
    ("9", "System Statistics"),
    ("0", "Exit"),
];

const COURSE_MARKER: &str = "📚";
const GRADE_MARKER: &str = "📊";

/// Which detail lines follow each record's headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDetail {
    /// Age, email, phone and enrollment date.
    Listing,
    /// Age, email, phone, course and grade.
    Search,
}

#[derive(Serialize)]
struct BannerData {
    rule: String,
    title: String,
}

#[derive(Serialize)]
struct MenuItem {
    key: String,
    label: String,
}

#[derive(Serialize)]
struct MenuData {
    rule: String,
    title: String,
    items: Vec<MenuItem>,
}

#[derive(Serialize)]
struct RecordData {
    id: String,
    name: String,
    course: String,
    grade: String,
    grade_style: String,
    details: Vec<String>,
}

#[derive(Serialize)]
struct RecordsData {
    header: Option<String>,
    separator: String,
    records: Vec<RecordData>,
}

#[derive(Serialize)]
struct GroupData {
    marker: String,
    title: String,
    count: usize,
    items: Vec<String>,
}

#[derive(Serialize)]
struct GroupsData {
    groups: Vec<GroupData>,
}

#[derive(Serialize)]
struct BulletsData {
    header: String,
    items: Vec<String>,
}

#[derive(Serialize)]
struct CourseLine {
    course: String,
    count: usize,
    percentage: String,
}

#[derive(Serialize)]
struct StatisticsData {
    total: usize,
    average_age: String,
    graded: usize,
    ungraded: usize,
    courses: Vec<CourseLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    match render_with_color(template, data, ThemeChoice::from(&*ROSTER_THEME), use_color) {
        Ok(mut output) => {
            if !output.is_empty() && !output.ends_with('\n') {
                output.push('\n');
            }
            output
        }
        Err(e) => format!("Render error: {}\n", e),
    }
}

/// A blank line, a rule, a title and a closing rule.
pub fn render_banner(title: &str, use_color: bool) -> String {
    let data = BannerData {
        rule: "=".repeat(BANNER_WIDTH),
        title: title.to_string(),
    };
    render_template(BANNER_TEMPLATE, &data, use_color)
}

pub fn render_menu(use_color: bool) -> String {
    let data = MenuData {
        rule: "=".repeat(BANNER_WIDTH),
        title: MENU_TITLE.to_string(),
        items: MENU_ITEMS
            .iter()
            .map(|(key, label)| MenuItem {
                key: key.to_string(),
                label: label.to_string(),
            })
            .collect(),
    };
    render_template(MENU_TEMPLATE, &data, use_color)
}

fn detail_lines(record: &StudentRecord, detail: RecordDetail) -> Vec<String> {
    let contact = format!("  Age: {}, Email: {}", record.age, record.email);
    match detail {
        RecordDetail::Listing => vec![
            contact,
            format!(
                "  Phone: {}, Enrolled: {}",
                record.phone,
                record.enrollment_date.format("%Y-%m-%d")
            ),
        ],
        RecordDetail::Search => vec![
            contact,
            format!("  Phone: {}, Course: {}", record.phone, record.course),
            format!("  Grade: {}", record.grade_label()),
        ],
    }
}

/// Renders an optional header, a blank line, then one block per record closed by a
/// separator.
pub fn render_records(
    header: Option<&str>,
    records: &[StudentRecord],
    detail: RecordDetail,
    use_color: bool,
) -> String {
    let data = RecordsData {
        header: header.map(str::to_string),
        separator: "-".repeat(SEPARATOR_WIDTH),
        records: records
            .iter()
            .map(|r| RecordData {
                id: r.student_id.to_string(),
                name: r.name.clone(),
                course: r.course.clone(),
                grade: r.grade_label().to_string(),
                grade_style: if r.is_graded() {
                    names::GRADE
                } else {
                    names::UNGRADED
                }
                .to_string(),
                details: detail_lines(r, detail),
            })
            .collect(),
    };
    render_template(RECORDS_TEMPLATE, &data, use_color)
}

/// Banner title for each report.
pub fn report_heading(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::ByCourse => "STUDENTS BY COURSE",
        ReportKind::ByGrade => "STUDENTS BY GRADE",
        ReportKind::Ungraded => "STUDENTS WITHOUT GRADES",
        ReportKind::Statistics => "SYSTEM STATISTICS",
    }
}

/// The report banner followed by its body. Empty reports render only the banner.
pub fn render_report(report: &Report, use_color: bool) -> String {
    let mut output = render_banner(report_heading(report.kind()), use_color);
    let body = match report {
        Report::ByCourse(groups) => render_course_groups(groups, use_color),
        Report::ByGrade(buckets) => render_grade_buckets(buckets, use_color),
        Report::Ungraded(students) => render_ungraded(students, use_color),
        Report::Statistics(stats) => render_statistics(stats, use_color),
    };
    output.push_str(&body);
    output
}

fn render_course_groups(groups: &[CourseGroup], use_color: bool) -> String {
    if groups.is_empty() {
        return String::new();
    }
    let data = GroupsData {
        groups: groups
            .iter()
            .map(|g| GroupData {
                marker: COURSE_MARKER.to_string(),
                title: g.course.clone(),
                count: g.students.len(),
                items: g
                    .students
                    .iter()
                    .map(|s| {
                        format!(
                            "  • {} (ID: {}, Grade: {})",
                            s.name,
                            s.student_id,
                            s.grade.map(|g| g.as_str()).unwrap_or("N/A")
                        )
                    })
                    .collect(),
            })
            .collect(),
    };
    render_template(GROUPS_TEMPLATE, &data, use_color)
}

fn render_grade_buckets(buckets: &[GradeBucket], use_color: bool) -> String {
    let groups: Vec<GroupData> = buckets
        .iter()
        .filter(|b| !b.students.is_empty())
        .map(|b| GroupData {
            marker: GRADE_MARKER.to_string(),
            title: format!("Grade {}", b.label()),
            count: b.students.len(),
            items: b
                .students
                .iter()
                .map(|s| format!("  • {} (ID: {}, Course: {})", s.name, s.student_id, s.course))
                .collect(),
        })
        .collect();
    if groups.is_empty() {
        return String::new();
    }
    render_template(GROUPS_TEMPLATE, &GroupsData { groups }, use_color)
}

fn render_ungraded(students: &[StudentRecord], use_color: bool) -> String {
    if students.is_empty() {
        return String::new();
    }
    let data = BulletsData {
        header: format!("Total: {} students", students.len()),
        items: students
            .iter()
            .map(|s| format!("  • {} (ID: {}, Course: {})", s.name, s.student_id, s.course))
            .collect(),
    };
    render_template(BULLETS_TEMPLATE, &data, use_color)
}

fn render_statistics(stats: &Statistics, use_color: bool) -> String {
    let Some(average_age) = stats.average_age_display() else {
        return String::new();
    };
    let data = StatisticsData {
        total: stats.total,
        average_age,
        graded: stats.graded,
        ungraded: stats.ungraded,
        courses: stats
            .courses
            .iter()
            .map(|c| CourseLine {
                course: c.course.clone(),
                count: c.count,
                percentage: format!("{:.1}", c.percentage),
            })
            .collect(),
    };
    render_template(STATISTICS_TEMPLATE, &data, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect(),
    };

    render_with_color(
        MESSAGES_TEMPLATE,
        &data,
        ThemeChoice::from(&*ROSTER_THEME),
        use_color,
    )
    .unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// One line per entry, or `empty_message` when there are none.
pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
}

/// `key = value` lines with the `=` signs aligned.
pub fn render_key_values(pairs: &[(&str, String)], empty_message: &str, use_color: bool) -> String {
    let key_width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let lines: Vec<String> = pairs
        .iter()
        .map(|(k, v)| {
            let padding = " ".repeat(key_width.saturating_sub(k.width()));
            format!("{}{} = {}", k, padding, v)
        })
        .collect();
    render_text_list(&lines, empty_message, use_color)
}

/// Whether stdout should receive ANSI styling.
pub fn stdout_color() -> bool {
    console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster::model::{Grade, NewStudent, StudentId};

    fn record(n: u32, name: &str, age: u32, course: &str, grade: Option<Grade>) -> StudentRecord {
        let mut r = StudentRecord::new(
            StudentId::from_number(n.into()),
            NewStudent {
                name: name.into(),
                age,
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "1234567890".into(),
                course: course.into(),
            },
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        r.grade = grade;
        r
    }

    #[test]
    fn banner_is_framed_by_rules() {
        let output = render_banner("ALL STUDENTS", false);
        let rule = "=".repeat(BANNER_WIDTH);
        assert_eq!(output, format!("\n{}\nALL STUDENTS\n{}\n", rule, rule));
    }

    #[test]
    fn menu_lists_every_choice() {
        let output = render_menu(false);
        assert!(output.contains("1. Add New Student"));
        assert!(output.contains("9. System Statistics"));
        assert!(output.contains("0. Exit"));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn records_listing_layout() {
        let records = vec![record(1, "Ada", 20, "Math", Some(Grade::A))];
        let output = render_records(Some("Total Students: 1"), &records, RecordDetail::Listing, false);

        let expected = [
            "Total Students: 1",
            "",
            "ID: STU001, Name: Ada, Course: Math, Grade: A",
            "  Age: 20, Email: ada@example.com",
            "  Phone: 1234567890, Enrolled: 2024-01-02",
            &"-".repeat(SEPARATOR_WIDTH),
        ]
        .join("\n");
        assert_eq!(output, format!("{}\n", expected));
    }

    #[test]
    fn search_detail_shows_grade_label() {
        let records = vec![record(2, "Bob", 30, "Art", None)];
        let output = render_records(None, &records, RecordDetail::Search, false);
        assert!(output.starts_with("\nID: STU002, Name: Bob"));
        assert!(output.contains("  Phone: 1234567890, Course: Art"));
        assert!(output.contains("  Grade: Not Assigned"));
    }

    #[test]
    fn course_report_groups_with_blank_lines() {
        let records = vec![
            record(1, "Ada", 20, "Math", Some(Grade::A)),
            record(2, "Bob", 30, "Art", None),
        ];
        let output = render_report(&Report::build(ReportKind::ByCourse, &records), false);

        assert!(output.contains("STUDENTS BY COURSE"));
        assert!(output.contains("📚 Math (1 students):\n  • Ada (ID: STU001, Grade: A)\n\n📚 Art"));
        assert!(output.contains("  • Bob (ID: STU002, Grade: N/A)"));
    }

    #[test]
    fn grade_report_skips_empty_buckets() {
        let records = vec![record(1, "Ada", 20, "Math", Some(Grade::B))];
        let output = render_report(&Report::build(ReportKind::ByGrade, &records), false);
        assert!(output.contains("📊 Grade B (1 students):"));
        assert!(!output.contains("Grade A"));
        assert!(!output.contains("No Grade"));
    }

    #[test]
    fn statistics_show_average_and_distribution() {
        let records = vec![
            record(1, "Ada", 10, "Math", Some(Grade::A)),
            record(2, "Bob", 20, "Art", None),
        ];
        let output = render_report(&Report::build(ReportKind::Statistics, &records), false);

        assert!(output.contains("Average Age: 15.0 years"));
        assert!(output.contains("Students with Grades: 1/2"));
        assert!(output.contains("  Math: 1 students (50.0%)"));
    }

    #[test]
    fn empty_statistics_render_banner_only() {
        let output = render_report(&Report::build(ReportKind::Statistics, &[]), false);
        assert_eq!(output, render_banner("SYSTEM STATISTICS", false));
    }

    #[test]
    fn messages_render_one_per_line() {
        let output = render_messages(
            &[CmdMessage::success("Saved"), CmdMessage::error("Oops")],
            false,
        );
        assert_eq!(output, "Saved\nOops\n");
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        assert_eq!(render_text_list(&[], "Nothing here.", false), "Nothing here.\n");
        let lines = vec!["a = 1".to_string()];
        assert_eq!(render_text_list(&lines, "Nothing here.", false), "a = 1\n");
    }

    #[test]
    fn key_values_align_on_equals() {
        let pairs = vec![("data-file", "db.json".to_string()), ("dir", ".".to_string())];
        let output = render_key_values(&pairs, "", false);
        assert_eq!(output, "data-file = db.json\ndir       = .\n");
    }
}
