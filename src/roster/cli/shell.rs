//! # Interactive Menu
//!
//! The numbered menu session: `0` exits, `1`-`9` run an operation, and every operation
//! ends with a "Press Enter to continue..." pause. Input is line based and invalid
//! field values are re-prompted in place.
//!
//! End of input anywhere in a session behaves like choosing `0`.
//!
//! Errors from an operation (unknown ID, invalid grade, failed save or export) are
//! reported and the session carries on. Only failures of the terminal itself end it.
//!
//! `Shell` is generic over its reader and writer so tests drive it with in-memory
//! buffers.

use super::render::{
    render_banner, render_menu, render_messages, render_records, render_report,
    render_text_list, RecordDetail,
};
use roster::api::{CmdMessage, CmdResult, RosterApi};
use roster::error::{Result, RosterError};
use roster::model::{Field, NewStudent};
use roster::report::ReportKind;
use roster::store::DataStore;
use roster::validation::{self, ValidationError};
use std::io::{BufRead, Write};
use tracing::debug;

const WELCOME_TITLE: &str = "WELCOME TO STUDENT MANAGEMENT SYSTEM";

/// Whether the session goes on after an operation.
enum Flow {
    Continue,
    Quit,
}

type FieldParser = fn(&str) -> std::result::Result<String, ValidationError>;

pub struct Shell<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut RosterApi<S>,
    input: R,
    output: W,
    use_color: bool,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(api: &'a mut RosterApi<S>, input: R, output: W, use_color: bool) -> Self {
        Self {
            api,
            input,
            output,
            use_color,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.write(&render_banner(WELCOME_TITLE, self.use_color))?;
        let loaded = format!(
            "Loaded {} student(s) from database.",
            self.api.student_count()
        );
        self.say(&loaded)?;

        loop {
            self.write(&render_menu(self.use_color))?;
            let Some(answer) = self.ask("\nEnter your choice (0-9): ")? else {
                break;
            };
            let Ok(choice) = answer.trim().parse::<u32>() else {
                self.say("Invalid input! Please enter a number between 0 and 9.")?;
                continue;
            };
            if choice == 0 {
                break;
            }

            debug!(choice, "menu choice");
            let flow = match self.dispatch(choice) {
                Ok(flow) => flow,
                Err(e) => {
                    self.report_error(&e)?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
            if self.ask("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }

        self.write("\nThank you for using Student Management System!\nGoodbye!\n")
    }

    fn dispatch(&mut self, choice: u32) -> Result<Flow> {
        match choice {
            1 => self.add_student(),
            2 => self.view_all(),
            3 => self.search(),
            4 => self.update_student(),
            5 => {
                self.write(&render_banner("DELETE STUDENT", self.use_color))?;
                let Some(id) = self.ask("Enter student ID to delete: ")? else {
                    return Ok(Flow::Quit);
                };
                self.delete_student(&id)
            }
            6 => self.assign_grade(),
            7 => self.reports(),
            8 => self.export(),
            9 => self.show_report(ReportKind::Statistics),
            _ => {
                self.say("Invalid choice! Please enter a number between 0 and 9.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_student(&mut self) -> Result<Flow> {
        self.write(&render_banner("ADD NEW STUDENT", self.use_color))?;

        let Some(name) = self.ask_until("Enter student name: ", validation::parse_name)? else {
            return Ok(Flow::Quit);
        };
        let Some(age) = self.ask_until("Enter student age: ", validation::parse_age)? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = self.ask_until("Enter student email: ", validation::parse_email)? else {
            return Ok(Flow::Quit);
        };
        let Some(phone) =
            self.ask_until("Enter student phone number: ", validation::parse_phone)?
        else {
            return Ok(Flow::Quit);
        };
        let Some(course) = self.ask_until("Enter course name: ", validation::parse_course)? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.add_student(NewStudent {
            name,
            age,
            email,
            phone,
            course,
        })?;
        self.write("\n")?;
        self.print_result(&result)?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> Result<Flow> {
        self.write(&render_banner("ALL STUDENTS", self.use_color))?;
        let result = self.api.list_students()?;
        if !result.listed_records.is_empty() {
            let header = format!("Total Students: {}", result.listed_records.len());
            self.write(&render_records(
                Some(&header),
                &result.listed_records,
                RecordDetail::Listing,
                self.use_color,
            ))?;
        }
        self.print_messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        self.write(&render_banner("SEARCH STUDENT", self.use_color))?;
        let Some(term) = self.ask("Enter student ID or name to search: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.search_students(&term)?;
        if !result.listed_records.is_empty() {
            self.write("\n")?;
        }
        self.print_messages(&result.messages)?;
        if !result.listed_records.is_empty() {
            self.write(&render_records(
                None,
                &result.listed_records,
                RecordDetail::Search,
                self.use_color,
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn update_student(&mut self) -> Result<Flow> {
        self.write(&render_banner("UPDATE STUDENT INFORMATION", self.use_color))?;
        let Some(id) = self.ask("Enter student ID to update: ")? else {
            return Ok(Flow::Quit);
        };
        let record = self.api.get_student(&id)?.clone();

        let mut lines = vec![String::new(), format!("Current information for {}:", record.name)];
        lines.extend([
            format!("1. Name: {}", record.name),
            format!("2. Age: {}", record.age),
            format!("3. Email: {}", record.email),
            format!("4. Phone: {}", record.phone),
            format!("5. Course: {}", record.course),
            format!("6. Grade: {}", record.grade_label()),
        ]);
        self.write(&render_text_list(&lines, "", self.use_color))?;

        let Some(answer) = self.ask("\nSelect field to update (1-6) or 0 to cancel: ")? else {
            return Ok(Flow::Quit);
        };
        let Ok(choice) = answer.trim().parse::<u32>() else {
            self.say("Invalid input! Please enter a number.")?;
            return Ok(Flow::Continue);
        };
        if choice == 0 {
            self.say("Update cancelled.")?;
            return Ok(Flow::Continue);
        }
        let Some(field) = Field::from_choice(choice) else {
            self.say("Invalid choice!")?;
            return Ok(Flow::Continue);
        };

        let value = match field_prompt(field) {
            Some((prompt, parse)) => self.ask_until(prompt, parse)?,
            None => self.ask("Enter new grade (A, B, C, D, F or leave empty): ")?,
        };
        let Some(value) = value else {
            return Ok(Flow::Quit);
        };

        let result = self.api.update_student(&id, field, &value)?;
        self.print_result(&result)?;
        Ok(Flow::Continue)
    }

    /// Shows the record, asks for the confirmation token, then deletes or cancels.
    ///
    /// Used by the `delete` subcommand when `--yes` is not given.
    pub fn confirm_delete(&mut self, id: &str) -> Result<()> {
        self.delete_student(id).map(|_| ())
    }

    fn delete_student(&mut self, id: &str) -> Result<Flow> {
        let record = self.api.get_student(id)?.clone();
        let lines = vec![
            String::new(),
            "Are you sure you want to delete the following student?".to_string(),
            format!("ID: {}", record.student_id),
            format!("Name: {}", record.name),
            format!("Course: {}", record.course),
        ];
        self.write(&render_text_list(&lines, "", self.use_color))?;

        let Some(confirmation) = self.ask("\nType 'YES' to confirm deletion: ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.delete_student(id, &confirmation)?;
        self.print_messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn assign_grade(&mut self) -> Result<Flow> {
        self.write(&render_banner("ASSIGN GRADE TO STUDENT", self.use_color))?;
        let Some(id) = self.ask("Enter student ID: ")? else {
            return Ok(Flow::Quit);
        };
        let record = self.api.get_student(&id)?.clone();
        let lines = vec![
            String::new(),
            format!("Student: {}", record.name),
            format!("Current Grade: {}", record.grade_label()),
        ];
        self.write(&render_text_list(&lines, "", self.use_color))?;

        let Some(grade) = self.ask("Enter grade (A, B, C, D, F or leave empty to clear): ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.assign_grade(&id, &grade)?;
        self.print_messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn reports(&mut self) -> Result<Flow> {
        self.write(&render_banner("GENERATE REPORTS", self.use_color))?;
        let lines: Vec<String> = ReportKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| format!("{}. {}", i + 1, kind.title()))
            .collect();
        self.write(&render_text_list(&lines, "", self.use_color))?;

        let Some(answer) = self.ask("\nSelect report type (1-4): ")? else {
            return Ok(Flow::Quit);
        };
        let Ok(choice) = answer.trim().parse::<u32>() else {
            self.say("Invalid input!")?;
            return Ok(Flow::Continue);
        };
        match ReportKind::from_choice(choice) {
            Some(kind) => self.show_report(kind),
            None => {
                self.say("Invalid choice!")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn show_report(&mut self, kind: ReportKind) -> Result<Flow> {
        let result = self.api.report(kind)?;
        if let Some(report) = &result.report {
            self.write(&render_report(report, self.use_color))?;
        }
        self.print_messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter filename to export (without extension): ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.export(Some(&name))?;
        self.print_messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    /// Prompts until `parse` accepts the answer. `None` means input ended.
    fn ask_until<T, E: std::fmt::Display>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, E>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.print_messages(&[CmdMessage::error(e.to_string())])?,
            }
        }
    }

    /// Writes `prompt` and reads one line without its terminator. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn print_result(&mut self, result: &CmdResult) -> Result<()> {
        self.print_messages(&result.messages)
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let rendered = render_messages(messages, self.use_color);
        self.write(&rendered)
    }

    fn report_error(&mut self, error: &RosterError) -> Result<()> {
        self.print_messages(&[CmdMessage::error(error.to_string())])
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.print_messages(&[CmdMessage::info(line)])
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Prompt and re-prompt rule for each free-text field. Grade takes a single answer.
fn field_prompt(field: Field) -> Option<(&'static str, FieldParser)> {
    let entry: (&'static str, FieldParser) = match field {
        Field::Name => ("Enter new name: ", validation::parse_name as FieldParser),
        Field::Age => ("Enter new age: ", parse_age_text as FieldParser),
        Field::Email => ("Enter new email: ", validation::parse_email as FieldParser),
        Field::Phone => ("Enter new phone number: ", validation::parse_phone as FieldParser),
        Field::Course => ("Enter new course: ", validation::parse_course as FieldParser),
        Field::Grade => return None,
    };
    Some(entry)
}

fn parse_age_text(input: &str) -> std::result::Result<String, ValidationError> {
    validation::parse_age(input).map(|age| age.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::api::RosterPaths;
    use roster::store::memory::InMemoryStore;
    use std::io::Cursor;
    use std::path::PathBuf;

    const DOC: &str = r#"{
        "STU001": {"student_id": "STU001", "name": "Ada", "age": 10, "email": "ada@example.com",
                   "phone": "1234567890", "course": "Math", "grade": "A", "enrollment_date": "2024-01-02"},
        "STU002": {"student_id": "STU002", "name": "Bob", "age": 20, "email": "bob@example.com",
                   "phone": "1234567890", "course": "Art", "grade": null, "enrollment_date": "2024-01-03"}
    }"#;

    fn make_api(export_dir: PathBuf) -> RosterApi<InMemoryStore> {
        let paths = RosterPaths {
            config_dir: PathBuf::from(".roster"),
            export_dir,
        };
        RosterApi::new(InMemoryStore::with_document(DOC), paths)
    }

    fn session(api: &mut RosterApi<InMemoryStore>, input: &str) -> String {
        let mut out = Vec::new();
        Shell::new(api, Cursor::new(input.to_string()), &mut out, false)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn welcome_and_goodbye() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "0\n");
        assert!(out.contains("WELCOME TO STUDENT MANAGEMENT SYSTEM"));
        assert!(out.contains("Loaded 2 student(s) from database."));
        assert!(out.contains("Thank you for using Student Management System!"));
    }

    #[test]
    fn end_of_input_quits() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "");
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn non_numeric_choice_is_rejected() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "abc\n42\n\n0\n");
        assert!(out.contains("Invalid input! Please enter a number between 0 and 9."));
        assert!(out.contains("Invalid choice! Please enter a number between 0 and 9."));
    }

    #[test]
    fn add_reprompts_invalid_fields() {
        let mut api = make_api(PathBuf::from("."));
        let input = "1\n\nCarol\nold\n200\n30\nnope\ncarol@example.com\n123\n+11234567890\nPhysics\n\n0\n";
        let out = session(&mut api, input);

        assert!(out.contains("Name cannot be empty!"));
        assert!(out.contains("Age must be a number between 5 and 100!"));
        assert!(out.contains("Invalid email format!"));
        assert!(out.contains("Invalid phone number!"));
        assert!(out.contains("Student added successfully!"));
        assert!(out.contains("Student ID: STU003"));
        assert_eq!(api.get_student("STU003").unwrap().course, "Physics");
    }

    #[test]
    fn view_all_lists_records() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "2\n\n0\n");
        assert!(out.contains("Total Students: 2"));
        assert!(out.contains("ID: STU002, Name: Bob, Course: Art, Grade: Not Assigned"));
    }

    #[test]
    fn search_by_name_fragment() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "3\nbo\n\n0\n");
        assert!(out.contains("Found 1 matching student(s):"));
        assert!(out.contains("  Grade: Not Assigned"));
    }

    #[test]
    fn update_age_with_reprompt() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "4\nstu002\n2\n4\n21\n\n0\n");
        assert!(out.contains("Current information for Bob:"));
        assert!(out.contains("Age must be a number between 5 and 100!"));
        assert!(out.contains("Age updated successfully!"));
        assert_eq!(api.get_student("STU002").unwrap().age, 21);
    }

    #[test]
    fn update_cancel_leaves_record() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "4\nSTU001\n0\n\n0\n");
        assert!(out.contains("Update cancelled."));
    }

    #[test]
    fn unknown_id_is_reported_and_session_continues() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "6\nSTU999\n\n2\n\n0\n");
        assert!(out.contains("Student with ID STU999 not found!"));
        assert!(out.contains("Total Students: 2"));
    }

    #[test]
    fn delete_needs_yes() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "5\nSTU001\nno\n\n0\n");
        assert!(out.contains("Deletion cancelled."));
        assert_eq!(api.student_count(), 2);

        let out = session(&mut api, "5\nSTU001\nyes\n\n0\n");
        assert!(out.contains("Student STU001 deleted successfully!"));
        assert_eq!(api.student_count(), 1);
    }

    #[test]
    fn invalid_grade_is_rejected() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "6\nSTU001\nZ\n\n0\n");
        assert!(out.contains("Invalid grade 'Z'! Please enter A, B, C, D, or F."));
        assert_eq!(api.get_student("STU001").unwrap().grade_label(), "A");
    }

    #[test]
    fn blank_grade_clears() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "6\nSTU001\n\n\n0\n");
        assert!(out.contains("Grade cleared for Ada!"));
        assert!(!api.get_student("STU001").unwrap().is_graded());
    }

    #[test]
    fn statistics_from_menu() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "9\n\n0\n");
        assert!(out.contains("SYSTEM STATISTICS"));
        assert!(out.contains("Average Age: 15.0 years"));
    }

    #[test]
    fn reports_submenu() {
        let mut api = make_api(PathBuf::from("."));
        let out = session(&mut api, "7\n3\n\n0\n");
        assert!(out.contains("STUDENTS WITHOUT GRADES"));
        assert!(out.contains("  • Bob (ID: STU002, Course: Art)"));

        let out = session(&mut api, "7\n9\n\n0\n");
        assert!(out.contains("Invalid choice!"));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = make_api(dir.path().to_path_buf());
        let out = session(&mut api, "8\nclass\n\n0\n");

        assert!(out.contains("Data exported successfully"));
        assert!(dir.path().join("class.txt").exists());
    }
}
