//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for roster operations, whichever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (raw ID text becomes a [`StudentId`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no terminal I/O and no formatting. Business rules live in
//! `commands/*.rs` and the [`RecordStore`].
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Field, NewStudent, StudentId, StudentRecord};
use crate::report::ReportKind;
use crate::store::{DataStore, RecordStore};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, RosterPaths};

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: RecordStore<S>,
    paths: RosterPaths,
}

impl<S: DataStore> RosterApi<S> {
    /// Loads the record set from `backend`. A missing or unreadable document starts empty.
    pub fn new(backend: S, paths: RosterPaths) -> Self {
        Self {
            store: RecordStore::load(backend),
            paths,
        }
    }

    pub fn student_count(&self) -> usize {
        self.store.len()
    }

    /// Looks up one record by raw ID text.
    pub fn get_student(&self, id: &str) -> Result<&StudentRecord> {
        self.store.get(&StudentId::normalize(id))
    }

    pub fn add_student(&mut self, fields: NewStudent) -> Result<CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn list_students(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_students(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn update_student(&mut self, id: &str, field: Field, value: &str) -> Result<CmdResult> {
        commands::update::run(&mut self.store, &StudentId::normalize(id), field, value)
    }

    pub fn assign_grade(&mut self, id: &str, grade: &str) -> Result<CmdResult> {
        commands::grade::run(&mut self.store, &StudentId::normalize(id), grade)
    }

    pub fn delete_student(&mut self, id: &str, confirmation: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &StudentId::normalize(id), confirmation)
    }

    pub fn report(&self, kind: ReportKind) -> Result<CmdResult> {
        commands::report::run(&self.store, kind)
    }

    pub fn export(&self, name: Option<&str>) -> Result<CmdResult> {
        commands::export::run(&self.store, &self.paths.export_dir, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::report::Report;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn make_api() -> RosterApi<InMemoryStore> {
        let paths = RosterPaths {
            config_dir: PathBuf::from(".roster"),
            export_dir: PathBuf::from("."),
        };
        RosterApi::new(InMemoryStore::new(), paths)
    }

    fn ada() -> NewStudent {
        NewStudent {
            name: "Ada Lovelace".into(),
            age: 20,
            email: "ada@example.com".into(),
            phone: "1234567890".into(),
            course: "Math".into(),
        }
    }

    #[test]
    fn add_then_list() {
        let mut api = make_api();
        api.add_student(ada()).unwrap();

        let result = api.list_students().unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].student_id.as_str(), "STU001");
    }

    #[test]
    fn ids_are_normalized() {
        let mut api = make_api();
        api.add_student(ada()).unwrap();

        assert_eq!(api.get_student(" stu001 ").unwrap().name, "Ada Lovelace");
        api.assign_grade("stu001", "b").unwrap();
        assert!(api.get_student("STU001").unwrap().is_graded());
    }

    #[test]
    fn unknown_id_surfaces_not_found() {
        let mut api = make_api();
        let err = api.update_student("STU404", Field::Name, "X").unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn invalid_grade_leaves_record_unchanged() {
        let mut api = make_api();
        api.add_student(ada()).unwrap();
        api.assign_grade("STU001", "A").unwrap();

        let err = api.assign_grade("STU001", "Z").unwrap_err();
        assert!(matches!(err, RosterError::InvalidGrade(_)));
        assert_eq!(api.get_student("STU001").unwrap().grade_label(), "A");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut api = make_api();
        api.add_student(ada()).unwrap();

        api.delete_student("STU001", "no").unwrap();
        assert_eq!(api.student_count(), 1);

        api.delete_student("STU001", "YES").unwrap();
        assert_eq!(api.student_count(), 0);
    }

    #[test]
    fn report_dispatches_kind() {
        let mut api = make_api();
        api.add_student(ada()).unwrap();

        let result = api.report(ReportKind::Ungraded).unwrap();
        match result.report {
            Some(Report::Ungraded(students)) => assert_eq!(students.len(), 1),
            other => panic!("unexpected report: {:?}", other),
        }
    }
}
