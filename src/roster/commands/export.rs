use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::{export_path, write_export};
use crate::store::{DataStore, RecordStore};
use chrono::Local;
use std::path::Path;
use tracing::info;

/// Writes every record to `<dir>/<name>.txt`, or a timestamped name when `name` is blank.
pub fn run<S: DataStore>(
    store: &RecordStore<S>,
    dir: &Path,
    name: Option<&str>,
) -> Result<CmdResult> {
    let now = Local::now().naive_local();
    let path = export_path(dir, name, now);

    write_export(&path, store.records(), now)?;
    info!(path = %path.display(), count = store.len(), "records exported");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data exported successfully to '{}'!",
        path.display()
    )));
    Ok(result.with_export_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::InMemoryStore;
    use std::fs;

    const DOC: &str = r#"{
        "STU001": {"student_id": "STU001", "name": "Ada", "age": 20, "email": "ada@example.com",
                   "phone": "1234567890", "course": "Math", "grade": null, "enrollment_date": "2024-01-02"}
    }"#;

    #[test]
    fn writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::load(InMemoryStore::with_document(DOC));

        let result = run(&store, dir.path(), Some("class")).unwrap();
        let path = result.export_path.unwrap();

        assert_eq!(path, dir.path().join("class.txt"));
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("Total Students: 1"));
        assert!(text.contains("Name: Ada"));
    }

    #[test]
    fn blank_name_uses_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::load(InMemoryStore::new());

        let result = run(&store, dir.path(), None).unwrap();
        let name = result
            .export_path
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with("students_export_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn io_failure_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::load(InMemoryStore::new());
        let missing = dir.path().join("does-not-exist");

        let err = run(&store, &missing, Some("x")).unwrap_err();
        assert!(matches!(err, RosterError::Export { .. }));
    }
}
