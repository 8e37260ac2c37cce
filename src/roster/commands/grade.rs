use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentId;
use crate::store::{DataStore, RecordStore};

/// Assigns a grade from raw input. Blank input clears the grade.
pub fn run<S: DataStore>(
    store: &mut RecordStore<S>,
    id: &StudentId,
    input: &str,
) -> Result<CmdResult> {
    let record = store.assign_grade(id, input)?;

    let message = match record.grade {
        Some(grade) => format!("Grade {} assigned to {} successfully!", grade, record.name),
        None => format!("Grade cleared for {}!", record.name),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::Grade;
    use crate::store::memory::InMemoryStore;

    const DOC: &str = r#"{
        "STU001": {"student_id": "STU001", "name": "Ada", "age": 20, "email": "ada@example.com",
                   "phone": "1234567890", "course": "Math", "grade": null, "enrollment_date": "2024-01-02"}
    }"#;

    #[test]
    fn assigns_and_clears() {
        let mut store = RecordStore::load(InMemoryStore::with_document(DOC));
        let id = StudentId::new("STU001");

        let result = run(&mut store, &id, "d").unwrap();
        assert_eq!(result.messages[0].content, "Grade D assigned to Ada successfully!");
        assert_eq!(store.get(&id).unwrap().grade, Some(Grade::D));

        let result = run(&mut store, &id, "").unwrap();
        assert_eq!(result.messages[0].content, "Grade cleared for Ada!");
        assert_eq!(store.get(&id).unwrap().grade, None);
    }

    #[test]
    fn unknown_student_is_not_found() {
        let mut store = RecordStore::load(InMemoryStore::with_document(DOC));
        let err = run(&mut store, &StudentId::new("STU009"), "A").unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }
}
