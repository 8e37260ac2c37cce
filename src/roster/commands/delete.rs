use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentId;
use crate::store::{DataStore, RecordStore};

/// Token the user must type to confirm a deletion.
pub const CONFIRM_TOKEN: &str = "YES";

pub fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CONFIRM_TOKEN)
}

/// Deletes `id` only when `confirmation` is the confirm token.
///
/// An unknown ID is an error regardless of the confirmation.
pub fn run<S: DataStore>(
    store: &mut RecordStore<S>,
    id: &StudentId,
    confirmation: &str,
) -> Result<CmdResult> {
    let target = store.get(id)?.clone();
    let mut result = CmdResult::default();

    if !is_confirmed(confirmation) {
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result.with_listed_records(vec![target]));
    }

    let removed = store.delete(id)?;
    result.add_message(CmdMessage::success(format!(
        "Student {} deleted successfully!",
        removed.student_id
    )));
    Ok(result.with_affected_records(vec![removed]))
}
