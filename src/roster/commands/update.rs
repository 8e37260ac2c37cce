use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Field, StudentId};
use crate::store::{DataStore, RecordStore};

pub fn run<S: DataStore>(
    store: &mut RecordStore<S>,
    id: &StudentId,
    field: Field,
    value: &str,
) -> Result<CmdResult> {
    let record = store.update(id, field, value)?;

    let message = if field == Field::Grade && record.grade.is_none() {
        "Grade cleared successfully!".to_string()
    } else {
        format!("{} updated successfully!", field.label())
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_records(vec![record]))
}
