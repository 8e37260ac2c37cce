use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewStudent;
use crate::store::{DataStore, RecordStore};

pub fn run<S: DataStore>(store: &mut RecordStore<S>, fields: NewStudent) -> Result<CmdResult> {
    let record = store.add(fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Student added successfully!"));
    result.add_message(CmdMessage::info(format!("Student ID: {}", record.student_id)));
    result.add_message(CmdMessage::info(format!("Name: {}", record.name)));
    result.add_message(CmdMessage::info(format!("Course: {}", record.course)));
    Ok(result.with_affected_records(vec![record]))
}
