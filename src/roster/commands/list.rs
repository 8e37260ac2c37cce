use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecordStore};

pub fn run<S: DataStore>(store: &RecordStore<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_records(store.records().to_vec());
    if store.is_empty() {
        result.add_message(CmdMessage::info("No students found in the system."));
    }
    Ok(result)
}
