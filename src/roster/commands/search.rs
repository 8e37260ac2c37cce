use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecordStore};

pub fn run<S: DataStore>(store: &RecordStore<S>, term: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if term.trim().is_empty() {
        result.add_message(CmdMessage::warning("Search term cannot be empty!"));
        return Ok(result);
    }

    let matches: Vec<_> = store.search(term).into_iter().cloned().collect();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No students found matching your search."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} matching student(s):",
            matches.len()
        )));
    }
    Ok(result.with_listed_records(matches))
}
