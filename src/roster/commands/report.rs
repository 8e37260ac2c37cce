use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::report::{Report, ReportKind};
use crate::store::{DataStore, RecordStore};

pub fn run<S: DataStore>(store: &RecordStore<S>, kind: ReportKind) -> Result<CmdResult> {
    let report = Report::build(kind, store.records());
    let mut result = CmdResult::default();

    match &report {
        Report::Statistics(stats) if stats.total == 0 => {
            result.add_message(CmdMessage::info("No students in the system."));
        }
        Report::Ungraded(students) if students.is_empty() => {
            result.add_message(CmdMessage::success("All students have grades assigned!"));
        }
        Report::ByCourse(groups) if groups.is_empty() => {
            result.add_message(CmdMessage::info("No students in the system."));
        }
        _ => {}
    }

    Ok(result.with_report(report))
}
