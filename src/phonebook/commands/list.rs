use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore) -> Result<CmdResult> {
    let result = CmdResult::default().with_listed_records(store.records().to_vec());
    if store.is_empty() {
        return Ok(result.with_message(CmdMessage::info("No records found.")));
    }
    Ok(result)
}
