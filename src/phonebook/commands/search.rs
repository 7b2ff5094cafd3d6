use crate::commands::CmdResult;
use crate::error::{PhonebookError, Result};
use crate::model::RecordLookup;
use crate::store::RecordStore;

/// Exact lookup by id or normalized number.
pub fn run(store: &RecordStore, lookup: &RecordLookup) -> Result<CmdResult> {
    let record = store
        .find(lookup)
        .cloned()
        .ok_or_else(|| PhonebookError::NotFound(lookup.clone()))?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
