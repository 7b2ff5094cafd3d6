use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::{RecordField, RecordLookup};
use crate::store::RecordStore;

pub fn run(
    store: &mut RecordStore,
    lookup: &RecordLookup,
    field: RecordField,
    value: &str,
) -> Result<CmdResult> {
    let id = store
        .find(lookup)
        .map(|r| r.id)
        .ok_or_else(|| PhonebookError::NotFound(lookup.clone()))?;

    let record = store.update_field(id, field, value.trim())?.clone();
    log::debug!("event=record_updated id={} field={}", id, field.label());

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success(format!(
            "{} updated successfully",
            field.label()
        ))))
}
