use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::ledger::TextLedger;
use crate::validation::{
    normalize_phone_number, validate_name, validate_phone_number_in, ValidationError,
};
use phonenumber::country;

/// Validates and appends one ledger entry.
///
/// The duplicate check normalizes the typed number before comparing it with
/// the (normalized) stored numbers. Names must not contain control characters,
/// since a tab would split the line into extra fields.
pub fn add(
    ledger: &mut TextLedger,
    region: country::Id,
    name: &str,
    number: &str,
) -> Result<CmdResult> {
    let name = name.trim();
    let number = number.trim();

    if !validate_name(name) || name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidName.into());
    }
    if !validate_phone_number_in(number, region) {
        return Err(ValidationError::InvalidNumber.into());
    }
    if ledger.contains_number(number)? {
        return Err(PhonebookError::DuplicateNumber(normalize_phone_number(number)));
    }

    let entry = ledger.append(name, number)?;
    log::debug!("event=ledger_append id={}", entry.id);

    Ok(CmdResult::default()
        .with_ledger_entries(vec![entry])
        .with_message(CmdMessage::success("Record added successfully")))
}

/// Deletes by id text as typed; `"3"` and `"0003"` name the same entry.
pub fn delete(ledger: &mut TextLedger, id_text: &str) -> Result<CmdResult> {
    let id: u32 = id_text.trim().parse().map_err(|_| {
        PhonebookError::InvalidLookup("Invalid ID. Please enter a numeric value".into())
    })?;

    let entry = ledger.delete(id)?;
    log::debug!("event=ledger_delete id={}", entry.id);

    Ok(CmdResult::default()
        .with_ledger_entries(vec![entry])
        .with_message(CmdMessage::success("Record has been deleted successfully")))
}

/// Substring search over raw lines; a miss is a message, not an error.
pub fn search(ledger: &TextLedger, term: &str) -> Result<CmdResult> {
    match ledger.search(term)? {
        Some(entry) => Ok(CmdResult::default().with_ledger_entries(vec![entry])),
        None => Ok(CmdResult::default().with_message(CmdMessage::info("Record not found"))),
    }
}
