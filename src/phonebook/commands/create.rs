use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::store::RecordStore;
use crate::validation::{
    normalize_phone_number, validate_address, validate_name, validate_phone_number_in,
    ValidationError,
};

/// Checks the fields in prompt order (name, number, address) and adds the record.
pub fn run(store: &mut RecordStore, name: &str, number: &str, address: &str) -> Result<CmdResult> {
    let name = name.trim();
    let number = number.trim();
    let address = address.trim();

    check_name(name)?;
    check_number(store, number)?;
    check_address(address)?;

    let record = store
        .add(name.to_string(), number, address.to_string())?
        .clone();
    log::debug!("event=record_created id={}", record.id);

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success("Record created successfully!")))
}

/// Name check on its own, so the shell can stop before asking for the number.
pub fn check_name(name: &str) -> Result<()> {
    if validate_name(name.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName.into())
    }
}

/// Number validity plus duplicate check against the store.
pub fn check_number(store: &RecordStore, number: &str) -> Result<()> {
    let number = number.trim();
    if !validate_phone_number_in(number, store.region()) {
        return Err(ValidationError::InvalidNumber.into());
    }
    if store.is_duplicate_number(number) {
        return Err(PhonebookError::DuplicateNumber(normalize_phone_number(number)));
    }
    Ok(())
}

pub fn check_address(address: &str) -> Result<()> {
    if validate_address(address.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAddress.into())
    }
}
