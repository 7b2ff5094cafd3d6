use crate::error::{PhonebookError, Result};
use crate::model::{Record, RecordField, RecordLookup};
use crate::validation::{
    normalize_phone_number, validate_address, validate_name, validate_phone_number_in,
    ValidationError, DEFAULT_REGION,
};
use phonenumber::country;

/// In-memory record collection.
///
/// Records keep insertion order. `highest_id` is owned here and only moves
/// forward through [`RecordStore::add`] or is recomputed by
/// [`RecordStore::populate`].
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    highest_id: u32,
    region: country::Id,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_region(DEFAULT_REGION)
    }

    /// Store whose number validation uses `region`.
    pub fn with_region(region: country::Id) -> Self {
        Self {
            records: Vec::new(),
            highest_id: 0,
            region,
        }
    }

    pub fn region(&self) -> country::Id {
        self.region
    }

    /// Replaces the contents with `records` and recomputes the id counter.
    pub fn populate(&mut self, records: Vec<Record>) {
        self.highest_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        self.records = records;
    }

    /// Appends a record with the next id.
    ///
    /// Trusted input: callers validate the fields and check
    /// [`RecordStore::is_duplicate_number`] first. Fails only when the id
    /// space is exhausted, leaving the store unchanged.
    pub fn add(&mut self, name: String, number: &str, address: String) -> Result<&Record> {
        let id = self.highest_id.checked_add(1).ok_or_else(|| {
            PhonebookError::Store(format!("No record ids left after {}", self.highest_id))
        })?;
        self.highest_id = id;
        self.records.push(Record::new(id, name, number, address));
        Ok(&self.records[self.records.len() - 1])
    }

    /// Removes the record with `id`, returning it.
    pub fn delete(&mut self, id: u32) -> Result<Record> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(PhonebookError::NotFound(RecordLookup::Id(id)))?;
        Ok(self.records.remove(position))
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn find_by_number(&self, number: &str) -> Option<&Record> {
        let normalized = normalize_phone_number(number);
        self.records.iter().find(|r| r.number == normalized)
    }

    pub fn find(&self, lookup: &RecordLookup) -> Option<&Record> {
        match lookup {
            RecordLookup::Id(id) => self.find_by_id(*id),
            RecordLookup::Number(number) => self.find_by_number(number),
        }
    }

    pub fn is_duplicate_number(&self, number: &str) -> bool {
        self.find_by_number(number).is_some()
    }

    /// Validates `value` for `field` and writes it into the record with `id`.
    ///
    /// On any error the record is left as it was.
    pub fn update_field(&mut self, id: u32, field: RecordField, value: &str) -> Result<&Record> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(PhonebookError::NotFound(RecordLookup::Id(id)))?;

        match field {
            RecordField::Name => {
                if !validate_name(value) {
                    return Err(ValidationError::InvalidName.into());
                }
                self.records[position].name = value.to_string();
            }
            RecordField::Address => {
                if !validate_address(value) {
                    return Err(ValidationError::InvalidAddress.into());
                }
                self.records[position].address = value.to_string();
            }
            RecordField::Number => {
                if !validate_phone_number_in(value, self.region) {
                    return Err(ValidationError::InvalidNumber.into());
                }
                let normalized = normalize_phone_number(value);
                let taken = self
                    .records
                    .iter()
                    .any(|r| r.id != id && r.number == normalized);
                if taken {
                    return Err(PhonebookError::DuplicateNumber(normalized));
                }
                self.records[position].number = normalized;
            }
        }

        Ok(&self.records[position])
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn highest_id(&self) -> u32 {
        self.highest_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
