use crate::validation::normalize_phone_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One phone book entry.
///
/// `number` is always held in normalized form (see
/// [`normalize_phone_number`]); the constructor takes care of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub number: String,
    pub address: String,
}

impl Record {
    pub fn new(id: u32, name: String, number: &str, address: String) -> Self {
        Self {
            id,
            name,
            number: normalize_phone_number(number),
            address,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Number: {}, Address: {}",
            self.id, self.name, self.number, self.address
        )
    }
}

/// Fields that can be changed after a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Number,
    Address,
}

impl RecordField {
    pub fn label(&self) -> &'static str {
        match self {
            RecordField::Name => "Name",
            RecordField::Number => "Number",
            RecordField::Address => "Address",
        }
    }
}

/// How a caller points at a record: by id or by (normalized) number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLookup {
    Id(u32),
    Number(String),
}

impl RecordLookup {
    /// Parses user-typed id text.
    pub fn id_from_str(input: &str) -> Option<Self> {
        input.trim().parse().ok().map(RecordLookup::Id)
    }

    pub fn number(input: &str) -> Self {
        RecordLookup::Number(normalize_phone_number(input.trim()))
    }
}

impl fmt::Display for RecordLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLookup::Id(id) => write!(f, "id {}", id),
            RecordLookup::Number(number) => write!(f, "number {}", number),
        }
    }
}
