//! # Command Layer
//!
//! Each use case lives in its own submodule as a plain `run` function over a
//! [`RecordStore`](crate::store::RecordStore) or a [`TextLedger`](crate::ledger::TextLedger).
//!
//! Commands:
//! - Validate user-supplied fields before touching the store
//! - Return a structured [`CmdResult`] (records plus leveled messages)
//! - Never print, prompt or exit; the shell decides how to render
//!
//! Recoverable failures (bad input, duplicates, unknown records) come back as
//! `Err` so the shell can re-prompt; see
//! [`crate::error::PhonebookError::is_recoverable`].
//!
//! ## Command Modules
//!
//! - [`create`]: Validate and add a record
//! - [`search`]: Find one record by id or number
//! - [`update`]: Change one field of a record
//! - [`delete`]: Remove a record
//! - [`list`]: All records in insertion order
//! - [`ledger`]: Add, delete and search on the text ledger

use crate::ledger::LedgerEntry;
use crate::model::Record;

pub mod create;
pub mod delete;
pub mod ledger;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub ledger_entries: Vec<LedgerEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_ledger_entries(mut self, entries: Vec<LedgerEntry>) -> Self {
        self.ledger_entries = entries;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
