use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::error::PhonebookError;
use phonebook::ledger::LedgerEntry;
use phonebook::model::Record;
use std::io::{self, Write};

pub const RULE: &str = "=============================";

pub fn print_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("========{}========", title).bold())
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, error: &PhonebookError) -> io::Result<()> {
    let text = match error {
        PhonebookError::NotFound(_) => "Record not found.".to_string(),
        other => other.to_string(),
    };
    writeln!(out, "{}", text.red())
}

pub fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

pub fn print_entries<W: Write>(out: &mut W, entries: &[LedgerEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}
