//! Phone book menu loop.
//!
//! The API sits behind a mutex shared with the Ctrl-C handler. Every handler
//! takes the lock for a single call and never while waiting on input, so an
//! interrupt can always reach the store to save it.

use super::print::{print_error, print_header, print_messages, print_records, RULE};
use super::prompt::{Answer, Console};
use phonebook::api::PhonebookApi;
use phonebook::error::{PhonebookError, Result};
use phonebook::model::{RecordField, RecordLookup};
use phonebook::store::StorageBackend;
use std::io::{BufRead, Write};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Recovers the guard if a previous holder panicked.
pub fn lock<B: StorageBackend>(api: &Mutex<PhonebookApi<B>>) -> MutexGuard<'_, PhonebookApi<B>> {
    api.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs until the user picks Exit or input ends. Saving is the caller's job.
pub fn run<B, R, W>(api: &Mutex<PhonebookApi<B>>, console: &mut Console<R, W>) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    loop {
        console.clear()?;
        print_main_menu(console.out())?;

        let Some(choice) = console.ask("Enter your choice: ")? else {
            break;
        };

        let flow = match choice.as_str() {
            "1" => create(api, console)?,
            "2" => search(api, console)?,
            "3" => update(api, console)?,
            "4" => delete(api, console)?,
            "5" => list(api, console)?,
            "6" => {
                writeln!(console.out(), "Exiting the program...")?;
                Flow::Exit
            }
            _ => {
                writeln!(console.out(), "Invalid choice. Please try again.")?;
                pause(console)?
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }
    Ok(())
}

fn print_main_menu<W: Write>(out: &mut W) -> Result<()> {
    print_header(out, "PHONE BOOK")?;
    writeln!(out, "[1] - Create")?;
    writeln!(out, "[2] - Search")?;
    writeln!(out, "[3] - Update")?;
    writeln!(out, "[4] - Delete")?;
    writeln!(out, "[5] - Print All")?;
    writeln!(out, "[6] - Exit")?;
    Ok(())
}

fn pause<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Flow> {
    Ok(if console.pause()? {
        Flow::Continue
    } else {
        Flow::Exit
    })
}

/// Shows a recoverable error and waits; anything else is propagated.
fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: PhonebookError) -> Result<Flow> {
    if !err.is_recoverable() {
        return Err(err);
    }
    print_error(console.out(), &err)?;
    pause(console)
}

/// Asks for one field and runs `check` on it before moving on.
fn ask_checked<R, W, F>(
    console: &mut Console<R, W>,
    label: &str,
    check: F,
) -> Result<Answer<String>>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&str) -> Result<()>,
{
    let Some(value) = console.ask(label)? else {
        return Ok(Answer::Closed);
    };
    match check(&value) {
        Ok(()) => Ok(Answer::Given(value)),
        Err(err) if err.is_recoverable() => {
            print_error(console.out(), &err)?;
            Ok(Answer::Rejected)
        }
        Err(err) => Err(err),
    }
}

fn ask_lookup<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    verb: &str,
) -> Result<Answer<RecordLookup>> {
    writeln!(console.out(), "[1] - ID")?;
    writeln!(console.out(), "[2] - Number")?;
    let Some(mode) = console.ask(&format!("{} by: ", verb))? else {
        return Ok(Answer::Closed);
    };

    match mode.as_str() {
        "1" => {
            let Some(text) = console.ask("Enter id: ")? else {
                return Ok(Answer::Closed);
            };
            match RecordLookup::id_from_str(&text) {
                Some(lookup) => Ok(Answer::Given(lookup)),
                None => {
                    writeln!(console.out(), "Invalid ID. Please enter a numeric value")?;
                    Ok(Answer::Rejected)
                }
            }
        }
        "2" => {
            let Some(text) = console.ask("Enter number: ")? else {
                return Ok(Answer::Closed);
            };
            Ok(Answer::Given(RecordLookup::number(&text)))
        }
        _ => {
            writeln!(console.out(), "Invalid choice.")?;
            Ok(Answer::Rejected)
        }
    }
}

/// Resolves a lookup into the flow to take when the answer is not usable.
macro_rules! given_or_return {
    ($console:expr, $answer:expr) => {
        match $answer {
            Answer::Given(value) => value,
            Answer::Rejected => return pause($console),
            Answer::Closed => return Ok(Flow::Exit),
        }
    };
}

fn create<B, R, W>(api: &Mutex<PhonebookApi<B>>, console: &mut Console<R, W>) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    console.clear()?;
    print_header(console.out(), "CREATE RECORD")?;

    let name = given_or_return!(
        console,
        ask_checked(console, "Name: ", |v| lock(api).check_name(v))?
    );
    let number = given_or_return!(
        console,
        ask_checked(console, "Number: ", |v| lock(api).check_number(v))?
    );
    let address = given_or_return!(
        console,
        ask_checked(console, "Address: ", |v| lock(api).check_address(v))?
    );

    let result = lock(api).create_record(&name, &number, &address);
    match result {
        Ok(result) => {
            print_messages(console.out(), &result.messages)?;
            pause(console)
        }
        Err(err) => report(console, err),
    }
}

fn search<B, R, W>(api: &Mutex<PhonebookApi<B>>, console: &mut Console<R, W>) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    console.clear()?;
    print_header(console.out(), "SEARCH RECORD")?;
    let lookup = given_or_return!(console, ask_lookup(console, "Search")?);

    writeln!(console.out(), "{}", RULE)?;
    let result = lock(api).find_record(&lookup);
    match result {
        Ok(result) => {
            print_records(console.out(), &result.listed_records)?;
            pause(console)
        }
        Err(err) => report(console, err),
    }
}

fn update<B, R, W>(api: &Mutex<PhonebookApi<B>>, console: &mut Console<R, W>) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    console.clear()?;
    print_header(console.out(), "UPDATE RECORD")?;
    let lookup = given_or_return!(console, ask_lookup(console, "Update")?);

    let found = lock(api).find_record(&lookup);
    let record = match found {
        Ok(result) => result.listed_records.into_iter().next(),
        Err(err) => return report(console, err),
    };
    if let Some(record) = &record {
        writeln!(console.out(), "{}", record)?;
    }

    writeln!(console.out(), "[1] - Name")?;
    writeln!(console.out(), "[2] - Number")?;
    writeln!(console.out(), "[3] - Address")?;
    let Some(choice) = console.ask("Enter: ")? else {
        return Ok(Flow::Exit);
    };
    let field = match choice.as_str() {
        "1" => RecordField::Name,
        "2" => RecordField::Number,
        "3" => RecordField::Address,
        _ => {
            writeln!(console.out(), "Invalid choice.")?;
            return pause(console);
        }
    };

    let Some(value) = console.ask(&format!("New {}: ", field.label()))? else {
        return Ok(Flow::Exit);
    };
    let result = lock(api).update_record(&lookup, field, &value);
    match result {
        Ok(result) => {
            print_messages(console.out(), &result.messages)?;
            pause(console)
        }
        Err(err) => report(console, err),
    }
}

fn delete<B, R, W>(api: &Mutex<PhonebookApi<B>>, console: &mut Console<R, W>) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    console.clear()?;
    print_header(console.out(), "DELETE RECORD")?;
    let lookup = given_or_return!(console, ask_lookup(console, "Delete")?);

    let found = lock(api).find_record(&lookup);
    let found = match found {
        Ok(result) => result,
        Err(err) => return report(console, err),
    };

    writeln!(console.out(), "Are you sure you want to delete this record?")?;
    print_records(console.out(), &found.listed_records)?;
    writeln!(console.out(), "{}", RULE)?;

    let Some(confirm) = console.ask("Enter 'y' to confirm: ")? else {
        return Ok(Flow::Exit);
    };
    if !confirm.eq_ignore_ascii_case("y") {
        writeln!(console.out(), "Deletion cancelled.")?;
        return pause(console);
    }

    let result = lock(api).delete_record(&lookup);
    match result {
        Ok(result) => {
            print_messages(console.out(), &result.messages)?;
            pause(console)
        }
        Err(err) => report(console, err),
    }
}

fn list<B, R, W>(api: &Mutex<PhonebookApi<B>>, console: &mut Console<R, W>) -> Result<Flow>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    console.clear()?;
    print_header(console.out(), "ALL RECORDS")?;

    let result = lock(api).list_records()?;
    print_records(console.out(), &result.listed_records)?;
    print_messages(console.out(), &result.messages)?;
    pause(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::model::Record;
    use phonebook::store::memory::MemBackend;
    use phonebook::validation::DEFAULT_REGION;

    fn api_with(records: Vec<Record>) -> Mutex<PhonebookApi<MemBackend>> {
        let mut api = PhonebookApi::new(MemBackend::with_records(records), DEFAULT_REGION);
        api.load();
        Mutex::new(api)
    }

    fn session(api: &Mutex<PhonebookApi<MemBackend>>, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut console = Console::new(input.as_bytes(), &mut out, false);
        run(api, &mut console).unwrap();
        drop(console);
        String::from_utf8(out).unwrap()
    }

    fn ana() -> Record {
        Record::new(3, "Ana Reyes".into(), "09171111111", "Pasig".into())
    }

    #[test]
    fn create_then_exit() {
        let api = api_with(vec![]);
        let out = session(&api, "1\nJuan Cruz\n0917-123-4567\nQuezon City\n\n6\n");

        assert!(out.contains("Record created successfully!"));
        assert!(out.contains("Exiting the program..."));
        let records = lock(&api).records().to_vec();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, "09171234567");
    }

    #[test]
    fn create_stops_at_first_invalid_field() {
        let api = api_with(vec![]);
        let out = session(&api, "1\nJ\n\n6\n");

        assert!(out.contains("Invalid name"));
        assert!(!out.contains("Number: "));
        assert!(lock(&api).records().is_empty());
    }

    #[test]
    fn create_rejects_duplicate_number() {
        let api = api_with(vec![ana()]);
        let out = session(&api, "1\nBen Cruz\n0917 111 1111\n\n6\n");

        assert!(out.contains("Number already exists"));
        assert_eq!(lock(&api).records().len(), 1);
    }

    #[test]
    fn search_by_number_and_missing_id() {
        let api = api_with(vec![ana()]);
        let out = session(&api, "2\n2\n0917-111-1111\n\n2\n1\n99\n\n6\n");

        assert!(out.contains("ID: 3, Name: Ana Reyes"));
        assert!(out.contains("Record not found."));
    }

    #[test]
    fn search_with_non_numeric_id() {
        let api = api_with(vec![ana()]);
        let out = session(&api, "2\n1\nabc\n\n6\n");
        assert!(out.contains("Invalid ID. Please enter a numeric value"));
    }

    #[test]
    fn update_address() {
        let api = api_with(vec![ana()]);
        let out = session(&api, "3\n1\n3\n3\nMakati City\n\n6\n");

        assert!(out.contains("Address updated successfully"));
        assert_eq!(lock(&api).records()[0].address, "Makati City");
    }

    #[test]
    fn delete_requires_confirmation() {
        let api = api_with(vec![ana()]);
        let out = session(&api, "4\n1\n3\nn\n\n4\n1\n3\nY\n\n6\n");

        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("Record deleted."));
        assert!(lock(&api).records().is_empty());
    }

    #[test]
    fn print_all_on_empty_book() {
        let api = api_with(vec![]);
        let out = session(&api, "5\n\n6\n");
        assert!(out.contains("No records found."));
    }

    #[test]
    fn invalid_choice_and_end_of_input() {
        let api = api_with(vec![]);
        let out = session(&api, "9\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(!out.contains("Exiting the program..."));
    }
}
