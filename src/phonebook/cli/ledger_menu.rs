use super::menu::Flow;
use super::print::{print_entries, print_error, print_messages};
use super::prompt::Console;
use phonebook::api::LedgerApi;
use phonebook::error::Result;
use std::io::{BufRead, Write};

/// Runs the ledger menu. Every change is already on disk, so nothing is
/// flushed on the way out.
pub fn run<R: BufRead, W: Write>(api: &mut LedgerApi, console: &mut Console<R, W>) -> Result<()> {
    loop {
        writeln!(console.out())?;
        writeln!(console.out(), "1. Add a Record")?;
        writeln!(console.out(), "2. Delete a Record")?;
        writeln!(console.out(), "3. Search for a Record")?;
        writeln!(console.out(), "4. Exit")?;

        let Some(choice) = console.ask("Enter Choice: ")? else {
            break;
        };

        let flow = match choice.as_str() {
            "1" => add(api, console)?,
            "2" => delete(api, console)?,
            "3" => search(api, console)?,
            "4" => Flow::Exit,
            _ => {
                writeln!(console.out(), "Wrong Choice!!")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }
    Ok(())
}

fn add<R: BufRead, W: Write>(api: &mut LedgerApi, console: &mut Console<R, W>) -> Result<Flow> {
    let Some(name) = console.ask("Enter Caller Name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(number) = console.ask("Enter Caller Number: ")? else {
        return Ok(Flow::Exit);
    };

    match api.add_entry(&name, &number) {
        Ok(result) => print_messages(console.out(), &result.messages)?,
        Err(err) if err.is_recoverable() => print_error(console.out(), &err)?,
        Err(err) => return Err(err),
    }
    Ok(Flow::Continue)
}

fn delete<R: BufRead, W: Write>(api: &mut LedgerApi, console: &mut Console<R, W>) -> Result<Flow> {
    let Some(id) = console.ask("Enter the ID of the record you want to delete: ")? else {
        return Ok(Flow::Exit);
    };

    match api.delete_entry(&id) {
        Ok(result) => print_messages(console.out(), &result.messages)?,
        Err(err) if err.is_recoverable() => print_error(console.out(), &err)?,
        Err(err) => return Err(err),
    }
    Ok(Flow::Continue)
}

fn search<R: BufRead, W: Write>(api: &mut LedgerApi, console: &mut Console<R, W>) -> Result<Flow> {
    let label = "Enter the name of the person record you want to see the record of: ";
    let Some(term) = console.ask(label)? else {
        return Ok(Flow::Exit);
    };

    let result = api.search_entries(&term)?;
    print_entries(console.out(), &result.ledger_entries)?;
    print_messages(console.out(), &result.messages)?;
    Ok(Flow::Continue)
}
