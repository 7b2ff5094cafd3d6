pub mod args;
pub mod ledger_menu;
pub mod menu;
pub mod print;
pub mod prompt;

use args::{Cli, Commands};
use clap::Parser;
use phonebook::api::{LedgerApi, PhonebookApi};
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::ledger::TextLedger;
use phonebook::logging::init_logging;
use phonebook::store::fs::JsonFileBackend;
use print::print_messages;
use prompt::Console;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

type SharedBook = Arc<Mutex<PhonebookApi<JsonFileBackend>>>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", err);
    }

    let interactive = console::Term::stdout().is_term();
    if !interactive {
        colored::control::set_override(false);
    }

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = PhonebookConfig::load(&data_dir)?;

    match cli.command {
        None | Some(Commands::Book) => run_book(&data_dir, &config, interactive),
        Some(Commands::Ledger) => run_ledger(&data_dir, &config),
        Some(Commands::Config { key, value }) => handle_config(&data_dir, config, key, value),
    }
}

fn run_book(data_dir: &Path, config: &PhonebookConfig, interactive: bool) -> Result<()> {
    let backend = JsonFileBackend::create(config.data_path(data_dir))?;
    log::debug!("event=book_open path={}", backend.path().display());
    let mut api = PhonebookApi::new(backend, config.region_id());
    let loaded = api.load();
    print_messages(&mut io::stdout(), &loaded.messages)?;

    let api: SharedBook = Arc::new(Mutex::new(api));
    install_interrupt_handler(Arc::clone(&api));

    let mut console = Console::new(io::stdin().lock(), io::stdout(), interactive);
    let outcome = menu::run(&api, &mut console);

    // Flush even when the loop failed.
    let saved = menu::lock(&api).save();
    print_messages(&mut io::stdout(), &saved.messages)?;
    outcome
}

fn install_interrupt_handler(api: SharedBook) {
    let installed = ctrlc::set_handler(move || {
        println!();
        println!("Program interrupted by user.");
        log::info!("event=interrupt action=save");
        let saved = menu::lock(&api).save();
        let _ = print_messages(&mut io::stdout(), &saved.messages);
        std::process::exit(0);
    });
    if let Err(err) = installed {
        log::warn!("event=interrupt_handler status=failed error={}", err);
    }
}

fn run_ledger(data_dir: &Path, config: &PhonebookConfig) -> Result<()> {
    let ledger = TextLedger::open(config.ledger_path(data_dir))?;
    log::debug!(
        "event=ledger_open path={} next_id={}",
        ledger.path().display(),
        ledger.next_id()
    );
    let mut api = LedgerApi::new(ledger, config.region_id());
    let mut console = Console::new(io::stdin().lock(), io::stdout(), false);
    ledger_menu::run(&mut api, &mut console)
}

fn handle_config(
    data_dir: &Path,
    mut config: PhonebookConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let Some(key) = key else {
        println!("region = {}", config.region);
        println!("data-file = {}", config.data_file);
        println!("ledger-file = {}", config.ledger_file);
        return Ok(());
    };

    match (key.as_str(), value) {
        ("region", None) => println!("region = {}", config.region),
        ("data-file", None) => println!("data-file = {}", config.data_file),
        ("ledger-file", None) => println!("ledger-file = {}", config.ledger_file),
        ("region", Some(v)) => {
            config.set_region(&v)?;
            config.save(data_dir)?;
            println!("region = {}", config.region);
        }
        ("data-file", Some(v)) => {
            config.data_file = file_name_value(&v)?;
            config.save(data_dir)?;
            println!("data-file = {}", config.data_file);
        }
        ("ledger-file", Some(v)) => {
            config.ledger_file = file_name_value(&v)?;
            config.save(data_dir)?;
            println!("ledger-file = {}", config.ledger_file);
        }
        (other, _) => {
            return Err(PhonebookError::Store(format!(
                "Unknown config key: {}. Valid keys: region, data-file, ledger-file",
                other
            )));
        }
    }
    Ok(())
}

fn file_name_value(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || PathBuf::from(trimmed).is_absolute() {
        return Err(PhonebookError::Store(format!(
            "Expected a path relative to the data directory, got '{}'",
            value
        )));
    }
    Ok(trimmed.to_string())
}
