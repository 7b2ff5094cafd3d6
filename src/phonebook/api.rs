//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point the shell talks to.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the in-memory [`RecordStore`] and the [`StorageBackend`] it is loaded from
//! - **Applies the persistence policy**: load and save failures are logged and
//!   reported as warnings, never returned as errors
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O with the user**: No stdout, stderr or prompts
//!
//! ## Generic Over StorageBackend
//!
//! `PhonebookApi<B: StorageBackend>`:
//! - Production: `PhonebookApi<JsonFileBackend>`
//! - Testing: `PhonebookApi<MemBackend>`
//!
//! The ledger has no snapshot to manage, so [`LedgerApi`] simply forwards to
//! [`commands::ledger`] with the configured region.

use crate::commands;
use crate::error::Result;
use crate::ledger::TextLedger;
use crate::model::{Record, RecordField, RecordLookup};
use crate::store::{RecordStore, StorageBackend};
use phonenumber::country;

pub struct PhonebookApi<B: StorageBackend> {
    store: RecordStore,
    backend: B,
}

impl<B: StorageBackend> PhonebookApi<B> {
    /// Empty phone book; call [`PhonebookApi::load`] to read persisted data.
    pub fn new(backend: B, region: country::Id) -> Self {
        Self {
            store: RecordStore::with_region(region),
            backend,
        }
    }

    /// Populates the store from the backend.
    ///
    /// Missing or malformed data is not fatal: the store starts empty and the
    /// result carries a warning.
    pub fn load(&mut self) -> CmdResult {
        match self.backend.load() {
            Ok(records) => {
                log::info!("event=load status=ok records={}", records.len());
                self.store.populate(records);
                CmdResult::default()
            }
            Err(err) => {
                log::warn!("event=load status=failed error={}", err);
                self.store.populate(Vec::new());
                CmdResult::default()
                    .with_message(CmdMessage::warning(format!("Error loading data: {}", err)))
                    .with_message(CmdMessage::warning("Continuing with an empty phone book."))
            }
        }
    }

    /// Writes the full current record set, reporting failures as a warning.
    ///
    /// The in-memory store is unaffected either way.
    pub fn save(&self) -> CmdResult {
        match self.try_save() {
            Ok(()) => CmdResult::default(),
            Err(err) => {
                log::warn!("event=save status=failed error={}", err);
                CmdResult::default()
                    .with_message(CmdMessage::warning(format!("Error saving data: {}", err)))
            }
        }
    }

    pub fn try_save(&self) -> Result<()> {
        self.backend.save(self.store.records())?;
        log::info!("event=save status=ok records={}", self.store.len());
        Ok(())
    }

    pub fn create_record(&mut self, name: &str, number: &str, address: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, name, number, address)
    }

    pub fn find_record(&self, lookup: &RecordLookup) -> Result<CmdResult> {
        commands::search::run(&self.store, lookup)
    }

    pub fn update_record(
        &mut self,
        lookup: &RecordLookup,
        field: RecordField,
        value: &str,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, lookup, field, value)
    }

    pub fn delete_record(&mut self, lookup: &RecordLookup) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, lookup)
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Step-wise checks so the shell can stop at the first bad field.
    pub fn check_name(&self, name: &str) -> Result<()> {
        commands::create::check_name(name)
    }

    pub fn check_number(&self, number: &str) -> Result<()> {
        commands::create::check_number(&self.store, number)
    }

    pub fn check_address(&self, address: &str) -> Result<()> {
        commands::create::check_address(address)
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub struct LedgerApi {
    ledger: TextLedger,
    region: country::Id,
}

impl LedgerApi {
    pub fn new(ledger: TextLedger, region: country::Id) -> Self {
        Self { ledger, region }
    }

    pub fn add_entry(&mut self, name: &str, number: &str) -> Result<CmdResult> {
        commands::ledger::add(&mut self.ledger, self.region, name, number)
    }

    pub fn delete_entry(&mut self, id_text: &str) -> Result<CmdResult> {
        commands::ledger::delete(&mut self.ledger, id_text)
    }

    pub fn search_entries(&self, term: &str) -> Result<CmdResult> {
        commands::ledger::search(&self.ledger, term)
    }

    pub fn ledger(&self) -> &TextLedger {
        &self.ledger
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::memory::MemBackend;
    use crate::validation::DEFAULT_REGION;

    fn seeded() -> PhonebookApi<MemBackend> {
        let backend = MemBackend::with_records(vec![
            Record::new(3, "Ana Reyes".into(), "09171111111", "Pasig".into()),
            Record::new(7, "Ben Cruz".into(), "09172222222", "Taguig".into()),
        ]);
        let mut api = PhonebookApi::new(backend, DEFAULT_REGION);
        api.load();
        api
    }

    #[test]
    fn load_populates_and_continues_ids() {
        let mut api = seeded();
        assert_eq!(api.records().len(), 2);

        let result = api.create_record("Cy Lim", "09173333333", "Manila").unwrap();
        assert_eq!(result.affected_records[0].id, 8);
    }

    #[test]
    fn load_failure_starts_empty_with_warning() {
        let backend = MemBackend::new();
        backend.set_simulate_load_error(true);
        let mut api = PhonebookApi::new(backend, DEFAULT_REGION);

        let result = api.load();
        assert!(result.has_warnings());
        assert!(result.messages[1].content.contains("empty phone book"));
        assert!(api.records().is_empty());
    }

    #[test]
    fn save_writes_full_snapshot() {
        let mut api = seeded();
        api.delete_record(&RecordLookup::Id(3)).unwrap();
        api.update_record(&RecordLookup::Id(7), RecordField::Address, "Makati")
            .unwrap();

        let result = api.save();
        assert!(!result.has_warnings());

        let snapshot = api.backend().snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].address, "Makati");
    }

    #[test]
    fn save_failure_is_a_warning_and_keeps_memory() {
        let api = seeded();
        api.backend().set_simulate_write_error(true);

        let result = api.save();
        assert!(result.has_warnings());
        assert!(api.try_save().is_err());
        assert_eq!(api.records().len(), 2);
    }

    #[test]
    fn dispatches_search_and_list() {
        let api = seeded();
        let found = api.find_record(&RecordLookup::number("0917 222 2222")).unwrap();
        assert_eq!(found.listed_records[0].id, 7);
        assert_eq!(api.list_records().unwrap().listed_records.len(), 2);
        assert!(matches!(
            api.find_record(&RecordLookup::Id(1)),
            Err(PhonebookError::NotFound(_))
        ));
    }

    #[test]
    fn stepwise_checks() {
        let api = seeded();
        assert!(api.check_name("Ana").is_ok());
        assert!(api.check_name("4na").is_err());
        assert!(matches!(
            api.check_number("0917-111-1111"),
            Err(PhonebookError::DuplicateNumber(_))
        ));
        assert!(api.check_number("09179999999").is_ok());
        assert!(api.check_address("Main St.").is_ok());
    }

    #[test]
    fn ledger_api_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = TextLedger::open(dir.path().join("dataset.txt")).unwrap();
        let mut api = LedgerApi::new(ledger, DEFAULT_REGION);

        api.add_entry("Juan Cruz", "09171234567").unwrap();
        let hit = api.search_entries("Juan").unwrap();
        assert_eq!(hit.ledger_entries[0].id, 1);

        api.delete_entry("1").unwrap();
        assert!(api.search_entries("Juan").unwrap().ledger_entries.is_empty());
        assert_eq!(api.ledger().next_id(), 2);
    }
}
