//! # Phonebook Architecture
//!
//! Phonebook is a small contact manager with two storage variants:
//!
//! - **Phone book** (JSON): records `{id, name, number, address}` are loaded from
//!   `database.json` at start-up, edited in memory and saved as one snapshot at
//!   exit, including exit by Ctrl-C.
//! - **Ledger** (text): `id\tname\tnumber` lines are appended to `dataset.txt`
//!   as they are added, searched line by line and removed by rewriting the file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (binary: cli/)                                         │
//! │  - clap arguments, menu loops, prompts, colors, Ctrl-C      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - PhonebookApi / LedgerApi facades                         │
//! │  - Non-fatal load/save policy                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation + one use case per module                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/, ledger.rs)                                │
//! │  - RecordStore (in memory), StorageBackend snapshots        │
//! │  - TextLedger (streamed text file)                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr (other than through
//! `log`), calls `std::process::exit` or reads from stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: Facades used by the shell
//! - [`commands`]: Use cases
//! - [`store`]: In-memory record store and snapshot backends
//! - [`ledger`]: Text ledger file
//! - [`model`]: `Record`, `RecordField`, `RecordLookup`
//! - [`validation`]: Field validators and phone number normalization
//! - [`config`]: `config.json` settings
//! - [`logging`]: Logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
