//! # Ledger: the tab-delimited text variant
//!
//! The ledger keeps one entry per line:
//!
//! ```text
//! 0001\tJuan Cruz\t09171234567
//! 0002\tMaria Clara\t09187654321
//! ```
//!
//! Unlike the JSON phone book it is never held in memory as a whole:
//! - **Add** appends a single line.
//! - **Search** streams lines and stops at the first one containing the term.
//! - **Delete** rewrites the file without the first line carrying the id.
//!
//! Older files separate fields with runs of tabs (`0001\t\tJuan\t\t\t\t0917...`);
//! empty fields are ignored when parsing so those files keep working.
//!
//! Lines that do not parse (no numeric id, missing fields) are skipped by id
//! assignment and number checks but are preserved by rewrites.

use crate::error::{PhonebookError, Result};
use crate::model::RecordLookup;
use crate::validation::normalize_phone_number;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One parsed ledger line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub id: u32,
    pub name: String,
    pub number: String,
}

impl LedgerEntry {
    /// Parses `id\tname\tnumber`, tolerating repeated tabs.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line
            .trim_end_matches(['\r', '\n'])
            .split('\t')
            .filter(|f| !f.is_empty());
        let id = parse_id(fields.next()?)?;
        let name = fields.next()?.to_string();
        let number = fields.next()?.to_string();
        Some(Self { id, name, number })
    }

    fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}\t{}\t{}", self.id, self.name, self.number)
    }
}

fn following_id(id: u32) -> Result<u32> {
    id.checked_add(1)
        .ok_or_else(|| PhonebookError::Store(format!("No ledger ids left after {}", id)))
}

fn parse_id(field: &str) -> Option<u32> {
    let field = field.trim();
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Handle on a ledger file plus the next id to hand out.
#[derive(Debug)]
pub struct TextLedger {
    path: PathBuf,
    next_id: u32,
}

impl TextLedger {
    /// Opens (creating if needed) the ledger at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            File::create(&path)?;
        }

        let mut ledger = Self { path, next_id: 1 };
        if let Some(last) = ledger.last_id()? {
            ledger.next_id = following_id(last)?;
        }
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Highest parseable id in the file.
    pub fn last_id(&self) -> Result<Option<u32>> {
        let mut last = None;
        for entry in self.entries()? {
            let entry = entry?;
            last = last.max(Some(entry.id));
        }
        Ok(last)
    }

    /// Appends an entry and advances the id counter.
    ///
    /// Trusted input, like [`crate::store::RecordStore::add`]. Nothing is
    /// written once the id space is exhausted.
    pub fn append(&mut self, name: &str, number: &str) -> Result<LedgerEntry> {
        let following = following_id(self.next_id)?;
        let entry = LedgerEntry {
            id: self.next_id,
            name: name.to_string(),
            number: normalize_phone_number(number),
        };

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(entry.to_line().as_bytes())?;
        writer.flush()?;

        self.next_id = following;
        Ok(entry)
    }

    /// First entry whose raw line contains `term`.
    ///
    /// This is substring containment over the whole line, so a term can hit
    /// the id, the name or the number.
    pub fn search(&self, term: &str) -> Result<Option<LedgerEntry>> {
        let reader = BufReader::new(File::open(&self.path)?);
        for line in reader.lines() {
            let line = line?;
            if line.contains(term) {
                if let Some(entry) = LedgerEntry::parse(&line) {
                    return Ok(Some(entry));
                }
            }
        }
        Ok(None)
    }

    /// Whether any entry carries `number`, both sides normalized.
    pub fn contains_number(&self, number: &str) -> Result<bool> {
        let probe = normalize_phone_number(number);
        for entry in self.entries()? {
            if normalize_phone_number(&entry?.number) == probe {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Rewrites the file without the first line whose id equals `id`.
    pub fn delete(&mut self, id: u32) -> Result<LedgerEntry> {
        let lines: Vec<String> = {
            let reader = BufReader::new(File::open(&self.path)?);
            reader.lines().collect::<std::io::Result<_>>()?
        };

        let position = lines
            .iter()
            .position(|line| LedgerEntry::parse(line).is_some_and(|e| e.id == id))
            .ok_or(PhonebookError::NotFound(RecordLookup::Id(id)))?;
        let removed = LedgerEntry::parse(&lines[position])
            .ok_or_else(|| PhonebookError::Store(format!("Unreadable ledger line {}", position)))?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let tmp_path = dir.join(format!(".ledger-{}.tmp", Uuid::new_v4()));
        let written = write_lines(&tmp_path, &lines, position)
            .and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }

        Ok(removed)
    }

    /// Streams every parseable entry.
    pub fn entries(&self) -> Result<impl Iterator<Item = Result<LedgerEntry>>> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(reader.lines().filter_map(|line| match line {
            Ok(line) => LedgerEntry::parse(&line).map(Ok),
            Err(err) => Some(Err(err.into())),
        }))
    }
}

fn write_lines(path: &Path, lines: &[String], skip: usize) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (i, line) in lines.iter().enumerate() {
        if i == skip {
            continue;
        }
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ledger_with(contents: &str) -> (tempfile::TempDir, TextLedger) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.txt");
        fs::write(&path, contents).unwrap();
        let ledger = TextLedger::open(&path).unwrap();
        (dir, ledger)
    }

    #[test]
    fn open_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub").join("dataset.txt");
        let ledger = TextLedger::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(ledger.next_id(), 1);
    }

    #[test]
    fn append_zero_pads_ids() {
        let (_dir, mut ledger) = ledger_with("");
        ledger.append("Juan Cruz", "0917 123 4567").unwrap();
        ledger.append("Maria Clara", "0918-765-4321").unwrap();

        let content = fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(
            content,
            "0001\tJuan Cruz\t09171234567\n0002\tMaria Clara\t09187654321\n"
        );
    }

    #[test]
    fn open_rejects_ledger_at_highest_id() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.txt");
        fs::write(&path, "4294967295\tAna\t09171111111\n").unwrap();

        let result = TextLedger::open(&path);
        assert!(matches!(result, Err(PhonebookError::Store(_))));
    }

    #[test]
    fn append_stops_before_running_out_of_ids() {
        let (_dir, mut ledger) = ledger_with("4294967294\tAna\t09171111111\n");
        assert_eq!(ledger.next_id(), u32::MAX);

        let result = ledger.append("Ben", "09172222222");
        assert!(matches!(result, Err(PhonebookError::Store(_))));
        assert_eq!(
            fs::read_to_string(ledger.path()).unwrap(),
            "4294967294\tAna\t09171111111\n"
        );
    }

    #[test]
    fn next_id_continues_after_highest() {
        let (_dir, mut ledger) = ledger_with("0003\tAna\t09171111111\n0007\tBen\t09172222222\n");
        assert_eq!(ledger.next_id(), 8);
        assert_eq!(ledger.append("Cy", "09173333333").unwrap().id, 8);
    }

    #[test]
    fn reads_legacy_multi_tab_lines() {
        let (_dir, ledger) = ledger_with("0000\t\tJuan Cruz\t\t\t\t09171234567\n");
        let entry = ledger.search("Juan").unwrap().unwrap();
        assert_eq!(entry.id, 0);
        assert_eq!(entry.name, "Juan Cruz");
        assert_eq!(entry.number, "09171234567");
        assert_eq!(ledger.next_id(), 1);
    }

    #[test]
    fn search_is_substring_based_first_match_wins() {
        let (_dir, ledger) = ledger_with(
            "0001\tJuan Cruz\t09171234567\n0002\tJuana Reyes\t09187654321\n",
        );
        assert_eq!(ledger.search("Juan").unwrap().unwrap().id, 1);
        assert_eq!(ledger.search("ana R").unwrap().unwrap().id, 2);
        assert_eq!(ledger.search("0002").unwrap().unwrap().name, "Juana Reyes");
        assert_eq!(ledger.search("765").unwrap().unwrap().id, 2);
        assert!(ledger.search("Pedro").unwrap().is_none());
    }

    #[test]
    fn search_skips_unparseable_lines() {
        let (_dir, ledger) = ledger_with("Juan scribbled note\n0001\tJuan Cruz\t09171234567\n");
        assert_eq!(ledger.search("Juan").unwrap().unwrap().id, 1);
        assert_eq!(ledger.next_id(), 2);
    }

    #[test]
    fn contains_number_normalizes_both_sides() {
        let (_dir, ledger) = ledger_with("0001\tJuan Cruz\t0917 123-4567\n");
        assert!(ledger.contains_number("09171234567").unwrap());
        assert!(ledger.contains_number("0917-123-4567").unwrap());
        assert!(!ledger.contains_number("09187654321").unwrap());
    }

    #[test]
    fn delete_removes_only_first_matching_line() {
        let (_dir, mut ledger) = ledger_with(
            "0001\tAna\t09171111111\n0002\tBen\t09172222222\n0002\tBen Copy\t09173333333\n",
        );
        let removed = ledger.delete(2).unwrap();
        assert_eq!(removed.name, "Ben");

        let content = fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(content, "0001\tAna\t09171111111\n0002\tBen Copy\t09173333333\n");
    }

    #[test]
    fn delete_preserves_unparseable_lines() {
        let (_dir, mut ledger) = ledger_with("# header\n0001\tAna\t09171111111\n");
        ledger.delete(1).unwrap();
        assert_eq!(fs::read_to_string(ledger.path()).unwrap(), "# header\n");
    }

    #[test]
    fn delete_missing_id_leaves_file_intact() {
        let original = "0001\tAna\t09171111111\n";
        let (_dir, mut ledger) = ledger_with(original);
        let result = ledger.delete(5);

        assert!(matches!(result, Err(PhonebookError::NotFound(RecordLookup::Id(5)))));
        assert_eq!(fs::read_to_string(ledger.path()).unwrap(), original);
    }

    #[test]
    fn entry_display_round_trips_through_parse() {
        let entry = LedgerEntry {
            id: 42,
            name: "Ana".into(),
            number: "09171111111".into(),
        };
        assert_eq!(entry.to_string(), "0042\tAna\t09171111111");
        assert_eq!(LedgerEntry::parse(&entry.to_string()), Some(entry));
    }

    #[test]
    fn parse_rejects_non_numeric_ids() {
        assert!(LedgerEntry::parse("abc\tAna\t0917").is_none());
        assert!(LedgerEntry::parse("-1\tAna\t0917").is_none());
        assert!(LedgerEntry::parse("0001\tAna").is_none());
    }
}
