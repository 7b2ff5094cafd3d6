use crate::error::{PhonebookError, Result};
use crate::validation::{parse_region, DEFAULT_REGION};
use phonenumber::country;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "database.json";
const DEFAULT_LEDGER_FILE: &str = "dataset.txt";

/// Configuration for the phone book, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Two-letter region code used to validate numbers (e.g. "PH", "US")
    #[serde(default = "default_region")]
    pub region: String,

    /// JSON phone book file, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Text ledger file, relative to the data directory
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
}

fn default_region() -> String {
    format!("{:?}", DEFAULT_REGION)
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_ledger_file() -> String {
    DEFAULT_LEDGER_FILE.to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            data_file: default_data_file(),
            ledger_file: default_ledger_file(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PhonebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhonebookError::Serialization)?;
        fs::write(config_path, content).map_err(PhonebookError::Io)?;
        Ok(())
    }

    /// Region as a phonenumber id; falls back to the default for unknown codes.
    pub fn region_id(&self) -> country::Id {
        parse_region(&self.region).unwrap_or_else(|| {
            log::warn!(
                "event=config_region_unknown region={} fallback={:?}",
                self.region,
                DEFAULT_REGION
            );
            DEFAULT_REGION
        })
    }

    /// Set the region (normalized to upper case). Unknown codes are rejected.
    pub fn set_region(&mut self, code: &str) -> Result<()> {
        let id = parse_region(code)
            .ok_or_else(|| PhonebookError::Store(format!("Unknown region code: {}", code.trim())))?;
        self.region = format!("{:?}", id);
        Ok(())
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn ledger_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.ledger_file)
    }
}
