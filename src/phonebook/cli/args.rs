use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "Console phone book with JSON and text-ledger storage", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding database.json, dataset.txt and config.json
    /// (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive phone book saved as JSON on exit (the default)
    #[command(alias = "pb")]
    Book,

    /// Interactive call ledger written to a tab-delimited text file
    #[command(alias = "txt")]
    Ledger,

    /// Get or set configuration
    Config {
        /// Configuration key (region, data-file, ledger-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_book() {
        let cli = Cli::try_parse_from(["phonebook"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["phonebook", "ledger", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Ledger)));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn config_with_key_and_value() {
        let cli = Cli::try_parse_from(["phonebook", "config", "region", "US"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("region"));
                assert_eq!(value.as_deref(), Some("US"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
