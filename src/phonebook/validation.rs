//! Field validation for phone book records.
//!
//! Valid names:
//! - Letters, whitespace, apostrophes (`'`) and hyphens (`-`)
//! - At least two characters
//!
//! Valid addresses:
//! - Letters, digits, whitespace, commas, periods, apostrophes and hyphens
//! - At least two characters
//!
//! Valid numbers:
//! - Parse as a phone number for the configured region (default `PH`)
//! - Pass libphonenumber's length and prefix rules for that region
//!
//! Numbers are stored and compared in normalized form, see [`normalize_phone_number`].

use once_cell::sync::Lazy;
use phonenumber::country;
use regex::Regex;

/// Region used when no configuration overrides it.
pub const DEFAULT_REGION: country::Id = country::Id::PH;

const MIN_FIELD_CHARS: usize = 2;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s'-]+$").expect("name pattern is valid"));

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s,.'-]+$").expect("address pattern is valid"));

/// Validates a contact name.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_name;
///
/// assert!(validate_name("O'Brien-Smith"));
/// assert!(validate_name("Mary Ann"));
///
/// assert!(!validate_name("A"));
/// assert!(!validate_name("John123"));
/// assert!(!validate_name(""));
/// ```
pub fn validate_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name) && name.chars().count() >= MIN_FIELD_CHARS
}

/// Validates a postal address.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_address;
///
/// assert!(validate_address("123 Main St., Apt 4"));
/// assert!(!validate_address(""));
/// assert!(!validate_address("Unit #5"));
/// ```
pub fn validate_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address) && address.chars().count() >= MIN_FIELD_CHARS
}

/// Validates a phone number against the default region.
pub fn validate_phone_number(number: &str) -> bool {
    validate_phone_number_in(number, DEFAULT_REGION)
}

/// Validates a phone number against `region`.
///
/// Parse failures count as invalid; nothing is propagated to the caller.
pub fn validate_phone_number_in(number: &str, region: country::Id) -> bool {
    match phonenumber::parse(Some(region), number) {
        Ok(parsed) => phonenumber::is_valid(&parsed),
        Err(_) => false,
    }
}

/// Strips spaces and hyphens from a phone number.
///
/// ```
/// use phonebook::validation::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("09 12-345 6789"), "09123456789");
/// ```
pub fn normalize_phone_number(number: &str) -> String {
    number.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

/// Looks up a two-letter region code such as `"PH"` or `"us"`.
pub fn parse_region(code: &str) -> Option<country::Id> {
    code.trim().to_ascii_uppercase().parse().ok()
}

/// Which field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidName,
    InvalidNumber,
    InvalidAddress,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidName => write!(f, "Invalid name"),
            ValidationError::InvalidNumber => write!(f, "Invalid number"),
            ValidationError::InvalidAddress => write!(f, "Invalid address"),
        }
    }
}

impl std::error::Error for ValidationError {}
