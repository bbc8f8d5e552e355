use super::currency::{CurrencyCode, CurrencyPosition};
use super::separators::Separators;
use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// Store-wide display settings read by every formatting operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SettingsRecord", into = "SettingsRecord")]
pub struct StoreSettings {
    pub currency: CurrencyCode,
    pub currency_position: CurrencyPosition,
    pub separators: Separators,
}

impl StoreSettings {
    pub fn new(
        currency: CurrencyCode,
        currency_position: CurrencyPosition,
        separators: Separators,
    ) -> Self {
        Self {
            currency,
            currency_position,
            separators,
        }
    }
}

/// On-disk shape of the settings, with separators stored as strings so an
/// empty thousands separator can be expressed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct SettingsRecord {
    currency: CurrencyCode,
    currency_position: CurrencyPosition,
    thousands_separator: String,
    decimal_separator: String,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self::from(StoreSettings::default())
    }
}

impl TryFrom<SettingsRecord> for StoreSettings {
    type Error = FormatError;

    fn try_from(record: SettingsRecord) -> Result<Self, Self::Error> {
        let thousands = parse_separator(&record.thousands_separator, "thousands_separator")?;
        let decimal = parse_separator(&record.decimal_separator, "decimal_separator")?
            .ok_or_else(|| {
                FormatError::InvalidSeparators("decimal_separator cannot be empty".to_string())
            })?;

        Ok(Self {
            currency: record.currency,
            currency_position: record.currency_position,
            separators: Separators::new(thousands, decimal)?,
        })
    }
}

impl From<StoreSettings> for SettingsRecord {
    fn from(settings: StoreSettings) -> Self {
        Self {
            currency: settings.currency,
            currency_position: settings.currency_position,
            thousands_separator: settings
                .separators
                .thousands()
                .map(String::from)
                .unwrap_or_default(),
            decimal_separator: settings.separators.decimal().to_string(),
        }
    }
}

/// Reads a separator given as a string of at most one character.
pub fn parse_separator(value: &str, field: &str) -> Result<Option<char>, FormatError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(FormatError::InvalidSeparators(format!(
            "{field} must be a single character, got {value:?}"
        ))),
    }
}
