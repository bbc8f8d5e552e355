use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A three-letter uppercase currency identifier (ISO 4217-like).
///
/// Parsing trims and uppercases the input. The legacy `RIAL` code used by
/// older stores is accepted and normalized to `IRR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Result<Self, FormatError> {
        let code = code.trim().to_ascii_uppercase();
        if code == "RIAL" {
            return Ok(Self("IRR".to_string()));
        }
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code))
        } else {
            Err(FormatError::InvalidCurrency(code))
        }
    }

    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Currencies that are never displayed with fractional digits.
    pub fn is_zero_decimal(&self) -> bool {
        ZERO_DECIMAL_CURRENCIES.contains(&self.as_str())
    }

    /// The display symbol, or the code itself for currencies without one.
    pub fn symbol(&self) -> &str {
        CATALOGUE
            .iter()
            .find(|info| info.code == self.as_str())
            .and_then(|info| info.symbol)
            .unwrap_or(self.as_str())
    }

    /// Whether the symbol (rather than the code) is shown for `position`.
    pub fn uses_symbol(&self, position: CurrencyPosition) -> bool {
        let list: &[&str] = match position {
            CurrencyPosition::Before => SYMBOL_BEFORE,
            CurrencyPosition::After => SYMBOL_AFTER,
        };
        list.contains(&self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl FromStr for CurrencyCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    #[default]
    Before,
    After,
}

impl FromStr for CurrencyPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(format!("unknown currency position {other:?}")),
        }
    }
}

impl fmt::Display for CurrencyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

pub const ZERO_DECIMAL_CURRENCIES: &[&str] = &["JPY", "TWD", "HUF", "IRR"];

const SYMBOL_BEFORE: &[&str] = &[
    "GBP", "BRL", "EUR", "USD", "AUD", "CAD", "HKD", "MXN", "NZD", "SGD", "JPY",
];

// NZD falls back to the code when placed after the amount.
const SYMBOL_AFTER: &[&str] = &[
    "GBP", "BRL", "EUR", "USD", "AUD", "CAD", "HKD", "MXN", "SGD", "JPY",
];

/// A supported store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: Option<&'static str>,
}

pub const CATALOGUE: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", name: "US Dollars", symbol: Some("$") },
    CurrencyInfo { code: "EUR", name: "Euros", symbol: Some("€") },
    CurrencyInfo { code: "GBP", name: "Pound Sterling", symbol: Some("£") },
    CurrencyInfo { code: "AUD", name: "Australian Dollars", symbol: Some("$") },
    CurrencyInfo { code: "BRL", name: "Brazilian Real", symbol: Some("R$") },
    CurrencyInfo { code: "CAD", name: "Canadian Dollars", symbol: Some("$") },
    CurrencyInfo { code: "CZK", name: "Czech Koruna", symbol: None },
    CurrencyInfo { code: "DKK", name: "Danish Krone", symbol: None },
    CurrencyInfo { code: "HKD", name: "Hong Kong Dollar", symbol: Some("$") },
    CurrencyInfo { code: "HUF", name: "Hungarian Forint", symbol: None },
    CurrencyInfo { code: "ILS", name: "Israeli Shekel", symbol: None },
    CurrencyInfo { code: "JPY", name: "Japanese Yen", symbol: Some("¥") },
    CurrencyInfo { code: "MYR", name: "Malaysian Ringgits", symbol: None },
    CurrencyInfo { code: "MXN", name: "Mexican Peso", symbol: Some("$") },
    CurrencyInfo { code: "NZD", name: "New Zealand Dollar", symbol: Some("$") },
    CurrencyInfo { code: "NOK", name: "Norwegian Krone", symbol: None },
    CurrencyInfo { code: "PHP", name: "Philippine Pesos", symbol: None },
    CurrencyInfo { code: "PLN", name: "Polish Zloty", symbol: None },
    CurrencyInfo { code: "SGD", name: "Singapore Dollar", symbol: Some("$") },
    CurrencyInfo { code: "SEK", name: "Swedish Krona", symbol: None },
    CurrencyInfo { code: "CHF", name: "Swiss Franc", symbol: None },
    CurrencyInfo { code: "TWD", name: "Taiwan New Dollars", symbol: None },
    CurrencyInfo { code: "THB", name: "Thai Baht", symbol: None },
    CurrencyInfo { code: "INR", name: "Indian Rupee", symbol: None },
    CurrencyInfo { code: "TRY", name: "Turkish Lira", symbol: None },
    CurrencyInfo { code: "IRR", name: "Iranian Rial", symbol: None },
    CurrencyInfo { code: "RUB", name: "Russian Rubles", symbol: None },
    CurrencyInfo { code: "AOA", name: "Angolan Kwanza", symbol: Some("Kz") },
];
