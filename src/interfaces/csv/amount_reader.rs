use crate::domain::currency::CurrencyCode;
use crate::error::{FormatError, Result};
use serde::Deserialize;
use std::io::Read;

/// One input line of a batch: an amount and, optionally, the currency it is
/// priced in. Rows without a currency use the store currency.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct AmountRow {
    pub amount: String,
    #[serde(default)]
    pub currency: Option<CurrencyCode>,
}

/// Reads amount rows from a CSV source.
///
/// Headers are required. Only surrounding whitespace is trimmed, so amounts
/// grouped with spaces keep their inner separators.
pub struct AmountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AmountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows, one `Result` per record.
    pub fn rows(self) -> impl Iterator<Item = Result<AmountRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FormatError::from))
    }
}
