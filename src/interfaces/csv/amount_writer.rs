use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One output line of a batch.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FormattedRow {
    pub amount: String,
    pub currency: String,
    pub sanitized: String,
    pub formatted: String,
    pub display: String,
}

/// Writes formatted rows as CSV, header first.
pub struct AmountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AmountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_row(&mut self, row: &FormattedRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
