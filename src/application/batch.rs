use super::formatter::AmountFormatter;
use crate::error::Result;
use crate::interfaces::csv::amount_reader::{AmountReader, AmountRow};
use crate::interfaces::csv::amount_writer::{AmountWriter, FormattedRow};
use std::io::{Read, Write};
use tracing::debug;

/// Counts of a finished batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub formatted: usize,
    pub rejected: usize,
}

/// Sanitizes, formats and decorates one row.
pub fn format_row(formatter: &AmountFormatter, row: &AmountRow) -> FormattedRow {
    let currency = row
        .currency
        .as_ref()
        .unwrap_or(&formatter.settings().currency);
    let sanitized = formatter.sanitize_amount_in(&row.amount, Some(currency));
    let formatted = formatter.format_amount_in(&sanitized, true, Some(currency));
    let display = formatter.currency_filter(&formatted, Some(currency));

    FormattedRow {
        amount: row.amount.clone(),
        currency: currency.to_string(),
        sanitized,
        formatted,
        display,
    }
}

/// Streams rows from `input` to `output`.
///
/// Rows that cannot be read are reported on stderr and skipped; the run only
/// fails when the output cannot be written.
pub fn run_batch<R: Read, W: Write>(
    formatter: &AmountFormatter,
    input: R,
    output: W,
) -> Result<BatchSummary> {
    let reader = AmountReader::new(input);
    let mut writer = AmountWriter::new(output);
    let mut summary = BatchSummary::default();

    for row in reader.rows() {
        match row {
            Ok(row) => {
                writer.write_row(&format_row(formatter, &row))?;
                summary.formatted += 1;
            }
            Err(e) => {
                debug!(error = %e, "Skipping unreadable row");
                eprintln!("Error reading row: {}", e);
                summary.rejected += 1;
            }
        }
    }

    writer.flush()?;
    debug!(?summary, "Batch finished");
    Ok(summary)
}
