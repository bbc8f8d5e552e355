use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn settings_file(json: &str) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn amounts_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file.reopen()?);

    wtr.write_record(["amount", "currency"])?;
    for (amount, currency) in rows {
        wtr.write_record([amount, currency])?;
    }

    wtr.flush()?;
    Ok(file)
}
