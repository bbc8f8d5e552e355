use crate::domain::settings::StoreSettings;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Loads store settings from a JSON document.
///
/// Missing keys fall back to their defaults; unknown keys are ignored so a
/// full store configuration can be passed as-is.
pub fn load_settings<R: Read>(source: R) -> Result<StoreSettings> {
    let settings = serde_json::from_reader(source)?;
    Ok(settings)
}

/// Loads store settings from the JSON file at `path`.
pub fn load_settings_file(path: &Path) -> Result<StoreSettings> {
    let file = File::open(path)?;
    let settings = load_settings(BufReader::new(file))?;
    debug!(path = %path.display(), ?settings, "Loaded store settings");
    Ok(settings)
}
