use super::record::{ApplicationRecord, CorpusError};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Load one survey record file.
pub fn load_record(path: &Path) -> Result<ApplicationRecord, CorpusError> {
    let content = fs::read_to_string(path)?;
    ApplicationRecord::from_json(&content, path)
}

/// Load every `.json` record under `dir`. Malformed files are logged and
/// skipped so one bad record cannot take down the rest of the corpus;
/// everything else is an error for the caller.
pub fn load_corpus(dir: &Path) -> Result<Vec<ApplicationRecord>> {
    if !dir.is_dir() {
        anyhow::bail!("corpus path is not a directory: {}", dir.display());
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk corpus directory {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            debug!("Skipping non-record file {}", path.display());
            continue;
        }

        match load_record(path) {
            Ok(record) => {
                debug!("Loaded record {} ({} fields)", record.name(), record.field_count());
                records.push(record);
            }
            Err(err) => {
                warn!("Skipping malformed record {}: {}", path.display(), err);
            }
        }
    }

    Ok(records)
}
