use crate::classifier::MatchMode;
use crate::report::ReportFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional settings file. CLI flags win over anything set here.
///
/// ```toml
/// match-mode = "word-boundary"
/// format = "flat"
/// audit = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(rename = "match-mode")]
    pub match_mode: Option<String>,
    pub format: Option<String>,
    pub audit: Option<bool>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn match_mode(&self) -> Result<Option<MatchMode>> {
        self.match_mode
            .as_deref()
            .map(|raw| {
                MatchMode::from_str(raw)
                    .with_context(|| format!("unknown match-mode in config: {}", raw))
            })
            .transpose()
    }

    pub fn format(&self) -> Result<Option<ReportFormat>> {
        self.format
            .as_deref()
            .map(|raw| {
                ReportFormat::from_str(raw)
                    .with_context(|| format!("unknown report format in config: {}", raw))
            })
            .transpose()
    }
}
