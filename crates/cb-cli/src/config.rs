//! CLI configuration, loaded from TOML.

use cb_nlu::{AnnotatorConfig, LexiconConfig};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Top-level configuration for `covbot-nlu`.
#[derive(Debug, Clone, Deserialize)]
pub struct CovbotConfig {
    /// Annotation service settings.
    #[serde(default)]
    pub annotator: AnnotatorConfig,
    /// Extra trigger words merged into the built-in lexicon.
    #[serde(default)]
    pub lexicon: LexiconConfig,
    /// Fixed "today" for relative dates. Defaults to the current UTC date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Emit logs as JSON (otherwise human-readable).
    #[serde(default = "default_log_json")]
    pub log_json: bool,
    /// Maximum queries classified at once in batch mode.
    #[serde(default = "default_batch_workers")]
    pub batch_workers: usize,
}

fn default_log_json() -> bool {
    true
}
fn default_batch_workers() -> usize {
    4
}

impl Default for CovbotConfig {
    fn default() -> Self {
        Self {
            annotator: AnnotatorConfig::default(),
            lexicon: LexiconConfig::default(),
            reference_date: None,
            log_json: default_log_json(),
            batch_workers: default_batch_workers(),
        }
    }
}

impl CovbotConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The date relative expressions are resolved against.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
