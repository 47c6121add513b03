//! Job configuration: YAML schema, defaults, loading
//!
//! `id`, `url`, `selectors` and `output` are mandatory; everything else
//! carries an engine-supplied default. Defaults that derive from other
//! fields (display name, base URL, artifact filenames) are filled in
//! right after parsing so the rest of the engine never re-derives them.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;
use crate::extract::{SelectorEntry, StrategyKind};

/// One job's complete configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// Unique job key; drives default filenames and log context.
    pub id: String,
    /// Display name, defaults to the id.
    #[serde(default)]
    pub name: String,
    /// Page the job scrapes.
    pub url: String,
    /// Base for relative links, defaults to the page URL.
    #[serde(default)]
    pub base_url: String,
    /// Cron expression consumed by the external scheduler, not by us.
    #[serde(default = "default_schedule")]
    pub schedule: String,
    /// Whether the scheduler should fire the job once at startup.
    #[serde(default = "default_run_on_start")]
    pub run_on_start: bool,
    #[serde(default, rename = "type")]
    pub strategy: StrategyKind,
    pub selectors: SelectorMap,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub post_process: PostProcessConfig,
    pub output: OutputConfig,
}

/// Field-name to field-descriptor mapping for one job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectorMap {
    pub container: Option<String>,
    pub title: Option<SelectorEntry>,
    pub description: Option<SelectorEntry>,
    pub image_url: Option<SelectorEntry>,
    pub call_to_action_url: Option<SelectorEntry>,
    /// Per-category heading, nested strategy only.
    pub category_title: Option<SelectorEntry>,
    /// Inner item rules, nested strategy only.
    pub items: Option<ItemRules>,
}

/// Rules for the inner items of a nested-strategy category block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemRules {
    pub selector: String,
    pub image_url: Option<SelectorEntry>,
    pub call_to_action_url: Option<SelectorEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub strategy: SelectionStrategy,
}

/// How the single-card artifact picks its card.
///
/// Unrecognized values parse into `Unknown`, which selects like
/// `first`; a typo in a config degrades the pick instead of killing
/// the job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SelectionStrategy {
    First,
    #[default]
    Random,
    Latest,
    Unknown,
}

impl From<String> for SelectionStrategy {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "first" => SelectionStrategy::First,
            "random" => SelectionStrategy::Random,
            "latest" => SelectionStrategy::Latest,
            _ => SelectionStrategy::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostProcessConfig {
    /// Template with `{title}`, `{description}` and `{count}` placeholders.
    pub single_description_template: Option<String>,
}

/// Output directives; the key itself is mandatory, its flags default off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub all: ArtifactConfig,
    pub single: SingleArtifactConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub enabled: bool,
    /// Defaults to `{id}-alle.json` at load time.
    pub filename: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SingleArtifactConfig {
    pub enabled: bool,
    /// Defaults to `{id}.json` at load time.
    pub filename: String,
    pub title_override: Option<String>,
    pub cta_override: Option<String>,
}

impl JobConfig {
    /// Load and default-fill a job config from a YAML file.
    pub fn load(path: &Path) -> Result<JobConfig, EngineError> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| EngineError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a job config from YAML text.
    pub fn from_yaml(text: &str) -> Result<JobConfig, serde_yaml::Error> {
        let mut config: JobConfig = serde_yaml::from_str(text)?;
        config.apply_defaults();
        Ok(config)
    }

    fn apply_defaults(&mut self) {
        if self.name.is_empty() {
            self.name = self.id.clone();
        }
        if self.base_url.is_empty() {
            self.base_url = self.url.clone();
        }
        if self.output.all.filename.is_empty() {
            self.output.all.filename = format!("{}-alle.json", self.id);
        }
        if self.output.single.filename.is_empty() {
            self.output.single.filename = format!("{}.json", self.id);
        }
    }
}

fn default_schedule() -> String {
    "0 9 * * *".to_string()
}

fn default_run_on_start() -> bool {
    true
}
