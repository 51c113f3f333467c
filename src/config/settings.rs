use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::{
    foundation::error::{RevealError, RevealResult},
    store::property::{PropertyStore, PropertyValue},
};

/// Timing and limits for the feed scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Minimum gap between two tick-driven appends, in milliseconds (strictly greater than).
    pub min_update_interval_ms: u64,
    /// Duration of the eviction transition, in milliseconds.
    pub eviction_ms: u64,
    /// Upper bound on rows appended while pre-filling the viewport.
    pub max_prefill_rows: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            min_update_interval_ms: 4_000,
            eviction_ms: 1_000,
            max_prefill_rows: 256,
        }
    }
}

impl FeedConfig {
    /// Minimum update interval as a [`Duration`].
    pub fn min_update_interval(&self) -> Duration {
        Duration::from_millis(self.min_update_interval_ms)
    }

    /// Eviction transition length as a [`Duration`].
    pub fn eviction_duration(&self) -> Duration {
        Duration::from_millis(self.eviction_ms)
    }

    /// Reject settings the scheduler cannot run with.
    pub fn validate(&self) -> RevealResult<()> {
        if self.eviction_ms == 0 {
            return Err(RevealError::validation("feed.eviction_ms must be > 0"));
        }
        if self.max_prefill_rows == 0 {
            return Err(RevealError::validation("feed.max_prefill_rows must be > 0"));
        }
        Ok(())
    }
}

/// Startup configuration: the initial facts plus optional token tracking and feed timing.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealConfig {
    /// Initial fact name -> value mapping.
    pub properties: BTreeMap<String, PropertyValue>,
    /// Token whose transfers feed the ownership facts, if tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<u64>,
    /// Scheduler settings.
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ConfigDoc {
    Full(RevealConfig),
    Bare(BTreeMap<String, PropertyValue>),
}

impl RevealConfig {
    /// Build from a bare property map with default feed settings.
    pub fn from_properties(properties: BTreeMap<String, PropertyValue>) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    /// Parse either a full config document or a bare `{name: value}` map.
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let doc: ConfigDoc = serde_json::from_str(s)?;
        Ok(match doc {
            ConfigDoc::Full(cfg) => cfg,
            ConfigDoc::Bare(properties) => Self::from_properties(properties),
        })
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> RevealResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            RevealError::Other(anyhow::Error::new(e).context(format!(
                "read config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Reject configurations the feed cannot run with.
    pub fn validate(&self) -> RevealResult<()> {
        if self.properties.is_empty() {
            return Err(RevealError::validation(
                "properties must contain at least one fact",
            ));
        }
        if self.properties.keys().any(|k| k.trim().is_empty()) {
            return Err(RevealError::validation("fact names must be non-empty"));
        }
        self.feed.validate()
    }

    /// Build the property store holding the initial facts.
    pub fn store(&self) -> PropertyStore {
        PropertyStore::new(self.properties.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
