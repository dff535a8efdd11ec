//! Engine configuration
//!
//! All timing constants are named, overridable settings rather than
//! inline magic numbers. Loaded from TOML; every field has a default so
//! an empty file is a valid config.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::level::BadgeDef;
use crate::queue::QueueConfig;

/// Invalid configuration values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("queue.max_buffered must be at least 1")]
    ZeroBufferCap,
    #[error("badge catalog must not be empty when overridden")]
    EmptyBadgeCatalog,
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub queue: QueueSettings,

    /// Replacement badge catalog; omit to use the built-in set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<BadgeDef>>,
}

/// Queue timing settings, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueSettings {
    /// How long arrivals merge into an open buffering interval
    #[serde(default = "default_merge_window_ms")]
    pub merge_window_ms: u64,

    /// How long a merged event stays current
    #[serde(default = "default_present_ms")]
    pub present_ms: u64,

    /// Pause between consecutive presentations
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,

    /// Cap on distinct buffered events
    #[serde(default = "default_max_buffered")]
    pub max_buffered: usize,
}

fn default_merge_window_ms() -> u64 {
    800
}

fn default_present_ms() -> u64 {
    2200
}

fn default_grace_ms() -> u64 {
    100
}

fn default_max_buffered() -> usize {
    10
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            merge_window_ms: default_merge_window_ms(),
            present_ms: default_present_ms(),
            grace_ms: default_grace_ms(),
            max_buffered: default_max_buffered(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue.max_buffered == 0 {
            return Err(ConfigError::ZeroBufferCap);
        }
        if self.badges.as_ref().is_some_and(|b| b.is_empty()) {
            return Err(ConfigError::EmptyBadgeCatalog);
        }
        Ok(())
    }

    /// Queue configuration derived from the millisecond settings
    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig {
            merge_window: Duration::from_millis(self.queue.merge_window_ms),
            present_duration: Duration::from_millis(self.queue.present_ms),
            grace_gap: Duration::from_millis(self.queue.grace_ms),
            max_buffered: self.queue.max_buffered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        let queue = config.queue_config();
        assert_eq!(queue.merge_window, Duration::from_millis(800));
        assert_eq!(queue.present_duration, Duration::from_millis(2200));
        assert_eq!(queue.grace_gap, Duration::from_millis(100));
        assert_eq!(queue.max_buffered, 10);
        assert!(config.badges.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config: EngineConfig = toml::from_str(
            r#"
            [queue]
            merge_window_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.queue.merge_window_ms, 500);
        assert_eq!(config.queue.present_ms, 2200);
    }

    #[test]
    fn test_zero_buffer_cap_rejected() {
        let config: EngineConfig = toml::from_str(
            r#"
            [queue]
            max_buffered = 0
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroBufferCap)
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [queue]
            present_ms = 3000

            [[badges]]
            id = "solo"
            name = "Solo"
            level = 3
            emoji = "X"
            "#
        )
        .unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.queue.present_ms, 3000);
        assert_eq!(config.badges.unwrap().len(), 1);
    }

    #[test]
    fn test_from_file_missing() {
        let err = EngineConfig::from_file(Path::new("/nonexistent/xp.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
