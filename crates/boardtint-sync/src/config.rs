//! Sync configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controller configuration
///
/// Defaults match the host's English display strings; deployments running
/// the host in another display language override the field name and empty
/// sentinel here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Display name of the labels field on company-managed cards
    pub labels_field_name: String,
    /// Tooltip value meaning "no labels"
    pub labels_empty_value: String,
    /// Interval between board-root existence probes
    pub poll_interval: Duration,
}

impl SyncConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With the labels field display name
    #[inline]
    #[must_use]
    pub fn with_labels_field_name(mut self, name: impl Into<String>) -> Self {
        self.labels_field_name = name.into();
        self
    }

    /// With the empty-sentinel display value
    #[inline]
    #[must_use]
    pub fn with_labels_empty_value(mut self, value: impl Into<String>) -> Self {
        self.labels_empty_value = value.into();
        self
    }

    /// With the board-root poll interval
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            labels_field_name: "Labels".to_string(),
            labels_empty_value: "None".to_string(),
            poll_interval: Duration::from_millis(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_host_strings() {
        let config = SyncConfig::new();
        assert_eq!(config.labels_field_name, "Labels");
        assert_eq!(config.labels_empty_value, "None");
        assert_eq!(config.poll_interval, Duration::from_millis(100));
    }

    #[test]
    fn builders_override_fields() {
        let config = SyncConfig::new()
            .with_labels_field_name("Etiketten")
            .with_labels_empty_value("Keine")
            .with_poll_interval(Duration::from_millis(5));
        assert_eq!(config.labels_field_name, "Etiketten");
        assert_eq!(config.labels_empty_value, "Keine");
        assert_eq!(config.poll_interval, Duration::from_millis(5));
    }

    #[test]
    fn serde_round_trip() {
        let config = SyncConfig::new().with_labels_field_name("Étiquettes");
        let json = serde_json::to_string(&config).unwrap();
        let decoded: SyncConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, decoded);
    }
}
