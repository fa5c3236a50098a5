use crate::constants::GROUP_COUNT;
use crate::effects::beam::BeamConfig;
use crate::effects::layout::GroupLayout;
use crate::scene::SceneConfig;
use crate::scheduler::logic::RestartCadence;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All tuning values of the demo. Every field has a default, so a config
/// file only needs to list what it overrides.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub cadence: RestartCadence,
    pub groups: GroupConfig,
    pub beam: BeamConfig,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    pub count: usize,
    pub visible: bool,
    pub layout: GroupLayout,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            count: GROUP_COUNT,
            visible: true,
            layout: GroupLayout::default(),
        }
    }
}

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses `content` on top of the defaults. Tables are merged key by key at
    /// every depth, so `[beam.cone]` with only `angle` keeps the default radius.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let overrides: toml::Table = toml::from_str(content)?;
        let mut merged = toml::Table::try_from(Self::default())?;
        merge_tables(&mut merged, overrides);

        let config: DemoConfig = merged.try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads the config at `path`, falling back to the defaults when the file
    /// is missing or unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                bevy::log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                bevy::log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                bevy::log::warn!("Ignoring {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cadence.validate().map_err(ConfigError::Invalid)?;
        self.beam.validate().map_err(ConfigError::Invalid)?;
        self.groups.layout.validate().map_err(ConfigError::Invalid)?;
        if self.groups.count == 0 {
            return Err(ConfigError::Invalid("groups.count must be at least 1".into()));
        }
        Ok(())
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(table)) => {
                merge_tables(base_table, table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_demo_tuning() {
        let config = DemoConfig::default();

        assert_eq!(config.cadence.ticks_per_second, 5.0);
        assert_eq!(config.cadence.cycle_seconds, 2.0);
        assert_eq!(config.groups.count, 1);
        assert_eq!(config.beam.burst_count, BEAM_BURST_COUNT);
        assert_eq!(config.beam.life.min, 0.8);
        assert_eq!(config.beam.life.max, 1.4);
        assert!(!config.beam.looping);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip_keeps_defaults() {
        let config = DemoConfig::default();
        let text = config.to_toml().unwrap();

        let parsed = DemoConfig::from_toml(&text).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_overrides_only_listed_fields() {
        let text = r#"
            [cadence]
            ticks_per_second = 10.0

            [groups]
            count = 4
        "#;

        let config = DemoConfig::from_toml(text).unwrap();

        assert_eq!(config.cadence.ticks_per_second, 10.0);
        assert_eq!(config.cadence.cycle_seconds, RESTART_CYCLE_SECONDS);
        assert_eq!(config.groups.count, 4);
        assert_eq!(config.beam, BeamConfig::default());
    }

    #[test]
    fn test_partial_nested_tables_keep_sibling_defaults() {
        let text = r#"
            [groups]
            count = 4

            [groups.layout]
            spacing = 3.0

            [beam.cone]
            angle = 0.5

            [beam.life]
            max = 2.0
        "#;

        let config = DemoConfig::from_toml(text).unwrap();

        assert_eq!(config.groups.count, 4);
        assert_eq!(
            config.groups.layout,
            GroupLayout::Grid {
                columns: GRID_COLUMNS,
                spacing: 3.0
            }
        );
        assert_eq!(config.beam.cone.angle, 0.5);
        assert_eq!(config.beam.cone.radius, BEAM_CONE_RADIUS);
        assert_eq!(config.beam.cone.height, BEAM_CONE_HEIGHT);
        assert_eq!(config.beam.life.min, BEAM_LIFE.0);
        assert_eq!(config.beam.life.max, 2.0);
        assert_eq!(config.beam.speed, BeamConfig::default().speed);
    }

    #[test]
    fn test_layout_kind_can_be_switched_without_grid_keys() {
        let config = DemoConfig::from_toml("[groups.layout]\nkind = \"origin\"").unwrap();

        assert_eq!(config.groups.layout, GroupLayout::Origin);
    }

    #[rstest]
    #[case("[cadence]\nticks_per_second = 0.0")]
    #[case("[cadence]\ncycle_seconds = -1.0")]
    #[case("[groups]\ncount = 0")]
    #[case("[beam.life]\nmin = 2.0\nmax = 1.0")]
    #[case("[beam.speed]\nmin = 15.0\nmax = 10.0")]
    fn test_invalid_values_are_rejected(#[case] text: &str) {
        let result = DemoConfig::from_toml(text);

        assert!(matches!(result, Err(ConfigError::Invalid(_))), "got {result:?}");
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = DemoConfig::from_toml("[cadence\nticks_per_second = ");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/sparks_config.toml");

        let config = DemoConfig::load_from_file(path).unwrap();

        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = DemoConfig::load_or_default("definitely/not/here/sparks_config.toml");

        assert_eq!(config, DemoConfig::default());
    }
}
