//! 游戏配置：assets/config.toml

use bevy::prelude::*;
use serde_derive::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 全局配置（Resource）
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// 物品表路径，相对 assets/
    pub catalog_path: String,
    /// 隐藏窗口，只用 CLI 交互
    pub headless: bool,
    pub player: PlayerConfig,
    /// 场景中可拾取的物品
    pub pickups: Vec<PickupConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub health: u64,
    pub experience: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickupConfig {
    pub item: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog_path: "data/items.ron".into(),
            headless: false,
            player: PlayerConfig::default(),
            pickups: Vec::new(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            health: 50,
            experience: 0,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn parses_player_and_pickups() {
        let config = GameConfig::from_toml_str(
            r#"
            headless = true

            [player]
            health = 80

            [[pickups]]
            item = "RingOfHealth"
            x = 10.0
            y = -4.5

            [[pickups]]
            item = "BookOfXP"
            "#,
        )
        .unwrap();

        assert!(config.headless);
        assert_eq!(config.catalog_path, "data/items.ron");
        assert_eq!(
            config.player,
            PlayerConfig {
                health: 80,
                experience: 0
            }
        );
        assert_eq!(
            config.pickups,
            vec![
                PickupConfig {
                    item: "RingOfHealth".into(),
                    x: 10.0,
                    y: -4.5
                },
                PickupConfig {
                    item: "BookOfXP".into(),
                    x: 0.0,
                    y: 0.0
                },
            ]
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = GameConfig::from_toml_str("capacity = 30").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
