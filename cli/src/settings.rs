use std::path::Path;

use anyhow::Context;
use sapper_core::{CellCount, Coord, GameConfig};
use serde::Deserialize;

/// Contents of the optional TOML settings file.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub game: GameSettings,
}

/// Any field left out falls back to the next source.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Layers defaults, then the settings file, then command-line overrides.
pub fn resolve(file: Option<&GameSettings>, overrides: &GameSettings) -> anyhow::Result<GameConfig> {
    let defaults = GameConfig::default();
    let pick = |field: fn(&GameSettings) -> Option<u16>, default: u16| {
        field(overrides)
            .or_else(|| file.and_then(field))
            .unwrap_or(default)
    };

    let width = pick(|s| s.width.map(u16::from), defaults.width.into());
    let height = pick(|s| s.height.map(u16::from), defaults.height.into());
    let mines = pick(|s| s.mines, defaults.mines);

    // width and height come from `Coord` values, so they fit back
    let config = GameConfig::new(width as Coord, height as Coord, mines)
        .context("Unusable game configuration")?;
    log::debug!("Using {config:?}");
    Ok(config)
}
