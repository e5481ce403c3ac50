use core::num::NonZeroU32;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::*;

/// Fixed board presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Beginner => BoardConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => BoardConfig::new_unchecked(16, 16, 40),
            Self::Expert => BoardConfig::new_unchecked(30, 16, 99),
        }
    }
}

/// Inclusive bounds offered by one menu slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRange {
    pub min: usize,
    pub max: usize,
}

impl MenuRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: usize) -> usize {
        value.clamp(self.min, self.max)
    }

    fn validate(&self, name: &'static str) -> core::result::Result<(), SettingsError> {
        if self.min > self.max {
            Err(SettingsError::EmptyRange(name))
        } else {
            Ok(())
        }
    }
}

/// Game settings, usually read from a TOML file. Missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board preselected in the menu.
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,

    pub width_range: MenuRange,
    pub height_range: MenuRange,
    pub mines_range: MenuRange,

    /// Edge length of a tile in pixels.
    pub tile_size: NonZeroU32,
    /// Screen position of the board's top-left corner.
    pub board_offset: (i32, i32),
    pub frame_rate: u32,
    /// Largest number of seconds the timer displays.
    pub time_cap: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            mines: 40,
            width_range: MenuRange::new(10, 40),
            height_range: MenuRange::new(10, 20),
            mines_range: MenuRange::new(5, 80),
            tile_size: NonZeroU32::new(32).unwrap_or(NonZeroU32::MIN),
            board_offset: (0, 0),
            frame_rate: 60,
            time_cap: 9999,
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> core::result::Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> core::result::Result<Self, SettingsError> {
        let path = path.as_ref();
        log::debug!("Loading settings from {}", path.display());
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> core::result::Result<(), SettingsError> {
        self.width_range.validate("width")?;
        self.height_range.validate("height")?;
        self.mines_range.validate("mines")?;
        self.default_config()?;
        Ok(())
    }

    /// The board preselected in the menu.
    pub fn default_config(&self) -> Result<BoardConfig> {
        BoardConfig::new(self.width, self.height, self.mines)
    }

    /// Clamps a menu selection into the configured ranges, keeping at least one safe cell.
    pub fn clamp_selection(
        &self,
        width: Coord,
        height: Coord,
        mines: CellCount,
    ) -> Result<BoardConfig> {
        let clamped_width = self.width_range.clamp(width);
        let clamped_height = self.height_range.clamp(height);
        let max_mines = clamped_width
            .saturating_mul(clamped_height)
            .saturating_sub(1);
        let clamped_mines = self.mines_range.clamp(mines).min(max_mines);

        if (clamped_width, clamped_height, clamped_mines) != (width, height, mines) {
            log::warn!(
                "Menu selection {}x{}/{} clamped to {}x{}/{}",
                width,
                height,
                mines,
                clamped_width,
                clamped_height,
                clamped_mines
            );
        }
        BoardConfig::new(clamped_width, clamped_height, clamped_mines)
    }
}
