use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board: {width}x{height} with {mines} mines")]
    InvalidConfig {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("A game can only be started from the menu")]
    NotInMenu,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not read settings file")]
    Io(#[from] std::io::Error),
    #[error("Malformed settings")]
    Parse(#[from] toml::de::Error),
    #[error("Default board is not playable")]
    Board(#[from] GameError),
    #[error("Menu range for {0} is empty")]
    EmptyRange(&'static str),
}
