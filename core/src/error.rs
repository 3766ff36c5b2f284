use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {width} x {height} with {mines} mines")]
    InvalidConfiguration {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Minefield shape does not match the board size")]
    InvalidBoardShape,
    #[error("Minefield holds {actual} mines, expected {expected}")]
    MineCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
    #[error("Minefield places a mine on the start tile")]
    StartTileMined,
}

pub type Result<T> = core::result::Result<T, GameError>;
