//! Minesweeper board engine: configuration, mine placement, reveal and flag
//! handling, and win/loss detection, without any presentation concerns.

use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod config;
mod engine;
mod error;
mod generator;
mod snapshot;
mod tile;
mod timer;
mod types;

/// Mine positions for one game, indexed by `(row, col)`.
///
/// The mine count is always derived from the mask, including when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMinefield")]
pub struct Minefield {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .min(CellCount::MAX.into()) as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Board bounds as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (
            rows.min(Coord::MAX.into()) as Coord,
            cols.min(Coord::MAX.into()) as Coord,
        )
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    /// Checks that this minefield can back a game of `config` started at `start`.
    pub fn validate_for(&self, config: &BoardConfig, start: Coord2) -> Result<()> {
        let expected = (usize::from(config.height()), usize::from(config.width()));
        if self.mine_mask.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        if self.mine_count != config.mine_count() {
            return Err(GameError::MineCountMismatch {
                expected: config.mine_count(),
                actual: self.mine_count,
            });
        }
        if self.contains_mine(start) {
            return Err(GameError::StartTileMined);
        }
        Ok(())
    }
}

/// Serialized form; any stored count is ignored.
#[derive(Deserialize)]
struct RawMinefield {
    mine_mask: Array2<bool>,
}

impl From<RawMinefield> for Minefield {
    fn from(raw: RawMinefield) -> Self {
        Self::from_mine_mask(raw.mine_mask)
    }
}

impl Index<Coord2> for Minefield {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StartOutcome {
    NoChange,
    Started,
}

impl StartOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Started)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Merges outcomes of several reveals, keeping the most significant one.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
