use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Name attached to a board configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Beginner => "Beginner",
            Intermediate => "Intermediate",
            Expert => "Expert",
            Custom => "Custom",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable board dimensions and mine count.
///
/// Always satisfies `width > 0`, `height > 0` and `0 < mines < width * height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
    difficulty: Difficulty,
}

impl BoardConfig {
    pub const fn beginner() -> Self {
        Self::preset(9, 9, 10, Difficulty::Beginner)
    }

    pub const fn intermediate() -> Self {
        Self::preset(16, 16, 40, Difficulty::Intermediate)
    }

    pub const fn expert() -> Self {
        Self::preset(30, 16, 99, Difficulty::Expert)
    }

    pub const fn presets() -> [Self; 3] {
        [Self::beginner(), Self::intermediate(), Self::expert()]
    }

    /// Board with arbitrary dimensions, labelled "Custom".
    pub fn custom(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 || height == 0 || mines == 0 || mines >= mult(width, height) {
            return Err(GameError::InvalidConfiguration {
                width,
                height,
                mines,
            });
        }
        Ok(Self::preset(width, height, mines, Difficulty::Custom))
    }

    const fn preset(width: Coord, height: Coord, mines: CellCount, difficulty: Difficulty) -> Self {
        Self {
            width,
            height,
            mines,
            difficulty,
        }
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn label(&self) -> &'static str {
        self.difficulty.label()
    }

    /// Board bounds as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mines
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

impl fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} x {} / Mines x {})",
            self.difficulty, self.width, self.height, self.mines
        )
    }
}

/// Unvalidated form used when deserializing.
#[derive(Deserialize)]
struct RawBoardConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
    difficulty: Difficulty,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GameError;

    /// Keeps a preset label only when the dimensions are that preset's.
    fn try_from(raw: RawBoardConfig) -> Result<Self> {
        let config = Self::custom(raw.width, raw.height, raw.mines)?;
        Ok(Self::presets()
            .into_iter()
            .find(|preset| {
                preset.difficulty == raw.difficulty
                    && (preset.width, preset.height, preset.mines)
                        == (config.width, config.height, config.mines)
            })
            .unwrap_or(config))
    }
}
