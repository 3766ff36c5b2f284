use serde::{Deserialize, Serialize};

/// Visibility of a tile as driven by reveal and flag operations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Closed,
    Opened,
    Flagged,
}

impl TileState {
    pub const fn is_unopened(self) -> bool {
        matches!(self, Self::Closed | Self::Flagged)
    }
}

/// One cell of the board.
///
/// `has_mine` and `adjacent_mine_count` are fixed once mines are placed; only
/// the engine changes `reveal_state` and `exploded`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub(crate) has_mine: bool,
    pub(crate) adjacent_mine_count: u8,
    pub(crate) exploded: bool,
    pub(crate) reveal_state: TileState,
}

impl Tile {
    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }

    pub const fn exploded(&self) -> bool {
        self.exploded
    }

    pub const fn reveal_state(&self) -> TileState {
        self.reveal_state
    }

    pub const fn is_opened(&self) -> bool {
        matches!(self.reveal_state, TileState::Opened)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.reveal_state, TileState::Flagged)
    }
}
