use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player can see of a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Closed,
    Flagged,
    Open(u8),
    Mine,
    Exploded,
}

impl From<Tile> for CellView {
    fn from(tile: Tile) -> Self {
        match (tile.reveal_state(), tile.has_mine(), tile.exploded()) {
            (TileState::Closed, _, _) => Self::Closed,
            (TileState::Flagged, _, _) => Self::Flagged,
            (TileState::Opened, true, true) => Self::Exploded,
            (TileState::Opened, true, false) => Self::Mine,
            (TileState::Opened, false, _) => Self::Open(tile.adjacent_mine_count()),
        }
    }
}

/// Player-visible state of a board, for renderers.
///
/// Mines only show up once opened, so a snapshot of a running game does not
/// leak the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub config: BoardConfig,
    pub state: GameState,
    pub elapsed_secs: u64,
    pub mines_left: isize,
    pub revision: u64,
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

impl<G> Board<G> {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            config: *self.config(),
            state: self.state(),
            elapsed_secs: self.elapsed_secs(),
            mines_left: self.mines_left(),
            revision: self.revision(),
            cells: self.tiles().mapv(CellView::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_game_hides_mines() {
        let config = BoardConfig::custom(3, 3, 2).unwrap();
        let generator = FixedMinefieldGenerator::new([(0, 0), (2, 2)]);
        let mut board = Board::with_generator(config, generator);
        board.open((1, 1)).unwrap();
        board.toggle_flag((0, 0));

        let snapshot = board.snapshot();

        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.mines_left, 1);
        assert_eq!(snapshot.cell_at((1, 1)), Some(CellView::Open(2)));
        assert_eq!(snapshot.cell_at((0, 0)), Some(CellView::Flagged));
        assert_eq!(snapshot.cell_at((2, 2)), Some(CellView::Closed));
        assert!(!snapshot.cells.iter().any(|cell| matches!(cell, CellView::Mine)));
    }

    #[test]
    fn lost_game_shows_mines_and_explosion() {
        let config = BoardConfig::custom(3, 3, 2).unwrap();
        let generator = FixedMinefieldGenerator::new([(0, 0), (2, 2)]);
        let mut board = Board::with_generator(config, generator);
        board.open((1, 1)).unwrap();
        board.reveal((2, 2));

        let snapshot = board.snapshot();

        assert_eq!(snapshot.state, GameState::Lost);
        assert_eq!(snapshot.cell_at((2, 2)), Some(CellView::Exploded));
        assert_eq!(snapshot.cell_at((0, 0)), Some(CellView::Mine));
        assert_eq!(snapshot.cell_at((0, 1)), Some(CellView::Closed));
    }

    #[test]
    fn serializes_for_frontends() {
        let board = Board::with_seed(BoardConfig::beginner(), 5);
        let json = serde_json::to_value(board.snapshot()).unwrap();

        assert_eq!(json["state"], "Waiting");
        assert_eq!(json["config"]["width"], 9);
        assert_eq!(json["mines_left"], 10);
    }
}
