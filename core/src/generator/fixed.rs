use super::*;

/// Places mines at a predetermined list of coordinates, ignoring the start tile.
///
/// Useful for puzzles and for reproducing a specific board.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mine_coords: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mine_coords: mine_coords.into(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(&mut self, config: &BoardConfig, _start: Coord2) -> Result<Minefield> {
        Minefield::from_mine_coords(config.size(), &self.mine_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_layout_from_coords() {
        let config = BoardConfig::custom(4, 4, 2).unwrap();
        let minefield = FixedMinefieldGenerator::new([(0, 3), (3, 3)])
            .generate(&config, (0, 0))
            .unwrap();

        assert_eq!(minefield.mine_count(), 2);
        assert!(minefield.contains_mine((0, 3)));
        assert!(minefield.contains_mine((3, 3)));
        assert!(!minefield.contains_mine((0, 0)));
    }

    #[test]
    fn rejects_coords_outside_board() {
        let config = BoardConfig::custom(2, 2, 1).unwrap();
        let result = FixedMinefieldGenerator::new([(2, 0)]).generate(&config, (0, 0));
        assert_eq!(result, Err(GameError::InvalidCoords));
    }
}
