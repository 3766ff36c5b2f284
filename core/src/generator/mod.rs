use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts for a board.
///
/// Called once per game, when the first tile is opened. Implementations must
/// return a minefield of `config.size()` holding exactly `config.mine_count()`
/// mines with `start` left safe; the engine rejects anything else.
pub trait MinefieldGenerator {
    fn generate(&mut self, config: &BoardConfig, start: Coord2) -> Result<Minefield>;
}

impl<G: MinefieldGenerator + ?Sized> MinefieldGenerator for &mut G {
    fn generate(&mut self, config: &BoardConfig, start: Coord2) -> Result<Minefield> {
        (**self).generate(config, start)
    }
}

impl<G: MinefieldGenerator + ?Sized> MinefieldGenerator for Box<G> {
    fn generate(&mut self, config: &BoardConfig, start: Coord2) -> Result<Minefield> {
        (**self).generate(config, start)
    }
}
