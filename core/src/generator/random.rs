use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random placement that always keeps the start tile safe.
///
/// Every tile except the start one is a candidate; a partial Fisher-Yates
/// shuffle picks the first `mine_count` of them.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator<R = SmallRng> {
    rng: R,
}

impl RandomMinefieldGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(&mut self, config: &BoardConfig, start: Coord2) -> Result<Minefield> {
        if !in_bounds(start, config.size()) {
            return Err(GameError::InvalidCoords);
        }

        let width = config.width();
        let start_index = to_linear_index(start, width);
        let mut candidates: Vec<usize> = (0..usize::from(config.total_tiles()))
            .filter(|&index| index != start_index)
            .collect();

        let amount = usize::from(config.mine_count());
        if amount > candidates.len() {
            return Err(GameError::InvalidConfiguration {
                width,
                height: config.height(),
                mines: config.mine_count(),
            });
        }

        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, amount);

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for &index in chosen.iter() {
            mine_mask[from_linear_index(index, width).to_nd_index()] = true;
        }

        log::trace!(
            "Generated {} mines on {} tiles, start at {:?}",
            amount,
            config.total_tiles(),
            start
        );
        Ok(Minefield::from_mine_mask(mine_mask))
    }
}
