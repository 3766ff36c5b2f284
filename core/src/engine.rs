use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Waiting -> Playing (start)
/// - Playing -> Won | Lost (reveal)
/// - any -> Waiting (reset)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No mines placed yet
    #[default]
    Waiting,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_waiting(self) -> bool {
        matches!(self, Self::Waiting)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game of minesweeper, from the first click to a win or a loss.
///
/// Mines are placed lazily by [`Board::start`] so the first opened tile is
/// never mined. Gameplay calls that do not apply to the current state
/// (out-of-range coordinates, wrong phase, already opened tiles) are ignored
/// and reported as `NoChange`.
#[derive(Clone, Debug)]
pub struct Board<G = RandomMinefieldGenerator> {
    config: BoardConfig,
    tiles: Array2<Tile>,
    state: GameState,
    stopwatch: Stopwatch,
    generator: G,
    opened_count: CellCount,
    flagged_count: CellCount,
    revision: u64,
}

impl Board {
    /// Board with entropy-seeded random mine placement.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_generator(config, RandomMinefieldGenerator::from_entropy())
    }

    /// Board whose mine layouts are reproducible from `seed`.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomMinefieldGenerator::from_seed(seed))
    }
}

impl<G: MinefieldGenerator> Board<G> {
    pub fn with_generator(config: BoardConfig, generator: G) -> Self {
        Self {
            config,
            tiles: Array2::default(config.size().to_nd_index()),
            state: GameState::Waiting,
            stopwatch: Stopwatch::new(),
            generator,
            opened_count: 0,
            flagged_count: 0,
            revision: 0,
        }
    }

    /// Discards the current game, keeping the configuration.
    pub fn reset(&mut self) {
        self.tiles = Array2::default(self.config.size().to_nd_index());
        self.state = GameState::Waiting;
        self.stopwatch.clear();
        self.opened_count = 0;
        self.flagged_count = 0;
        self.bump_revision();
        log::debug!("Board reset to {}", self.config);
    }

    pub fn set_config(&mut self, config: BoardConfig) {
        self.config = config;
        self.reset();
    }

    /// Places the mines around a safe `coords` and starts the clock.
    ///
    /// Only effective while waiting. Fails only when the generator hands back
    /// a minefield that does not fit the configuration, in which case the
    /// board keeps waiting.
    pub fn start(&mut self, coords: Coord2) -> Result<StartOutcome> {
        if !self.state.is_waiting() || !self.in_bounds(coords) {
            log::trace!("Ignored start at {:?} in state {:?}", coords, self.state);
            return Ok(StartOutcome::NoChange);
        }

        let minefield = self.generator.generate(&self.config, coords)?;
        if let Err(err) = minefield.validate_for(&self.config, coords) {
            log::warn!("Rejected generated minefield for {}: {}", self.config, err);
            return Err(err);
        }

        for ((row, col), tile) in self.tiles.indexed_iter_mut() {
            let pos = (row as Coord, col as Coord);
            tile.has_mine = minefield.contains_mine(pos);
            tile.adjacent_mine_count = minefield.adjacent_mine_count(pos);
        }

        self.stopwatch.start();
        self.state = GameState::Playing;
        self.bump_revision();
        log::debug!("Started {} at {:?}", self.config, coords);
        Ok(StartOutcome::Started)
    }

    /// Starts the game if needed, then reveals `coords`.
    pub fn open(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.start(coords)?;
        Ok(self.reveal(coords))
    }

    /// Opens a closed tile, flood-filling through tiles with no adjacent mines.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        let mut outcome = NoChange;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            if !self.in_bounds(visit_coords) || !self.state.is_playing() {
                continue;
            }

            let tile = &mut self.tiles[visit_coords.to_nd_index()];
            if tile.reveal_state != TileState::Closed {
                continue;
            }
            tile.reveal_state = TileState::Opened;
            let Tile {
                has_mine,
                adjacent_mine_count,
                ..
            } = *tile;
            self.opened_count += 1;

            if has_mine {
                self.mark_lost(visit_coords);
                outcome = HitMine;
                break;
            }

            log::trace!(
                "Opened tile at {:?}, adjacent mines: {}",
                visit_coords,
                adjacent_mine_count
            );
            outcome = outcome | Revealed;

            if self.config.total_tiles() - self.opened_count == self.config.mine_count() {
                self.mark_won();
                outcome = outcome | Won;
            }

            if adjacent_mine_count == 0 {
                to_visit.extend(self.tiles.iter_neighbors(visit_coords));
            }
        }

        if outcome.has_update() {
            self.bump_revision();
        } else {
            log::trace!("Ignored reveal at {:?} in state {:?}", coords, self.state);
        }
        outcome
    }

    /// Cycles a tile between closed and flagged while the game is running.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use MarkOutcome::*;

        if !self.state.is_playing() || !self.in_bounds(coords) {
            log::trace!("Ignored flag at {:?} in state {:?}", coords, self.state);
            return NoChange;
        }

        let tile = &mut self.tiles[coords.to_nd_index()];
        match tile.reveal_state {
            TileState::Closed => {
                tile.reveal_state = TileState::Flagged;
                self.flagged_count += 1;
            }
            TileState::Flagged => {
                tile.reveal_state = TileState::Closed;
                self.flagged_count -= 1;
            }
            TileState::Opened => return NoChange,
        }
        self.bump_revision();
        Changed
    }

    fn mark_lost(&mut self, exploded_at: Coord2) {
        self.stopwatch.stop();
        for tile in self.tiles.iter_mut().filter(|tile| tile.has_mine) {
            match tile.reveal_state {
                TileState::Opened => continue,
                TileState::Flagged => self.flagged_count -= 1,
                TileState::Closed => {}
            }
            tile.reveal_state = TileState::Opened;
            self.opened_count += 1;
        }
        self.tiles[exploded_at.to_nd_index()].exploded = true;
        self.state = GameState::Lost;
        log::debug!(
            "Lost at {:?} after {}s",
            exploded_at,
            self.stopwatch.elapsed_secs()
        );
    }

    fn mark_won(&mut self) {
        self.stopwatch.stop();
        let unopened_mines = self
            .tiles
            .iter_mut()
            .filter(|tile| tile.has_mine && tile.reveal_state.is_unopened());
        for tile in unopened_mines {
            if tile.reveal_state == TileState::Closed {
                self.flagged_count += 1;
            }
            tile.reveal_state = TileState::Flagged;
        }
        self.state = GameState::Won;
        log::debug!("Won after {}s", self.stopwatch.elapsed_secs());
    }
}

impl<G> Board<G> {
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mine_count()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    /// Read-only view of the grid, `(rows, cols)` in row-major order.
    pub fn tiles(&self) -> ArrayView2<'_, Tile> {
        self.tiles.view()
    }

    /// Total tile count, or the number of tiles in the given state.
    pub fn count_tiles(&self, filter: Option<TileState>) -> CellCount {
        match filter {
            None => self.config.total_tiles(),
            Some(state) => self
                .tiles
                .iter()
                .filter(|tile| tile.reveal_state == state)
                .count() as CellCount,
        }
    }

    /// Mine count minus placed flags; negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.config.mine_count() as isize) - (self.flagged_count as isize)
    }

    /// Whole seconds since the game started, frozen once it ends.
    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs()
    }

    /// Counter bumped on every change of board state.
    ///
    /// Observers can compare it against the last value they rendered.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn in_bounds(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.config.size())
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
