use proptest::prelude::*;
use sweeper_core::*;

fn config_strategy() -> impl Strategy<Value = BoardConfig> {
    (1..=30u8, 1..=16u8)
        .prop_filter("needs room for a mine", |&(w, h)| u16::from(w) * u16::from(h) >= 2)
        .prop_flat_map(|(w, h)| {
            let total = u16::from(w) * u16::from(h);
            (Just(w), Just(h), 1..total)
        })
        .prop_map(|(w, h, mines)| BoardConfig::custom(w, h, mines).unwrap())
}

fn game_strategy() -> impl Strategy<Value = (BoardConfig, u64, Coord2)> {
    config_strategy().prop_flat_map(|config| {
        (
            Just(config),
            any::<u64>(),
            (0..config.height(), 0..config.width()),
        )
    })
}

fn all_coords(config: &BoardConfig) -> impl Iterator<Item = Coord2> + use<> {
    let (rows, cols) = config.size();
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

fn count_mined_neighbors(board: &Board, coords: Coord2) -> u8 {
    NeighborIter::new(coords, board.config().size())
        .filter(|&pos| board.tile_at(pos).is_some_and(|tile| tile.has_mine()))
        .count() as u8
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn start_places_exact_mines_away_from_start((config, seed, start) in game_strategy()) {
        let mut board = Board::with_seed(config, seed);
        board.start(start).unwrap();

        let mines = board.tiles().iter().filter(|tile| tile.has_mine()).count();
        prop_assert_eq!(mines, usize::from(config.mine_count()));
        prop_assert!(!board.tile_at(start).unwrap().has_mine());
        prop_assert_eq!(board.state(), GameState::Playing);
    }

    #[test]
    fn adjacency_counts_are_exact((config, seed, start) in game_strategy()) {
        let mut board = Board::with_seed(config, seed);
        board.start(start).unwrap();

        for coords in all_coords(&config) {
            let tile = board.tile_at(coords).unwrap();
            prop_assert_eq!(tile.adjacent_mine_count(), count_mined_neighbors(&board, coords));
        }
    }

    #[test]
    fn flood_fill_opens_closed_region_without_mines((config, seed, start) in game_strategy()) {
        let mut board = Board::with_seed(config, seed);
        let outcome = board.open(start).unwrap();
        prop_assert_ne!(outcome, RevealOutcome::HitMine);

        for coords in all_coords(&config) {
            let tile = board.tile_at(coords).unwrap();
            if tile.is_opened() {
                prop_assert!(!tile.has_mine());
                if tile.adjacent_mine_count() == 0 {
                    for pos in NeighborIter::new(coords, config.size()) {
                        let neighbor = board.tile_at(pos).unwrap();
                        prop_assert!(neighbor.is_opened() || neighbor.is_flagged());
                    }
                }
            }
        }

        let opened = board.count_tiles(Some(TileState::Opened));
        let won = board.state() == GameState::Won;
        prop_assert_eq!(won, opened == config.safe_tiles());
    }

    #[test]
    fn playing_to_the_end_reaches_a_terminal_state(
        (config, seed, start) in game_strategy(),
        clicks in prop::collection::vec((any::<u8>(), any::<u8>()), 1..64),
    ) {
        let mut board = Board::with_seed(config, seed);
        board.open(start).unwrap();

        for (row, col) in clicks {
            let coords = (row % config.height(), col % config.width());
            let before = board.state();
            let tiles_before = board.tiles().to_owned();
            let outcome = board.reveal(coords);

            if before.is_finished() {
                prop_assert_eq!(outcome, RevealOutcome::NoChange);
                prop_assert_eq!(board.tiles(), tiles_before.view());
                prop_assert_eq!(board.state(), before);
            }
        }

        match board.state() {
            GameState::Lost => {
                let exploded = board.tiles().iter().filter(|tile| tile.exploded()).count();
                prop_assert_eq!(exploded, 1);
                prop_assert!(board
                    .tiles()
                    .iter()
                    .filter(|tile| tile.has_mine())
                    .all(|tile| tile.is_opened()));
                prop_assert!(board
                    .tiles()
                    .iter()
                    .filter(|tile| tile.exploded())
                    .all(|tile| tile.has_mine() && tile.is_opened()));
            }
            GameState::Won => {
                prop_assert!(board
                    .tiles()
                    .iter()
                    .all(|tile| tile.has_mine() == tile.reveal_state().is_unopened()));
                prop_assert!(board
                    .tiles()
                    .iter()
                    .filter(|tile| tile.has_mine())
                    .all(|tile| tile.is_flagged()));
            }
            GameState::Playing => {
                prop_assert!(board.tiles().iter().all(|tile| !(tile.has_mine() && tile.is_opened())));
            }
            GameState::Waiting => prop_assert!(false, "board went back to waiting"),
        }
    }

    #[test]
    fn toggling_a_flag_twice_is_identity((config, seed, start) in game_strategy(), row in any::<u8>(), col in any::<u8>()) {
        let mut board = Board::with_seed(config, seed);
        board.open(start).unwrap();
        let coords = (row % config.height(), col % config.width());
        let before = board.tile_at(coords).unwrap();

        board.toggle_flag(coords);
        board.toggle_flag(coords);

        prop_assert_eq!(board.tile_at(coords).unwrap(), before);
    }
}
