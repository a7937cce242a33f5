use proptest::prelude::*;
use salvo::{
    place_ships, Board, BoardError, Orientation, RngSource, Ship, Shot, BOARD_SIZE, CLASSIC_FLEET,
};

fn random_board(seed: u64) -> Board {
    let mut rng = RngSource::seeded(seed);
    let mut board = Board::new(false);
    place_ships(&mut board, &CLASSIC_FLEET, &mut rng, 10_000).unwrap();
    board
}

fn occupied(board: &Board, x: usize, y: usize) -> bool {
    Board::in_bounds(x, y) && board.cell(x, y).has_ship()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_matches_neighbourhood_rule(
        seed in any::<u64>(),
        size in 1usize..=4,
        vertical in any::<bool>(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
    ) {
        let board = random_board(seed);
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let ship = Ship::new(size, orientation).unwrap();
        let cells: Vec<_> = ship.segments(x, y).collect();
        let fits = cells.iter().all(|&(cx, cy)| Board::in_bounds(cx, cy));
        let blocked = cells.iter().any(|&(cx, cy)| {
            occupied(&board, cx, cy)
                || (cx > 0 && occupied(&board, cx - 1, cy))
                || occupied(&board, cx + 1, cy)
                || (cy > 0 && occupied(&board, cx, cy - 1))
                || occupied(&board, cx, cy + 1)
        });
        prop_assert_eq!(board.can_place_ship(&ship, x, y), fits && !blocked);
    }

    #[test]
    fn ships_remaining_drops_only_on_sink(seed in any::<u64>(), shots in prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 1..150)) {
        let mut board = random_board(seed);
        for (x, y) in shots {
            let before = board.ships_remaining();
            match board.shoot(x, y) {
                Ok(Shot::Sunk { .. }) => prop_assert_eq!(board.ships_remaining(), before - 1),
                Ok(_) => prop_assert_eq!(board.ships_remaining(), before),
                Err(e) => {
                    prop_assert_eq!(e, BoardError::AlreadyShot { x, y });
                    prop_assert_eq!(board.ships_remaining(), before);
                }
            }
        }
        prop_assert!(board.is_consistent());
    }

    #[test]
    fn repeated_shot_is_idempotent(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        board.shoot(x, y).unwrap();
        let after_first = board.clone();
        prop_assert_eq!(board.shoot(x, y).unwrap_err(), BoardError::AlreadyShot { x, y });
        prop_assert_eq!(board, after_first);
    }
}
