#[cfg(feature = "std")]
mod cli_tests {
    use std::io::Cursor;

    use salvo::cli::{coord_to_string, parse_coord, parse_placement, render_board, run_interactive};
    use salvo::{
        Board, GameConfig, GameEngine, GameState, Orientation, Phase, ScriptedSource, Ship, Side,
    };

    fn run<S: salvo::RandomSource>(engine: &mut GameEngine<S>, input: &str) -> String {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        run_interactive(engine, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn single_ship_battle() -> GameEngine<ScriptedSource> {
        let mut player = Board::new(false);
        assert!(player.place_ship(Ship::new(1, Orientation::Horizontal).unwrap(), 5, 5));
        let mut enemy = Board::new(true);
        assert!(enemy.place_ship(Ship::new(1, Orientation::Horizontal).unwrap(), 9, 9));
        let state = GameState {
            config: GameConfig::default(),
            phase: Phase::Playing,
            pending: vec![],
            turn: Side::Player,
            outcome: None,
            player_board: player,
            enemy_board: enemy,
            player_shots: 0,
            ai_shots: 0,
        };
        GameEngine::from_state(state, ScriptedSource::from_coords(&[(0, 0)])).unwrap()
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("j10"), Ok((9, 9)));
        assert_eq!(parse_coord(" c7 "), Ok((2, 6)));
        assert!(parse_coord("").is_err());
        assert!(parse_coord("A").is_err());
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("5A").is_err());
    }

    #[test]
    fn test_parse_placement() {
        assert_eq!(parse_placement("B4 V"), Ok((1, 3, Orientation::Vertical)));
        assert_eq!(parse_placement("b4 h"), Ok((1, 3, Orientation::Horizontal)));
        assert!(parse_placement("B4").is_err());
        assert!(parse_placement("B4 X").is_err());
        assert!(parse_placement("B4 H extra").is_err());
    }

    #[test]
    fn test_coord_to_string() {
        assert_eq!(coord_to_string(1, 3), "B4");
        assert_eq!(coord_to_string(9, 9), "J10");
        assert_eq!(parse_coord(&coord_to_string(4, 7)), Ok((4, 7)));
    }

    #[test]
    fn test_render_board_marks() {
        let mut board = Board::new(false);
        assert!(board.place_ship(Ship::new(2, Orientation::Horizontal).unwrap(), 0, 0));
        board.shoot(0, 0).unwrap();
        board.shoot(5, 5).unwrap();
        let text = render_board(&board.snapshot());
        assert!(text.contains(" 1 X S"));
        assert!(text.contains(" 6 . . . . . o . . . ."));
        assert!(text.contains("Ships afloat: 1"));
    }

    #[test]
    fn test_session_random_placement_then_quit() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 4).unwrap();
        let out = run(&mut engine, "random\nquit\n");
        assert!(out.contains("Remaining ships placed at random."));
        assert!(out.contains("Target (e.g. C7)"));
        assert_eq!(engine.phase(), Phase::Playing);
    }

    #[test]
    fn test_session_reports_bad_placement() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 4).unwrap();
        let out = run(&mut engine, "A1 H\nA2 H\nZ9 H\nquit\n");
        assert!(out.contains("✓ Ship of size 4 placed at A1"));
        assert!(out.contains("✗ Ship would touch another ship"));
        assert!(out.contains("✗ Column 'Z' out of bounds"));
        assert_eq!(engine.ships_to_place(), 4);
    }

    #[test]
    fn test_session_rejects_repeated_shot() {
        let mut engine = single_ship_battle();
        let out = run(&mut engine, "A1\nA1\nquit\n");
        assert!(out.contains("You fire at A1: miss"));
        assert!(out.contains("Enemy fires at A1: miss"));
        assert!(out.contains("This cell has already been shot."));
        assert_eq!(engine.shots_fired(Side::Player), 1);
    }

    #[test]
    fn test_session_win_and_play_again() {
        let mut engine = single_ship_battle();
        let out = run(&mut engine, "J10\ny\nquit\n");
        assert!(out.contains("hit and sunk a ship of size 1"));
        assert!(out.contains("CONGRATULATIONS, YOU WIN"));
        assert_eq!(engine.phase(), Phase::Setup);
        assert_eq!(engine.ships_to_place(), 5);
    }

    #[test]
    fn test_session_ends_on_eof() {
        let mut engine = single_ship_battle();
        let out = run(&mut engine, "");
        assert!(out.starts_with("DESTROY THE ENEMIES"));
        assert_eq!(engine.phase(), Phase::Playing);
    }
}
