//! Game engine: setup, turn alternation between the human and the AI, and
//! win/loss detection.
//!
//! The engine owns both boards. The presentation layer drives it with
//! [`GameEngine::place_ship`] during setup and [`GameEngine::fire_at`] during
//! play, and reads [`GameEngine::board_snapshot`] to draw. Whoever hits
//! shoots again; a miss hands the turn over. The AI's whole turn runs inside
//! the `fire_at` call that ended the human's turn.

use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::{
    ai::{self, AiShot},
    board::{Board, BoardSnapshot},
    common::{ConfigError, EngineError, Outcome, Phase, Shot, Side},
    config::{GameConfig, MAX_SHIP_SIZE},
    random::{RandomSource, RngSource},
    ship::{Orientation, Ship},
};

/// Everything that happened during one `fire_at` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireReport {
    pub x: usize,
    pub y: usize,
    /// Result of the human's shot.
    pub shot: Shot,
    /// AI ships still afloat after the human's shot.
    pub enemy_ships_remaining: usize,
    /// Shots the AI fired in reply, in order. Empty unless the human missed.
    pub ai_volley: Vec<AiShot>,
    /// Set when this call ended the game.
    pub outcome: Option<Outcome>,
}

/// Serializable snapshot of a whole engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,
    /// Ship sizes the human still has to place.
    pub pending: Vec<usize>,
    pub turn: Side,
    pub outcome: Option<Outcome>,
    pub player_board: Board,
    pub enemy_board: Board,
    pub player_shots: usize,
    pub ai_shots: usize,
}

/// Core game logic holding both boards and the phase/turn state.
#[derive(Debug)]
pub struct GameEngine<S = RngSource<SmallRng>> {
    config: GameConfig,
    phase: Phase,
    pending: Vec<usize>,
    turn: Side,
    outcome: Option<Outcome>,
    player_board: Board,
    enemy_board: Board,
    player_shots: usize,
    ai_shots: usize,
    rng: S,
}

impl GameEngine {
    /// Engine drawing its randomness from a seeded `SmallRng`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::new(config, RngSource::seeded(seed))
    }
}

impl<S: RandomSource> GameEngine<S> {
    /// Fresh engine in the setup phase.
    pub fn new(config: GameConfig, rng: S) -> Result<Self, EngineError> {
        config.validate()?;
        let pending = config.fleet.sizes().to_vec();
        Ok(Self {
            config,
            phase: Phase::Setup,
            pending,
            turn: Side::Player,
            outcome: None,
            player_board: Board::new(false),
            enemy_board: Board::new(true),
            player_shots: 0,
            ai_shots: 0,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ships the human still has to place.
    pub fn ships_to_place(&self) -> usize {
        self.pending.len()
    }

    /// Sizes still to place, in fleet order.
    pub fn pending_ships(&self) -> &[usize] {
        &self.pending
    }

    /// Size the presentation layer should offer next.
    pub fn next_ship_size(&self) -> Option<usize> {
        self.pending.first().copied()
    }

    /// Side entitled to shoot. `None` outside the playing phase.
    pub fn turn(&self) -> Option<Side> {
        match self.phase {
            Phase::Playing => Some(self.turn),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Ai => &self.enemy_board,
        }
    }

    /// Rendering view of a board. The AI fleet stays hidden until the game ends.
    pub fn board_snapshot(&self, side: Side) -> BoardSnapshot {
        let board = self.board(side);
        if self.phase == Phase::GameOver {
            board.revealed_snapshot()
        } else {
            board.snapshot()
        }
    }

    /// Shots fired by `side` since the last reset.
    pub fn shots_fired(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_shots,
            Side::Ai => self.ai_shots,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Place one of the human's pending ships with its anchor at `(x, y)`.
    ///
    /// A rejected placement changes nothing and keeps the quota. Placing the
    /// last ship deploys the AI fleet and starts the battle.
    pub fn place_ship(
        &mut self,
        size: usize,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<(), EngineError> {
        self.expect_phase(Phase::Setup)?;
        let slot = self
            .pending
            .iter()
            .position(|&s| s == size)
            .ok_or(EngineError::ShipNotInFleet(size))?;
        let ship = Ship::new(size, orientation)?;
        if let Err(reason) = self.player_board.check_placement(&ship, x, y) {
            warn!("placement of size {} at ({}, {}) rejected: {}", size, x, y, reason);
            return Err(reason.into());
        }
        let enemy = if self.pending.len() == 1 {
            Some(self.deploy_enemy_fleet()?)
        } else {
            None
        };
        self.player_board.place_ship(ship, x, y);
        self.pending.remove(slot);
        debug!("placed size {} {:?} at ({}, {})", size, orientation, x, y);
        if let Some(enemy) = enemy {
            self.begin_battle(enemy);
        }
        Ok(())
    }

    /// Place every pending human ship at random, then start the battle.
    pub fn place_remaining_randomly(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Setup)?;
        let mut board = self.player_board.clone();
        ai::place_ships(
            &mut board,
            &self.pending,
            &mut self.rng,
            self.config.max_placement_attempts,
        )?;
        let enemy = self.deploy_enemy_fleet()?;
        self.player_board = board;
        self.pending.clear();
        self.begin_battle(enemy);
        Ok(())
    }

    fn deploy_enemy_fleet(&mut self) -> Result<Board, EngineError> {
        let mut enemy = Board::new(true);
        ai::place_ships(
            &mut enemy,
            self.config.fleet.sizes(),
            &mut self.rng,
            self.config.max_placement_attempts,
        )?;
        Ok(enemy)
    }

    fn begin_battle(&mut self, enemy: Board) {
        self.enemy_board = enemy;
        self.phase = Phase::Playing;
        self.turn = Side::Player;
        info!(
            "fleets deployed ({} ships each), battle begins",
            self.config.fleet.len()
        );
    }

    /// Human shot at `(x, y)` on the AI board.
    ///
    /// A repeated target is rejected with [`EngineError::RepeatedShot`] and
    /// leaves the turn with the human. A hit lets the human shoot again; a
    /// miss lets the AI fire until it misses or sinks the last human ship.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the board.
    pub fn fire_at(&mut self, x: usize, y: usize) -> Result<FireReport, EngineError> {
        self.expect_phase(Phase::Playing)?;
        if self.enemy_board.was_shot(x, y) {
            warn!("repeated shot at ({}, {}) rejected", x, y);
            return Err(EngineError::RepeatedShot { x, y });
        }
        let shot = self.enemy_board.shoot(x, y)?;
        self.player_shots += 1;
        debug!("player fires at ({}, {}): {:?}", x, y, shot);

        let mut report = FireReport {
            x,
            y,
            shot,
            enemy_ships_remaining: self.enemy_board.ships_remaining(),
            ai_volley: Vec::new(),
            outcome: None,
        };

        if self.enemy_board.all_sunk() {
            self.finish(Outcome::Win);
            report.outcome = Some(Outcome::Win);
            return Ok(report);
        }
        if shot.is_hit() {
            return Ok(report);
        }

        self.turn = Side::Ai;
        report.ai_volley = ai::volley(&mut self.player_board, &mut self.rng)?;
        self.ai_shots += report.ai_volley.len();
        if self.player_board.all_sunk() {
            self.finish(Outcome::Loss);
            report.outcome = Some(Outcome::Loss);
        } else {
            self.turn = Side::Player;
        }
        Ok(report)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
        info!(
            "game over: {:?} after {} player and {} ai shots",
            outcome, self.player_shots, self.ai_shots
        );
    }

    /// Dismiss the game-over result and start a new game.
    pub fn acknowledge_game_over(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::GameOver)?;
        self.reset();
        Ok(())
    }

    /// Discard both boards and return to setup with the full fleet pending.
    pub fn reset(&mut self) {
        self.phase = Phase::Setup;
        self.pending = self.config.fleet.sizes().to_vec();
        self.turn = Side::Player;
        self.outcome = None;
        self.player_board = Board::new(false);
        self.enemy_board = Board::new(true);
        self.player_shots = 0;
        self.ai_shots = 0;
        info!("game reset");
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            config: self.config.clone(),
            phase: self.phase,
            pending: self.pending.clone(),
            turn: self.turn,
            outcome: self.outcome,
            player_board: self.player_board.clone(),
            enemy_board: self.enemy_board.clone(),
            player_shots: self.player_shots,
            ai_shots: self.ai_shots,
        }
    }

    /// Rebuild an engine from a snapshot, e.g. to resume a saved game or to
    /// start from a hand-built position.
    pub fn from_state(state: GameState, rng: S) -> Result<Self, EngineError> {
        state.config.validate()?;
        let boards_ok = state.player_board.is_consistent()
            && state.enemy_board.is_consistent()
            && !state.player_board.is_enemy()
            && state.enemy_board.is_enemy();
        let phase_ok = match state.phase {
            Phase::Setup => {
                let untouched = |b: &Board| b.cells().all(|c| !c.was_shot());
                let mut accounted: Vec<usize> = state
                    .player_board
                    .ships()
                    .iter()
                    .map(Ship::size)
                    .chain(state.pending.iter().copied())
                    .collect();
                accounted.sort_unstable();
                let mut fleet = state.config.fleet.sizes().to_vec();
                fleet.sort_unstable();

                state.outcome.is_none()
                    && !state.pending.is_empty()
                    && state.pending.iter().all(|&s| (1..=MAX_SHIP_SIZE).contains(&s))
                    && accounted == fleet
                    && state.enemy_board.ships().is_empty()
                    && untouched(&state.player_board)
                    && untouched(&state.enemy_board)
            }
            Phase::Playing => {
                state.outcome.is_none()
                    && state.pending.is_empty()
                    && state.turn == Side::Player
                    && !state.player_board.all_sunk()
                    && !state.enemy_board.all_sunk()
            }
            Phase::GameOver => {
                // the losing fleet existed and went down; the winner still floats
                let defeated = |b: &Board| !b.ships().is_empty() && b.all_sunk();
                match state.outcome {
                    Some(Outcome::Win) => {
                        defeated(&state.enemy_board) && !state.player_board.all_sunk()
                    }
                    Some(Outcome::Loss) => {
                        defeated(&state.player_board) && !state.enemy_board.all_sunk()
                    }
                    None => false,
                }
            }
        };
        if !boards_ok || !phase_ok {
            return Err(ConfigError::InconsistentState.into());
        }
        Ok(Self {
            config: state.config,
            phase: state.phase,
            pending: state.pending,
            turn: state.turn,
            outcome: state.outcome,
            player_board: state.player_board,
            enemy_board: state.enemy_board,
            player_shots: state.player_shots,
            ai_shots: state.ai_shots,
            rng,
        })
    }

    /// Access the random source, e.g. to inspect a scripted one.
    pub fn rng(&self) -> &S {
        &self.rng
    }
}
