#![cfg(feature = "std")]

//! Automated games: the human seat is taken by a blind random shooter.

use crate::{
    ai,
    common::{EngineError, Outcome, Phase, Side},
    config::GameConfig,
    game::GameEngine,
    random::RngSource,
};

/// Result of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SimSummary {
    pub seed: u64,
    pub outcome: Outcome,
    pub player_shots: usize,
    pub ai_shots: usize,
    pub player_ships_remaining: usize,
    pub ai_ships_remaining: usize,
}

/// Play a full game. The engine uses `seed`; the stand-in human uses `seed + 1`.
pub fn simulate(config: GameConfig, seed: u64) -> Result<SimSummary, EngineError> {
    let mut engine = GameEngine::with_seed(config, seed)?;
    let mut shooter = RngSource::seeded(seed.wrapping_add(1));

    engine.place_remaining_randomly()?;
    while engine.phase() == Phase::Playing {
        let Some((x, y)) = ai::pick_target(engine.board(Side::Ai), &mut shooter) else {
            break;
        };
        engine.fire_at(x, y)?;
    }

    let outcome = engine.outcome().ok_or(EngineError::WrongPhase {
        expected: Phase::GameOver,
        actual: engine.phase(),
    })?;
    Ok(SimSummary {
        seed,
        outcome,
        player_shots: engine.shots_fired(Side::Player),
        ai_shots: engine.shots_fired(Side::Ai),
        player_ships_remaining: engine.board(Side::Player).ships_remaining(),
        ai_ships_remaining: engine.board(Side::Ai).ships_remaining(),
    })
}
