// Random opponent: rejection-sampled fleet placement and blind targeting.

use alloc::vec::Vec;
use log::debug;

use crate::{
    board::Board,
    common::{BoardError, Shot},
    config::BOARD_SIZE,
    random::RandomSource,
    ship::{Orientation, Ship},
};

/// Full-fleet re-rolls before random placement gives up.
pub const FLEET_ROUNDS: usize = 16;

/// Rejected target samples before falling back to picking among unshot cells.
const TARGET_SAMPLES: usize = 100 * BOARD_SIZE * BOARD_SIZE;

/// One shot fired by the AI during its volley.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiShot {
    pub x: usize,
    pub y: usize,
    pub shot: Shot,
}

/// Sample anchors and orientations until a ship of `size` fits.
/// Returns the anchor and orientation, or `None` after `max_attempts`.
pub fn random_placement<S: RandomSource + ?Sized>(
    board: &Board,
    size: usize,
    rng: &mut S,
    max_attempts: usize,
) -> Result<Option<(usize, usize, Orientation)>, BoardError> {
    for _ in 0..max_attempts {
        let x = rng.next_index(BOARD_SIZE);
        let y = rng.next_index(BOARD_SIZE);
        let orientation = if rng.next_bool() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let ship = Ship::new(size, orientation)?;
        if board.can_place_ship(&ship, x, y) {
            return Ok(Some((x, y, orientation)));
        }
    }
    Ok(None)
}

/// Add ships of the given sizes at random spots.
///
/// When one ship exhausts its attempts the whole batch is discarded and
/// re-rolled from the starting board, up to [`FLEET_ROUNDS`] times. On
/// failure `board` is left as it was.
pub fn place_ships<S: RandomSource + ?Sized>(
    board: &mut Board,
    sizes: &[usize],
    rng: &mut S,
    max_attempts: usize,
) -> Result<(), BoardError> {
    'round: for round in 0..FLEET_ROUNDS {
        let mut trial = board.clone();
        for &size in sizes {
            match random_placement(&trial, size, rng, max_attempts)? {
                Some((x, y, orientation)) => {
                    trial.place_ship(Ship::new(size, orientation)?, x, y);
                }
                None => {
                    debug!("fleet placement round {} stuck on size {}", round, size);
                    continue 'round;
                }
            }
        }
        *board = trial;
        return Ok(());
    }
    Err(BoardError::UnableToPlaceFleet)
}

/// Pick a random cell that has not been shot yet.
pub fn pick_target<S: RandomSource + ?Sized>(board: &Board, rng: &mut S) -> Option<(usize, usize)> {
    for _ in 0..TARGET_SAMPLES {
        let x = rng.next_index(BOARD_SIZE);
        let y = rng.next_index(BOARD_SIZE);
        if !board.was_shot(x, y) {
            return Some((x, y));
        }
    }
    let open = board.unshot_cells().count();
    if open == 0 {
        return None;
    }
    let nth = rng.next_index(open);
    board.unshot_cells().nth(nth)
}

/// Keep firing at `board` while shots hit. Stops after the first miss or
/// when the last ship sinks.
pub fn volley<S: RandomSource + ?Sized>(board: &mut Board, rng: &mut S) -> Result<Vec<AiShot>, BoardError> {
    let mut shots = Vec::new();
    while let Some((x, y)) = pick_target(board, rng) {
        let shot = board.shoot(x, y)?;
        debug!("ai fires at ({}, {}): {:?}", x, y, shot);
        shots.push(AiShot { x, y, shot });
        if !shot.is_hit() || board.all_sunk() {
            break;
        }
    }
    Ok(shots)
}
