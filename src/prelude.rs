//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardSnapshot, CellView, EngineError, FireReport, GameConfig, GameEngine, Orientation,
    Outcome, Phase, RandomSource, RngSource, Shot, Side,
};

#[cfg(feature = "std")]
pub use crate::{cli::run_interactive, init_logging, sim::simulate};
