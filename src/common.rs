//! Common types for Salvo: shot results, sides, outcomes and errors.

use core::fmt;

/// Which player a board or a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Final result of a game, seen from the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Loss,
}

/// Result of a shot that landed on a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    /// Shot landed on water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot took the last health point of a ship of the given size.
    Sunk { size: usize },
}

impl Shot {
    /// Whether a ship was struck. The shooter keeps the turn iff this is true.
    pub fn is_hit(self) -> bool {
        !matches!(self, Shot::Miss)
    }
}

/// Reasons a ship cannot be placed at an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some segment would fall outside the grid.
    OutOfBounds,
    /// Some segment would land on a cell already holding a ship.
    Overlaps,
    /// Some segment would share an edge with another ship.
    TouchesShip,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlaps => write!(f, "A ship is already placed here"),
            PlacementError::TouchesShip => write!(f, "Ship would touch another ship"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship size outside `1..=MAX_SHIP_SIZE`.
    InvalidShipSize(usize),
    /// The cell was shot before.
    AlreadyShot { x: usize, y: usize },
    /// Random placement gave up on the fleet.
    UnableToPlaceFleet,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidShipSize(size) => write!(f, "Invalid ship size {}", size),
            BoardError::AlreadyShot { x, y } => {
                write!(f, "Cell ({}, {}) has already been shot", x, y)
            }
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place the fleet"),
        }
    }
}

/// Errors found while validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The fleet has no ships.
    EmptyFleet,
    /// A fleet entry is outside `1..=MAX_SHIP_SIZE`.
    InvalidShipSize(usize),
    /// Random placement needs at least one attempt per ship.
    ZeroPlacementAttempts,
    /// A restored game state contradicts itself.
    InconsistentState,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::InvalidShipSize(size) => write!(f, "Invalid ship size {} in fleet", size),
            ConfigError::ZeroPlacementAttempts => {
                write!(f, "max_placement_attempts must be positive")
            }
            ConfigError::InconsistentState => write!(f, "Game state is inconsistent"),
        }
    }
}

/// Phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Setup,
    Playing,
    GameOver,
}

/// Errors returned by the game engine. All of them leave the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The command is not valid in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// No ship of this size is left to place.
    ShipNotInFleet(usize),
    /// The ship overlaps, touches another ship or leaves the grid.
    InvalidPlacement(PlacementError),
    /// The targeted cell was already shot.
    RepeatedShot { x: usize, y: usize },
    /// Underlying board failure.
    Board(BoardError),
    /// The configuration or a restored state is inconsistent.
    Config(ConfigError),
}

impl From<BoardError> for EngineError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::AlreadyShot { x, y } => EngineError::RepeatedShot { x, y },
            other => EngineError::Board(other),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}

impl From<PlacementError> for EngineError {
    fn from(err: PlacementError) -> Self {
        EngineError::InvalidPlacement(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::WrongPhase { expected, actual } => {
                write!(f, "Action requires phase {:?}, game is in {:?}", expected, actual)
            }
            EngineError::ShipNotInFleet(size) => {
                write!(f, "No ship of size {} left to place", size)
            }
            EngineError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            EngineError::RepeatedShot { .. } => write!(f, "This cell has already been shot"),
            EngineError::Board(e) => write!(f, "Board error: {}", e),
            EngineError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
