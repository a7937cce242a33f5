//! Board dimensions, fleet composition and engine tuning.

use alloc::vec::Vec;

use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 10;
pub const MAX_SHIP_SIZE: usize = 4;

/// Five ships: one of each size plus a second three-cell ship.
pub const STANDARD_FLEET: [usize; 5] = [4, 3, 3, 2, 1];
/// One four, two threes, three twos and four ones.
pub const CLASSIC_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Named fleet layouts selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum FleetPreset {
    #[default]
    Standard,
    Classic,
}

/// Ship sizes each side places, in placement order. Both sides use the same fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct Fleet {
    sizes: Vec<usize>,
}

impl Fleet {
    /// Build a fleet from explicit sizes.
    pub fn new(sizes: Vec<usize>) -> Result<Self, ConfigError> {
        let fleet = Fleet { sizes };
        fleet.validate()?;
        Ok(fleet)
    }

    pub fn preset(preset: FleetPreset) -> Self {
        let sizes = match preset {
            FleetPreset::Standard => STANDARD_FLEET.to_vec(),
            FleetPreset::Classic => CLASSIC_FLEET.to_vec(),
        };
        Fleet { sizes }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Cells covered by the whole fleet.
    pub fn total_cells(&self) -> usize {
        self.sizes.iter().sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        match self.sizes.iter().find(|&&s| s == 0 || s > MAX_SHIP_SIZE) {
            Some(&bad) => Err(ConfigError::InvalidShipSize(bad)),
            None => Ok(()),
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet::preset(FleetPreset::Standard)
    }
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub fleet: Fleet,
    /// Random anchors tried per ship before the whole board is re-rolled.
    pub max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            fleet: Fleet::default(),
            max_placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn with_fleet(fleet: Fleet) -> Self {
        GameConfig {
            fleet,
            ..GameConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fleet.validate()?;
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration, e.g.
    /// `{ "fleet": [4, 3, 2], "max_placement_attempts": 500 }`.
    /// Missing fields take their defaults.
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "std")]
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        Self::from_json_str(&text)
    }
}
