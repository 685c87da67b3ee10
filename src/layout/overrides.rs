//! Per-rotation coordinate overrides for the actual receive formation.
//!
//! In serve receive the players do not stand on their textbook spots: the
//! setter hides close to the net and the passers spread across the back
//! court. The override table supplies those coordinates per rotation and
//! position. Anything missing falls back to the standard coordinate.
//!
//! JSON format, keyed by rotation then position:
//!
//! ```json
//! { "2": { "1": { "x": 68.0, "y": 40.0 } } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::config::RotationConfig;
use crate::court::{Coord, Position, Rotation, POSITION_COUNT};
use crate::error::DomainError;

/// Receive formation bundled with the crate, tuned for the standard table.
const BUILTIN_JSON: &str = include_str!("../../data/receive_standard.json");

/// Errors that can occur while loading an override table.
#[derive(Debug, Error)]
pub enum OverridesError {
    #[error("failed to read override file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid override JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid override key: {0}")]
    Domain(#[from] DomainError),

    #[error("no builtin receive formation for the {0} config")]
    NoBuiltin(RotationConfig),
}

/// Coordinates keyed by rotation and position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActualPositionOverrides {
    table: [[Option<Coord>; POSITION_COUNT]; POSITION_COUNT],
}

impl ActualPositionOverrides {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from JSON, rejecting keys outside 1..=6.
    pub fn from_json(json: &str) -> Result<Self, OverridesError> {
        let raw: BTreeMap<u8, BTreeMap<u8, Coord>> = serde_json::from_str(json)?;
        let mut overrides = Self::new();
        for (rotation, positions) in raw {
            let rotation = Rotation::new(rotation)?;
            for (position, coord) in positions {
                let position = Position::try_from(position)?;
                overrides.insert(rotation, position, coord);
            }
        }
        Ok(overrides)
    }

    /// Reads and parses a JSON table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OverridesError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The bundled receive formation for the standard table.
    pub fn builtin() -> Result<Self, OverridesError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// The bundled formation for `config`. Only the standard table has one;
    /// its coordinates would put the wrong players at the net under counter.
    pub fn builtin_for(config: RotationConfig) -> Result<Self, OverridesError> {
        match config {
            RotationConfig::Standard => Self::builtin(),
            RotationConfig::CounterRotation => Err(OverridesError::NoBuiltin(config)),
        }
    }

    pub fn insert(&mut self, rotation: Rotation, position: Position, coord: Coord) {
        self.table[rotation.index()][position.index()] = Some(coord);
    }

    pub fn get(&self, rotation: Rotation, position: Position) -> Option<Coord> {
        self.table[rotation.index()][position.index()]
    }

    /// The override if present, otherwise the standard coordinate.
    pub fn resolve(&self, rotation: Rotation, position: Position) -> Coord {
        self.get(rotation, position)
            .unwrap_or_else(|| position.standard_coord())
    }

    /// Number of overridden (rotation, position) pairs.
    pub fn len(&self) -> usize {
        self.table.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
