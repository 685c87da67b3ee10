//! Rotation table configurations.
//!
//! Two systems are supported. `Standard` tracks the setter starting in
//! position 2 and highlights the setter. `CounterRotation` starts the setter
//! in position 1, substitutes the libero for the middle blockers in the back
//! row, and highlights the outside hitter while they attack from the front
//! row. A deployment picks one at startup; it never changes mid-session.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::court::{Offset, Position, Role, Rotation, POSITION_COUNT};
use crate::error::DomainError;

/// Which player a layout highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightRule {
    /// The setter, wherever they stand.
    Setter,
    /// The outside hitter, only while in the front row.
    FrontRowPrimaryHitter,
}

impl HighlightRule {
    /// Returns true if a player with `role` at `position` is highlighted.
    pub const fn highlights(self, role: Role, position: Position) -> bool {
        match self {
            HighlightRule::Setter => matches!(role, Role::Setter),
            HighlightRule::FrontRowPrimaryHitter => {
                matches!(role, Role::OutsideHitter) && position.is_front_row()
            }
        }
    }
}

/// A complete rotation table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationConfig {
    #[default]
    Standard,
    #[serde(rename = "counter")]
    CounterRotation,
}

use Position::{Five, Four, One, Six, Three, Two};

const STANDARD_SETTER: [Position; POSITION_COUNT] = [Two, One, Six, Five, Four, Three];
const COUNTER_SETTER: [Position; POSITION_COUNT] = [One, Six, Five, Four, Three, Two];

const STANDARD_ROLES: [Role; POSITION_COUNT] = [
    Role::OutsideHitter,
    Role::Setter,
    Role::MiddleBlocker,
    Role::OutsideHitter,
    Role::Opposite,
    Role::MiddleBlocker,
];

const COUNTER_ROLES: [Role; POSITION_COUNT] = [
    Role::Setter,
    Role::OutsideHitter,
    Role::MiddleBlocker,
    Role::Opposite,
    Role::OutsideHitter,
    Role::MiddleBlocker,
];

impl RotationConfig {
    /// Protocol name of the configuration.
    pub const fn name(self) -> &'static str {
        match self {
            RotationConfig::Standard => "standard",
            RotationConfig::CounterRotation => "counter",
        }
    }

    /// Setter position for each rotation, indexed by `rotation - 1`.
    pub const fn setter_table(self) -> &'static [Position; POSITION_COUNT] {
        match self {
            RotationConfig::Standard => &STANDARD_SETTER,
            RotationConfig::CounterRotation => &COUNTER_SETTER,
        }
    }

    /// Role of each starting identity, indexed by `base position - 1`.
    pub const fn base_roles(self) -> &'static [Role; POSITION_COUNT] {
        match self {
            RotationConfig::Standard => &STANDARD_ROLES,
            RotationConfig::CounterRotation => &COUNTER_ROLES,
        }
    }

    /// Starting identities replaced by the libero while in the back row.
    pub const fn freelancer_identities(self) -> &'static [Position] {
        match self {
            RotationConfig::Standard => &[],
            RotationConfig::CounterRotation => &[Three, Six],
        }
    }

    pub const fn highlight_rule(self) -> HighlightRule {
        match self {
            RotationConfig::Standard => HighlightRule::Setter,
            RotationConfig::CounterRotation => HighlightRule::FrontRowPrimaryHitter,
        }
    }

    /// The setter's position in an (effective) rotation.
    pub const fn setter_at(self, rotation: Rotation) -> Position {
        self.setter_table()[rotation.index()]
    }

    /// Table lookup on a raw rotation number.
    pub fn setter_position(self, rotation: u8) -> Result<Position, DomainError> {
        Rotation::new(rotation).map(|r| self.setter_at(r))
    }

    /// The base position the setter identity starts from.
    pub const fn setter_identity(self) -> Position {
        self.setter_table()[0]
    }

    /// Resolves the role of `identity` while standing at `position`.
    pub fn role_for(self, identity: Position, position: Position) -> Role {
        let base = self.base_roles()[identity.index()];
        if position.needs_penetration() && self.freelancer_identities().contains(&identity) {
            Role::Libero
        } else {
            base
        }
    }

    /// Offset that puts the setter at `start` in display rotation 1.
    pub fn offset_for_start(self, start: Position) -> Offset {
        let idx = self
            .setter_table()
            .iter()
            .position(|&p| p == start)
            .unwrap_or(0);
        // The table is a permutation of all six positions, so idx < 6.
        Offset::new(idx as u8).unwrap_or(Offset::ZERO)
    }

    /// Where the setter stands in display rotation 1 under `offset`.
    pub const fn start_position(self, offset: Offset) -> Position {
        self.setter_table()[offset.get() as usize]
    }

    /// All configurations.
    pub const fn all() -> [RotationConfig; 2] {
        [RotationConfig::Standard, RotationConfig::CounterRotation]
    }
}

impl std::fmt::Display for RotationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown configuration name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rotation config '{0}', expected 'standard' or 'counter'")]
pub struct UnknownConfig(pub String);

impl FromStr for RotationConfig {
    type Err = UnknownConfig;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(RotationConfig::Standard),
            "counter" | "counter-rotation" | "reverse" => Ok(RotationConfig::CounterRotation),
            _ => Err(UnknownConfig(s.to_string())),
        }
    }
}
