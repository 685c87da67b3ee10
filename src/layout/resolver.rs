//! Layout resolution.
//!
//! Maps a rotation to the full court: who stands where, in which role, and
//! which coordinate to draw them at. Players are identified by the position
//! they start from in rotation 1, so a shell can animate each marker from
//! its old spot to its new one across rotations.

use serde::Serialize;

use crate::config::RotationConfig;
use crate::court::{Coord, Offset, Position, Role, Rotation, ALL_POSITIONS, POSITION_COUNT};
use crate::error::DomainError;
use crate::route::{penetration_route, PenetrationRoute};
use crate::status::status_text;

use super::overrides::ActualPositionOverrides;

/// Which coordinate set a shell should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Textbook rotational positions.
    #[default]
    Standard,
    /// Receive formation from the override table.
    Actual,
}

impl ViewMode {
    pub const fn name(self) -> &'static str {
        match self {
            ViewMode::Standard => "standard",
            ViewMode::Actual => "actual",
        }
    }

    pub const fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Standard => ViewMode::Actual,
            ViewMode::Actual => ViewMode::Standard,
        }
    }

    pub fn from_name(s: &str) -> Option<ViewMode> {
        match s {
            "standard" | "original" => Some(ViewMode::Standard),
            "actual" | "variation" => Some(ViewMode::Actual),
            _ => None,
        }
    }
}

/// One player on the court.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerRecord {
    /// Starting position in rotation 1; stable across rotations.
    pub id: Position,
    pub position: Position,
    pub role: Role,
    pub name: &'static str,
    pub highlight: bool,
    pub standard: Coord,
    pub actual: Coord,
}

impl PlayerRecord {
    pub const fn coord(&self, view: ViewMode) -> Coord {
        match view {
            ViewMode::Standard => self.standard,
            ViewMode::Actual => self.actual,
        }
    }
}

/// The starting identity standing at `position` in `effective` rotation.
pub fn base_position(effective: Rotation, position: Position) -> Position {
    let idx = (position.index() + effective.index()) % POSITION_COUNT;
    ALL_POSITIONS[idx]
}

/// Resolves all six players, ordered by current position.
pub fn resolve(
    config: RotationConfig,
    rotation: Rotation,
    offset: Offset,
    overrides: Option<&ActualPositionOverrides>,
) -> [PlayerRecord; POSITION_COUNT] {
    let effective = rotation.effective(offset);
    let highlight = config.highlight_rule();

    ALL_POSITIONS.map(|position| {
        let id = base_position(effective, position);
        let role = config.role_for(id, position);
        let standard = position.standard_coord();
        let actual = overrides.map_or(standard, |o| o.resolve(effective, position));
        PlayerRecord {
            id,
            position,
            role,
            name: role.label(),
            highlight: highlight.highlights(role, position),
            standard,
            actual,
        }
    })
}

/// Resolves a layout from raw rotation and offset numbers.
pub fn resolve_layout(
    config: RotationConfig,
    rotation: u8,
    offset: u8,
    overrides: Option<&ActualPositionOverrides>,
) -> Result<[PlayerRecord; POSITION_COUNT], DomainError> {
    let rotation = Rotation::new(rotation)?;
    let offset = Offset::new(offset)?;
    Ok(resolve(config, rotation, offset, overrides))
}

/// A resolved rotation with the setter's situation summarized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub config: RotationConfig,
    pub display: Rotation,
    pub offset: Offset,
    pub effective: Rotation,
    pub setter: Position,
    pub setter_front_row: bool,
    pub needs_penetration: bool,
    pub route: Option<PenetrationRoute>,
    pub status: String,
    pub players: [PlayerRecord; POSITION_COUNT],
}

impl Layout {
    pub fn resolve(
        config: RotationConfig,
        display: Rotation,
        offset: Offset,
        overrides: Option<&ActualPositionOverrides>,
    ) -> Layout {
        let effective = display.effective(offset);
        let setter = config.setter_at(effective);
        let setter_front_row = setter.is_front_row();
        Layout {
            config,
            display,
            offset,
            effective,
            setter,
            setter_front_row,
            needs_penetration: setter.needs_penetration(),
            route: penetration_route(setter).copied(),
            status: status_text(effective.get(), setter, setter_front_row),
            players: resolve(config, display, offset, overrides),
        }
    }

    /// The record of the player currently standing at `position`.
    pub fn at(&self, position: Position) -> &PlayerRecord {
        &self.players[position.index()]
    }

    /// The setter's record.
    pub fn setter_record(&self) -> &PlayerRecord {
        self.at(self.setter)
    }
}
