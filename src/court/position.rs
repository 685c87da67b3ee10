//! Court positions and their standard coordinates.
//!
//! Positions are numbered the way referees number them, seen from above
//! with the net at the top:
//!
//! ```text
//!   4  3  2   (front row)
//!   5  6  1   (back row)
//! ```
//!
//! Coordinates are percentages of the court container, so the presentation
//! layer can scale them to any surface.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The number of positions on one side of the court.
pub const POSITION_COUNT: usize = 6;

/// A point on the court in percent of the container's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f32,
    pub y: f32,
}

impl Coord {
    pub const fn new(x: f32, y: f32) -> Self {
        Coord { x, y }
    }
}

/// One of the six rotational positions.
///
/// The `#[repr(u8)]` discriminant is the position number, so
/// `position as usize - 1` indexes the per-position tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Position {
    One = 1,   // right back, serving position
    Two = 2,   // right front
    Three = 3, // middle front
    Four = 4,  // left front
    Five = 5,  // left back
    Six = 6,   // middle back
}

/// All positions in ascending order.
pub const ALL_POSITIONS: [Position; POSITION_COUNT] = [
    Position::One,
    Position::Two,
    Position::Three,
    Position::Four,
    Position::Five,
    Position::Six,
];

/// Standard coordinates indexed by `Position::index()`.
const STANDARD_COORDS: [Coord; POSITION_COUNT] = [
    Coord::new(75.0, 68.75),
    Coord::new(75.0, 31.25),
    Coord::new(50.0, 25.0),
    Coord::new(25.0, 31.25),
    Coord::new(25.0, 68.75),
    Coord::new(50.0, 75.0),
];

impl Position {
    /// Returns the position for a number in 1..=6.
    pub fn from_number(n: u8) -> Option<Position> {
        match n {
            1..=6 => Some(ALL_POSITIONS[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Returns the referee number of this position.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based table index.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// True for positions 2, 3 and 4, the three nearest the net.
    pub const fn is_front_row(self) -> bool {
        matches!(self, Position::Two | Position::Three | Position::Four)
    }

    /// True for positions 1, 5 and 6. A setter standing here must penetrate
    /// to the front row before setting.
    pub const fn needs_penetration(self) -> bool {
        matches!(self, Position::One | Position::Five | Position::Six)
    }

    /// The standard coordinate of this position.
    pub const fn standard_coord(self) -> Coord {
        STANDARD_COORDS[self.index()]
    }
}

impl From<Position> for u8 {
    fn from(p: Position) -> u8 {
        p.number()
    }
}

impl TryFrom<u8> for Position {
    type Error = DomainError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Position::from_number(n).ok_or(DomainError::Position(n))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Membership test against the front row {2, 3, 4}.
pub fn is_front_row(position: Position) -> bool {
    position.is_front_row()
}

/// Membership test against the back row {1, 5, 6}.
pub fn needs_penetration(position: Position) -> bool {
    position.needs_penetration()
}
