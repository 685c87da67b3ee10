//! Rotation indices and starting-position offsets.
//!
//! A team rotates one step each time it wins back the serve, so rotations
//! form a cycle of six. The offset shifts which underlying rotation the
//! user's "rotation 1" refers to.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The number of rotations in a full cycle.
pub const ROTATION_COUNT: u8 = 6;

/// A rotation index in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Rotation(u8);

/// A cyclic shift in 0..=5 applied to the display rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Offset(u8);

impl Rotation {
    pub const FIRST: Rotation = Rotation(1);

    pub fn new(n: u8) -> Result<Rotation, DomainError> {
        if (1..=ROTATION_COUNT).contains(&n) {
            Ok(Rotation(n))
        } else {
            Err(DomainError::Rotation(n))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based table index.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The following rotation; 6 wraps to 1.
    pub const fn next(self) -> Rotation {
        if self.0 == ROTATION_COUNT {
            Rotation(1)
        } else {
            Rotation(self.0 + 1)
        }
    }

    /// The preceding rotation; 1 wraps to 6.
    pub const fn prev(self) -> Rotation {
        if self.0 == 1 {
            Rotation(ROTATION_COUNT)
        } else {
            Rotation(self.0 - 1)
        }
    }

    /// Applies `offset` to this display rotation.
    pub const fn effective(self, offset: Offset) -> Rotation {
        Rotation((self.0 - 1 + offset.0) % ROTATION_COUNT + 1)
    }

    /// All rotations in ascending order.
    pub fn all() -> impl Iterator<Item = Rotation> {
        (1..=ROTATION_COUNT).map(Rotation)
    }
}

impl Offset {
    pub const ZERO: Offset = Offset(0);

    pub fn new(n: u8) -> Result<Offset, DomainError> {
        if n < ROTATION_COUNT {
            Ok(Offset(n))
        } else {
            Err(DomainError::Offset(n))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// All offsets in ascending order.
    pub fn all() -> impl Iterator<Item = Offset> {
        (0..ROTATION_COUNT).map(Offset)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::FIRST
    }
}

impl From<Rotation> for u8 {
    fn from(r: Rotation) -> u8 {
        r.0
    }
}

impl TryFrom<u8> for Rotation {
    type Error = DomainError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Rotation::new(n)
    }
}

impl From<Offset> for u8 {
    fn from(o: Offset) -> u8 {
        o.0
    }
}

impl TryFrom<u8> for Offset {
    type Error = DomainError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Offset::new(n)
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes `((display - 1 + offset) mod 6) + 1`.
pub fn effective_rotation(display: u8, offset: u8) -> Result<u8, DomainError> {
    let display = Rotation::new(display)?;
    let offset = Offset::new(offset)?;
    Ok(display.effective(offset).get())
}

/// Cyclic successor: 6 wraps to 1.
pub fn next_rotation(r: u8) -> u8 {
    if r == ROTATION_COUNT {
        1
    } else {
        r + 1
    }
}

/// Cyclic predecessor: 1 wraps to 6.
pub fn prev_rotation(r: u8) -> u8 {
    if r == 1 {
        ROTATION_COUNT
    } else {
        r - 1
    }
}
