//! Penetration routes.
//!
//! A back-row setter runs to the front-row setting spot before the ball is
//! passed. Each route is a quadratic curve from the setter's position to the
//! target, bending around the front-row players standing in the way. The
//! core supplies geometry only; drawing is up to the shell.

use serde::Serialize;

use crate::court::{Coord, Position};

/// Where the setter sets from, just right of middle at the net.
pub const PENETRATION_TARGET: Coord = Coord::new(63.33, 31.25);

/// A penetration path from one back-row position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PenetrationRoute {
    pub from: Position,
    pub start: Coord,
    pub end: Coord,
    /// Quadratic curve control point.
    pub control: Coord,
    pub description: &'static str,
}

const FROM_RIGHT_BACK: PenetrationRoute = PenetrationRoute {
    from: Position::One,
    start: Coord::new(75.0, 68.75),
    end: PENETRATION_TARGET,
    control: Coord::new(80.0, 47.5),
    description: "quick penetration from the right-rear",
};

const FROM_MIDDLE_BACK: PenetrationRoute = PenetrationRoute {
    from: Position::Six,
    start: Coord::new(50.0, 75.0),
    end: Coord::new(50.0, 31.25),
    control: Coord::new(50.0, 52.5),
    description: "straight penetration from directly behind",
};

const FROM_LEFT_BACK: PenetrationRoute = PenetrationRoute {
    from: Position::Five,
    start: Coord::new(25.0, 68.75),
    end: Coord::new(36.67, 31.25),
    control: Coord::new(20.0, 47.5),
    description: "penetration from the left-rear, the longest path",
};

impl PenetrationRoute {
    /// Point on the curve at parameter `t`, clamped to `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Coord {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        Coord::new(
            u * u * self.start.x + 2.0 * u * t * self.control.x + t * t * self.end.x,
            u * u * self.start.y + 2.0 * u * t * self.control.y + t * t * self.end.y,
        )
    }

    /// `segments + 1` evenly spaced points from start to end.
    pub fn sample(&self, segments: usize) -> Vec<Coord> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }
}

/// Returns the route for a back-row position, or `None` in the front row.
pub fn penetration_route(position: Position) -> Option<&'static PenetrationRoute> {
    match position {
        Position::One => Some(&FROM_RIGHT_BACK),
        Position::Six => Some(&FROM_MIDDLE_BACK),
        Position::Five => Some(&FROM_LEFT_BACK),
        Position::Two | Position::Three | Position::Four => None,
    }
}
