//! Court geometry and rotation primitives.
//!
//! Contains positions with their rows and standard coordinates, rotation
//! indices with their cyclic arithmetic, and player roles.

pub mod position;
pub mod role;
pub mod rotation;

pub use position::{
    is_front_row, needs_penetration, Coord, Position, ALL_POSITIONS, POSITION_COUNT,
};
pub use role::Role;
pub use rotation::{
    effective_rotation, next_rotation, prev_rotation, Offset, Rotation, ROTATION_COUNT,
};
