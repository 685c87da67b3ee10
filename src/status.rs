//! Human-readable status lines.
//!
//! The wording is for display only, but the three branches (ideal front-row
//! spot, other front-row spot, back row) are stable.

use crate::court::Position;
use crate::route::penetration_route;

/// Describes the setter's situation in `rotation`.
///
/// `is_front_row` must agree with `position`.
pub fn status_text(rotation: u8, position: Position, is_front_row: bool) -> String {
    debug_assert_eq!(
        is_front_row,
        position.is_front_row(),
        "row flag disagrees with position {}",
        position
    );
    match penetration_route(position) {
        Some(route) if !is_front_row => format!(
            "Rotation {}: setter in back-row position {}, penetration required! {}",
            rotation, position, route.description
        ),
        _ if position == Position::Two => format!(
            "Rotation {}: setter in front-row position {}, ideal setting position, no penetration needed",
            rotation, position
        ),
        _ => format!(
            "Rotation {}: setter in front-row position {}, slightly off-position, no penetration needed",
            rotation, position
        ),
    }
}
