//! Response formatting.
//!
//! Turns a resolved `Layout` into the line-oriented `show` response:
//!
//! ```text
//! rotation 2 effective 2 offset 0 config standard view standard
//! setter position 1 row back penetration yes serving yes
//! player id 2 pos 1 role setter highlight yes x 75 y 68.75
//! ...
//! route from 1 start 75,68.75 control 80,47.5 end 63.33,31.25
//! path 75,68.75 ... 63.33,31.25
//! status Rotation 2: setter in back-row position 1, ...
//! showok
//! ```

use crate::court::Coord;
use crate::layout::{Layout, PlayerRecord, ViewMode};
use crate::route::PenetrationRoute;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Formats a coordinate as `x,y`.
pub fn format_coord(c: Coord) -> String {
    format!("{},{}", c.x, c.y)
}

/// Formats the header line describing the rotation state.
pub fn format_rotation(layout: &Layout, view: ViewMode) -> String {
    format!(
        "rotation {} effective {} offset {} config {} view {}",
        layout.display,
        layout.effective,
        layout.offset,
        layout.config,
        view.name()
    )
}

/// Formats the setter summary line.
pub fn format_setter(layout: &Layout, serving: bool) -> String {
    format!(
        "setter position {} row {} penetration {} serving {}",
        layout.setter,
        if layout.setter_front_row { "front" } else { "back" },
        yes_no(layout.needs_penetration),
        yes_no(serving)
    )
}

/// Formats one player line using the coordinate for `view`.
pub fn format_player(player: &PlayerRecord, view: ViewMode) -> String {
    let c = player.coord(view);
    format!(
        "player id {} pos {} role {} highlight {} x {} y {}",
        player.id,
        player.position,
        player.role.token(),
        yes_no(player.highlight),
        c.x,
        c.y
    )
}

/// Formats a penetration route line.
pub fn format_route(route: &PenetrationRoute) -> String {
    format!(
        "route from {} start {} control {} end {}",
        route.from,
        format_coord(route.start),
        format_coord(route.control),
        format_coord(route.end)
    )
}

/// Segments in the sampled `path` line.
pub const PATH_SEGMENTS: usize = 4;

/// Formats the sampled route curve as space-separated points.
pub fn format_path(route: &PenetrationRoute, segments: usize) -> String {
    let points: Vec<String> = route.sample(segments).into_iter().map(format_coord).collect();
    format!("path {}", points.join(" "))
}

/// Formats the full `show` response, without the trailing `showok`.
pub fn format_layout(layout: &Layout, view: ViewMode, serving: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(11);
    lines.push(format_rotation(layout, view));
    lines.push(format_setter(layout, serving));
    lines.extend(layout.players.iter().map(|p| format_player(p, view)));
    if let Some(route) = &layout.route {
        lines.push(format_route(route));
        lines.push(format_path(route, PATH_SEGMENTS));
    }
    lines.push(format!("status {}", layout.status));
    lines
}
