//! Setterline rotation engine library.
//!
//! Tracks a volleyball setter through the six service rotations: where the
//! setter stands, whether a penetration run to the front row is needed, and
//! the full court layout for each rotation. The core (`court`, `config`,
//! `layout`, `route`, `status`) is pure; `session` and `protocol` wrap it
//! for the `setterline` binary.

pub mod config;
pub mod court;
pub mod error;
pub mod layout;
pub mod logging;
pub mod protocol;
pub mod route;
pub mod session;
pub mod status;
pub mod tables;

pub use config::{HighlightRule, RotationConfig};
pub use court::{Coord, Offset, Position, Role, Rotation};
pub use error::DomainError;
pub use layout::{resolve_layout, ActualPositionOverrides, Layout, PlayerRecord, ViewMode};
pub use route::{penetration_route, PenetrationRoute};
pub use status::status_text;
