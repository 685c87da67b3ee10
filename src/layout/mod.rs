//! Court layout resolution and coordinate overrides.

pub mod overrides;
pub mod resolver;

pub use overrides::{ActualPositionOverrides, OverridesError};
pub use resolver::{base_position, resolve, resolve_layout, Layout, PlayerRecord, ViewMode};
