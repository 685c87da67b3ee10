//! Precomputed layout tables.
//!
//! Resolves every (offset, display rotation) pair for one configuration and
//! writes them as JSON lines, so a presentation layer can load all frames up
//! front instead of calling into the engine.

use std::io::Write;

use crate::config::RotationConfig;
use crate::court::{Offset, Rotation};
use crate::layout::{ActualPositionOverrides, Layout};

/// All 36 layouts, ordered by offset then display rotation.
pub fn all_layouts(
    config: RotationConfig,
    overrides: Option<&ActualPositionOverrides>,
) -> Vec<Layout> {
    Offset::all()
        .flat_map(|offset| {
            Rotation::all().map(move |rotation| Layout::resolve(config, rotation, offset, overrides))
        })
        .collect()
}

/// Writes one JSON object per line.
pub fn write_jsonl<W: Write>(layouts: &[Layout], out: &mut W) -> std::io::Result<()> {
    for layout in layouts {
        serde_json::to_writer(&mut *out, layout)?;
        writeln!(out)?;
    }
    out.flush()
}
