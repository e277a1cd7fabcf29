//! Keeps a drawing anchored to the grid center when the viewport or the
//! cell size changes.

use macroquad::logging::debug;

use crate::domain::{GridDimensions, LiveCellStore, Offset};

/// Shift every live cell by `shift`, dropping those that land outside
/// `dims`. Dropped cells are gone for good, never clamped.
pub fn recenter(live: &LiveCellStore, shift: Offset, dims: &GridDimensions) -> LiveCellStore {
    live.iter()
        .map(|cell| cell + shift)
        .filter(|&cell| dims.contains(cell))
        .collect()
}

/// Recompute the grid for a new viewport or cell size and move the live
/// cells so the center cell stays put.
///
/// Returns the new dimensions, or `None` (leaving `live` untouched) when
/// the geometry is invalid. With no previous dimensions there is nothing to
/// anchor to and cells are only pruned.
pub fn resize(
    live: &mut LiveCellStore,
    old: Option<GridDimensions>,
    viewport: (f32, f32),
    cell_size: f32,
) -> Option<GridDimensions> {
    let new = GridDimensions::compute(viewport.0, viewport.1, cell_size)?;
    let shift = old.map_or(Offset::ZERO, |old| new.center() - old.center());

    if shift.is_zero() {
        let dropped = live.retain_in(&new);
        if dropped > 0 {
            debug!("resize pruned {} cells", dropped);
        }
    } else {
        let before = live.count();
        let moved = recenter(live, shift, &new);
        live.replace(moved);
        debug!(
            "resize {}x{} shift ({}, {}) kept {}/{} cells",
            new.width(),
            new.height(),
            shift.dx,
            shift.dy,
            live.count(),
            before
        );
    }
    Some(new)
}
