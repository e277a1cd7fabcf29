use std::sync::Arc;

use super::{Cell, GridDimensions, LiveCellStore, Offset, Pattern, line::interpolate};

/// What a single paint sample applies around its anchor cell
#[derive(Clone, Debug, PartialEq)]
pub enum PlacementShape {
    /// (2r+1)×(2r+1) square centered on the anchor
    Brush { radius: u32 },
    /// Prefab offsets added to the anchor
    Prefab(Arc<Pattern>),
}

impl PlacementShape {
    pub const fn brush(radius: u32) -> Self {
        PlacementShape::Brush { radius }
    }

    /// Concrete in-bounds cells covered by this shape at `anchor`
    pub fn cells<'a>(&'a self, anchor: Cell, dims: &'a GridDimensions) -> Box<dyn Iterator<Item = Cell> + 'a> {
        match self {
            PlacementShape::Brush { radius } => {
                // Clip the square up front so huge radii don't walk dead space
                let r = (*radius).min(i32::MAX as u32) as i32;
                let x0 = anchor.x.saturating_sub(r).max(0);
                let x1 = anchor.x.saturating_add(r).min(dims.width() - 1);
                let y0 = anchor.y.saturating_sub(r).max(0);
                let y1 = anchor.y.saturating_add(r).min(dims.height() - 1);
                Box::new((y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| Cell::new(x, y))))
            }
            PlacementShape::Prefab(pattern) => Box::new(
                pattern
                    .offsets()
                    .iter()
                    .map(move |&offset: &Offset| anchor + offset)
                    .filter(move |&cell| dims.contains(cell)),
            ),
        }
    }
}

/// Add (or remove) every cell of `shape` at `anchor`.
/// Returns true iff at least one cell's membership changed.
pub fn apply_placement(
    store: &mut LiveCellStore,
    shape: &PlacementShape,
    anchor: Cell,
    dims: &GridDimensions,
    add: bool,
) -> bool {
    shape
        .cells(anchor, dims)
        .fold(false, |changed, cell| store.set(cell, add) | changed)
}

/// One segment of a paint gesture: walk from the previous sample to the
/// current one and apply the shape at every cell on the way.
pub fn paint_stroke(
    store: &mut LiveCellStore,
    shape: &PlacementShape,
    start: Option<Cell>,
    end: Cell,
    dims: &GridDimensions,
    add: bool,
) -> bool {
    interpolate(start, end).fold(false, |changed, anchor| {
        apply_placement(store, shape, anchor, dims, add) | changed
    })
}
