mod cell;
mod coords;
mod live_cells;
mod patterns;
pub mod line;
pub mod placement;
pub mod simulation;

pub use cell::{Cell, Offset};
pub use coords::{GridDimensions, cell_to_pixel_origin, pixel_to_cell};
pub use live_cells::LiveCellStore;
pub use patterns::{Pattern, presets};
pub use line::{Bresenham, interpolate};
pub use placement::{PlacementShape, apply_placement, paint_stroke};
pub use simulation::{next_state, step, step_parallel};
