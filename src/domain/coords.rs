//! Pixel <-> cell mapping and grid sizing.
//!
//! Pixel positions here are canvas-local: (0, 0) is the top-left corner of
//! the drawn grid, not of the window.

use super::Cell;

/// Size of the visible grid. Width and height are always odd so that a
/// unique center cell exists.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridDimensions {
    width: i32,
    height: i32,
    center: Cell,
}

impl GridDimensions {
    /// Build dimensions directly, forcing both extents odd.
    /// Returns `None` if either extent ends up non-positive.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        let width = force_odd(width);
        let height = force_odd(height);
        (width > 0 && height > 0).then(|| Self {
            width,
            height,
            center: Cell::new(width / 2, height / 2),
        })
    }

    /// How many cells of `cell_size` fit in the viewport, forced odd.
    pub fn compute(viewport_width: f32, viewport_height: f32, cell_size: f32) -> Option<Self> {
        if !is_positive(viewport_width) || !is_positive(viewport_height) || !is_positive(cell_size) {
            return None;
        }
        let width = (viewport_width / cell_size).floor();
        let height = (viewport_height / cell_size).floor();
        if width > i32::MAX as f32 || height > i32::MAX as f32 {
            return None;
        }
        Self::new(width as i32, height as i32)
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn center(&self) -> Cell {
        self.center
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Pixel size of the drawn grid
    pub fn canvas_size(&self, cell_size: f32) -> (f32, f32) {
        (self.width as f32 * cell_size, self.height as f32 * cell_size)
    }

    /// Top-left offset that centers the canvas inside the viewport
    pub fn canvas_origin(&self, viewport: (f32, f32), cell_size: f32) -> (f32, f32) {
        let (w, h) = self.canvas_size(cell_size);
        ((viewport.0 - w) / 2.0, (viewport.1 - h) / 2.0)
    }

    /// Iterate every in-bounds cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }
}

/// Map a canvas-local pixel to the cell under it.
///
/// Returns `None` for invalid geometry or positions outside the grid; near
/// the edges this is the common case, not an error.
pub fn pixel_to_cell(pixel: (f32, f32), cell_size: f32, dims: &GridDimensions) -> Option<Cell> {
    let (px, py) = pixel;
    if !is_positive(cell_size) || !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
        return None;
    }
    let x = (px / cell_size).floor();
    let y = (py / cell_size).floor();
    if x >= dims.width as f32 || y >= dims.height as f32 {
        return None;
    }
    let cell = Cell::new(x as i32, y as i32);
    dims.contains(cell).then_some(cell)
}

/// Top-left pixel of a cell
pub fn cell_to_pixel_origin(cell: Cell, cell_size: f32) -> (f32, f32) {
    (cell.x as f32 * cell_size, cell.y as f32 * cell_size)
}

/// Non-positive extents are passed through for the caller to reject
const fn force_odd(n: i32) -> i32 {
    if n > 0 && n % 2 == 0 { n - 1 } else { n }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_odd() {
        let dims = GridDimensions::compute(200.0, 100.0, 10.0).unwrap();
        assert_eq!(dims.width(), 19);
        assert_eq!(dims.height(), 9);
        assert_eq!(dims.center(), Cell::new(9, 4));

        let dims = GridDimensions::compute(215.0, 119.0, 10.0).unwrap();
        assert_eq!((dims.width(), dims.height()), (21, 11));
        assert_eq!(dims.center(), Cell::new(10, 5));
    }

    #[test]
    fn test_fractional_cell_size() {
        let dims = GridDimensions::compute(100.0, 100.0, 7.5).unwrap();
        // floor(13.33) = 13, already odd
        assert_eq!(dims.width(), 13);
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(GridDimensions::compute(0.0, 100.0, 10.0).is_none());
        assert!(GridDimensions::compute(100.0, -1.0, 10.0).is_none());
        assert!(GridDimensions::compute(100.0, 100.0, 0.0).is_none());
        assert!(GridDimensions::compute(100.0, 100.0, f32::NAN).is_none());
        // Viewport smaller than a single cell
        assert!(GridDimensions::compute(5.0, 5.0, 10.0).is_none());
        // Two cells wide rounds down to one
        assert_eq!(GridDimensions::compute(20.0, 20.0, 10.0).unwrap().width(), 1);
    }

    #[test]
    fn test_new_rejects_non_positive_extents() {
        assert!(GridDimensions::new(i32::MIN, 5).is_none());
        assert!(GridDimensions::new(5, i32::MIN).is_none());
        assert!(GridDimensions::new(0, 5).is_none());
        assert!(GridDimensions::new(-4, 5).is_none());
        let dims = GridDimensions::new(i32::MAX, 1).unwrap();
        assert_eq!(dims.width(), i32::MAX);
    }

    #[test]
    fn test_pixel_to_cell_bounds() {
        let dims = GridDimensions::new(11, 11).unwrap();
        assert_eq!(pixel_to_cell((0.0, 0.0), 10.0, &dims), Some(Cell::new(0, 0)));
        assert_eq!(pixel_to_cell((109.9, 55.0), 10.0, &dims), Some(Cell::new(10, 5)));
        assert_eq!(pixel_to_cell((110.0, 5.0), 10.0, &dims), None);
        assert_eq!(pixel_to_cell((-0.1, 5.0), 10.0, &dims), None);
        assert_eq!(pixel_to_cell((f32::NAN, 5.0), 10.0, &dims), None);
        assert_eq!(pixel_to_cell((5.0, f32::INFINITY), 10.0, &dims), None);
        assert_eq!(pixel_to_cell((5.0, 5.0), 0.0, &dims), None);
        assert_eq!(pixel_to_cell((5.0, 5.0), -3.0, &dims), None);
    }

    #[test]
    fn test_round_trip_inside_cell() {
        let dims = GridDimensions::new(31, 21).unwrap();
        for &size in &[1.0f32, 4.0, 7.5, 20.0] {
            for cell in [Cell::new(0, 0), Cell::new(15, 10), Cell::new(30, 20), Cell::new(7, 19)] {
                let (ox, oy) = cell_to_pixel_origin(cell, size);
                for frac in [0.0f32, 0.25, 0.5, 0.9] {
                    let eps = frac * size;
                    assert_eq!(
                        pixel_to_cell((ox + eps, oy + eps), size, &dims),
                        Some(cell),
                        "size {} cell {:?} eps {}", size, cell, eps
                    );
                }
            }
        }
    }

    #[test]
    fn test_canvas_is_centered() {
        let dims = GridDimensions::compute(205.0, 100.0, 10.0).unwrap();
        let (ox, oy) = dims.canvas_origin((205.0, 100.0), 10.0);
        assert_eq!((ox, oy), (7.5, 5.0));
    }
}
