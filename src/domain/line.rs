//! Bresenham line walk between two cells.
//!
//! Pointer samples arrive far apart when the mouse moves quickly; walking
//! the line between consecutive samples keeps a stroke gap-free.

use super::Cell;

/// Iterator over every cell on the line from `start` to `end`, both
/// endpoints included.
#[derive(Clone, Debug)]
pub struct Bresenham {
    x: i32,
    y: i32,
    end: Cell,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Bresenham {
    pub fn new(start: Cell, end: Cell) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        Self {
            x: start.x,
            y: start.y,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.done {
            return None;
        }
        let current = Cell::new(self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.end.x - self.x).unsigned_abs().max((self.end.y - self.y).unsigned_abs()) as usize + 1;
        (remaining, Some(remaining))
    }
}

/// Cells touched moving from `start` to `end`. A stroke's first sample has
/// no start and yields only `end`.
pub fn interpolate(start: Option<Cell>, end: Cell) -> Bresenham {
    Bresenham::new(start.unwrap_or(end), end)
}
