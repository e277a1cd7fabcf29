use std::ops::{Add, Sub};

/// Cell is a grid coordinate. A cell is alive iff it is in the live set;
/// the coordinate itself carries no state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8 Moore neighbors, unclipped
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| Cell::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Relative displacement between two cells
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl Add<Offset> for Cell {
    type Output = Cell;

    fn add(self, rhs: Offset) -> Cell {
        Cell::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub for Cell {
    type Output = Offset;

    fn sub(self, rhs: Cell) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_eight_distinct() {
        let mut n: Vec<_> = Cell::new(5, 5).neighbors().collect();
        n.sort();
        n.dedup();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::new(5, 5)));
        assert!(n.contains(&Cell::new(4, 4)));
        assert!(n.contains(&Cell::new(6, 6)));
    }

    #[test]
    fn test_offset_arithmetic() {
        let a = Cell::new(3, 7);
        let b = Cell::new(5, 4);
        let d = b - a;
        assert_eq!(d, Offset::new(2, -3));
        assert_eq!(a + d, b);
        assert!((a - a).is_zero());
    }
}
