use std::collections::HashSet;

use super::{Cell, GridDimensions};

/// Sparse set of live cells.
///
/// Only live cells are stored, so every operation is proportional to the
/// population, never to the grid area.
#[derive(Clone, Debug, Default)]
pub struct LiveCellStore {
    cells: HashSet<Cell>,
    changed: bool,
}

impl LiveCellStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns true iff the cell was newly inserted
    pub fn add(&mut self, cell: Cell) -> bool {
        let inserted = self.cells.insert(cell);
        self.changed |= inserted;
        inserted
    }

    /// Returns true iff the cell was previously present
    pub fn remove(&mut self, cell: Cell) -> bool {
        let removed = self.cells.remove(&cell);
        self.changed |= removed;
        removed
    }

    /// Add or remove depending on `alive`; true iff membership changed
    pub fn set(&mut self, cell: Cell, alive: bool) -> bool {
        if alive { self.add(cell) } else { self.remove(cell) }
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.changed |= !self.cells.is_empty();
        self.cells.clear();
    }

    /// Same membership, ignoring the change flag
    pub fn set_equals(&self, other: &LiveCellStore) -> bool {
        self.cells == other.cells
    }

    /// Drop every cell outside `dims`. Returns how many were dropped.
    pub fn retain_in(&mut self, dims: &GridDimensions) -> usize {
        let before = self.cells.len();
        self.cells.retain(|&cell| dims.contains(cell));
        let dropped = before - self.cells.len();
        self.changed |= dropped > 0;
        dropped
    }

    /// Replace the whole content with `other`, marking the store changed
    /// if membership differs.
    pub fn replace(&mut self, other: LiveCellStore) {
        if !self.set_equals(&other) {
            self.changed = true;
        }
        self.cells = other.cells;
    }

    /// Has the content changed since the last call? Clears the flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl PartialEq for LiveCellStore {
    fn eq(&self, other: &Self) -> bool {
        self.set_equals(other)
    }
}

impl Eq for LiveCellStore {}

impl FromIterator<Cell> for LiveCellStore {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
            changed: false,
        }
    }
}

impl Extend<Cell> for LiveCellStore {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.add(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_report_membership_change() {
        let mut store = LiveCellStore::new();
        assert!(store.add(Cell::new(1, 2)));
        assert!(!store.add(Cell::new(1, 2)));
        assert_eq!(store.count(), 1);
        assert!(store.contains(Cell::new(1, 2)));

        assert!(store.remove(Cell::new(1, 2)));
        assert!(!store.remove(Cell::new(1, 2)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_changed_flag() {
        let mut store = LiveCellStore::new();
        assert!(!store.take_changed());

        store.add(Cell::new(0, 0));
        assert!(store.take_changed());
        assert!(!store.take_changed());

        // No-op mutations leave the flag alone
        store.add(Cell::new(0, 0));
        store.remove(Cell::new(9, 9));
        assert!(!store.take_changed());

        store.clear();
        assert!(store.take_changed());
        store.clear();
        assert!(!store.take_changed());
    }

    #[test]
    fn test_iter_is_restartable() {
        let store: LiveCellStore = [(0, 0), (1, 1), (2, 2)].into_iter().map(Cell::from).collect();
        assert_eq!(store.iter().count(), 3);
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    fn test_set_equals_ignores_order() {
        let a: LiveCellStore = [(0, 0), (5, 1), (2, 9)].into_iter().map(Cell::from).collect();
        let b: LiveCellStore = [(2, 9), (0, 0), (5, 1)].into_iter().map(Cell::from).collect();
        assert!(a.set_equals(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_retain_in_prunes_out_of_bounds() {
        let dims = GridDimensions::new(5, 5).unwrap();
        let mut store: LiveCellStore =
            [(0, 0), (4, 4), (5, 0), (-1, 2), (2, 7)].into_iter().map(Cell::from).collect();
        assert_eq!(store.retain_in(&dims), 3);
        assert_eq!(store.count(), 2);
        assert!(store.iter().all(|c| dims.contains(c)));
    }
}
