use std::collections::HashMap;

use rayon::prelude::*;

use super::{Cell, GridDimensions, LiveCellStore};

/// Conway's rule (B3/S23):
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Accumulate live-neighbor counts for every in-bounds cell adjacent to a
/// live cell. Edges are hard: neighbors outside `dims` are never keys.
fn count_neighbors(live: impl Iterator<Item = Cell>, dims: &GridDimensions) -> HashMap<Cell, u8> {
    let mut counts = HashMap::new();
    for neighbor in live.flat_map(Cell::neighbors).filter(|&n| dims.contains(n)) {
        *counts.entry(neighbor).or_insert(0u8) += 1;
    }
    counts
}

fn apply_rule(counts: HashMap<Cell, u8>, current: &LiveCellStore) -> LiveCellStore {
    counts
        .into_iter()
        .filter(|&(cell, n)| next_state(current.contains(cell), n))
        .map(|(cell, _)| cell)
        .collect()
}

/// Compute the next generation.
///
/// A live cell with zero live neighbors never appears as a key and dies,
/// which is what the rule says anyway. The result depends only on the
/// accumulated counts, never on iteration order.
pub fn step(current: &LiveCellStore, dims: &GridDimensions) -> LiveCellStore {
    apply_rule(count_neighbors(current.iter(), dims), current)
}

/// Parallel variant of [`step`] using rayon. Each worker builds a partial
/// count map which are then summed, so the output is identical to `step`.
pub fn step_parallel(current: &LiveCellStore, dims: &GridDimensions) -> LiveCellStore {
    let live: Vec<Cell> = current.iter().collect();
    let counts = live
        .par_chunks(1024)
        .map(|chunk| count_neighbors(chunk.iter().copied(), dims))
        .reduce(HashMap::new, |mut acc, partial| {
            for (cell, n) in partial {
                *acc.entry(cell).or_insert(0) += n;
            }
            acc
        });
    apply_rule(counts, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn store(cells: &[(i32, i32)]) -> LiveCellStore {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_rule_table() {
        // Underpopulation
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        // Survival
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        // Overpopulation
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));
        // Reproduction
        assert!(next_state(false, 3));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 6));
    }

    #[test]
    fn test_blinker_oscillates() {
        let dims = GridDimensions::new(11, 11).unwrap();
        let horizontal = store(&[(4, 5), (5, 5), (6, 5)]);
        let vertical = store(&[(5, 4), (5, 5), (5, 6)]);

        let next = step(&horizontal, &dims);
        assert_eq!(next, vertical);
        assert_eq!(step(&next, &dims), horizontal);
    }

    #[test]
    fn test_block_still_life() {
        let dims = GridDimensions::new(9, 9).unwrap();
        let block = store(&[(4, 4), (5, 4), (4, 5), (5, 5)]);
        assert_eq!(step(&block, &dims), block);
    }

    #[test]
    fn test_glider_translates_after_four_steps() {
        let dims = GridDimensions::new(41, 41).unwrap();
        let glider = presets::glider();
        let origin = Cell::new(10, 10);
        let start: LiveCellStore = glider.offsets().iter().map(|&o| origin + o).collect();
        assert_eq!(start, store(&[(11, 10), (12, 11), (10, 12), (11, 12), (12, 12)]));

        let mut generation = start.clone();
        for _ in 0..4 {
            generation = step(&generation, &dims);
        }
        let expected: LiveCellStore = start.iter().map(|c| Cell::new(c.x + 1, c.y + 1)).collect();
        assert_eq!(generation, expected);
    }

    #[test]
    fn test_empty_is_fixed_point() {
        let dims = GridDimensions::new(15, 15).unwrap();
        // A lone pair dies in one step
        let dying = store(&[(3, 3), (4, 3)]);
        let empty = step(&dying, &dims);
        assert!(empty.is_empty());
        assert!(step(&empty, &dims).is_empty());
        assert!(step(&step(&empty, &dims), &dims).is_empty());
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Blinker against the left edge: the cell at x = -1 cannot be born
        let dims = GridDimensions::new(5, 5).unwrap();
        let vertical = store(&[(0, 1), (0, 2), (0, 3)]);
        let next = step(&vertical, &dims);
        assert_eq!(next, store(&[(0, 2), (1, 2)]));
        assert!(next.iter().all(|c| dims.contains(c)));

        // Nothing appears on the opposite edge
        let corner = store(&[(0, 0), (1, 0), (0, 1)]);
        let next = step(&corner, &dims);
        assert_eq!(next, store(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_result_independent_of_input_order() {
        let dims = GridDimensions::new(61, 61).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut cells: Vec<Cell> = presets::gosper_gun()
            .offsets()
            .iter()
            .map(|&o| Cell::new(10, 10) + o)
            .chain(presets::pulsar().offsets().iter().map(|&o| Cell::new(30, 40) + o))
            .collect();

        let reference = step(&cells.iter().copied().collect(), &dims);
        for _ in 0..20 {
            cells.shuffle(&mut rng);
            let mut shuffled = LiveCellStore::new();
            for &c in &cells {
                shuffled.add(c);
            }
            assert_eq!(step(&shuffled, &dims), reference);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let dims = GridDimensions::new(201, 151).unwrap();
        let mut current: LiveCellStore = (0..5000)
            .map(|i| Cell::new((i * 7) % 201, (i * 13) % 151))
            .collect();

        for _ in 0..5 {
            let serial = step(&current, &dims);
            let parallel = step_parallel(&current, &dims);
            assert_eq!(serial, parallel);
            current = serial;
        }
    }
}
