use super::Offset;

/// A named prefab that can be stamped onto the grid.
///
/// Offsets are relative to the matrix's top-left corner, not its center:
/// stamping at an anchor adds each offset to the anchor directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    group: String,
    width: usize,
    height: usize,
    offsets: Vec<Offset>,
}

impl Pattern {
    /// Derive a pattern from a row-major boolean matrix.
    ///
    /// Returns `None` for an empty matrix, an empty first row, or rows of
    /// unequal length.
    pub fn from_matrix<R: AsRef<[bool]>>(
        name: impl Into<String>,
        group: impl Into<String>,
        rows: &[R],
    ) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if width == 0 || rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        let offsets = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.as_ref()
                    .iter()
                    .enumerate()
                    .filter(|&(_, &alive)| alive)
                    .map(move |(x, _)| Offset::new(x as i32, y as i32))
            })
            .collect();
        Some(Self {
            name: name.into(),
            group: group.into(),
            width,
            height: rows.len(),
            offsets,
        })
    }

    /// Parse rows of `O` (alive) and `.` (dead). Any other character is dead.
    pub fn from_rows(name: impl Into<String>, group: impl Into<String>, rows: &[&str]) -> Option<Self> {
        let matrix: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c == 'O').collect())
            .collect();
        Self::from_matrix(name, group, &matrix)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Live cells relative to the top-left corner, row-major
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn population(&self) -> usize {
        self.offsets.len()
    }
}

/// Built-in prefab catalog, used when no pattern library is available
pub mod presets {
    use super::*;

    fn build(name: &str, group: &str, rows: &[&str]) -> Pattern {
        match Pattern::from_rows(name, group, rows) {
            Some(pattern) => pattern,
            None => unreachable!("built-in pattern {} is malformed", name),
        }
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        build("Glider", "Spaceships", &[
            ".O.",
            "..O",
            "OOO",
        ])
    }

    /// Lightweight spaceship
    pub fn lwss() -> Pattern {
        build("LWSS", "Spaceships", &[
            ".OOOO",
            "O...O",
            "....O",
            "O..O.",
        ])
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        build("Pulsar", "Oscillators", &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ])
    }

    /// Gosper glider gun - emits a glider every 30 generations
    pub fn gosper_gun() -> Pattern {
        build("Gosper Gun", "Guns", &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O...OO.............OO",
            ".OO.......O.....O.OO................",
            ".OO.......O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "............O...O...................",
            ".............OO.....................",
        ])
    }

    /// Get all built-in patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), lwss(), pulsar(), gosper_gun()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_row_major_from_corner() {
        let p = Pattern::from_matrix("L", "", &[vec![true, false], vec![true, true]]).unwrap();
        assert_eq!(p.offsets(), &[Offset::new(0, 0), Offset::new(0, 1), Offset::new(1, 1)]);
        assert_eq!((p.width(), p.height()), (2, 2));
    }

    #[test]
    fn test_malformed_matrices_rejected() {
        let empty: [Vec<bool>; 0] = [];
        assert!(Pattern::from_matrix("e", "", &empty).is_none());
        assert!(Pattern::from_matrix("e", "", &[Vec::<bool>::new()]).is_none());
        assert!(Pattern::from_matrix("r", "", &[vec![true, true], vec![true]]).is_none());
    }

    #[test]
    fn test_all_dead_matrix_is_valid() {
        let p = Pattern::from_matrix("blank", "", &vec![vec![false; 3]; 2]).unwrap();
        assert_eq!(p.population(), 0);
        assert_eq!((p.width(), p.height()), (3, 2));
    }

    #[test]
    fn test_glider_offsets() {
        let offsets: Vec<_> = presets::glider().offsets().iter().map(|o| (o.dx, o.dy)).collect();
        assert_eq!(offsets, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_preset_sizes() {
        let sizes: Vec<_> = presets::all_patterns()
            .iter()
            .map(|p| (p.name().to_string(), p.width(), p.height(), p.population()))
            .collect();
        assert_eq!(sizes, vec![
            ("Glider".to_string(), 3, 3, 5),
            ("LWSS".to_string(), 5, 4, 9),
            ("Pulsar".to_string(), 13, 13, 48),
            ("Gosper Gun".to_string(), 36, 9, 36),
        ]);
    }
}
