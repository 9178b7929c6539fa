use crate::error::{LifeError, Result};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Flat indices covered by the pattern with its top-left corner at (x, y)
    /// on a `size_x` by `size_y` grid. Cells falling outside are clipped.
    pub fn indices(&self, size_x: usize, size_y: usize, x: usize, y: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().filter_map(move |&(dx, dy)| {
            let (cx, cy) = (x.checked_add(dx)?, y.checked_add(dy)?);
            (cx < size_x && cy < size_y).then_some(cy * size_x + cx)
        })
    }

    /// Top-left position that centres the pattern on a grid, clamped to zero
    pub fn centred_origin(&self, size_x: usize, size_y: usize) -> (usize, usize) {
        (
            size_x.saturating_sub(self.width) / 2,
            size_y.saturating_sub(self.height) / 2,
        )
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Horizontal blinker, period 2
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (1, 0), (2, 0)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    pub fn pulsar() -> Pattern {
        // One quadrant, mirrored into the other three
        let quadrant = [
            (2, 0), (3, 0), (4, 0),
            (0, 2), (5, 2),
            (0, 3), (5, 3),
            (0, 4), (5, 4),
            (2, 5), (3, 5), (4, 5),
        ];
        let cells = quadrant
            .iter()
            .flat_map(|&(x, y)| [(x, y), (12 - x, y), (x, 12 - y), (12 - x, 12 - y)])
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Methuselah, stabilises after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                (0, 4), (0, 5), (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3), (35, 2), (35, 3),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            pulsar(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> Result<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LifeError::InvalidArgument(format!("unknown pattern {name:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_cells() {
        let gun = presets::glider_gun();
        assert_eq!((gun.width, gun.height), (36, 9));
        assert_eq!(gun.cells.len(), 36);

        let pulsar = presets::pulsar();
        assert_eq!((pulsar.width, pulsar.height), (13, 13));
        assert_eq!(pulsar.cells.len(), 48);
    }

    #[test]
    fn test_indices_are_clipped_at_edges() {
        let block = presets::block();
        let inside: Vec<_> = block.indices(4, 4, 1, 1).collect();
        assert_eq!(inside, vec![5, 6, 9, 10]);

        let clipped: Vec<_> = block.indices(4, 4, 3, 3).collect();
        assert_eq!(clipped, vec![15]);
    }

    #[test]
    fn test_centred_origin() {
        let blinker = presets::blinker();
        assert_eq!(blinker.centred_origin(9, 9), (3, 4));
        assert_eq!(presets::glider_gun().centred_origin(10, 10), (0, 0));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(presets::by_name("glider").unwrap().cells.len(), 5);
        assert!(matches!(presets::by_name("spaceship"), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_preset_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), len);
    }
}
