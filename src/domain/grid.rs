use super::{Cell, Direction};
use crate::error::{LifeError, Result};

/// Grid owns every cell of the board in row-major order and wires
/// each cell to its neighbours. Edges are hard boundaries: nothing wraps.
/// The topology is fixed once built; only liveness changes afterwards.
#[derive(Clone, Debug)]
pub struct Grid {
    size_x: usize,
    size_y: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a `size_x` by `size_y` grid, asking `alive` for the initial
    /// state of every index. Fails without allocating on bad sizes.
    pub fn build(size_x: usize, size_y: usize, alive: impl Fn(usize) -> bool) -> Result<Self> {
        let len = checked_len(size_x, size_y)?;
        let mut cells: Vec<Cell> = (0..len).map(|i| Cell::new(i, alive(i))).collect();
        wire(&mut cells, size_x, size_y);
        Ok(Self { size_x, size_y, cells })
    }

    /// Build a grid with every cell dead
    pub fn empty(size_x: usize, size_y: usize) -> Result<Self> {
        Self::build(size_x, size_y, |_| false)
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    pub const fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to a flat index
    pub const fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size_x && y < self.size_y {
            Some(y * self.size_x + x)
        } else {
            None
        }
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index_of(x, y).and_then(|i| self.cells.get(i))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Full recount of alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Rebuild the grid with new dimensions. Cells inside the overlapping
    /// region keep their liveness and are renumbered in place; new cells start dead.
    pub fn resize(&mut self, size_x: usize, size_y: usize) -> Result<()> {
        let len = checked_len(size_x, size_y)?;
        let (old_x, old_y) = (self.size_x, self.size_y);
        let mut old: Vec<Option<Cell>> = std::mem::take(&mut self.cells).into_iter().map(Some).collect();

        let mut cells = Vec::with_capacity(len);
        for y in 0..size_y {
            for x in 0..size_x {
                let index = y * size_x + x;
                let kept = (x < old_x && y < old_y)
                    .then(|| old[y * old_x + x].take())
                    .flatten();
                let cell = match kept {
                    Some(mut cell) => {
                        cell.set_index(index);
                        cell
                    }
                    None => Cell::new(index, false),
                };
                cells.push(cell);
            }
        }

        wire(&mut cells, size_x, size_y);
        self.size_x = size_x;
        self.size_y = size_y;
        self.cells = cells;
        Ok(())
    }
}

/// Validate dimensions and return the cell count
pub(crate) fn checked_len(size_x: usize, size_y: usize) -> Result<usize> {
    if size_x == 0 || size_y == 0 {
        return Err(LifeError::InvalidConfiguration(format!(
            "grid size must be positive, got {size_x}x{size_y}"
        )));
    }
    size_x.checked_mul(size_y).ok_or_else(|| {
        LifeError::InvalidConfiguration(format!("grid size {size_x}x{size_y} overflows"))
    })
}

/// Index of the neighbour of `index` in `direction`, if it lies inside the grid.
/// Row and column are checked separately so LEFT/RIGHT never wrap across rows.
pub fn neighbour_index(index: usize, direction: Direction, size_x: usize, size_y: usize) -> Option<usize> {
    let (dx, dy) = direction.offset();
    let x = (index % size_x).checked_add_signed(dx).filter(|&x| x < size_x)?;
    let y = (index / size_x).checked_add_signed(dy).filter(|&y| y < size_y)?;
    Some(y * size_x + x)
}

/// Set all eight neighbour slots of every cell
fn wire(cells: &mut [Cell], size_x: usize, size_y: usize) {
    for (index, cell) in cells.iter_mut().enumerate() {
        for direction in Direction::ALL {
            cell.set_neighbour(direction, neighbour_index(index, direction, size_x, size_y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(grid: &Grid, index: usize) -> usize {
        grid.cell(index).unwrap().neighbours().count()
    }

    #[test]
    fn test_three_by_three_neighbour_counts() {
        let grid = Grid::empty(3, 3).unwrap();
        assert_eq!(present(&grid, 4), 8);
        for corner in [0, 2, 6, 8] {
            assert_eq!(present(&grid, corner), 3, "corner {corner}");
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(present(&grid, edge), 5, "edge {edge}");
        }
    }

    #[test]
    fn test_corners_do_not_wrap() {
        let grid = Grid::empty(4, 3).unwrap();
        let top_left = grid.cell(0).unwrap();
        for d in [Direction::UpLeft, Direction::Up, Direction::UpRight, Direction::Left, Direction::DownLeft] {
            assert_eq!(top_left.neighbour(d), None, "{d}");
        }
        assert_eq!(top_left.neighbour(Direction::Right), Some(1));
        assert_eq!(top_left.neighbour(Direction::Down), Some(4));
        assert_eq!(top_left.neighbour(Direction::DownRight), Some(5));

        let bottom_right = grid.cell(11).unwrap();
        for d in [Direction::DownRight, Direction::Down, Direction::DownLeft, Direction::Right, Direction::UpRight] {
            assert_eq!(bottom_right.neighbour(d), None, "{d}");
        }
        assert_eq!(bottom_right.neighbour(Direction::UpLeft), Some(6));
    }

    #[test]
    fn test_row_ends_do_not_link_across_rows() {
        let grid = Grid::empty(4, 3).unwrap();
        // index 4 starts row 1, index 3 ends row 0
        assert_eq!(grid.cell(4).unwrap().neighbour(Direction::Left), None);
        assert_eq!(grid.cell(3).unwrap().neighbour(Direction::Right), None);
        assert_eq!(grid.cell(7).unwrap().neighbour(Direction::UpRight), None);
    }

    #[test]
    fn test_neighbour_links_are_mutual() {
        let grid = Grid::empty(5, 4).unwrap();
        for cell in grid.cells() {
            for d in Direction::ALL {
                if let Some(n) = cell.neighbour(d) {
                    assert_eq!(grid.cell(n).unwrap().neighbour(d.opposite()), Some(cell.index()));
                }
            }
        }
    }

    #[test]
    fn test_single_column_and_row() {
        let column = Grid::empty(1, 3).unwrap();
        assert_eq!(present(&column, 1), 2);
        let row = Grid::empty(3, 1).unwrap();
        assert_eq!(present(&row, 1), 2);
        let single = Grid::empty(1, 1).unwrap();
        assert_eq!(present(&single, 0), 0);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        assert!(matches!(Grid::empty(0, 3), Err(LifeError::InvalidConfiguration(_))));
        assert!(matches!(Grid::empty(3, 0), Err(LifeError::InvalidConfiguration(_))));
        assert!(matches!(Grid::empty(usize::MAX, 2), Err(LifeError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_build_uses_liveness_source() {
        let grid = Grid::build(4, 4, |i| i % 2 == 0).unwrap();
        assert_eq!(grid.count_alive(), 8);
        assert!(grid.cell_at(2, 1).unwrap().is_alive());
        assert!(grid.cell_at(4, 0).is_none());
    }

    #[test]
    fn test_resize_keeps_overlap_and_renumbers() {
        let mut grid = Grid::build(3, 3, |i| i == 4 || i == 8).unwrap();
        grid.resize(5, 2).unwrap();
        assert_eq!(grid.dimensions(), (5, 2));
        assert_eq!(grid.len(), 10);
        // (1,1) survives at its new index, (2,2) is cut off
        let kept = grid.cell_at(1, 1).unwrap();
        assert!(kept.is_alive());
        assert_eq!(kept.index(), 6);
        assert_eq!(grid.count_alive(), 1);
        for (i, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
        assert_eq!(grid.cell(4).unwrap().neighbour(Direction::Right), None);
        assert_eq!(grid.cell(6).unwrap().neighbour(Direction::UpLeft), Some(0));
    }

    #[test]
    fn test_failed_resize_leaves_grid_intact() {
        let mut grid = Grid::build(2, 2, |_| true).unwrap();
        assert!(grid.resize(0, 2).is_err());
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.count_alive(), 4);
    }
}
