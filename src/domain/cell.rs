use super::Direction;

/// Change in the number of alive cells caused by a single cell mutation.
/// Only cell mutators produce one; the engine applies deltas from its own cells only.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LivenessDelta(i8);

impl LivenessDelta {
    pub const UNCHANGED: Self = Self(0);
    const GAINED: Self = Self(1);
    const LOST: Self = Self(-1);

    /// -1, 0 or +1
    pub const fn value(self) -> i8 {
        self.0
    }

    pub const fn is_unchanged(self) -> bool {
        self.0 == 0
    }
}

/// Cell is one slot of the grid: its index in the flat row-major cell list,
/// its liveness, and the indices of up to eight neighbours.
/// Neighbours are plain indices into the owning grid, never wrapped at the edges.
#[derive(Clone, PartialEq, Debug)]
pub struct Cell {
    index: usize,
    alive: bool,
    neighbours: [Option<usize>; 8],
}

impl Cell {
    /// Create an unwired cell
    pub const fn new(index: usize, alive: bool) -> Self {
        Self {
            index,
            alive,
            neighbours: [None; 8],
        }
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Renumber the cell, used when a grid is resized
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Column of the cell for a grid `size_x` cells wide
    pub const fn pos_x(&self, size_x: usize) -> usize {
        self.index % size_x
    }

    /// Row of the cell for a grid `size_x` cells wide
    pub const fn pos_y(&self, size_x: usize) -> usize {
        self.index / size_x
    }

    pub fn set_neighbour(&mut self, direction: Direction, neighbour: Option<usize>) {
        self.neighbours[direction.slot()] = neighbour;
    }

    pub const fn neighbour(&self, direction: Direction) -> Option<usize> {
        self.neighbours[direction.slot()]
    }

    /// Iterate over present neighbour indices
    pub fn neighbours(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbours.iter().flatten().copied()
    }

    /// Count alive neighbours, reading liveness from the owning cell list.
    /// Missing neighbours at the grid edge, or indices past the end of `cells`, count as dead.
    pub fn alive_neighbours(&self, cells: &[Cell]) -> u8 {
        self.neighbours()
            .filter(|&i| cells.get(i).is_some_and(Cell::is_alive))
            .count() as u8
    }

    /// Bring the cell to life
    pub fn revive(&mut self) -> LivenessDelta {
        if self.alive {
            return LivenessDelta::UNCHANGED;
        }
        self.alive = true;
        LivenessDelta::GAINED
    }

    pub fn kill(&mut self) -> LivenessDelta {
        if !self.alive {
            return LivenessDelta::UNCHANGED;
        }
        self.alive = false;
        LivenessDelta::LOST
    }

    /// Flip liveness; the delta is always +1 or -1
    pub fn toggle(&mut self) -> LivenessDelta {
        if self.alive { self.kill() } else { self.revive() }
    }
}
