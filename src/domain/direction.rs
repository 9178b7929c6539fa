use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;

/// One of the eight neighbour slots around a cell.
/// The declaration order is the canonical slot order used by `Cell`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions in canonical slot order
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Slot position in a neighbour table
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Column and row offset, with rows growing downwards
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::DownLeft => Direction::UpRight,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::UpLeft => "UPLEFT",
            Direction::Up => "UP",
            Direction::UpRight => "UPRIGHT",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::DownLeft => "DOWNLEFT",
            Direction::Down => "DOWN",
            Direction::DownRight => "DOWNRIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LifeError::InvalidArgument(format!("unknown direction {s:?}")))
    }
}
