use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Pattern;
use super::grid::checked_len;
use crate::error::{LifeError, Result};

/// Source of the initial liveness of every cell when a grid is built.
#[derive(Clone)]
pub enum Seed {
    /// Every cell dead
    Empty,
    /// Each cell alive with probability `density`; reproducible when `rng_seed` is set
    Random { density: f64, rng_seed: Option<u64> },
    /// A pattern with its top-left corner at (x, y), clipped at the edges
    Pattern { pattern: Pattern, x: usize, y: usize },
    /// Explicit list of alive indices
    Cells(Vec<usize>),
    /// Arbitrary function of the cell index
    Custom(Arc<dyn Fn(usize) -> bool + Send + Sync>),
}

impl Seed {
    pub fn from_fn(f: impl Fn(usize) -> bool + Send + Sync + 'static) -> Self {
        Seed::Custom(Arc::new(f))
    }

    /// Pattern centred on the grid it will be placed in
    pub fn centred(pattern: Pattern, size_x: usize, size_y: usize) -> Self {
        let (x, y) = pattern.centred_origin(size_x, size_y);
        Seed::Pattern { pattern, x, y }
    }

    /// Resolve the liveness of every index of a `size_x` by `size_y` grid.
    /// Validation happens here so a bad seed never leaves a half-built grid.
    pub fn liveness(&self, size_x: usize, size_y: usize) -> Result<Vec<bool>> {
        let len = checked_len(size_x, size_y)?;
        match self {
            Seed::Empty => Ok(vec![false; len]),
            Seed::Random { density, rng_seed } => {
                let density = validate_density(*density)?;
                let mut rng = match rng_seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_os_rng(),
                };
                Ok((0..len).map(|_| rng.random_bool(density)).collect())
            }
            Seed::Pattern { pattern, x, y } => {
                if *x >= size_x || *y >= size_y {
                    return Err(LifeError::InvalidArgument(format!(
                        "pattern origin ({x}, {y}) outside {size_x}x{size_y} grid"
                    )));
                }
                let mut alive = vec![false; len];
                pattern.indices(size_x, size_y, *x, *y).for_each(|i| alive[i] = true);
                Ok(alive)
            }
            Seed::Cells(indices) => {
                let mut alive = vec![false; len];
                for &index in indices {
                    let slot = alive
                        .get_mut(index)
                        .ok_or(LifeError::CellOutOfRange { index, len })?;
                    *slot = true;
                }
                Ok(alive)
            }
            Seed::Custom(f) => Ok((0..len).map(|i| f(i)).collect()),
        }
    }
}

/// Density must be a probability
pub fn validate_density(density: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(LifeError::InvalidConfiguration(format!(
            "density must be within [0, 1], got {density}"
        )))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Empty => f.write_str("Empty"),
            Seed::Random { density, rng_seed } => f
                .debug_struct("Random")
                .field("density", density)
                .field("rng_seed", rng_seed)
                .finish(),
            Seed::Pattern { pattern, x, y } => f
                .debug_struct("Pattern")
                .field("pattern", &pattern.name)
                .field("x", x)
                .field("y", y)
                .finish(),
            Seed::Cells(cells) => f.debug_tuple("Cells").field(cells).finish(),
            Seed::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Random { density: 0.3, rng_seed: None }
    }
}
