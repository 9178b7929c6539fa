// Domain layer - cells, grid topology, rules and the engine
pub mod domain;

// Application layer - screens, timing and viewport
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Direction, GameEngine, Grid, Pattern, Seed, EditOutcome, presets};
pub use application::{GameSession, Router, Screen, Viewport};
pub use config::GameConfig;
pub use error::{LifeError, Result};
