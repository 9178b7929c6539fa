mod direction;
mod cell;
mod grid;
mod rules;
mod seed;
mod patterns;
mod engine;

pub use direction::Direction;
pub use cell::{Cell, LivenessDelta};
pub use grid::{Grid, neighbour_index};
pub use rules::{Rule, ConwayRule, LifeLikeRule, parse_rule, default_rule};
pub use seed::{Seed, validate_density};
pub use patterns::{Pattern, presets};
pub use engine::{GameEngine, EditOutcome, IgnoreReason, StepReport};
